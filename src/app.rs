use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct IrisExplorerApp {
    pub state: AppState,
}

impl IrisExplorerApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for IrisExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and row counter ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(self.state.config.side_panel_width)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: charts and table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    dashboard(ui, &self.state);
                });
        });
    }
}

fn dashboard(ui: &mut Ui, state: &AppState) {
    ui.heading("Iris Dataset Explorer");
    ui.label(
        "This app allows you to explore the famous Iris dataset. \
         Use the sidebar to filter and visualize different features of the dataset.",
    );
    ui.add_space(8.0);

    ui.columns(2, |columns| {
        let ui = &mut columns[0];
        ui.strong("Sepal Length vs Petal Length");
        plot::scatter_plot(ui, state);

        let ui = &mut columns[1];
        ui.strong("Sepal Width Distribution");
        plot::distribution_plot(ui, state, &state.dashboard.sepal_width);
    });
    ui.add_space(8.0);

    ui.strong("Petal Width Distribution");
    plot::distribution_plot(ui, state, &state.dashboard.petal_width);
    ui.add_space(8.0);

    egui::CollapsingHeader::new(RichText::new("View Filtered Data").strong())
        .id_salt("filtered_data")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            table::raw_table(ui, state);
        });

    ui.separator();
    ui.label(
        RichText::new(
            "About this dataset: the Iris dataset is a classic dataset used in data science \
             and machine learning, containing 150 samples of three species of Iris flowers \
             (setosa, versicolor, and virginica).",
        )
        .small(),
    );
}
