use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::Feature;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Raw data table
// ---------------------------------------------------------------------------

/// Render the filtered rows verbatim: source index, the four features, the
/// class code and its label.
pub fn raw_table(ui: &mut Ui, state: &AppState) {
    let row_height = state.config.table_row_height;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .vscroll(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(40.0)) // Index
        .columns(Column::auto().at_least(110.0), Feature::ALL.len())
        .column(Column::auto().at_least(50.0)) // Target
        .column(Column::remainder()) // Species
        .header(22.0, |mut header| {
            header.col(|ui| {
                ui.strong("#");
            });
            for feature in Feature::ALL {
                header.col(|ui| {
                    ui.strong(feature.column_name());
                });
            }
            header.col(|ui| {
                ui.strong("target");
            });
            header.col(|ui| {
                ui.strong("species");
            });
        })
        .body(|mut body| {
            for row in &state.dashboard.table {
                body.row(row_height, |mut table_row| {
                    table_row.col(|ui| {
                        ui.label(row.index.to_string());
                    });
                    for feature in Feature::ALL {
                        table_row.col(|ui| {
                            ui.label(format!("{:.1}", row.sample.feature(feature)));
                        });
                    }
                    table_row.col(|ui| {
                        ui.label(row.sample.species.code().to_string());
                    });
                    table_row.col(|ui| {
                        ui.colored_label(
                            state.color_map.color_for(row.sample.species),
                            row.sample.species.label(),
                        );
                    });
                });
            }
        });
}
