use eframe::egui::{self, RichText, ScrollArea, Slider, Ui};

use crate::data::filter::RANGE_FEATURES;
use crate::data::model::Species;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter Parameters");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            species_selector(ui, state);
            ui.separator();
            range_sliders(ui, state);
            ui.separator();

            if ui
                .button("Reset filters")
                .on_hover_text("Select every species and restore the full ranges.")
                .clicked()
            {
                state.reset();
            }
        });
}

fn species_selector(ui: &mut Ui, state: &mut AppState) {
    let n_selected = state.criteria.species.len();
    ui.strong(format!("Select Species  ({n_selected}/{})", Species::ALL.len()))
        .on_hover_text("Filter data by Iris species.");

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all();
        }
        if ui.small_button("None").clicked() {
            state.select_none();
        }
    });

    for species in Species::ALL {
        let mut checked = state.criteria.species.contains(&species);
        let text = RichText::new(format!(
            "{species}  ({})",
            state.dataset.count_species(species)
        ))
        .color(state.color_map.color_for(species));

        if ui.checkbox(&mut checked, text).changed() {
            state.toggle_species(species);
        }
    }
}

fn range_sliders(ui: &mut Ui, state: &mut AppState) {
    let step = state.config.slider_step;

    for feature in RANGE_FEATURES {
        let (Some(bounds), Some(current)) =
            (state.range_bounds(feature), state.criteria.range_for(feature))
        else {
            continue;
        };
        let help = format!("Select a range of {}.", feature.title());

        ui.add_space(4.0);
        ui.strong(format!("{} Range (cm)", feature.title()))
            .on_hover_text(help.as_str());

        let mut low = current.low;
        let mut high = current.high;
        let low_changed = ui
            .add(
                Slider::new(&mut low, bounds.low..=bounds.high)
                    .step_by(step)
                    .fixed_decimals(1)
                    .text("min"),
            )
            .on_hover_text(help.as_str())
            .changed();
        let high_changed = ui
            .add(
                Slider::new(&mut high, bounds.low..=bounds.high)
                    .step_by(step)
                    .fixed_decimals(1)
                    .text("max"),
            )
            .on_hover_text(help.as_str())
            .changed();

        if low_changed {
            state.set_range_low(feature, low);
        }
        if high_changed {
            state.set_range_high(feature, high);
        }
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top title bar with the visible-row counter.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("Iris Dataset Explorer");

        ui.separator();

        ui.label(format!(
            "{} of {} rows shown",
            state.view.len(),
            state.dataset.len()
        ));

        if state.view.is_empty() {
            ui.separator();
            ui.label(RichText::new("No rows match the current filters").weak());
        }
    });
}
