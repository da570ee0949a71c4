mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use anyhow::Context;
use app::IrisExplorerApp;
use config::DashboardConfig;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = DashboardConfig::default();

    // Without the table there is nothing to show: fail before opening a window.
    let dataset = data::loader::load_embedded()
        .context("loading the Iris dataset")
        .inspect_err(|e| log::error!("{e:#}"))?;
    log::info!("Loaded {} rows", dataset.len());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    let state = AppState::new(dataset, config);

    eframe::run_native(
        "Iris Dataset Explorer",
        options,
        Box::new(move |_cc| Ok(Box::new(IrisExplorerApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running the dashboard window: {e}"))
}
