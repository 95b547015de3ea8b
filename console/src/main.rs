use eframe::egui;
use log::info;

mod domain;
mod services;
mod ui;

use services::ApiClient;
use ui::TrekConsoleApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting Trek Console");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("Trek Console")
            .with_resizable(true),
        ..Default::default()
    };

    let api = ApiClient::from_env();
    info!("Using API at {}", api.base_url());

    eframe::run_native(
        "Trek Console",
        options,
        Box::new(move |cc| Ok(Box::new(TrekConsoleApp::new(cc, api)))),
    )
}
