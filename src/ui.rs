mod app;
mod histogram;
mod panels;


use std::path::PathBuf;

use eframe::egui;

use app::CitraApp;

const WINDOW_TITLE: &str = "Digital Image Processing";
const WINDOW_SIZE: [f32; 2] = [1000.0, 600.0];
const WINDOW_MIN_SIZE: [f32; 2] = [640.0, 400.0];

/// Opens the desktop window, optionally loading `startup` as the original.
pub fn run(startup: Option<PathBuf>) -> Result<(), String> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(WINDOW_MIN_SIZE)
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(CitraApp::new(startup.clone())))),
    )
    .map_err(|error| error.to_string())
}
