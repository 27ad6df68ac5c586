#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use doily::DoilyApp;
use doily::app::CANVAS_SIZE;

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    // Fixed-size window: the persistent buffer matches the canvas panel 1:1
    // and is never rescaled.
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([CANVAS_SIZE as f32 + 16.0, CANVAS_SIZE as f32 + 240.0])
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        "Digital Doily",
        native_options,
        Box::new(|cc| Ok(Box::new(DoilyApp::new(cc)))),
    )
}
