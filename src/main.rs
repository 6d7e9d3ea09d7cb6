#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use clip_canvas::{CanvasConfig, ClipApp};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let [width, height] = CanvasConfig::default().window_size();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_min_inner_size([width, height])
            .with_title("Line and polygon clipping"),
        ..Default::default()
    };
    eframe::run_native(
        "clip_canvas",
        native_options,
        Box::new(|cc| Ok(Box::new(ClipApp::new(cc)))),
    )
}
