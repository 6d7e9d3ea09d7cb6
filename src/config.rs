use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Window};

/// Canvas geometry and display settings.
///
/// Restored from eframe storage on startup, so fields added later fall back
/// to their defaults when an older config is read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Drawable area in pixels. Points outside it are ignored.
    pub width: i32,
    pub height: i32,
    /// Spacing of the background grid in pixels.
    pub grid_size: i32,
    pub show_grid: bool,
    /// Width of the information panel to the right of the canvas.
    pub info_panel_width: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 800,
            grid_size: 50,
            show_grid: true,
            info_panel_width: 400.0,
        }
    }
}

impl CanvasConfig {
    /// Inclusive pixel bounds of the canvas.
    pub fn bounds(&self) -> Window {
        Window::from_corners(
            Point::new(0, 0),
            Point::new((self.width - 1).max(0), (self.height - 1).max(0)),
        )
    }

    /// Total size of the native window: canvas plus information panel.
    pub fn window_size(&self) -> [f32; 2] {
        [
            self.width as f32 + self.info_panel_width,
            self.height as f32,
        ]
    }
}
