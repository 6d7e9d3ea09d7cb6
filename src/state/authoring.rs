use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Window, rasterize, rasterize_path};

/// Which kind of shape a committed point contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Line,
    Polygon,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Line => Mode::Polygon,
            Mode::Polygon => Mode::Line,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Line => "Line",
            Mode::Polygon => "Polygon",
        }
    }
}

/// In-progress user input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthoringState {
    #[default]
    Idle,
    /// First endpoint of a line captured.
    LineStarted { start: Point },
    /// Polygon vertices captured so far; may be empty after undoing.
    PolygonBuilding { vertices: Vec<Point> },
    /// Window drag in progress. `resume` is the drawing state that was
    /// active when the drag started and is restored when it ends.
    WindowDragging {
        corner: Point,
        resume: Box<AuthoringState>,
    },
}

impl AuthoringState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::LineStarted { .. } => "LineStarted",
            Self::PolygonBuilding { .. } => "PolygonBuilding",
            Self::WindowDragging { .. } => "WindowDragging",
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::WindowDragging { .. })
    }

    /// Drawing state underneath a drag, or `self` otherwise.
    pub fn drawing(&self) -> &AuthoringState {
        match self {
            Self::WindowDragging { resume, .. } => resume.as_ref(),
            other => other,
        }
    }

    /// Pixels of the in-progress line or polygon, rubber-banded to `cursor`.
    pub fn preview(&self, cursor: Point) -> Vec<Point> {
        match self.drawing() {
            Self::LineStarted { start } => rasterize(*start, cursor).collect(),
            Self::PolygonBuilding { vertices } if !vertices.is_empty() => {
                let mut path = vertices.clone();
                path.push(cursor);
                rasterize_path(&path, false)
            }
            _ => Vec::new(),
        }
    }

    /// Window that would be created if the drag ended at `cursor`.
    pub fn drag_preview(&self, cursor: Point) -> Option<Window> {
        match self {
            Self::WindowDragging { corner, .. } => Some(Window::from_corners(*corner, cursor)),
            _ => None,
        }
    }
}
