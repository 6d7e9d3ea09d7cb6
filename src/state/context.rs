//! The session owned by the canvas application: finished shapes, the
//! clipping window, the last clip result and the authoring state machine.
//!
//! The `Session` is the only long-lived piece of mutable state. The UI layer
//! feeds it [`Command`]s and reads its fields back for rendering.
//!
//! # Commands
//!
//! Every command method is infallible from the caller's point of view. When
//! a command's precondition does not hold (finishing a polygon with no
//! vertices, committing a point outside the canvas, ...) the command is
//! ignored and the reason is logged at `debug` level. Callers that want the
//! reason can use [`Session::try_apply`].
//!
//! # Example
//!
//! ```rust
//! use clip_canvas::geometry::Point;
//! use clip_canvas::state::{AuthoringState, Session};
//!
//! let mut session = Session::default();
//! session.begin_point(Point::new(1, 1));
//! session.begin_point(Point::new(4, 5));
//!
//! assert_eq!(session.shapes().len(), 1);
//! assert_eq!(session.state(), &AuthoringState::Idle);
//! ```
use thiserror::Error;

use super::{AuthoringState, Mode};
use crate::command::Command;
use crate::config::CanvasConfig;
use crate::geometry::{ClippedResult, Point, Shape, Window};

/// Why a command was ignored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Ignored {
    #[error("point {0:?} is outside the canvas")]
    OutsideCanvas(Point),
    #[error("a window drag is in progress")]
    Dragging,
    #[error("no window drag is in progress")]
    NotDragging,
    #[error("window mode is off")]
    WindowModeOff,
    #[error("no polygon is being built")]
    NoPolygon,
    #[error("a polygon needs at least 2 vertices, has {0}")]
    TooFewVertices(usize),
    #[error("there is no clipping window")]
    NoWindow,
}

#[derive(Debug, Clone)]
pub struct Session {
    canvas: Window,
    mode: Mode,
    window_mode: bool,
    state: AuthoringState,
    shapes: Vec<Shape>,
    window: Option<Window>,
    clipped: ClippedResult,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&CanvasConfig::default())
    }
}

impl Session {
    /// Creates an empty session whose canvas spans `config.width` by
    /// `config.height` pixels from the origin.
    pub fn new(config: &CanvasConfig) -> Self {
        Self {
            canvas: config.bounds(),
            mode: Mode::default(),
            window_mode: false,
            state: AuthoringState::default(),
            shapes: Vec::new(),
            window: None,
            clipped: ClippedResult::default(),
        }
    }

    pub fn canvas(&self) -> &Window {
        &self.canvas
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn window_mode(&self) -> bool {
        self.window_mode
    }

    pub fn state(&self) -> &AuthoringState {
        &self.state
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }

    pub fn clipped(&self) -> &ClippedResult {
        &self.clipped
    }

    /// Rasterized in-progress line or polygon, rubber-banded to `cursor`.
    pub fn preview(&self, cursor: Point) -> Vec<Point> {
        self.state.preview(cursor)
    }

    /// The window a drag in progress would produce if released at `cursor`.
    pub fn drag_preview(&self, cursor: Point) -> Option<Window> {
        self.state.drag_preview(cursor)
    }

    /// Applies `command`, dropping it silently if its precondition fails.
    pub fn apply(&mut self, command: Command) {
        if let Err(reason) = self.try_apply(command) {
            log::debug!("ignored {}: {}", command.name(), reason);
        }
    }

    /// Applies `command` and reports why it was ignored, if it was. The
    /// session is left untouched when an error is returned.
    pub fn try_apply(&mut self, command: Command) -> Result<(), Ignored> {
        match command {
            Command::BeginPoint(pos) => self.commit_point(pos),
            Command::FinishPolygon => self.close_polygon(),
            Command::UndoLastVertex => self.pop_vertex(),
            Command::RemoveLastShape => {
                self.pop_shape();
                Ok(())
            }
            Command::ToggleMode => self.flip_mode(),
            Command::ToggleWindowMode => {
                self.flip_window_mode();
                Ok(())
            }
            Command::BeginWindowDrag(pos) => self.start_drag(pos),
            Command::EndWindowDrag(pos) => self.finish_drag(pos),
            Command::ClearWindow => {
                self.drop_window();
                Ok(())
            }
            Command::Clip => self.recompute_clip(),
            Command::ClearAll => {
                self.reset();
                Ok(())
            }
        }
    }

    pub fn begin_point(&mut self, pos: Point) {
        self.apply(Command::BeginPoint(pos));
    }

    pub fn finish_polygon(&mut self) {
        self.apply(Command::FinishPolygon);
    }

    pub fn undo_last_vertex(&mut self) {
        self.apply(Command::UndoLastVertex);
    }

    pub fn remove_last_shape(&mut self) {
        self.apply(Command::RemoveLastShape);
    }

    pub fn toggle_mode(&mut self) {
        self.apply(Command::ToggleMode);
    }

    pub fn toggle_window_mode(&mut self) {
        self.apply(Command::ToggleWindowMode);
    }

    pub fn begin_window_drag(&mut self, pos: Point) {
        self.apply(Command::BeginWindowDrag(pos));
    }

    pub fn end_window_drag(&mut self, pos: Point) {
        self.apply(Command::EndWindowDrag(pos));
    }

    pub fn clear_window(&mut self) {
        self.apply(Command::ClearWindow);
    }

    pub fn clip(&mut self) {
        self.apply(Command::Clip);
    }

    pub fn clear_all(&mut self) {
        self.apply(Command::ClearAll);
    }

    fn ensure_on_canvas(&self, pos: Point) -> Result<(), Ignored> {
        if self.canvas.contains(pos) {
            Ok(())
        } else {
            Err(Ignored::OutsideCanvas(pos))
        }
    }

    fn commit_point(&mut self, pos: Point) -> Result<(), Ignored> {
        self.ensure_on_canvas(pos)?;

        match &mut self.state {
            AuthoringState::WindowDragging { .. } => return Err(Ignored::Dragging),
            AuthoringState::Idle => {
                self.state = match self.mode {
                    Mode::Line => AuthoringState::LineStarted { start: pos },
                    Mode::Polygon => AuthoringState::PolygonBuilding {
                        vertices: vec![pos],
                    },
                };
            }
            AuthoringState::LineStarted { start } => {
                let line = Shape::line(*start, pos);
                log::info!("line committed: {:?} -> {:?}", start, pos);
                self.shapes.push(line);
                self.state = AuthoringState::Idle;
            }
            AuthoringState::PolygonBuilding { vertices } => vertices.push(pos),
        }
        Ok(())
    }

    fn close_polygon(&mut self) -> Result<(), Ignored> {
        let AuthoringState::PolygonBuilding { vertices } = &mut self.state else {
            return Err(Ignored::NoPolygon);
        };
        if vertices.len() < 2 {
            return Err(Ignored::TooFewVertices(vertices.len()));
        }

        let vertices = std::mem::take(vertices);
        self.state = AuthoringState::Idle;
        let count = vertices.len();
        if let Ok(polygon) = Shape::closed(vertices) {
            log::info!("polygon committed with {count} vertices");
            self.shapes.push(polygon);
        }
        Ok(())
    }

    fn pop_vertex(&mut self) -> Result<(), Ignored> {
        match &mut self.state {
            AuthoringState::PolygonBuilding { vertices } => {
                vertices.pop();
                Ok(())
            }
            _ => Err(Ignored::NoPolygon),
        }
    }

    fn pop_shape(&mut self) {
        if self.shapes.pop().is_some() {
            self.clipped.forget(self.shapes.len());
        }
    }

    fn flip_mode(&mut self) -> Result<(), Ignored> {
        if self.state.is_dragging() {
            return Err(Ignored::Dragging);
        }
        self.mode = self.mode.toggled();
        self.state = AuthoringState::Idle;
        log::debug!("mode switched to {}", self.mode.label());
        Ok(())
    }

    fn flip_window_mode(&mut self) {
        self.window_mode = !self.window_mode;
        if !self.window_mode {
            self.cancel_drag();
        }
        log::debug!("window mode {}", if self.window_mode { "on" } else { "off" });
    }

    /// Ends a drag without creating a window, restoring the drawing state.
    fn cancel_drag(&mut self) {
        if let AuthoringState::WindowDragging { resume, .. } = &mut self.state {
            let drawing = std::mem::take(resume.as_mut());
            self.state = drawing;
        }
    }

    fn start_drag(&mut self, pos: Point) -> Result<(), Ignored> {
        if !self.window_mode {
            return Err(Ignored::WindowModeOff);
        }
        if self.state.is_dragging() {
            return Err(Ignored::Dragging);
        }
        self.ensure_on_canvas(pos)?;

        let resume = Box::new(std::mem::take(&mut self.state));
        self.state = AuthoringState::WindowDragging {
            corner: pos,
            resume,
        };
        Ok(())
    }

    fn finish_drag(&mut self, pos: Point) -> Result<(), Ignored> {
        let AuthoringState::WindowDragging { corner, .. } = &self.state else {
            return Err(Ignored::NotDragging);
        };
        self.ensure_on_canvas(pos)?;

        let window = Window::from_corners(*corner, pos);
        log::info!("clipping window set to {:?} .. {:?}", window.min(), window.max());
        self.window = Some(window);
        self.clipped.clear();
        self.cancel_drag();
        Ok(())
    }

    fn drop_window(&mut self) {
        self.window = None;
        self.clipped.clear();
    }

    fn recompute_clip(&mut self) -> Result<(), Ignored> {
        let window = self.window.ok_or(Ignored::NoWindow)?;
        self.clipped = ClippedResult::compute(&self.shapes, &window);
        log::info!(
            "clipped {} shapes into {} pieces",
            self.shapes.len(),
            self.clipped.len()
        );
        Ok(())
    }

    fn reset(&mut self) {
        *self = Self {
            canvas: self.canvas,
            ..Self::new(&CanvasConfig::default())
        };
        log::debug!("session cleared");
    }
}
