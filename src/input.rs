use egui::{Context, Key, PointerButton, Pos2, Rect};

use crate::command::Command;
use crate::geometry::Point;
use crate::state::Session;

/// What a frame's worth of raw input asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Forwarded to the session.
    Session(Command),
    /// Presentation only; the session never sees it.
    ToggleGrid,
}

/// Keyboard shortcuts, as shown in the information panel.
pub const KEY_BINDINGS: &[(&str, &str)] = &[
    ("M", "Switch line / polygon mode"),
    ("W", "Toggle window mode"),
    ("Enter", "Clip shapes"),
    ("Space", "Finish polygon"),
    ("Backspace", "Remove last point"),
    ("Delete", "Remove last shape"),
    ("C", "Remove clipping window"),
    ("G", "Toggle grid"),
    ("Esc", "Clear everything"),
];

/// Maps a pressed key to the action bound to it.
pub fn key_action(key: Key) -> Option<Action> {
    let command = match key {
        Key::M => Command::ToggleMode,
        Key::W => Command::ToggleWindowMode,
        Key::Enter => Command::Clip,
        Key::Space => Command::FinishPolygon,
        Key::Backspace => Command::UndoLastVertex,
        Key::Delete => Command::RemoveLastShape,
        Key::C => Command::ClearWindow,
        Key::Escape => Command::ClearAll,
        Key::G => return Some(Action::ToggleGrid),
        _ => return None,
    };
    Some(Action::Session(command))
}

/// Converts raw egui input into [`Action`]s, translating screen positions
/// into canvas pixels.
#[derive(Debug)]
pub struct InputHandler {
    canvas_rect: Rect,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(Rect::NOTHING)
    }
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self { canvas_rect }
    }

    /// Update the canvas rectangle (e.g. if the window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }

    /// Screen position to canvas pixel. The result may lie outside the
    /// canvas; the session rejects such points itself.
    pub fn to_canvas(&self, pos: Pos2) -> Point {
        let local = pos - self.canvas_rect.min;
        Point::new(local.x.round() as i32, local.y.round() as i32)
    }

    /// Canvas pixel to screen position.
    pub fn to_screen(&self, p: Point) -> Pos2 {
        self.canvas_rect.min + egui::vec2(p.x as f32, p.y as f32)
    }

    /// Pointer position in canvas pixels, if the pointer is over the app.
    pub fn cursor(&self, ctx: &Context) -> Option<Point> {
        ctx.input(|input| input.pointer.hover_pos())
            .map(|pos| self.to_canvas(pos))
    }

    /// Collect this frame's actions, in event order. A primary press starts
    /// a window drag when window mode is on and no drag is active, otherwise
    /// it commits a point; a primary release ends a drag in progress, even
    /// one started earlier in the same frame.
    pub fn process_input(&self, ctx: &Context, session: &Session) -> Vec<Action> {
        let mut actions = Vec::new();
        let mut dragging = session.state().is_dragging();

        ctx.input(|input| {
            for event in &input.raw.events {
                match event {
                    egui::Event::PointerButton {
                        pos,
                        button: PointerButton::Primary,
                        pressed,
                        ..
                    } => {
                        let point = self.to_canvas(*pos);
                        if !*pressed {
                            if dragging {
                                dragging = false;
                                actions.push(Action::Session(Command::EndWindowDrag(point)));
                            }
                        } else if session.window_mode() && !dragging {
                            dragging = session.canvas().contains(point);
                            actions.push(Action::Session(Command::BeginWindowDrag(point)));
                        } else {
                            actions.push(Action::Session(Command::BeginPoint(point)));
                        }
                    }
                    egui::Event::Key {
                        key,
                        pressed: true,
                        repeat: false,
                        ..
                    } => actions.extend(key_action(*key)),
                    _ => {}
                }
            }
        });

        actions
    }
}
