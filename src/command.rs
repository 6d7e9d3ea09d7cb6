use crate::geometry::Point;

/// Authoring commands coming from the UI layer.
///
/// Each variant maps to exactly one transition of the authoring state
/// machine; see [`crate::state::Session::try_apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Commit a point: line endpoint or polygon vertex.
    BeginPoint(Point),
    FinishPolygon,
    UndoLastVertex,
    RemoveLastShape,
    /// Switch between line and polygon drawing.
    ToggleMode,
    ToggleWindowMode,
    BeginWindowDrag(Point),
    EndWindowDrag(Point),
    ClearWindow,
    /// Recompute the clipped shapes against the current window.
    Clip,
    ClearAll,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::BeginPoint(_) => "BeginPoint",
            Command::FinishPolygon => "FinishPolygon",
            Command::UndoLastVertex => "UndoLastVertex",
            Command::RemoveLastShape => "RemoveLastShape",
            Command::ToggleMode => "ToggleMode",
            Command::ToggleWindowMode => "ToggleWindowMode",
            Command::BeginWindowDrag(_) => "BeginWindowDrag",
            Command::EndWindowDrag(_) => "EndWindowDrag",
            Command::ClearWindow => "ClearWindow",
            Command::Clip => "Clip",
            Command::ClearAll => "ClearAll",
        }
    }
}
