#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod config;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod state;

pub use app::ClipApp;
pub use command::Command;
pub use config::CanvasConfig;
pub use geometry::{Point, Shape, ShapeKind, Window, clip, rasterize};
pub use input::{Action, InputHandler};
pub use renderer::Renderer;
pub use state::{AuthoringState, Mode, Session};
