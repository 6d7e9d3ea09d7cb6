mod authoring;
pub mod context;

pub use authoring::{AuthoringState, Mode};
pub use context::{Ignored, Session};
