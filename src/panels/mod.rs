mod central_panel;
mod info_panel;

pub use central_panel::central_panel;
pub use info_panel::info_panel;
