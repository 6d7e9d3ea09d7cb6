use crate::ClipApp;
use crate::input::KEY_BINDINGS;
use crate::state::AuthoringState;

fn state_label(state: &AuthoringState) -> &'static str {
    if state.is_dragging() {
        "Window creation"
    } else {
        "Drawing"
    }
}

pub fn info_panel(app: &ClipApp, ctx: &egui::Context) {
    egui::SidePanel::right("info_panel")
        .resizable(false)
        .exact_width(app.config().info_panel_width)
        .show(ctx, |ui| {
            ui.heading("Information");
            ui.separator();

            let session = app.session();
            egui::Grid::new("session_grid")
                .num_columns(2)
                .spacing([40.0, 8.0])
                .striped(true)
                .show(ui, |ui| {
                    ui.strong("Mode:");
                    ui.label(session.mode().label());
                    ui.end_row();

                    ui.strong("State:");
                    ui.label(state_label(session.state()));
                    ui.end_row();

                    ui.strong("Window mode:");
                    ui.label(if session.window_mode() { "On" } else { "Off" });
                    ui.end_row();

                    ui.strong("Shapes:");
                    ui.label(session.shapes().len().to_string());
                    ui.end_row();

                    ui.strong("Clipped:");
                    ui.label(session.clipped().len().to_string());
                    ui.end_row();

                    if let Some(window) = session.window() {
                        ui.strong("Window:");
                        ui.label(format!(
                            "({}, {}) - ({}, {})",
                            window.xmin(),
                            window.ymin(),
                            window.xmax(),
                            window.ymax()
                        ));
                        ui.end_row();
                    }
                });

            if let Some(reason) = app.last_ignored() {
                ui.separator();
                ui.colored_label(egui::Color32::from_rgb(150, 60, 60), reason);
            }

            ui.separator();
            ui.heading("Controls");

            egui::Grid::new("controls_grid")
                .num_columns(2)
                .spacing([20.0, 8.0])
                .show(ui, |ui| {
                    for (key, description) in KEY_BINDINGS {
                        ui.strong(format!("{key}:"));
                        ui.label(*description);
                        ui.end_row();
                    }
                });
        });
}
