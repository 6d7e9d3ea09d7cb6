use crate::ClipApp;

pub fn central_panel(app: &mut ClipApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let size = egui::vec2(app.config().width as f32, app.config().height as f32);
            let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());

            // Handle input
            app.handle_input(ctx, response.rect);

            // Render the canvas
            let cursor = app.input().cursor(ctx);
            app.renderer()
                .render(&painter, app.input(), app.session(), app.config(), cursor);
        });
}
