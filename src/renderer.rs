// src/renderer.rs
use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke};

use crate::config::CanvasConfig;
use crate::geometry::{Point, Shape, Window};
use crate::input::InputHandler;
use crate::state::{AuthoringState, Session};

const SHAPE_WIDTH: f32 = 4.0;
const AXIS_WIDTH: f32 = 3.0;
const VERTEX_RADIUS: f32 = 4.0;
/// Grid labels run from -AXIS_LABELS to AXIS_LABELS around the center.
const AXIS_LABELS: i32 = 10;

/// Colors used on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color32,
    pub grid: Color32,
    pub axis: Color32,
    pub window: Color32,
    pub line: Color32,
    pub polygon: Color32,
    pub clipped: Color32,
    pub text: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color32::WHITE,
            grid: Color32::from_rgb(200, 200, 200),
            axis: Color32::BLACK,
            window: Color32::from_rgb(200, 200, 255),
            line: Color32::from_rgb(255, 165, 0),
            polygon: Color32::from_rgb(147, 112, 219),
            clipped: Color32::from_rgb(0, 255, 127),
            text: Color32::BLACK,
        }
    }
}

/// Draws a [`Session`] onto the canvas area of the central panel.
#[derive(Debug, Default)]
pub struct Renderer {
    palette: Palette,
}

impl Renderer {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Renders the current frame, back to front: background, grid, clipping
    /// window, finished shapes, in-progress preview, clipped shapes.
    pub fn render(
        &self,
        painter: &Painter,
        view: &InputHandler,
        session: &Session,
        config: &CanvasConfig,
        cursor: Option<Point>,
    ) {
        let rect = view.canvas_rect();
        painter.rect_filled(rect, 0.0, self.palette.background);

        if config.show_grid {
            self.draw_grid(painter, rect, config);
        }

        if let Some(window) = session.window() {
            self.draw_window(painter, view, window);
        }
        if let Some(rubber_band) = cursor.and_then(|c| session.drag_preview(c)) {
            self.draw_window(painter, view, &rubber_band);
        }

        for shape in session.shapes() {
            let color = if shape.is_closed() {
                self.palette.polygon
            } else {
                self.palette.line
            };
            self.draw_shape(painter, view, shape, color);
        }

        if let Some(cursor) = cursor {
            self.draw_preview(painter, view, session, cursor);
        }

        for shape in session.clipped().shapes() {
            self.draw_shape(painter, view, shape, self.palette.clipped);
        }
    }

    fn draw_grid(&self, painter: &Painter, rect: Rect, config: &CanvasConfig) {
        let grid = Stroke::new(1.0, self.palette.grid);
        let step = config.grid_size.max(1);

        for x in (0..config.width).step_by(step as usize) {
            let x = rect.min.x + x as f32;
            painter.line_segment([egui::pos2(x, rect.min.y), egui::pos2(x, rect.max.y)], grid);
        }
        for y in (0..config.height).step_by(step as usize) {
            let y = rect.min.y + y as f32;
            painter.line_segment([egui::pos2(rect.min.x, y), egui::pos2(rect.max.x, y)], grid);
        }

        let mid = egui::pos2(
            rect.min.x + (config.width / 2) as f32,
            rect.min.y + (config.height / 2) as f32,
        );
        let axis = Stroke::new(AXIS_WIDTH, self.palette.axis);
        painter.line_segment([egui::pos2(rect.min.x, mid.y), egui::pos2(rect.max.x, mid.y)], axis);
        painter.line_segment([egui::pos2(mid.x, rect.min.y), egui::pos2(mid.x, rect.max.y)], axis);

        let font = FontId::proportional(14.0);
        for i in (-AXIS_LABELS..=AXIS_LABELS).filter(|i| *i != 0) {
            let offset = (i * step) as f32;
            painter.text(
                egui::pos2(mid.x + offset - 10.0, mid.y + 10.0),
                Align2::LEFT_TOP,
                i.to_string(),
                font.clone(),
                self.palette.text,
            );
            painter.text(
                egui::pos2(mid.x + 10.0, mid.y - offset - 10.0),
                Align2::LEFT_TOP,
                i.to_string(),
                font.clone(),
                self.palette.text,
            );
        }
    }

    fn draw_window(&self, painter: &Painter, view: &InputHandler, window: &Window) {
        let rect = Rect::from_min_max(view.to_screen(window.min()), view.to_screen(window.max()));
        painter.rect_filled(rect, 0.0, self.palette.window);
        painter.rect_stroke(rect, 0.0, Stroke::new(AXIS_WIDTH, self.palette.axis));
    }

    fn draw_shape(&self, painter: &Painter, view: &InputHandler, shape: &Shape, color: Color32) {
        let points: Vec<Pos2> = shape.points().iter().map(|p| view.to_screen(*p)).collect();
        let stroke = Stroke::new(SHAPE_WIDTH, color);
        if shape.is_closed() && points.len() > 2 {
            painter.add(egui::Shape::closed_line(points, stroke));
        } else {
            painter.add(egui::Shape::line(points, stroke));
        }
    }

    /// In-progress line or polygon, plotted pixel by pixel from the
    /// rasterized preview.
    fn draw_preview(&self, painter: &Painter, view: &InputHandler, session: &Session, cursor: Point) {
        let (color, vertices) = match session.state().drawing() {
            AuthoringState::LineStarted { .. } => (self.palette.line, &[][..]),
            AuthoringState::PolygonBuilding { vertices } => (self.palette.polygon, vertices.as_slice()),
            _ => return,
        };

        for pixel in session.preview(cursor) {
            let rect = Rect::from_center_size(view.to_screen(pixel), egui::vec2(2.0, 2.0));
            painter.rect_filled(rect, 0.0, color);
        }
        for vertex in vertices {
            painter.circle_filled(view.to_screen(*vertex), VERTEX_RADIUS, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Number of shapes one frame of `render` paints.
    fn painted(session: &Session, config: &CanvasConfig, cursor: Option<Point>) -> usize {
        let rect = Rect::from_min_size(
            egui::pos2(0.0, 0.0),
            egui::vec2(config.width as f32, config.height as f32),
        );
        let view = InputHandler::new(rect);
        let output = egui::Context::default().run(egui::RawInput::default(), |ctx| {
            let painter = ctx.layer_painter(egui::LayerId::background());
            Renderer::default().render(&painter, &view, session, config, cursor);
        });
        output.shapes.len()
    }

    fn plain() -> CanvasConfig {
        CanvasConfig {
            show_grid: false,
            ..CanvasConfig::default()
        }
    }

    #[test]
    fn test_render_basics() {
        let config = plain();
        let mut session = Session::new(&config);
        // Background only.
        assert_eq!(painted(&session, &config, None), 1);

        session.begin_point(Point::new(10, 10));
        session.begin_point(Point::new(200, 120));
        assert_eq!(painted(&session, &config, None), 2);

        // A started line previews one rect per rasterized pixel.
        session.begin_point(Point::new(10, 10));
        assert_eq!(painted(&session, &config, Some(Point::new(13, 10))), 2 + 4);
    }

    #[test]
    fn test_render_polygon_preview_marks_vertices() {
        let config = plain();
        let mut session = Session::new(&config);
        session.toggle_mode();
        session.begin_point(Point::new(0, 0));
        session.begin_point(Point::new(2, 0));
        // Pixels (0,0) (1,0) (2,0) (2,1) (2,2) plus two vertex circles.
        assert_eq!(painted(&session, &config, Some(Point::new(2, 2))), 1 + 5 + 2);
    }

    #[test]
    fn test_render_window_and_clipped_shapes() {
        let config = plain();
        let mut session = Session::new(&config);
        session.begin_point(Point::new(0, 5));
        session.begin_point(Point::new(50, 5));
        session.toggle_window_mode();
        session.begin_window_drag(Point::new(10, 0));
        // Rubber band: fill and outline.
        assert_eq!(painted(&session, &config, Some(Point::new(20, 10))), 2 + 2);

        session.end_window_drag(Point::new(20, 10));
        session.clip();
        // Window fill and outline, the line, its clipped piece.
        assert_eq!(painted(&session, &config, None), 1 + 2 + 1 + 1);
    }

    #[test]
    fn test_render_grid() {
        let session = Session::default();
        let without = painted(&session, &plain(), None);
        let with = painted(&session, &CanvasConfig::default(), None);
        // 20 vertical and 16 horizontal lines, two axes, 40 labels.
        assert_eq!(with - without, 20 + 16 + 2 + 40);
    }

    #[test]
    fn test_default_palette() {
        let renderer = Renderer::default();
        assert_eq!(renderer.palette().clipped, Color32::from_rgb(0, 255, 127));
    }
}
