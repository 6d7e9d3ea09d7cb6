//! Clipping shapes against an axis-aligned [`Window`].
//!
//! Open shapes go through Cohen–Sutherland edge by edge, closed shapes
//! through Sutherland–Hodgman. Intersections are computed in `f64` and
//! rounded half away from zero (`f64::round`) back onto the pixel grid.

use std::ops::{BitAnd, BitOr};

use super::{Point, Shape, ShapeKind, Window};

/// Upper bound on Cohen–Sutherland subdivisions for one edge. Each pass
/// moves one endpoint onto a boundary, so a valid edge settles in at most 4.
const MAX_SUBDIVISIONS: u32 = 8;

/// Which sides of a window a point lies outside of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Outcode(u8);

impl Outcode {
    pub const INSIDE: Outcode = Outcode(0);
    /// `x < xmin`
    pub const LEFT: Outcode = Outcode(0b0001);
    /// `x > xmax`
    pub const RIGHT: Outcode = Outcode(0b0010);
    /// `y < ymin`
    pub const TOP: Outcode = Outcode(0b0100);
    /// `y > ymax`
    pub const BOTTOM: Outcode = Outcode(0b1000);

    pub fn of(p: Point, window: &Window) -> Self {
        let mut code = Self::INSIDE;
        if p.x < window.xmin() {
            code = code | Self::LEFT;
        } else if p.x > window.xmax() {
            code = code | Self::RIGHT;
        }
        if p.y < window.ymin() {
            code = code | Self::TOP;
        } else if p.y > window.ymax() {
            code = code | Self::BOTTOM;
        }
        code
    }

    pub fn is_inside(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, other: Outcode) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn bits(self) -> u8 {
        self.0
    }
}

impl BitOr for Outcode {
    type Output = Outcode;

    fn bitor(self, rhs: Self) -> Self {
        Outcode(self.0 | rhs.0)
    }
}

impl BitAnd for Outcode {
    type Output = Outcode;

    fn bitand(self, rhs: Self) -> Self {
        Outcode(self.0 & rhs.0)
    }
}

/// A single clipped edge. `start_moved`/`end_moved` record whether the
/// endpoint was replaced by a boundary intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    pub start_moved: bool,
    pub end_moved: bool,
}

fn round_to_pixel(v: f64) -> i32 {
    v.round() as i32
}

/// Widened difference `to - from`. Two `i32` deltas multiply exactly in
/// `i128`.
fn delta(from: i32, to: i32) -> i128 {
    i128::from(to) - i128::from(from)
}

/// Intersection of segment `a -> b` with the vertical line `x = xb`.
fn cross_vertical(a: Point, b: Point, xb: i32) -> Point {
    let num = delta(a.y, b.y) * delta(a.x, xb);
    let y = f64::from(a.y) + num as f64 / delta(a.x, b.x) as f64;
    Point::new(xb, round_to_pixel(y))
}

/// Intersection of segment `a -> b` with the horizontal line `y = yb`.
fn cross_horizontal(a: Point, b: Point, yb: i32) -> Point {
    let num = delta(a.x, b.x) * delta(a.y, yb);
    let x = f64::from(a.x) + num as f64 / delta(a.y, b.y) as f64;
    Point::new(round_to_pixel(x), yb)
}

/// Cohen–Sutherland for one edge. `None` when nothing of it is visible.
pub fn clip_segment(p: Point, q: Point, window: &Window) -> Option<Segment> {
    let mut seg = Segment {
        start: p,
        end: q,
        start_moved: false,
        end_moved: false,
    };
    let mut code_p = Outcode::of(seg.start, window);
    let mut code_q = Outcode::of(seg.end, window);

    for _ in 0..MAX_SUBDIVISIONS {
        if (code_p | code_q).is_inside() {
            return Some(seg);
        }
        if !(code_p & code_q).is_inside() {
            return None;
        }

        let move_start = !code_p.is_inside();
        let code_out = if move_start { code_p } else { code_q };
        let (a, b) = (seg.start, seg.end);

        let moved = if code_out.contains(Outcode::LEFT) {
            cross_vertical(a, b, window.xmin())
        } else if code_out.contains(Outcode::RIGHT) {
            cross_vertical(a, b, window.xmax())
        } else if code_out.contains(Outcode::TOP) {
            cross_horizontal(a, b, window.ymin())
        } else {
            cross_horizontal(a, b, window.ymax())
        };

        if move_start {
            seg.start = moved;
            seg.start_moved = true;
            code_p = Outcode::of(moved, window);
        } else {
            seg.end = moved;
            seg.end_moved = true;
            code_q = Outcode::of(moved, window);
        }
    }

    log::debug!("edge {p:?} -> {q:?} did not settle, rejecting");
    None
}

/// Runs each edge of a polyline through [`clip_segment`] and stitches the
/// surviving edges into contiguous runs.
fn clip_polyline(points: &[Point], window: &Window) -> Vec<Vec<Point>> {
    let mut runs: Vec<Vec<Point>> = Vec::new();
    let mut run: Vec<Point> = Vec::new();
    let mut joined = false;

    for pair in points.windows(2) {
        match clip_segment(pair[0], pair[1], window) {
            Some(seg) => {
                if !joined && !run.is_empty() {
                    runs.push(std::mem::take(&mut run));
                }
                if run.is_empty() {
                    run.push(seg.start);
                }
                run.push(seg.end);
                joined = !seg.end_moved;
            }
            None => {
                if !run.is_empty() {
                    runs.push(std::mem::take(&mut run));
                }
                joined = false;
            }
        }
    }
    if !run.is_empty() {
        runs.push(run);
    }
    runs
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Boundary {
    Left,
    Right,
    Bottom,
    Top,
}

impl Boundary {
    /// Fixed Sutherland–Hodgman pass order.
    const ORDER: [Boundary; 4] = [
        Boundary::Left,
        Boundary::Right,
        Boundary::Bottom,
        Boundary::Top,
    ];

    fn inside(self, p: Point, window: &Window) -> bool {
        match self {
            Boundary::Left => p.x >= window.xmin(),
            Boundary::Right => p.x <= window.xmax(),
            Boundary::Bottom => p.y <= window.ymax(),
            Boundary::Top => p.y >= window.ymin(),
        }
    }

    fn intersect(self, a: Point, b: Point, window: &Window) -> Point {
        match self {
            Boundary::Left => cross_vertical(a, b, window.xmin()),
            Boundary::Right => cross_vertical(a, b, window.xmax()),
            Boundary::Bottom => cross_horizontal(a, b, window.ymax()),
            Boundary::Top => cross_horizontal(a, b, window.ymin()),
        }
    }
}

/// Sutherland–Hodgman. Yields a single vertex list, possibly empty; concave
/// polygons that should split into several pieces stay one (bridged) piece.
fn clip_polygon(points: &[Point], window: &Window) -> Vec<Point> {
    let mut output = points.to_vec();

    for boundary in Boundary::ORDER {
        let input = std::mem::take(&mut output);
        let Some(&last) = input.last() else {
            break;
        };

        let mut prev = last;
        for &cur in &input {
            let prev_in = boundary.inside(prev, window);
            if boundary.inside(cur, window) {
                if !prev_in {
                    output.push(boundary.intersect(prev, cur, window));
                }
                output.push(cur);
            } else if prev_in {
                output.push(boundary.intersect(prev, cur, window));
            }
            prev = cur;
        }
    }
    output
}

/// Visible parts of `shape` inside `window`.
///
/// Closed shapes produce at most one result. Open shapes produce one result
/// per contiguous visible run. A degenerate window produces nothing.
pub fn clip(shape: &Shape, window: &Window) -> Vec<Shape> {
    if window.is_degenerate() {
        return Vec::new();
    }

    match shape.kind() {
        ShapeKind::Open => clip_polyline(shape.points(), window)
            .into_iter()
            .filter_map(|run| Shape::open(run).ok())
            .collect(),
        ShapeKind::Closed => Shape::closed(clip_polygon(shape.points(), window))
            .ok()
            .into_iter()
            .collect(),
    }
}

/// Pieces produced by the last clip, keyed by the index of the source shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClippedResult {
    entries: Vec<(usize, Vec<Shape>)>,
}

impl ClippedResult {
    /// Clips every shape in `shapes` from scratch.
    pub fn compute(shapes: &[Shape], window: &Window) -> Self {
        let entries = shapes
            .iter()
            .enumerate()
            .map(|(index, shape)| (index, clip(shape, window)))
            .collect();
        Self { entries }
    }

    /// Pieces for the shape at `index`; empty if it was clipped away or
    /// never clipped.
    pub fn pieces(&self, index: usize) -> &[Shape] {
        self.entries
            .iter()
            .find(|(source, _)| *source == index)
            .map(|(_, pieces)| pieces.as_slice())
            .unwrap_or(&[])
    }

    pub fn entries(&self) -> impl Iterator<Item = (usize, &[Shape])> {
        self.entries
            .iter()
            .map(|(source, pieces)| (*source, pieces.as_slice()))
    }

    /// Every resulting shape, in source order.
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.entries.iter().flat_map(|(_, pieces)| pieces.iter())
    }

    pub fn len(&self) -> usize {
        self.shapes().count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|(_, pieces)| pieces.is_empty())
    }

    /// Drops the entry of a source shape that no longer exists.
    pub fn forget(&mut self, index: usize) {
        self.entries.retain(|(source, _)| *source != index);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> Window {
        Window::from_corners(Point::new(0, 0), Point::new(10, 10))
    }

    #[test]
    fn test_outcodes() {
        let w = window();
        assert_eq!(Outcode::of(Point::new(5, 5), &w), Outcode::INSIDE);
        assert_eq!(Outcode::of(Point::new(-1, 5), &w), Outcode::LEFT);
        assert_eq!(Outcode::of(Point::new(11, 5), &w), Outcode::RIGHT);
        assert_eq!(Outcode::of(Point::new(5, -1), &w), Outcode::TOP);
        assert_eq!(Outcode::of(Point::new(5, 11), &w), Outcode::BOTTOM);
        assert_eq!(
            Outcode::of(Point::new(-1, 11), &w),
            Outcode::LEFT | Outcode::BOTTOM
        );
        // Boundary points are inside.
        assert!(Outcode::of(Point::new(10, 0), &w).is_inside());
    }

    #[test]
    fn test_segment_crossing_left_edge() {
        let seg = clip_segment(Point::new(-5, 0), Point::new(5, 10), &window()).unwrap();
        assert_eq!(seg.start, Point::new(0, 5));
        assert_eq!(seg.end, Point::new(5, 10));
        assert!(seg.start_moved);
        assert!(!seg.end_moved);
    }

    #[test]
    fn test_segment_through_both_sides() {
        let seg = clip_segment(Point::new(-5, 5), Point::new(15, 5), &window()).unwrap();
        assert_eq!(seg.start, Point::new(0, 5));
        assert_eq!(seg.end, Point::new(10, 5));
    }

    #[test]
    fn test_segment_trivial_reject() {
        assert!(clip_segment(Point::new(-5, -5), Point::new(-1, 20), &window()).is_none());
    }

    #[test]
    fn test_segment_missing_corner_is_rejected() {
        // Outcodes share no bit, but the line passes beyond the corner.
        assert!(clip_segment(Point::new(-5, 8), Point::new(8, 21), &window()).is_none());
    }

    #[test]
    fn test_rounding_is_half_away_from_zero() {
        // y = 0 + 1 * (0 - (-1)) / 2 = 0.5
        let seg = clip_segment(Point::new(-1, 0), Point::new(1, 1), &window()).unwrap();
        assert_eq!(seg.start, Point::new(0, 1));
        assert_eq!(round_to_pixel(-2.5), -3);
    }

    #[test]
    fn test_polyline_split_into_runs() {
        let line = Shape::open(vec![
            Point::new(2, 2),
            Point::new(2, 20),
            Point::new(8, 20),
            Point::new(8, 2),
        ])
        .unwrap();
        let pieces = clip(&line, &window());
        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[0].points(), &[Point::new(2, 2), Point::new(2, 10)]);
        assert_eq!(pieces[1].points(), &[Point::new(8, 10), Point::new(8, 2)]);
    }

    #[test]
    fn test_polyline_run_continues_through_inside_vertex() {
        let line = Shape::open(vec![
            Point::new(-5, 5),
            Point::new(5, 5),
            Point::new(5, 15),
        ])
        .unwrap();
        let pieces = clip(&line, &window());
        assert_eq!(pieces.len(), 1);
        assert_eq!(
            pieces[0].points(),
            &[Point::new(0, 5), Point::new(5, 5), Point::new(5, 10)]
        );
    }

    #[test]
    fn test_polygon_entirely_outside() {
        let poly = Shape::closed(vec![
            Point::new(20, 20),
            Point::new(30, 20),
            Point::new(25, 30),
        ])
        .unwrap();
        assert!(clip(&poly, &window()).is_empty());
    }

    #[test]
    fn test_polygon_half_inside() {
        let poly = Shape::closed(vec![
            Point::new(5, 2),
            Point::new(15, 2),
            Point::new(15, 8),
            Point::new(5, 8),
        ])
        .unwrap();
        let pieces = clip(&poly, &window());
        assert_eq!(pieces.len(), 1);
        assert_eq!(
            pieces[0].points(),
            &[
                Point::new(5, 2),
                Point::new(10, 2),
                Point::new(10, 8),
                Point::new(5, 8),
            ]
        );
        assert!(pieces[0].is_closed());
    }

    #[test]
    fn test_degenerate_window_clips_everything() {
        let w = Window::from_corners(Point::new(3, 0), Point::new(3, 10));
        let line = Shape::line(Point::new(3, 2), Point::new(3, 4));
        assert!(clip(&line, &w).is_empty());
    }

    #[test]
    fn test_clipped_result_lookup_and_forget() {
        let shapes = vec![
            Shape::line(Point::new(1, 1), Point::new(4, 4)),
            Shape::line(Point::new(20, 20), Point::new(30, 30)),
        ];
        let mut result = ClippedResult::compute(&shapes, &window());
        assert_eq!(result.pieces(0).len(), 1);
        assert!(result.pieces(1).is_empty());
        assert_eq!(result.len(), 1);

        result.forget(0);
        assert!(result.is_empty());
        assert_eq!(result.entries().count(), 1);
    }
}
