//! Integer Bresenham rasterization.

use std::iter::FusedIterator;

use super::Point;

/// Lazy pixel walk from one point to another, both endpoints included.
///
/// Steps use the symmetric integer formulation: `err = dx - dy`, and per
/// step `e2 = 2 * err` advances x when `e2 > -dy` and y when `e2 < dx`.
/// The error terms are kept in `i64` so that any pair of `i32` endpoints
/// walks without overflow.
#[derive(Debug, Clone)]
pub struct Bresenham {
    current: Point,
    end: Point,
    dx: i64,
    dy: i64,
    sx: i32,
    sy: i32,
    err: i64,
    done: bool,
}

impl Bresenham {
    pub fn new(p0: Point, p1: Point) -> Self {
        let dx = (i64::from(p1.x) - i64::from(p0.x)).abs();
        let dy = (i64::from(p1.y) - i64::from(p0.y)).abs();
        // A zero delta never steps in that axis, so its sign is irrelevant.
        let sx = if p1.x >= p0.x { 1 } else { -1 };
        let sy = if p1.y >= p0.y { 1 } else { -1 };
        Self {
            current: p0,
            end: p1,
            dx,
            dy,
            sx,
            sy,
            err: dx - dy,
            done: false,
        }
    }

    fn remaining(&self) -> usize {
        if self.done {
            return 0;
        }
        let rx = (i64::from(self.end.x) - i64::from(self.current.x)).unsigned_abs();
        let ry = (i64::from(self.end.y) - i64::from(self.current.y)).unsigned_abs();
        usize::try_from(rx.max(ry) + 1).unwrap_or(usize::MAX)
    }
}

impl Iterator for Bresenham {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }
        let out = self.current;
        if out == self.end {
            self.done = true;
            return Some(out);
        }
        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.current.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.current.y += self.sy;
        }
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for Bresenham {}

impl FusedIterator for Bresenham {}

/// Pixels of the segment `p0 -> p1`, in order.
pub fn rasterize(p0: Point, p1: Point) -> Bresenham {
    Bresenham::new(p0, p1)
}

/// Pixels of a whole polyline (or polygon when `closed`). Joint pixels
/// shared by consecutive edges are emitted once.
pub fn rasterize_path(points: &[Point], closed: bool) -> Vec<Point> {
    let mut out = Vec::new();
    match points {
        [] => return out,
        [single] => {
            out.push(*single);
            return out;
        }
        _ => {}
    }

    let closing = if closed && points.len() > 2 {
        Some((points[points.len() - 1], points[0]))
    } else {
        None
    };
    let edges = points
        .windows(2)
        .map(|pair| (pair[0], pair[1]))
        .chain(closing);

    for (a, b) in edges {
        let skip = usize::from(!out.is_empty());
        out.extend(rasterize(a, b).skip(skip));
    }
    if closing.is_some() {
        // The closing edge ends on the very first pixel.
        out.pop();
    }
    out
}
