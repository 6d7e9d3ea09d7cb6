//! Integer geometry: points, clipping windows, shapes and the two algorithms
//! that operate on them (rasterization and clipping).

use serde::{Deserialize, Serialize};

pub mod clip;
pub mod raster;
mod shape;

pub use clip::{ClippedResult, Outcode, Segment, clip, clip_segment};
pub use raster::{Bresenham, rasterize, rasterize_path};
pub use shape::{Shape, ShapeError, ShapeKind};

/// A pixel position in canvas coordinates. `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned clipping rectangle, always stored normalized
/// (`xmin <= xmax`, `ymin <= ymax`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Window {
    xmin: i32,
    ymin: i32,
    xmax: i32,
    ymax: i32,
}

impl Window {
    /// Builds a window from any two opposite corners.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            xmin: a.x.min(b.x),
            ymin: a.y.min(b.y),
            xmax: a.x.max(b.x),
            ymax: a.y.max(b.y),
        }
    }

    pub fn xmin(&self) -> i32 {
        self.xmin
    }

    pub fn ymin(&self) -> i32 {
        self.ymin
    }

    pub fn xmax(&self) -> i32 {
        self.xmax
    }

    pub fn ymax(&self) -> i32 {
        self.ymax
    }

    pub fn min(&self) -> Point {
        Point::new(self.xmin, self.ymin)
    }

    pub fn max(&self) -> Point {
        Point::new(self.xmax, self.ymax)
    }

    pub fn width(&self) -> i64 {
        i64::from(self.xmax) - i64::from(self.xmin)
    }

    pub fn height(&self) -> i64 {
        i64::from(self.ymax) - i64::from(self.ymin)
    }

    /// Zero width or zero height. Such a window clips every shape away.
    pub fn is_degenerate(&self) -> bool {
        self.xmin == self.xmax || self.ymin == self.ymax
    }

    /// Inclusive of the boundary.
    pub fn contains(&self, p: Point) -> bool {
        (self.xmin..=self.xmax).contains(&p.x) && (self.ymin..=self.ymax).contains(&p.y)
    }
}
