use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Point;

/// Whether the last point connects back to the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Polyline; a plain line is an open shape with two points.
    Open,
    /// Polygon with an implicit closing edge.
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("a shape needs at least 2 points, got {0}")]
    TooFewPoints(usize),
}

/// A finished line, polyline or polygon.
///
/// Always holds at least two points. A closed shape built from exactly two
/// points is the degenerate polygon produced by finishing a two-vertex
/// polygon and is kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    kind: ShapeKind,
    points: Vec<Point>,
}

impl Shape {
    pub fn new(kind: ShapeKind, points: Vec<Point>) -> Result<Self, ShapeError> {
        if points.len() < 2 {
            return Err(ShapeError::TooFewPoints(points.len()));
        }
        Ok(Self { kind, points })
    }

    pub fn open(points: Vec<Point>) -> Result<Self, ShapeError> {
        Self::new(ShapeKind::Open, points)
    }

    pub fn closed(points: Vec<Point>) -> Result<Self, ShapeError> {
        Self::new(ShapeKind::Closed, points)
    }

    /// Two-point open shape. Cannot fail.
    pub fn line(a: Point, b: Point) -> Self {
        Self {
            kind: ShapeKind::Open,
            points: vec![a, b],
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn is_closed(&self) -> bool {
        self.kind == ShapeKind::Closed
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consecutive point pairs, including the closing edge for polygons.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let closing = self
            .is_closed()
            .then(|| (self.points[self.points.len() - 1], self.points[0]));
        self.points
            .windows(2)
            .map(|pair| (pair[0], pair[1]))
            .chain(closing)
    }
}
