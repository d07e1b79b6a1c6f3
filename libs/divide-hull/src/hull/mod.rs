//! # Hull
//!
//! Ordered boundary of a convex polygon.
//!
//! ## Invariants
//!
//! - At least one point; no two points are equal
//! - Points run **clockwise** (y up) around the boundary and index 0 holds the
//!   lexicographically smallest point, so `next_index` from index 0 climbs the
//!   upper chain towards the rightmost point
//! - With three or more points every consecutive triple (wrapping around)
//!   turns strictly clockwise; points on an edge are never vertices
//!
//! A `Hull` is never mutated after construction. Merging builds a new boundary
//! from copies of the children's points.

use std::fmt;

use serde::Serialize;

use crate::point::{lexicographic_cmp, orientation, Orientation, Point};

/// A convex polygon stored as its clockwise boundary.
///
/// ## Example
///
/// ```rust
/// use divide_hull::{solve, Point};
///
/// let hull = solve(&[
///     Point::new(0.0, 0.0),
///     Point::new(2.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(1.0, 0.5),
/// ])
/// .unwrap();
///
/// assert_eq!(hull.len(), 3);
/// assert_eq!(hull.point(hull.leftmost_index()), Point::new(0.0, 0.0));
/// assert!(hull.contains(Point::new(1.0, 0.5)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Hull {
    points: Vec<Point>,
}

impl Hull {
    /// Wraps a single point; the leaf of the recursion.
    pub fn singleton(point: Point) -> Self {
        Self {
            points: vec![point],
        }
    }

    /// Builds a hull from a boundary that already satisfies the invariants.
    pub(crate) fn from_boundary(points: Vec<Point>) -> Self {
        debug_assert!(!points.is_empty(), "hull boundary must not be empty");
        Self { points }
    }

    /// Boundary points in clockwise order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consumes the hull and returns its boundary.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Number of boundary vertices (always at least one).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; present for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index >= self.len()`, like slice indexing.
    pub fn point(&self, index: usize) -> Point {
        self.points[index]
    }

    /// Next vertex in clockwise order, wrapping to 0 after the last.
    pub fn next_index(&self, index: usize) -> usize {
        if index + 1 >= self.points.len() {
            0
        } else {
            index + 1
        }
    }

    /// Previous vertex in clockwise order, wrapping to the last before 0.
    pub fn previous_index(&self, index: usize) -> usize {
        if index == 0 {
            self.points.len() - 1
        } else {
            index - 1
        }
    }

    /// Index of the leftmost vertex (smallest x, then smallest y).
    pub fn leftmost_index(&self) -> usize {
        let mut min = 0;
        for (i, p) in self.points.iter().enumerate().skip(1) {
            if lexicographic_cmp(p, &self.points[min]).is_lt() {
                min = i;
            }
        }
        min
    }

    /// Index of the rightmost vertex (largest x, then largest y).
    pub fn rightmost_index(&self) -> usize {
        let mut max = 0;
        for (i, p) in self.points.iter().enumerate().skip(1) {
            if lexicographic_cmp(p, &self.points[max]).is_gt() {
                max = i;
            }
        }
        max
    }

    /// Returns `true` if `p` is a vertex, lies on an edge, or lies inside.
    pub fn contains(&self, p: Point) -> bool {
        match self.points.as_slice() {
            [] => false,
            [only] => *only == p,
            [a, b] => on_segment(*a, *b, p),
            points => {
                // Clockwise boundary: an inside point is never to the left of an edge.
                let n = points.len();
                (0..n).all(|i| {
                    orientation(points[i], points[(i + 1) % n], p)
                        != Orientation::CounterClockwise
                })
            }
        }
    }

    /// Returns `true` if every consecutive triple turns strictly clockwise.
    ///
    /// One- and two-point hulls are trivially convex.
    pub fn is_convex(&self) -> bool {
        let n = self.points.len();
        if n < 3 {
            return true;
        }
        (0..n).all(|i| {
            orientation(
                self.points[i],
                self.points[(i + 1) % n],
                self.points[(i + 2) % n],
            ) == Orientation::Clockwise
        })
    }

    /// Enclosed area (shoelace formula); zero for point and segment hulls.
    pub fn area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let mut twice = 0.0;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            twice += a.x * b.y - b.x * a.y;
        }
        twice.abs() / 2.0
    }
}

impl fmt::Display for Hull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({}, {})", p.x, p.y)?;
        }
        write!(f, "]")
    }
}

/// `p` lies on the closed segment `a-b`.
fn on_segment(a: Point, b: Point, p: Point) -> bool {
    orientation(a, b, p) == Orientation::Collinear
        && p.x >= a.x.min(b.x)
        && p.x <= a.x.max(b.x)
        && p.y >= a.y.min(b.y)
        && p.y <= a.y.max(b.y)
}

#[cfg(test)]
mod tests;
