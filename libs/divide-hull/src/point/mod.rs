//! 2D point definitions and exact predicates for the hull kernel.
//!
//! Provides the `Point` alias for `glam::DVec2`, the lexicographic order the
//! solver sorts by, and the orientation test every other predicate is built on.

use std::cmp::Ordering;

pub use glam::DVec2 as Point;

/// Turn direction of an ordered point triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// `c` lies to the left of the directed line `a → b`.
    CounterClockwise,
    /// `c` lies to the right of the directed line `a → b`.
    Clockwise,
    /// The three points lie on one line (or coincide).
    Collinear,
}

/// Classifies the triangle `a, b, c` using an exact determinant sign.
///
/// # Examples
/// ```
/// use divide_hull::point::{orientation, Orientation, Point};
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(1.0, 0.0);
/// assert_eq!(orientation(a, b, Point::new(0.5, 1.0)), Orientation::CounterClockwise);
/// assert_eq!(orientation(a, b, Point::new(0.5, -1.0)), Orientation::Clockwise);
/// assert_eq!(orientation(a, b, Point::new(2.0, 0.0)), Orientation::Collinear);
/// ```
#[inline]
pub fn orientation(a: Point, b: Point, c: Point) -> Orientation {
    let det = orient2d(a, b, c);
    if det > 0.0 {
        Orientation::CounterClockwise
    } else if det < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Twice the signed area of `a, b, c`; positive when counterclockwise.
#[inline]
fn orient2d(a: Point, b: Point, c: Point) -> f64 {
    use robust::Coord;
    robust::orient2d(
        Coord { x: a.x, y: a.y },
        Coord { x: b.x, y: b.y },
        Coord { x: c.x, y: c.y },
    )
}

/// Compares two points first by `x`, then by `y`.
///
/// `-0.0` and `0.0` compare equal, matching `Point`'s `==`. Only meaningful for
/// finite coordinates; the solver rejects NaN before anything is compared.
#[inline]
pub fn lexicographic_cmp(a: &Point, b: &Point) -> Ordering {
    let by_x = a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal);
    by_x.then(a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
}

/// Returns `true` when both coordinates are finite.
#[inline]
pub fn is_finite(p: &Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}
