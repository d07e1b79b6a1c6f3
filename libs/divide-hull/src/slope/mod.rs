//! Slope comparison between candidate bridge lines.
//!
//! Tangent search repeatedly asks whether the line from a fixed pivot to one
//! candidate is steeper than the line from the same pivot to another. Dividing
//! `dy / dx` would fail on vertical lines and lose precision on nearly parallel
//! ones, so the comparison is answered with the exact orientation predicate
//! instead.
//!
//! For candidates on the same side of the pivot, "greater slope" is the same as
//! "counterclockwise of", which gives the following conventions for vertical
//! lines (slope written as `+inf` / `-inf`):
//!
//! | candidate relative to pivot | slope  |
//! |-----------------------------|--------|
//! | right side, straight up     | `+inf` |
//! | right side, straight down   | `-inf` |
//! | left side, straight up      | `-inf` |
//! | left side, straight down    | `+inf` |

use std::cmp::Ordering;

use crate::point::{orientation, Orientation, Point};

/// Orders `slope(pivot, a)` against `slope(pivot, b)`.
///
/// `a` and `b` must lie on the same side of `pivot` (both right or both left),
/// which holds during tangent search because every candidate comes from the
/// hull on the opposite side of the bridge. `Equal` means the three points are
/// collinear.
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
/// use divide_hull::point::Point;
/// use divide_hull::slope::compare_slopes;
///
/// let pivot = Point::new(0.0, 0.0);
/// let steep = Point::new(1.0, 3.0);
/// let shallow = Point::new(2.0, 1.0);
/// assert_eq!(compare_slopes(pivot, steep, shallow), Ordering::Greater);
///
/// // A vertical line above a right-side pivot beats every finite slope.
/// let vertical = Point::new(0.0, 1.0);
/// assert_eq!(compare_slopes(pivot, vertical, steep), Ordering::Greater);
/// ```
#[inline]
pub fn compare_slopes(pivot: Point, a: Point, b: Point) -> Ordering {
    match orientation(pivot, b, a) {
        Orientation::CounterClockwise => Ordering::Greater,
        Orientation::Clockwise => Ordering::Less,
        Orientation::Collinear => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests;
