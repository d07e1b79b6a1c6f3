//! # Merger
//!
//! Splices two horizontally separated hulls into the hull of their union.
//!
//! ## Splice
//!
//! With `top` and `bottom` the upper and lower tangents, the merged clockwise
//! boundary is:
//!
//! 1. `left[0..=top.left]`: from the left hull's first vertex up to the upper
//!    tangent point
//! 2. `right` from `top.right` clockwise to `bottom.right` inclusive
//! 3. `left[bottom.left..]`: from the lower tangent point back round to (but
//!    not including) index 0, skipped when `bottom.left == 0`
//!
//! Index 0 of the left hull is the global lexicographic minimum, so it always
//! lies on the outer arc and this splice never drops or repeats it. Everything
//! on the two inner arcs is interior to the result and is left out.

use log::trace;

use crate::hull::Hull;
use crate::tangent::{lower_tangent, upper_tangent};

/// Merges `left` and `right` into a new hull.
///
/// Every point of `left` must compare lexicographically below every point of
/// `right`. Neither input is modified; the result owns copies of the surviving
/// points.
///
/// ## Example
///
/// ```rust
/// use divide_hull::{merge, solve, Point};
///
/// let left = solve(&[Point::new(0.0, 0.0), Point::new(1.0, 1.0)]).unwrap();
/// let right = solve(&[Point::new(2.0, 0.0), Point::new(1.5, -1.0)]).unwrap();
///
/// let merged = merge(&left, &right);
/// assert_eq!(merged.len(), 4);
/// assert!(merged.is_convex());
/// ```
pub fn merge(left: &Hull, right: &Hull) -> Hull {
    // Both children reduced to the same point: the bridge has zero length.
    if left.len() == 1 && right.len() == 1 && left.point(0) == right.point(0) {
        return left.clone();
    }

    let top = upper_tangent(left, right);
    let bottom = lower_tangent(left, right);
    trace!(
        "merging hulls of {} and {} points: upper ({}, {}), lower ({}, {})",
        left.len(),
        right.len(),
        top.left,
        top.right,
        bottom.left,
        bottom.right
    );
    debug_assert!(
        bottom.left == 0 || bottom.left > top.left,
        "left outer arc must pass through index 0"
    );

    let mut boundary = Vec::with_capacity(left.len() + right.len());
    boundary.extend_from_slice(&left.points()[..=top.left]);

    let mut i = top.right;
    while i != bottom.right {
        boundary.push(right.point(i));
        i = right.next_index(i);
    }
    boundary.push(right.point(bottom.right));

    if bottom.left != 0 {
        boundary.extend_from_slice(&left.points()[bottom.left..]);
    }

    Hull::from_boundary(boundary)
}

#[cfg(test)]
mod tests;
