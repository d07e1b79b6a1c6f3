//! # Tangent Finder
//!
//! Finds the upper and lower bridges between two horizontally separated
//! hulls.
//!
//! ## Algorithm
//!
//! Both searches start from the natural bridge `rightmost(left) → leftmost(right)`
//! and alternate two local refinements until neither moves:
//!
//! 1. Hold the left endpoint and walk the right endpoint while the slope from
//!    the left endpoint keeps improving
//! 2. Hold the right endpoint and walk the left endpoint the same way
//!
//! A refinement only reruns after the opposite endpoint has moved, since
//! nothing else can invalidate its local optimum.
//!
//! | search | right hull walk | left hull walk | "better" candidate      |
//! |--------|-----------------|----------------|-------------------------|
//! | upper  | clockwise       | counterclock.  | strictly above bridge   |
//! | lower  | counterclock.   | clockwise      | strictly below bridge   |
//!
//! A candidate collinear with the bridge is taken when it lies further out
//! (away from the other hull), so collinear points never survive as vertices.

use std::cmp::Ordering;

use crate::hull::Hull;
use crate::point::{lexicographic_cmp, Point};
use crate::slope::compare_slopes;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Endpoints of a bridge, as indices into the left and right hull.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tangent {
    /// Index into the left hull's boundary.
    pub left: usize,
    /// Index into the right hull's boundary.
    pub right: usize,
}

/// Finds the upper tangent of two hulls.
///
/// Every point of `left` must compare lexicographically below every point of
/// `right`, which the recursive split guarantees.
///
/// ## Example
///
/// ```rust
/// use divide_hull::{solve, Point};
/// use divide_hull::tangent::upper_tangent;
///
/// let left = solve(&[Point::new(0.0, 0.0), Point::new(1.0, 2.0), Point::new(1.0, -1.0)]).unwrap();
/// let right = solve(&[Point::new(4.0, 1.0), Point::new(5.0, 3.0), Point::new(6.0, 0.0)]).unwrap();
///
/// let top = upper_tangent(&left, &right);
/// assert_eq!(left.point(top.left), Point::new(1.0, 2.0));
/// assert_eq!(right.point(top.right), Point::new(5.0, 3.0));
/// ```
pub fn upper_tangent(left: &Hull, right: &Hull) -> Tangent {
    let mut l = left.rightmost_index();
    let mut r = right.leftmost_index();

    let mut right_stale = true;
    let mut left_stale = true;
    while right_stale || left_stale {
        if right_stale {
            right_stale = false;
            let moved = walk(
                right,
                left.point(l),
                r,
                Hull::next_index,
                Ordering::Greater,
                Ordering::Greater,
            );
            if moved != r {
                r = moved;
                left_stale = true;
            }
        }
        if left_stale {
            left_stale = false;
            let moved = walk(
                left,
                right.point(r),
                l,
                Hull::previous_index,
                Ordering::Less,
                Ordering::Less,
            );
            if moved != l {
                l = moved;
                right_stale = true;
            }
        }
    }

    Tangent { left: l, right: r }
}

/// Finds the lower tangent of two hulls.
///
/// Mirror image of [`upper_tangent`]: the left endpoint is refined first and
/// both walks run in the opposite rotational direction.
pub fn lower_tangent(left: &Hull, right: &Hull) -> Tangent {
    let mut l = left.rightmost_index();
    let mut r = right.leftmost_index();

    let mut left_stale = true;
    let mut right_stale = true;
    while left_stale || right_stale {
        if left_stale {
            left_stale = false;
            let moved = walk(
                left,
                right.point(r),
                l,
                Hull::next_index,
                Ordering::Greater,
                Ordering::Less,
            );
            if moved != l {
                l = moved;
                right_stale = true;
            }
        }
        if right_stale {
            right_stale = false;
            let moved = walk(
                right,
                left.point(l),
                r,
                Hull::previous_index,
                Ordering::Less,
                Ordering::Greater,
            );
            if moved != r {
                r = moved;
                left_stale = true;
            }
        }
    }

    Tangent { left: l, right: r }
}

// =============================================================================
// WALK
// =============================================================================

/// Walks `start` around `hull` while the bridge from `pivot` improves.
///
/// A step is taken when `slope(pivot, candidate)` compares `steeper` against
/// `slope(pivot, current)`, or when the two are equal and the candidate
/// compares `outward` against the current point. Returns the index it stopped
/// at.
///
/// Each step strictly improves the bridge, so at most `len - 1` steps are
/// possible; the bound also makes a one-point hull return immediately.
fn walk(
    hull: &Hull,
    pivot: Point,
    start: usize,
    step: fn(&Hull, usize) -> usize,
    steeper: Ordering,
    outward: Ordering,
) -> usize {
    let mut current = start;
    for _ in 1..hull.len() {
        let candidate = step(hull, current);
        let (c, p) = (hull.point(candidate), hull.point(current));
        let improves = match compare_slopes(pivot, c, p) {
            Ordering::Equal => lexicographic_cmp(&c, &p) == outward,
            order => order == steeper,
        };
        if !improves {
            break;
        }
        current = candidate;
    }
    current
}
