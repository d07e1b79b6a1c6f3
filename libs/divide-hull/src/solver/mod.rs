//! # Solver
//!
//! Entry point: validates and sorts the input, then builds the hull by
//! recursive halving.
//!
//! ## Recursion
//!
//! ```text
//! [p0 .. pn)  sorted by (x, y)
//!    ├── [p0 .. pn/2)   → left hull
//!    └── [pn/2 .. pn)   → right hull
//!              ↓
//!        merge(left, right)
//! ```
//!
//! Splitting by count keeps the depth at `O(log n)`. Because the slice is sorted
//! before the first split, every left half lies lexicographically below its
//! right half, which is what the tangent merge needs.

use config::constants::GlobalConfig;
use log::debug;

use crate::error::{HullError, HullResult};
use crate::hull::Hull;
use crate::merge::merge;
use crate::point::{is_finite, lexicographic_cmp, Point};

// =============================================================================
// SOLVER
// =============================================================================

/// Divide-and-conquer convex hull solver.
///
/// ## Example
///
/// ```rust
/// use config::constants::GlobalConfig;
/// use divide_hull::{HullError, Point, Solver};
///
/// let solver = Solver::new(GlobalConfig::new(3, 3, 1.0).unwrap());
/// let square = [
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 1.0),
/// ];
///
/// assert_eq!(
///     solver.solve(&square),
///     Err(HullError::TooManyPoints { count: 4, max: 3 })
/// );
/// assert_eq!(Solver::default().solve(&square).unwrap().len(), 4);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    config: GlobalConfig,
}

impl Solver {
    /// Creates a solver bound to `config`.
    pub fn new(config: GlobalConfig) -> Self {
        Self { config }
    }

    /// The configuration this solver enforces.
    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    /// Computes the hull of an arbitrary point set.
    ///
    /// The points are copied and sorted by `(x, y)`; the caller's slice is left
    /// as is.
    ///
    /// # Errors
    ///
    /// `EmptyInput`, `NonFiniteCoordinate` or `TooManyPoints`.
    pub fn solve(&self, points: &[Point]) -> HullResult<Hull> {
        self.check_input(points)?;

        let mut sorted = points.to_vec();
        sorted.sort_by(lexicographic_cmp);
        Ok(self.build(&sorted))
    }

    /// Computes the hull of points already sorted by `(x, y)`.
    ///
    /// # Errors
    ///
    /// `EmptyInput`, `NonFiniteCoordinate`, `TooManyPoints`, or `Unsorted` with
    /// the first index that breaks the order.
    pub fn solve_sorted(&self, points: &[Point]) -> HullResult<Hull> {
        self.check_input(points)?;

        if let Some(index) = points
            .windows(2)
            .position(|pair| lexicographic_cmp(&pair[1], &pair[0]).is_lt())
        {
            return Err(HullError::Unsorted { index: index + 1 });
        }
        Ok(self.build(points))
    }

    fn check_input(&self, points: &[Point]) -> HullResult<()> {
        if points.is_empty() {
            return Err(HullError::EmptyInput);
        }
        if points.len() > self.config.max_points {
            return Err(HullError::TooManyPoints {
                count: points.len(),
                max: self.config.max_points,
            });
        }
        if let Some((index, p)) = points.iter().enumerate().find(|(_, p)| !is_finite(p)) {
            return Err(HullError::NonFiniteCoordinate {
                index,
                x: p.x,
                y: p.y,
            });
        }
        Ok(())
    }

    fn build(&self, sorted: &[Point]) -> Hull {
        let hull = divide(sorted);
        debug!(
            "solved hull of {} points: {} boundary vertices",
            sorted.len(),
            hull.len()
        );
        hull
    }
}

// =============================================================================
// FREE FUNCTIONS
// =============================================================================

/// Computes the hull of `points` with the default configuration.
///
/// See [`Solver::solve`].
pub fn solve(points: &[Point]) -> HullResult<Hull> {
    Solver::default().solve(points)
}

/// Computes the hull of `(x, y)`-sorted `points` with the default configuration.
///
/// See [`Solver::solve_sorted`].
pub fn solve_sorted(points: &[Point]) -> HullResult<Hull> {
    Solver::default().solve_sorted(points)
}

// =============================================================================
// RECURSIVE DIVIDE
// =============================================================================

/// Recursively hulls a non-empty sorted slice.
///
/// The left half gets `n / 2` points and the right half the rest.
fn divide(points: &[Point]) -> Hull {
    match points {
        [only] => Hull::singleton(*only),
        _ => {
            let (left, right) = points.split_at(points.len() / 2);
            merge(&divide(left), &divide(right))
        }
    }
}
