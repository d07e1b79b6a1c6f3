//! # Divide-Hull
//!
//! Convex hull of a finite planar point set by divide and conquer, in
//! `O(n log n)`.
//!
//! ## Architecture
//!
//! ```text
//! points → Solver (sort by (x, y)) → divide → … → singleton hulls
//!                                       ↑                 │
//!                                       └── merge ←───────┘
//!                                   (upper/lower tangent + splice)
//! ```
//!
//! - [`point`]: `Point` alias and exact orientation predicate
//! - [`slope`]: slope comparison used by tangent search
//! - [`hull`]: clockwise hull boundary with circular indexing
//! - [`tangent`]: upper and lower bridge search
//! - [`merge`]: splicing two hulls along their bridges
//! - [`solver`]: validation, sorting and the recursive split
//! - [`sample`]: seeded random clouds
//!
//! ## Usage
//!
//! ```rust
//! use divide_hull::{solve, Point};
//!
//! let hull = solve(&[
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.1),
//!     Point::new(2.0, 0.0),
//!     Point::new(1.0, -0.1),
//!     Point::new(1.0, 0.0),
//! ])
//! .unwrap();
//!
//! // The interior point (1, 0) is gone; the rest runs clockwise.
//! assert_eq!(
//!     hull.points(),
//!     &[
//!         Point::new(0.0, 0.0),
//!         Point::new(1.0, 0.1),
//!         Point::new(2.0, 0.0),
//!         Point::new(1.0, -0.1),
//!     ]
//! );
//! ```

pub mod error;
pub mod hull;
pub mod merge;
pub mod point;
pub mod sample;
pub mod slope;
pub mod solver;
pub mod tangent;

pub use error::{HullError, HullResult};
pub use hull::Hull;
pub use merge::merge;
pub use point::Point;
pub use solver::{solve, solve_sorted, Solver};
pub use tangent::{lower_tangent, upper_tangent, Tangent};
