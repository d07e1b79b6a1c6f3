//! # Error Types
//!
//! Error types for hull construction. Every failure is a structural problem
//! with the input and is reported once; the algorithm itself is deterministic
//! and has nothing to retry.
//!
//! ## Error Policy
//!
//! - NO fallback mechanisms when the input is unusable
//! - All failures return explicit errors
//! - Errors include the offending index or limit for debugging

use config::constants::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while solving for a convex hull.
///
/// ## Example
///
/// ```rust
/// use divide_hull::{solve, HullError};
///
/// match solve(&[]) {
///     Ok(hull) => println!("{} vertices", hull.len()),
///     Err(HullError::EmptyInput) => eprintln!("nothing to hull"),
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HullError {
    /// The point sequence was empty.
    #[error("Cannot build a hull from an empty point set")]
    EmptyInput,

    /// A coordinate was NaN or infinite.
    #[error("Point {index} has a non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate {
        /// Position of the point in the input
        index: usize,
        /// Its x-coordinate
        x: f64,
        /// Its y-coordinate
        y: f64,
    },

    /// `solve_sorted` was handed points out of `(x, y)` order.
    #[error("Points are not sorted by (x, y): point {index} precedes its predecessor")]
    Unsorted {
        /// First position whose point compares less than the one before it
        index: usize,
    },

    /// The input exceeds the configured limit.
    #[error("Too many points: {count} (max: {max})")]
    TooManyPoints {
        /// Number of points supplied
        count: usize,
        /// Configured ceiling
        max: usize,
    },

    /// The solver configuration was rejected.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for hull operations.
pub type HullResult<T> = Result<T, HullError>;

// =============================================================================
// TESTS
// =============================================================================
