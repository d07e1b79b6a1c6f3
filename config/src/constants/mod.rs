//! Centralized configuration values shared across the hull workspace.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// LIMITS
// =============================================================================

/// Upper bound on the number of points a single solve accepts.
///
/// The recursion itself only needs `O(log n)` stack, but every merge level
/// allocates a fresh boundary, so callers feeding untrusted input get a hard
/// ceiling instead of an unbounded allocation.
///
/// # Examples
/// ```
/// use config::constants::MAX_INPUT_POINTS;
/// assert!(MAX_INPUT_POINTS >= 1_000_000);
/// ```
pub const MAX_INPUT_POINTS: usize = 1 << 24;

// =============================================================================
// SAMPLING DEFAULTS
// =============================================================================

/// Number of points drawn when a random cloud is requested without a count.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SAMPLE_POINTS;
/// assert!(DEFAULT_SAMPLE_POINTS > 0);
/// ```
pub const DEFAULT_SAMPLE_POINTS: usize = 1_000;

/// Half-width of the square (or radius of the disc) random clouds are drawn from.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SAMPLE_EXTENT;
/// assert!(DEFAULT_SAMPLE_EXTENT > 0.0);
/// ```
pub const DEFAULT_SAMPLE_EXTENT: f64 = 500.0;

/// Seed used for random clouds when none is supplied, so runs are reproducible.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SAMPLE_SEED;
/// let _seed: u64 = DEFAULT_SAMPLE_SEED;
/// ```
pub const DEFAULT_SAMPLE_SEED: u64 = 0x5EED_C0DE;

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.sample_extent > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Largest input the solver accepts.
    pub max_points: usize,
    /// Number of points in a generated cloud.
    pub sample_points: usize,
    /// Half-width (square) or radius (disc) of a generated cloud.
    pub sample_extent: f64,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of every field.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(64, 16, 2.5).expect("valid config");
    /// assert_eq!(cfg.sample_points, 16);
    /// ```
    pub fn new(
        max_points: usize,
        sample_points: usize,
        sample_extent: f64,
    ) -> Result<Self, ConfigError> {
        if max_points == 0 {
            return Err(ConfigError::InvalidMaxPoints(max_points));
        }
        if sample_points == 0 {
            return Err(ConfigError::InvalidSamplePoints(sample_points));
        }
        if !sample_extent.is_finite() || sample_extent <= 0.0 {
            return Err(ConfigError::InvalidExtent(sample_extent));
        }
        Ok(Self {
            max_points,
            sample_points,
            sample_extent,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            max_points: MAX_INPUT_POINTS,
            sample_points: DEFAULT_SAMPLE_POINTS,
            sample_extent: DEFAULT_SAMPLE_EXTENT,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Raised when the input limit is zero.
    InvalidMaxPoints(usize),
    /// Raised when a generated cloud would be empty.
    InvalidSamplePoints(usize),
    /// Raised when the sampling extent is zero, negative or not finite.
    InvalidExtent(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMaxPoints(value) => {
                write!(f, "max_points must be positive: {value}")
            }
            ConfigError::InvalidSamplePoints(value) => {
                write!(f, "sample_points must be positive: {value}")
            }
            ConfigError::InvalidExtent(value) => {
                write!(f, "sample_extent must be finite and positive: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
