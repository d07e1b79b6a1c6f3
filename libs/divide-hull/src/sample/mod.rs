//! Seeded random point clouds.
//!
//! Stand-in point source for the command-line front end, the integration
//! tests and the benchmarks. The same seed always yields the same cloud.

use config::constants::ConfigError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::point::Point;

/// Shape of the region points are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Distribution {
    /// Uniform over the square `[-extent, extent]²`.
    #[default]
    Square,
    /// Uniform over the disc of radius `extent` centred at the origin.
    Disc,
}

/// Draws `count` points from `distribution`.
///
/// # Errors
///
/// `ConfigError::InvalidExtent` when `extent` is zero, negative or not
/// finite, the same rule `GlobalConfig::new` applies.
///
/// # Examples
/// ```
/// use divide_hull::sample::{sample_points, Distribution};
///
/// let a = sample_points(Distribution::Disc, 100, 10.0, 7).unwrap();
/// let b = sample_points(Distribution::Disc, 100, 10.0, 7).unwrap();
/// assert_eq!(a, b);
/// assert!(a.iter().all(|p| p.length() <= 10.0));
/// ```
pub fn sample_points(
    distribution: Distribution,
    count: usize,
    extent: f64,
    seed: u64,
) -> Result<Vec<Point>, ConfigError> {
    if !extent.is_finite() || extent <= 0.0 {
        return Err(ConfigError::InvalidExtent(extent));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let points = (0..count)
        .map(|_| match distribution {
            Distribution::Square => Point::new(
                rng.gen_range(-extent..=extent),
                rng.gen_range(-extent..=extent),
            ),
            Distribution::Disc => {
                // sqrt keeps the density uniform over the area
                let radius = extent * rng.gen::<f64>().sqrt();
                let theta = rng.gen_range(0.0..std::f64::consts::TAU);
                let (sin, cos) = theta.sin_cos();
                Point::new(radius * cos, radius * sin)
            }
        })
        .collect();
    Ok(points)
}
