//! # Config Crate
//!
//! Centralized configuration constants for the convex hull workspace.
//! Input limits and the defaults used when sampling random point clouds are
//! defined here so the solver, the command-line front end and the benchmarks
//! agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GlobalConfig, DEFAULT_SAMPLE_POINTS, MAX_INPUT_POINTS};
//!
//! let cfg = GlobalConfig::default();
//! assert_eq!(cfg.max_points, MAX_INPUT_POINTS);
//! assert_eq!(cfg.sample_points, DEFAULT_SAMPLE_POINTS);
//!
//! // Tighter limits for a constrained caller
//! let small = GlobalConfig::new(1_000, 100, 10.0).expect("valid config");
//! assert!(small.max_points < cfg.max_points);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated**: `GlobalConfig::new` rejects values the solver cannot use
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
