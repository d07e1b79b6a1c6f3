//! `dchull`: convex hull of a point file or a seeded random cloud.
//!
//! ```text
//! dchull --input points.txt --format json
//! dchull --count 10000 --distribution disc --verify
//! cat points.txt | dchull --input -
//! ```
//!
//! Set `RUST_LOG=debug` (or `trace` for per-merge tangents) to see solver logs.

mod input;
mod output;

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use config::constants::{
    ConfigError, GlobalConfig, DEFAULT_SAMPLE_EXTENT, DEFAULT_SAMPLE_POINTS, DEFAULT_SAMPLE_SEED,
    MAX_INPUT_POINTS,
};
use divide_hull::sample::{sample_points, Distribution};
use divide_hull::{Hull, HullError, Point, Solver};
use log::info;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("hull construction failed: {0}")]
    Hull(#[from] HullError),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("verification failed: {0}")]
    Verification(String),
}

#[derive(Parser, Debug)]
#[command(name = "dchull", about = "Divide-and-conquer convex hull")]
struct Cli {
    /// Point file (`x y` or `x,y` per line), or `-` for stdin.
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Random points to generate when no input is given.
    #[arg(long, short = 'n')]
    count: Option<usize>,

    /// Half-width of the square, or radius of the disc, for random points.
    #[arg(long)]
    extent: Option<f64>,

    /// Seed for random points; the same seed gives the same cloud.
    #[arg(long, default_value_t = DEFAULT_SAMPLE_SEED)]
    seed: u64,

    /// Region random points are drawn from.
    #[arg(long, value_enum, default_value_t = DistributionArg::Square)]
    distribution: DistributionArg,

    /// Largest point set the solver accepts.
    #[arg(long, env = "DCHULL_MAX_POINTS", default_value_t = MAX_INPUT_POINTS)]
    max_points: usize,

    /// Output as `x y` lines or as a JSON report.
    #[arg(long, short, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Check convexity and containment of every input point afterwards.
    #[arg(long)]
    verify: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum DistributionArg {
    Square,
    Disc,
}

impl From<DistributionArg> for Distribution {
    fn from(arg: DistributionArg) -> Self {
        match arg {
            DistributionArg::Square => Distribution::Square,
            DistributionArg::Disc => Distribution::Disc,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<(), CliError> {
    env_logger::init();
    let cli = Cli::parse();
    run(&cli, &mut io::stdout().lock())
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<(), CliError> {
    let config = GlobalConfig::new(
        cli.max_points,
        cli.count.unwrap_or(DEFAULT_SAMPLE_POINTS),
        cli.extent.unwrap_or(DEFAULT_SAMPLE_EXTENT),
    )?;

    let points = load_points(cli, &config)?;
    info!("solving hull of {} points", points.len());
    let hull = Solver::new(config).solve(&points)?;

    if cli.verify {
        verify(&hull, &points)?;
        info!("verified hull of {} vertices", hull.len());
    }

    match cli.format {
        Format::Text => output::write_text(out, &hull),
        Format::Json => output::write_json(out, points.len(), &hull),
    }
}

fn load_points(cli: &Cli, config: &GlobalConfig) -> Result<Vec<Point>, CliError> {
    match cli.input.as_deref() {
        Some(path) if path.as_os_str() == "-" => input::read_points(io::stdin().lock()),
        Some(path) => input::read_points(BufReader::new(File::open(path)?)),
        None => Ok(sample_points(
            cli.distribution.into(),
            config.sample_points,
            config.sample_extent,
            cli.seed,
        )?),
    }
}

fn verify(hull: &Hull, points: &[Point]) -> Result<(), CliError> {
    if !hull.is_convex() {
        return Err(CliError::Verification(format!(
            "boundary is not strictly convex: {hull}"
        )));
    }
    if let Some((index, p)) = points.iter().enumerate().find(|(_, p)| !hull.contains(**p)) {
        return Err(CliError::Verification(format!(
            "input point {index} ({}, {}) lies outside the hull",
            p.x, p.y
        )));
    }
    Ok(())
}
