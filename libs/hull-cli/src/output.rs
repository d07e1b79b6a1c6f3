//! Rendering of a solved hull.

use std::io::Write;

use divide_hull::Hull;
use serde::Serialize;

use crate::CliError;

/// JSON document printed by `--format json`.
#[derive(Debug, Serialize)]
pub(crate) struct Report<'a> {
    /// Number of points fed to the solver.
    pub input_points: usize,
    /// Area enclosed by the hull.
    pub area: f64,
    /// Boundary vertices in clockwise order.
    pub hull: &'a Hull,
}

/// Writes one `x y` line per vertex, in boundary order.
pub(crate) fn write_text(out: &mut impl Write, hull: &Hull) -> Result<(), CliError> {
    for p in hull.points() {
        writeln!(out, "{} {}", p.x, p.y)?;
    }
    Ok(())
}

/// Writes the hull as a single-line JSON [`Report`].
pub(crate) fn write_json(out: &mut impl Write, input_points: usize, hull: &Hull) -> Result<(), CliError> {
    let report = Report {
        input_points,
        area: hull.area(),
        hull,
    };
    serde_json::to_writer(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}
