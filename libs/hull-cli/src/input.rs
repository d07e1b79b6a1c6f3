//! Plain-text point lists.
//!
//! One point per line as `x y` or `x,y`. Blank lines and `#` comments are
//! skipped.

use std::io::BufRead;

use divide_hull::Point;

use crate::CliError;

/// Reads every point from `reader`.
pub(crate) fn read_points(reader: impl BufRead) -> Result<Vec<Point>, CliError> {
    let mut points = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(point) = parse_line(&line, index + 1)? {
            points.push(point);
        }
    }
    Ok(points)
}

/// Parses one line; `Ok(None)` for blank and comment lines.
fn parse_line(line: &str, number: usize) -> Result<Option<Point>, CliError> {
    let content = line.split('#').next().unwrap_or_default().trim();
    if content.is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = content
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|f| !f.is_empty())
        .collect();
    let [x, y] = fields.as_slice() else {
        return Err(CliError::Parse {
            line: number,
            message: format!("expected 2 coordinates, found {}", fields.len()),
        });
    };

    let coordinate = |field: &str| {
        field.parse::<f64>().map_err(|e| CliError::Parse {
            line: number,
            message: format!("invalid coordinate `{field}`: {e}"),
        })
    };
    Ok(Some(Point::new(coordinate(x)?, coordinate(y)?)))
}
