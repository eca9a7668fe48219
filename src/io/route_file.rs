//! Plain-text route files: one `row,col` pair per line
//!
//! Blank lines and lines starting with `#` are ignored. A single comma
//! separates the two coordinates, with optional whitespace around it; a
//! single space or tab also works when no comma is present.

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{MazeError, Result};
use crate::spatial::{Cell, Route};
use std::path::Path;

/// Read and validate a route file
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - A line is not a coordinate pair
/// - The cells do not form a valid route
pub fn read_route(path: &Path) -> Result<Route> {
    let text = std::fs::read_to_string(path).map_err(|e| MazeError::FileSystem {
        path: path.to_path_buf(),
        operation: "read route",
        source: e,
    })?;
    parse_route(&text, path)
}

/// Parse route text, attributing errors to `path`
///
/// # Errors
///
/// Returns [`MazeError::RouteParse`] with the 1-based line number of the
/// first malformed line or of the cell that breaks route validity
pub fn parse_route(text: &str, path: &Path) -> Result<Route> {
    let mut cells = Vec::new();
    let mut line_numbers = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let cell = parse_cell(line).map_err(|reason| MazeError::RouteParse {
            path: path.to_path_buf(),
            line: index + 1,
            reason,
        })?;
        cells.push(cell);
        line_numbers.push(index + 1);
    }

    if cells.is_empty() {
        return Err(MazeError::RouteParse {
            path: path.to_path_buf(),
            line: text.lines().count().max(1),
            reason: "route file contains no cells".to_string(),
        });
    }

    Route::new(cells).map_err(|err| match err {
        MazeError::InvalidRoute { index, reason } => MazeError::RouteParse {
            path: path.to_path_buf(),
            line: line_numbers.get(index).copied().unwrap_or(0),
            reason,
        },
        other => other,
    })
}

fn parse_cell(line: &str) -> std::result::Result<Cell, String> {
    let fields: Vec<&str> = if line.contains(',') {
        line.split(',').map(str::trim).collect()
    } else {
        line.split([' ', '\t']).collect()
    };

    let [row, col] = fields.as_slice() else {
        return Err(format!("expected 'row,col', found '{line}'"));
    };

    Ok(Cell::new(
        parse_coordinate("row", row)?,
        parse_coordinate("column", col)?,
    ))
}

fn parse_coordinate(axis: &str, field: &str) -> std::result::Result<usize, String> {
    if field.is_empty() {
        return Err(format!("missing {axis} value"));
    }
    let value = field
        .parse::<usize>()
        .map_err(|e| format!("invalid {axis} '{field}': {e}"))?;
    if value >= MAX_GRID_DIMENSION {
        return Err(format!(
            "{axis} {value} lies beyond the {MAX_GRID_DIMENSION}-cell grid limit"
        ));
    }
    Ok(value)
}
