use std::num::ParseIntError;
use std::path::Path;

use anyhow::Result;
use thiserror::Error;

use crate::ir::{Point, Route};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: odd number of coordinates ({count})")]
    OddCoordinateCount { line: usize, count: usize },
    #[error("line {line}: invalid coordinate {token:?}")]
    InvalidCoordinate {
        line: usize,
        token: String,
        source: ParseIntError,
    },
}

/// Parses route-file text: one route per non-blank line, whitespace
/// separated integer tokens forming (x, y) pairs.
pub fn parse_routes(input: &str) -> Result<Vec<Route>, ParseError> {
    let mut routes = Vec::new();
    for (idx, raw_line) in input.lines().enumerate() {
        if raw_line.trim().is_empty() {
            continue;
        }
        routes.push(parse_route_line(raw_line, idx + 1)?);
    }
    Ok(routes)
}

fn parse_route_line(line: &str, line_no: usize) -> Result<Route, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() % 2 != 0 {
        return Err(ParseError::OddCoordinateCount {
            line: line_no,
            count: tokens.len(),
        });
    }

    let mut points = Vec::with_capacity(tokens.len() / 2);
    for pair in tokens.chunks(2) {
        let x = parse_coordinate(pair[0], line_no)?;
        let y = parse_coordinate(pair[1], line_no)?;
        points.push(Point::new(x, y));
    }
    Ok(Route::new(points))
}

fn parse_coordinate(token: &str, line_no: usize) -> Result<f64, ParseError> {
    token
        .parse::<i64>()
        .map(|value| value as f64)
        .map_err(|source| ParseError::InvalidCoordinate {
            line: line_no,
            token: token.to_string(),
            source,
        })
}

/// Reads and parses a route file. Parse failures abort the whole file.
pub fn read_routes(path: &Path) -> Result<Vec<Route>> {
    let contents = std::fs::read_to_string(path)?;
    parse_routes(&contents).map_err(|err| anyhow::anyhow!("{}: {err}", path.display()))
}
