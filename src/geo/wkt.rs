//! Parser for point-geometry strings
//!
//! Step locations come back from the storage backend as well-known text,
//! either `POINT(lon lat)` or with a leading spatial-reference tag such as
//! `SRID=4326;POINT(lon lat)`.

use crate::core::Coordinate;
use std::fmt;

/// Errors that can occur while parsing a point-geometry string
#[derive(Debug, Clone, PartialEq)]
pub enum WktError {
    /// Input does not start with the POINT keyword
    MissingPointKeyword { input: String },
    /// Parentheses are missing or unbalanced
    MalformedBody { details: String },
    /// Coordinate count is not exactly two
    WrongCoordinateCount { found: usize },
    /// A coordinate token is not a valid number
    InvalidNumber { axis: &'static str, value: String },
}

impl fmt::Display for WktError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WktError::MissingPointKeyword { input } => {
                write!(f, "Expected POINT geometry, got '{}'", input)
            }
            WktError::MalformedBody { details } => {
                write!(f, "Malformed POINT body: {}", details)
            }
            WktError::WrongCoordinateCount { found } => {
                write!(f, "Expected 2 coordinates, found {}", found)
            }
            WktError::InvalidNumber { axis, value } => {
                write!(f, "Invalid {} value '{}'", axis, value)
            }
        }
    }
}

impl std::error::Error for WktError {}

/// Parse a `POINT(lon lat)` string into a coordinate.
///
/// Accepts an optional `SRID=...;` prefix, surrounding whitespace, and
/// signed or decimal coordinate values.
pub fn parse_point(input: &str) -> Result<Coordinate, WktError> {
    let mut s = input.trim();

    // Strip an SRID tag if present
    if let Some((prefix, rest)) = s.split_once(';') {
        if prefix.trim().to_ascii_uppercase().starts_with("SRID=") {
            s = rest.trim();
        }
    }

    let body = s
        .strip_prefix("POINT")
        .ok_or_else(|| WktError::MissingPointKeyword {
            input: truncate_for_error(input),
        })?
        .trim_start();

    let body = body
        .strip_prefix('(')
        .and_then(|b| b.strip_suffix(')'))
        .ok_or_else(|| WktError::MalformedBody {
            details: "missing parentheses".to_string(),
        })?;

    let tokens: Vec<&str> = body.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(WktError::WrongCoordinateCount {
            found: tokens.len(),
        });
    }

    let lon = tokens[0]
        .parse::<f64>()
        .map_err(|_| WktError::InvalidNumber {
            axis: "longitude",
            value: tokens[0].to_string(),
        })?;
    let lat = tokens[1]
        .parse::<f64>()
        .map_err(|_| WktError::InvalidNumber {
            axis: "latitude",
            value: tokens[1].to_string(),
        })?;

    Ok(Coordinate::new(lon, lat))
}

fn truncate_for_error(input: &str) -> String {
    const MAX_LEN: usize = 48;
    if input.len() <= MAX_LEN {
        input.to_string()
    } else {
        let cut = input
            .char_indices()
            .take_while(|(i, _)| *i < MAX_LEN)
            .last()
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        format!("{}...", &input[..cut])
    }
}
