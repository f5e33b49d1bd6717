use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::grid::Coord;
use crate::parse_util;
use crate::parse_util::ConvertError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeedLineError {
    #[error("Expected 2 comma separated fields, found {found}")]
    FieldCount { found: usize },

    #[error("Expected a non-negative integer: {0}")]
    InvalidNumber(#[from] ConvertError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeedError {
    #[error("Malformed seed line {line} \"{content}\": {reason}")]
    MalformedSeedLine {
        line: usize,
        content: String,
        reason: SeedLineError,
    },
}

/// Parse a seed: one `x, y` coordinate per line.
///
/// The first malformed line rejects the whole seed.
pub fn parse_seed(input: &str) -> Result<Vec<Coord>, SeedError> {
    let coords = input
        .lines()
        .enumerate()
        .map(|(n, line)| {
            read_coordinate(line.as_bytes()).map_err(|reason| SeedError::MalformedSeedLine {
                line: n + 1,
                content: line.to_string(),
                reason,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(coords = coords.len(), "Parsed seed");

    Ok(coords)
}

impl FromStr for Coord {
    type Err = SeedLineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        read_coordinate(s.as_bytes())
    }
}

fn read_coordinate(bytes: &[u8]) -> Result<Coord, SeedLineError> {
    let found = bytes.iter().filter(|&&b| b == b',').count() + 1;

    let (Some(x), y) = parse_util::take_with(b',', bytes) else {
        return Err(SeedLineError::FieldCount { found });
    };

    if found != 2 {
        return Err(SeedLineError::FieldCount { found });
    }

    let x = parse_util::convert(parse_util::trim_ws(x))?;
    let y = parse_util::convert(parse_util::trim_ws(y))?;

    Ok(Coord { x, y })
}
