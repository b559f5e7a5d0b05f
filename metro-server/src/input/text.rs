//! Token-format network parser.

use std::io::{BufRead, Cursor};

use tracing::debug;

use crate::domain::Fare;
use crate::network::{MetroGraph, NetworkBuilder};

use super::{InputError, TokenReader};

/// Read a network from a token stream, leaving any later tokens unread.
pub fn read_network<R: BufRead>(tokens: &mut TokenReader<R>) -> Result<MetroGraph, InputError> {
    let mut builder = NetworkBuilder::new();

    let edge_count: usize = tokens.expect_number("edge count")?;
    for _ in 0..edge_count {
        let from = tokens.expect_token("edge source")?;
        let to = tokens.expect_token("edge destination")?;
        let fare: Fare = tokens.expect_number("fare")?;
        builder = builder.connect(&from, &to, fare);
    }

    let line_count: usize = tokens.expect_number("line count")?;
    for _ in 0..line_count {
        let name = tokens.expect_token("line name")?;
        if builder.has_line(&name) {
            return Err(InputError::DuplicateLine(name));
        }

        let stop_count: usize = tokens.expect_number("station count")?;
        let mut stops = Vec::new();
        for _ in 0..stop_count {
            stops.push(tokens.expect_token("line station")?);
        }

        debug!(line = %name, stops = stops.len(), "Read line");
        builder = builder.line(&name, stops);
    }

    Ok(builder.build())
}

/// Parse a complete network from a string.
pub fn parse_network(input: &str) -> Result<MetroGraph, InputError> {
    read_network(&mut TokenReader::new(Cursor::new(input)))
}
