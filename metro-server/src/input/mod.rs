//! Construction input for the metro network.
//!
//! Two formats are accepted:
//!
//! - the token stream read at startup: edge count, `source destination fare`
//!   triples, line count, then for each line its name, station count and
//!   stations in stop order, all separated by whitespace
//! - a JSON description with `edges` and `lines` arrays
//!
//! The graph itself assumes well-formed input, so all validation of counts,
//! numbers and duplicate line names happens here.

mod error;
mod json;
mod text;
mod tokens;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::info;

use crate::network::MetroGraph;

pub use error::InputError;
pub use json::{EdgeRecord, LineRecord, NetworkFile};
pub use text::{parse_network, read_network};
pub use tokens::TokenReader;

/// Load a network from disk.
///
/// Files ending in `.json` are read as [`NetworkFile`]; anything else is
/// read as the whitespace token format.
pub fn load_network(path: &Path) -> Result<MetroGraph, InputError> {
    let graph = if path.extension().is_some_and(|ext| ext == "json") {
        let contents = std::fs::read_to_string(path)?;
        NetworkFile::from_json(&contents)?.into_graph()?
    } else {
        let file = File::open(path)?;
        read_network(&mut TokenReader::new(BufReader::new(file)))?
    };

    info!(
        path = %path.display(),
        stations = graph.stations().len(),
        lines = graph.lines().len(),
        "Loaded metro network"
    );

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_text_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("network.txt");
        std::fs::write(&path, "2\nA B 10\nB C 15\n1\nL1 3 A B C\n").unwrap();

        let graph = load_network(&path).unwrap();
        assert_eq!(graph.stations().len(), 3);
        assert_eq!(graph.lines().len(), 1);
    }

    #[test]
    fn load_json_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("network.json");
        std::fs::write(
            &path,
            r#"{
                "edges": [{ "from": "A", "to": "B", "fare": 10 }],
                "lines": [{ "name": "L1", "stations": ["A", "B"] }]
            }"#,
        )
        .unwrap();

        let graph = load_network(&path).unwrap();
        assert_eq!(graph.stations().len(), 2);
        assert_eq!(graph.find_terminals().len(), 1);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let result = load_network(&dir.path().join("absent.txt"));
        assert!(matches!(result, Err(InputError::Io(_))));
    }
}
