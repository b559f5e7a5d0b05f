//! JSON network description.

use serde::{Deserialize, Serialize};

use crate::domain::Fare;
use crate::network::{MetroGraph, NetworkBuilder};

use super::InputError;

/// One bidirectional connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    pub fare: Fare,
}

/// One line with its stations in stop order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineRecord {
    pub name: String,
    #[serde(default)]
    pub stations: Vec<String>,
}

/// A whole network as JSON: edges first, then lines.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkFile {
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
    #[serde(default)]
    pub lines: Vec<LineRecord>,
}

impl NetworkFile {
    /// Parse a network description.
    pub fn from_json(json: &str) -> Result<Self, InputError> {
        serde_json::from_str(json).map_err(|e| InputError::Json {
            message: e.to_string(),
        })
    }

    /// Build the graph, registering stations in the order they appear.
    pub fn into_graph(self) -> Result<MetroGraph, InputError> {
        let mut builder = NetworkBuilder::new();

        for edge in &self.edges {
            builder = builder.connect(&edge.from, &edge.to, edge.fare);
        }

        for line in self.lines {
            if builder.has_line(&line.name) {
                return Err(InputError::DuplicateLine(line.name));
            }
            builder = builder.line(&line.name, line.stations);
        }

        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_build() {
        let file = NetworkFile::from_json(
            r#"{
                "edges": [
                    { "from": "A", "to": "B", "fare": 10 },
                    { "from": "B", "to": "C", "fare": 15 }
                ],
                "lines": [
                    { "name": "L1", "stations": ["A", "B", "C"] },
                    { "name": "L2", "stations": ["C"] }
                ]
            }"#,
        )
        .unwrap();

        let graph = file.into_graph().unwrap();
        assert_eq!(graph.stations().len(), 3);
        assert_eq!(graph.find_intersections().len(), 1);
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let graph = NetworkFile::from_json("{}").unwrap().into_graph().unwrap();
        assert!(graph.stations().is_empty());
    }

    #[test]
    fn negative_fare_rejected() {
        let result = NetworkFile::from_json(r#"{ "edges": [{ "from": "A", "to": "B", "fare": -1 }] }"#);
        assert!(matches!(result, Err(InputError::Json { .. })));
    }

    #[test]
    fn duplicate_line_rejected() {
        let file = NetworkFile {
            edges: Vec::new(),
            lines: vec![
                LineRecord {
                    name: "Red".into(),
                    stations: vec!["A".into()],
                },
                LineRecord {
                    name: "Red".into(),
                    stations: vec!["B".into()],
                },
            ],
        };
        assert!(matches!(file.into_graph(), Err(InputError::DuplicateLine(_))));
    }
}
