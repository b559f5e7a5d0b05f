//! Station detail lookup.

use tracing::debug;

use crate::domain::{Fare, Line, NetworkError};
use crate::network::MetroGraph;

/// A direct connection out of a station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    /// Neighbouring station name
    pub station: String,
    /// Fare to reach it
    pub fare: Fare,
}

/// Lines and direct connections of one station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationDetails {
    /// Station name
    pub name: String,
    /// Lines calling here, in line registry order (may be empty)
    pub lines: Vec<String>,
    /// Direct connections, in edge insertion order
    pub connections: Vec<Connection>,
}

impl MetroGraph {
    /// Lines serving a station and its direct connections.
    pub fn station_details(&self, name: &str) -> Result<StationDetails, NetworkError> {
        let station = self.station(name)?;

        let lines: Vec<String> = self
            .lines
            .lines_containing(station)
            .map(Line::name)
            .map(str::to_string)
            .collect();

        let connections: Vec<Connection> = self
            .adjacency
            .neighbors(station)
            .iter()
            .map(|edge| Connection {
                station: self.station_name(edge.to).to_string(),
                fare: edge.fare,
            })
            .collect();

        debug!(
            station = name,
            lines = lines.len(),
            connections = connections.len(),
            "Station details"
        );

        Ok(StationDetails {
            name: self.station_name(station).to_string(),
            lines,
            connections,
        })
    }
}
