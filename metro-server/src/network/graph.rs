//! The composed metro graph and its builder.

use tracing::debug;

use crate::domain::{Fare, Line, NetworkError, StationId};

use super::{AdjacencyStore, LineRegistry, StationRegistry};

/// A complete metro network: stations, edges and lines.
///
/// Every station referenced by an edge or a line is registered in
/// [`stations`](Self::stations). Build one with [`NetworkBuilder`]; once
/// built the graph cannot be modified.
#[derive(Debug, Clone, Default)]
pub struct MetroGraph {
    pub(crate) stations: StationRegistry,
    pub(crate) adjacency: AdjacencyStore,
    pub(crate) lines: LineRegistry,
}

impl MetroGraph {
    /// The station registry.
    pub fn stations(&self) -> &StationRegistry {
        &self.stations
    }

    /// The per-station edge lists.
    pub fn adjacency(&self) -> &AdjacencyStore {
        &self.adjacency
    }

    /// The line registry.
    pub fn lines(&self) -> &LineRegistry {
        &self.lines
    }

    /// Resolve a station name supplied by a caller.
    pub fn station(&self, name: &str) -> Result<StationId, NetworkError> {
        self.stations.require(name)
    }

    /// Display name of a station in this graph.
    pub fn station_name(&self, id: StationId) -> &str {
        self.stations.name(id)
    }
}

/// Builder for assembling a [`MetroGraph`].
///
/// Stations are registered the first time any connection or line mentions
/// them, so identities follow first-seen order across both.
///
/// # Example
///
/// ```
/// use metro_server::network::NetworkBuilder;
///
/// let graph = NetworkBuilder::new()
///     .connect("A", "B", 10)
///     .connect("B", "C", 15)
///     .line("L1", ["A", "B", "C"])
///     .build();
///
/// assert_eq!(graph.stations().len(), 3);
/// assert_eq!(graph.lines().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    inner: MetroGraph,
}

impl NetworkBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Connect two stations in both directions with the same fare.
    pub fn connect(mut self, from: &str, to: &str, fare: Fare) -> Self {
        let from_id = self.inner.stations.resolve(from);
        let to_id = self.inner.stations.resolve(to);
        self.inner.adjacency.add_edge(from_id, to_id, fare);
        self.inner.adjacency.add_edge(to_id, from_id, fare);
        self
    }

    /// Add a single directed edge.
    pub fn connect_directed(mut self, from: &str, to: &str, fare: Fare) -> Self {
        let from_id = self.inner.stations.resolve(from);
        let to_id = self.inner.stations.resolve(to);
        self.inner.adjacency.add_edge(from_id, to_id, fare);
        self
    }

    /// Add a line with its stops in travel order.
    pub fn line<I, S>(mut self, name: &str, stops: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stops = stops
            .into_iter()
            .map(|stop| self.inner.stations.resolve(stop.as_ref()))
            .collect();
        self.inner.lines.add_line(Line::new(name, stops));
        self
    }

    /// Returns true if a line with this name has already been added.
    pub fn has_line(&self, name: &str) -> bool {
        self.inner.lines.contains(name)
    }

    /// Finish building.
    pub fn build(mut self) -> MetroGraph {
        let count = self.inner.stations.len();
        self.inner.adjacency.ensure_station(count);

        debug!(
            stations = count,
            edges = self.inner.adjacency.edge_count(),
            lines = self.inner.lines.len(),
            "Metro network built"
        );

        self.inner
    }
}
