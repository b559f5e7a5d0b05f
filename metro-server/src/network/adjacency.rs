//! Per-station edge lists.
//!
//! Each station owns an ordered list of outgoing edges. The order is the
//! order edges were added, and it is the order traversals visit neighbours
//! in, so query results are reproducible.

use crate::domain::{Fare, StationId};

/// A directed edge to a neighbouring station.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Destination station
    pub to: StationId,
    /// Fare for travelling this edge
    pub fare: Fare,
}

/// Outgoing edges for every station, indexed by source.
///
/// Nothing here forces the two directions of a connection to agree on
/// fare; [`NetworkBuilder::connect`](super::NetworkBuilder::connect) adds
/// matching pairs, while a directed edge can be added on its own.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyStore {
    edges: Vec<Vec<Edge>>,
}

impl AdjacencyStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a directed edge from `from` to `to`.
    pub fn add_edge(&mut self, from: StationId, to: StationId, fare: Fare) {
        self.ensure_station(from.index().max(to.index()) + 1);
        self.edges[from.index()].push(Edge { to, fare });
    }

    /// Make sure stations `0..count` all have a (possibly empty) edge list.
    pub fn ensure_station(&mut self, count: usize) {
        if self.edges.len() < count {
            self.edges.resize_with(count, Vec::new);
        }
    }

    /// Outgoing edges of `station`, in insertion order.
    ///
    /// Stations without edges yield an empty slice.
    pub fn neighbors(&self, station: StationId) -> &[Edge] {
        self.edges
            .get(station.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Fare of the first edge from `from` to `to`, if there is one.
    pub fn fare(&self, from: StationId, to: StationId) -> Option<Fare> {
        self.neighbors(from)
            .iter()
            .find(|edge| edge.to == to)
            .map(|edge| edge.fare)
    }

    /// Returns the total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }
}
