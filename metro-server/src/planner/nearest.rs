//! Nearest intersection search.
//!
//! Breadth-first over the edge lists, ignoring fares: distance is the
//! number of edges travelled. The start station itself is checked first,
//! so an intersection is its own nearest at distance 0.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::domain::NetworkError;
use crate::network::MetroGraph;

/// The closest station served by more than one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NearestIntersection {
    /// Intersection station name
    pub station: String,
    /// Hops from the start station
    pub distance: usize,
}

impl MetroGraph {
    /// Find the intersection with the fewest hops from `from`.
    ///
    /// Among intersections at the same distance the one discovered first
    /// wins, where discovery follows each station's neighbours in edge
    /// insertion order.
    pub fn nearest_intersection(&self, from: &str) -> Result<NearestIntersection, NetworkError> {
        let source = self.station(from)?;

        let mut visited = vec![false; self.stations.len()];
        visited[source.index()] = true;

        let mut queue = VecDeque::from([(source, 0usize)]);

        while let Some((station, distance)) = queue.pop_front() {
            trace!(station = self.station_name(station), distance, "BFS visiting station");

            if self.lines.is_intersection(station) {
                debug!(
                    from,
                    nearest = self.station_name(station),
                    distance,
                    "Nearest intersection found"
                );
                return Ok(NearestIntersection {
                    station: self.station_name(station).to_string(),
                    distance,
                });
            }

            for edge in self.adjacency.neighbors(station) {
                if !visited[edge.to.index()] {
                    visited[edge.to.index()] = true;
                    queue.push_back((edge.to, distance + 1));
                }
            }
        }

        debug!(from, "No intersection reachable");

        Err(NetworkError::NoIntersectionReachable(from.to_string()))
    }
}
