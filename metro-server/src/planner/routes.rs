//! Exhaustive route enumeration.
//!
//! Lists every simple route (no station visited twice) between two
//! stations with its summed fare. Fares are added up, not minimised.

use tracing::{debug, trace};

use crate::domain::{NetworkError, StationId, TotalFare};
use crate::network::MetroGraph;

/// A simple route between two stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Station names from origin to destination, inclusive
    pub stations: Vec<String>,
    /// Sum of the fares of every edge travelled
    pub total_fare: TotalFare,
}

impl Route {
    /// Number of edges travelled.
    pub fn hops(&self) -> usize {
        self.stations.len().saturating_sub(1)
    }
}

impl MetroGraph {
    /// Enumerate every simple route from `from` to `to`.
    ///
    /// Routes come out depth-first, following each station's neighbours in
    /// edge insertion order. When `from == to` the only route is the
    /// single-station route with zero fare.
    pub fn find_all_routes(&self, from: &str, to: &str) -> Result<Vec<Route>, NetworkError> {
        let source = self.station(from)?;
        let target = self.station(to)?;

        let mut search = RouteSearch {
            graph: self,
            target,
            visited: vec![false; self.stations.len()],
            path: Vec::new(),
            routes: Vec::new(),
        };
        search.visit(source, 0);

        debug!(from, to, routes = search.routes.len(), "Route enumeration complete");

        Ok(search.routes)
    }
}

/// Backtracking state for one enumeration.
struct RouteSearch<'a> {
    graph: &'a MetroGraph,
    target: StationId,
    visited: Vec<bool>,
    path: Vec<StationId>,
    routes: Vec<Route>,
}

/// A station on the current path: where it is, the next edge to try and
/// the fare paid to reach it.
type Frame = (StationId, usize, TotalFare);

impl RouteSearch<'_> {
    /// Depth-first from `source`, with an explicit frame stack so path
    /// length is bounded by heap, not thread stack.
    fn visit(&mut self, source: StationId, fare: TotalFare) {
        let graph = self.graph;

        if !self.enter(source, fare) {
            return;
        }
        let mut stack: Vec<Frame> = vec![(source, 0, fare)];

        while let Some(frame) = stack.last_mut() {
            let (station, fare) = (frame.0, frame.2);

            let Some(edge) = graph.adjacency.neighbors(station).get(frame.1).copied() else {
                stack.pop();
                self.leave(station);
                continue;
            };
            frame.1 += 1;

            if self.visited[edge.to.index()] {
                continue;
            }

            let next_fare = fare + TotalFare::from(edge.fare);
            if self.enter(edge.to, next_fare) {
                stack.push((edge.to, 0, next_fare));
            }
        }
    }

    /// Put `station` on the path. Returns false if it completed a route,
    /// in which case it has already been taken off again.
    fn enter(&mut self, station: StationId, fare: TotalFare) -> bool {
        self.visited[station.index()] = true;
        self.path.push(station);

        if station == self.target {
            self.emit(fare);
            self.leave(station);
            return false;
        }
        true
    }

    fn leave(&mut self, station: StationId) {
        self.path.pop();
        self.visited[station.index()] = false;
    }

    fn emit(&mut self, total_fare: TotalFare) {
        let stations: Vec<String> = self
            .path
            .iter()
            .map(|id| self.graph.station_name(*id).to_string())
            .collect();

        trace!(route = ?stations, total_fare, "Found route");

        self.routes.push(Route {
            stations,
            total_fare,
        });
    }
}


#[cfg(test)]
mod proptests {
    use std::collections::{BTreeMap, HashSet};

    use super::*;
    use crate::network::NetworkBuilder;
    use proptest::prelude::*;

    /// Undirected edges between up to six stations, one fare per pair.
    fn network() -> impl Strategy<Value = MetroGraph> {
        prop::collection::vec((0..6usize, 0..6usize, 0..100u32), 1..12).prop_map(|raw| {
            let mut pairs = BTreeMap::new();
            for (a, b, fare) in raw {
                if a != b {
                    pairs.entry((a.min(b), a.max(b))).or_insert(fare);
                }
            }
            pairs
                .into_iter()
                .fold(NetworkBuilder::new(), |builder, ((a, b), fare)| {
                    builder.connect(&format!("S{a}"), &format!("S{b}"), fare)
                })
                .build()
        })
    }

    fn pick(graph: &MetroGraph, i: usize) -> Option<String> {
        let n = graph.stations().len();
        if n == 0 {
            return None;
        }
        let (_, name) = graph.stations().iter().nth(i % n)?;
        Some(name.to_string())
    }

    fn edge_fare(graph: &MetroGraph, from: &str, to: &str) -> Option<TotalFare> {
        let from = graph.station(from).ok()?;
        let to = graph.station(to).ok()?;
        graph.adjacency().fare(from, to).map(TotalFare::from)
    }

    proptest! {
        /// A station's only route to itself is the trivial one
        #[test]
        fn self_route_is_trivial(graph in network(), i in 0..6usize) {
            let Some(s) = pick(&graph, i) else { return Ok(()); };
            let routes = graph.find_all_routes(&s, &s).unwrap();
            prop_assert_eq!(routes, vec![Route { stations: vec![s.clone()], total_fare: 0 }]);
        }

        /// Routes are simple and their fare is the sum of the edges travelled
        #[test]
        fn routes_are_simple_and_priced(graph in network(), i in 0..6usize, j in 0..6usize) {
            let (Some(a), Some(b)) = (pick(&graph, i), pick(&graph, j)) else { return Ok(()); };

            for route in graph.find_all_routes(&a, &b).unwrap() {
                let unique: HashSet<_> = route.stations.iter().collect();
                prop_assert_eq!(unique.len(), route.stations.len());
                prop_assert_eq!(route.stations.first(), Some(&a));
                prop_assert_eq!(route.stations.last(), Some(&b));

                let mut sum = 0;
                for pair in route.stations.windows(2) {
                    let fare = edge_fare(&graph, &pair[0], &pair[1]);
                    prop_assert!(fare.is_some());
                    sum += fare.unwrap_or_default();
                }
                prop_assert_eq!(sum, route.total_fare);
            }
        }

        /// With reciprocal equal fares, a->b routes are b->a routes reversed
        #[test]
        fn routes_are_symmetric(graph in network(), i in 0..6usize, j in 0..6usize) {
            let (Some(a), Some(b)) = (pick(&graph, i), pick(&graph, j)) else { return Ok(()); };

            let mut forward: Vec<_> = graph
                .find_all_routes(&a, &b)
                .unwrap()
                .into_iter()
                .map(|mut r| {
                    r.stations.reverse();
                    (r.stations, r.total_fare)
                })
                .collect();
            let mut backward: Vec<_> = graph
                .find_all_routes(&b, &a)
                .unwrap()
                .into_iter()
                .map(|r| (r.stations, r.total_fare))
                .collect();

            forward.sort();
            backward.sort();
            prop_assert_eq!(forward, backward);
        }
    }
}
