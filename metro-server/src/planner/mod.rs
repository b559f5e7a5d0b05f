//! Route planner queries over the metro graph.
//!
//! Every query takes station names as a caller would type them, resolves
//! them against the registry, and reports unknown names as
//! [`NetworkError::StationNotFound`](crate::domain::NetworkError::StationNotFound)
//! before doing any work. Queries never modify the graph.
//!
//! Two traversals do the heavy lifting:
//!
//! - depth-first search with backtracking enumerates every simple route
//!   between two stations ([`MetroGraph::find_all_routes`])
//! - breadth-first search finds the closest intersection by hop count
//!   ([`MetroGraph::nearest_intersection`])
//!
//! [`MetroGraph::find_all_routes`]: crate::network::MetroGraph::find_all_routes
//! [`MetroGraph::nearest_intersection`]: crate::network::MetroGraph::nearest_intersection

mod details;
mod intersections;
mod nearest;
mod routes;

pub use details::{Connection, StationDetails};
pub use intersections::{Intersection, Terminals};
pub use nearest::NearestIntersection;
pub use routes::Route;

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::network::{MetroGraph, NetworkBuilder};

    /// Three stations in a triangle, one line through all of them and a
    /// second line that only serves `C`.
    pub fn triangle() -> MetroGraph {
        NetworkBuilder::new()
            .connect("A", "B", 10)
            .connect("B", "C", 15)
            .connect("A", "C", 50)
            .line("L1", ["A", "B", "C"])
            .line("L2", ["C"])
            .build()
    }
}
