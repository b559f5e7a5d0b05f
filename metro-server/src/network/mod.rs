//! In-memory metro network.
//!
//! The network is three stores composed into one [`MetroGraph`]:
//!
//! - [`StationRegistry`]: station names and their dense identities
//! - [`AdjacencyStore`]: per-station edge lists with fares
//! - [`LineRegistry`]: named lines in stop order
//!
//! A graph is assembled once with [`NetworkBuilder`] and is read-only
//! afterwards; the query operations live in [`crate::planner`].

mod adjacency;
mod graph;
mod lines;
mod registry;

pub use adjacency::{AdjacencyStore, Edge};
pub use graph::{MetroGraph, NetworkBuilder};
pub use lines::LineRegistry;
pub use registry::StationRegistry;
