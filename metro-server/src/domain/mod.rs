//! Domain types for the metro network.
//!
//! Stations are identified by dense integer handles assigned on first sight,
//! lines are ordered runs of those handles, and every failed lookup is
//! reported through [`NetworkError`].

mod error;
mod line;
mod station;

pub use error::NetworkError;
pub use line::Line;
pub use station::StationId;

/// Fare charged for travelling a single edge.
pub type Fare = u32;

/// Sum of edge fares along a route.
///
/// Wider than [`Fare`] so long routes cannot overflow.
pub type TotalFare = u64;
