//! Query error types.
//!
//! Every query over the network is read-only, so all of these are
//! recoverable: the caller reports them and carries on.

/// Errors reported by network queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// A supplied station name is not in the registry
    #[error("station {0} not found in the network")]
    StationNotFound(String),

    /// A supplied line name is not in the registry
    #[error("line {0} not found in the network")]
    LineNotFound(String),

    /// Terminal lookup on a line with no stations
    #[error("line {0} has no stations")]
    EmptyLine(String),

    /// Breadth-first search ran out of stations without meeting an intersection
    #[error("no intersection station found reachable from {0}")]
    NoIntersectionReachable(String),
}

impl NetworkError {
    /// Convenience constructor for [`NetworkError::StationNotFound`].
    pub fn station_not_found(name: &str) -> Self {
        NetworkError::StationNotFound(name.to_string())
    }
}
