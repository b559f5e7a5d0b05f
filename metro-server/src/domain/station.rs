//! Station identity type.

use std::fmt;

/// Stable integer handle for a station.
///
/// Handles are dense: the first station seen gets index 0, the next index 1,
/// and so on. A `StationId` is only meaningful for the graph that issued it.
///
/// # Examples
///
/// ```
/// use metro_server::network::NetworkBuilder;
///
/// let graph = NetworkBuilder::new()
///     .connect("Central", "Harbour", 10)
///     .build();
///
/// let central = graph.stations().find("Central").unwrap();
/// assert_eq!(central.index(), 0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(usize);

impl StationId {
    pub(crate) fn new(index: usize) -> Self {
        StationId(index)
    }

    /// Returns the position of this station in registry order.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
