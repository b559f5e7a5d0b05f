//! Metro line type.

use super::StationId;

/// A named line: its stations in stop order.
///
/// The first and last entries are the line's terminals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    name: String,
    stops: Vec<StationId>,
}

impl Line {
    /// Creates a line from its name and stops in travel order.
    pub fn new(name: impl Into<String>, stops: Vec<StationId>) -> Self {
        Self {
            name: name.into(),
            stops,
        }
    }

    /// Returns the line's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the stops in travel order.
    pub fn stops(&self) -> &[StationId] {
        &self.stops
    }

    /// Returns true if the line has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Returns true if the line calls at `station`.
    pub fn serves(&self, station: StationId) -> bool {
        self.stops.contains(&station)
    }

    /// Returns the (first, last) stops, or `None` for an empty line.
    pub fn terminals(&self) -> Option<(StationId, StationId)> {
        Some((*self.stops.first()?, *self.stops.last()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(i: usize) -> StationId {
        StationId::new(i)
    }

    #[test]
    fn terminals_are_first_and_last() {
        let line = Line::new("Red", vec![id(0), id(1), id(2)]);
        assert_eq!(line.terminals(), Some((id(0), id(2))));
    }

    #[test]
    fn single_stop_line_terminates_at_itself() {
        let line = Line::new("Shuttle", vec![id(4)]);
        assert_eq!(line.terminals(), Some((id(4), id(4))));
    }

    #[test]
    fn empty_line_has_no_terminals() {
        let line = Line::new("Ghost", Vec::new());
        assert!(line.is_empty());
        assert_eq!(line.terminals(), None);
    }

    #[test]
    fn serves() {
        let line = Line::new("Red", vec![id(0), id(2)]);
        assert!(line.serves(id(2)));
        assert!(!line.serves(id(1)));
        assert_eq!(line.name(), "Red");
        assert_eq!(line.stops(), &[id(0), id(2)]);
    }
}
