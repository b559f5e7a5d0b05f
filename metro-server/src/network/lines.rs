//! Named line registry.

use crate::domain::{Line, NetworkError, StationId};

/// All lines of the network, in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct LineRegistry {
    lines: Vec<Line>,
}

impl LineRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a line.
    ///
    /// Line names are expected to be unique; the input parser rejects
    /// duplicates before they get here.
    pub fn add_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Look up a line by name.
    pub fn get(&self, name: &str) -> Option<&Line> {
        self.lines.iter().find(|line| line.name() == name)
    }

    /// Returns true if a line called `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Lines that call at `station`, in registry order.
    ///
    /// A line listing the same station twice is still counted once.
    pub fn lines_containing(&self, station: StationId) -> impl Iterator<Item = &Line> + '_ {
        self.lines.iter().filter(move |line| line.serves(station))
    }

    /// Number of distinct lines calling at `station`.
    pub fn membership_count(&self, station: StationId) -> usize {
        self.lines_containing(station).count()
    }

    /// Returns true if more than one line calls at `station`.
    pub fn is_intersection(&self, station: StationId) -> bool {
        self.lines_containing(station).nth(1).is_some()
    }

    /// The (first, last) stops of the named line.
    pub fn terminals_of(&self, name: &str) -> Result<(StationId, StationId), NetworkError> {
        let line = self
            .get(name)
            .ok_or_else(|| NetworkError::LineNotFound(name.to_string()))?;
        line.terminals()
            .ok_or_else(|| NetworkError::EmptyLine(name.to_string()))
    }

    /// Iterate over all lines in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &Line> + '_ {
        self.lines.iter()
    }

    /// Returns the number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if there are no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
