//! Station name registry.

use std::collections::HashMap;

use crate::domain::{NetworkError, StationId};

/// Unique station names with their dense identities.
///
/// Names are case-sensitive. Identities are handed out in first-seen order
/// starting at zero and never change.
#[derive(Debug, Clone, Default)]
pub struct StationRegistry {
    /// Names indexed by `StationId`.
    names: Vec<String>,

    /// Reverse lookup from name to identity.
    ids: HashMap<String, StationId>,
}

impl StationRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the identity for `name`, assigning the next one if it is new.
    ///
    /// Resolving the same name twice yields the same identity.
    pub fn resolve(&mut self, name: &str) -> StationId {
        if let Some(id) = self.ids.get(name) {
            return *id;
        }

        let id = StationId::new(self.names.len());
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        id
    }

    /// Look up an existing station. Never allocates an identity.
    pub fn find(&self, name: &str) -> Option<StationId> {
        self.ids.get(name).copied()
    }

    /// Like [`find`](Self::find), but reports a missing name as an error.
    pub fn require(&self, name: &str) -> Result<StationId, NetworkError> {
        self.find(name)
            .ok_or_else(|| NetworkError::station_not_found(name))
    }

    /// Returns the display name of a station.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this registry.
    pub fn name(&self, id: StationId) -> &str {
        &self.names[id.index()]
    }

    /// Iterate over all stations in identity order.
    pub fn iter(&self) -> impl Iterator<Item = (StationId, &str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (StationId::new(i), name.as_str()))
    }

    /// Returns the number of registered stations.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no station has been registered.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
