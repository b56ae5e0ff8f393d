//! Store entity record.

use crate::id::{Location, Tenges};
use serde::{Deserialize, Serialize};

/// A stationary reward source. Holds a capped, depletable amount of
/// tenges. Invariant: `0 <= tenges <= initial_tenges`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    /// Cell the store occupies. Stores never move.
    pub location: Location,
    /// Stock the store was created with; `resupply` restores to this.
    pub initial_tenges: Tenges,
    /// Current stock. Zero after a successful collection.
    pub tenges: Tenges,
}

impl Store {
    /// Create a fully stocked store.
    pub fn new(location: Location, tenges: Tenges) -> Self {
        Self {
            location,
            initial_tenges: tenges,
            tenges,
        }
    }

    /// Drop the stock to zero after a collection.
    pub fn empty(&mut self) {
        self.tenges = 0;
    }

    /// Restore the stock to its initial amount.
    pub fn resupply(&mut self) {
        self.tenges = self.initial_tenges;
    }

    /// Whether the store has anything left to collect.
    pub fn is_stocked(&self) -> bool {
        self.tenges > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_store_is_fully_stocked() {
        let store = Store::new(4, 25);
        assert_eq!(store.tenges, 25);
        assert_eq!(store.initial_tenges, 25);
        assert!(store.is_stocked());
    }

    #[test]
    fn empty_then_resupply_restores_initial_stock() {
        let mut store = Store::new(4, 25);
        store.empty();
        assert_eq!(store.tenges, 0);
        assert!(!store.is_stocked());

        store.resupply();
        assert_eq!(store.tenges, 25);
    }

    #[test]
    fn resupply_is_idempotent() {
        let mut store = Store::new(4, 25);
        store.resupply();
        store.resupply();
        assert_eq!(store.tenges, 25);
    }
}
