//! Profit accounting: the aggregate total, per-cell emptied counts, and
//! per-robot move-profit history.
//!
//! History entries are appended, never rewritten. They are keyed by the
//! robot's permanent id, so removing a robot from the road leaves its
//! recorded profits available for audit. Only `clear_history` (part of a
//! full reboot) discards them.

use crate::id::{Location, RobotId, Tenges};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The session's books.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    /// Cumulative profit. Signed: movement costs can push it negative.
    total: Tenges,
    /// Successful collections per cell since the last resupply.
    emptied: BTreeMap<Location, u32>,
    /// Profit recorded for each optimizer move, per robot.
    history: BTreeMap<RobotId, Vec<Tenges>>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cumulative profit so far.
    pub fn total(&self) -> Tenges {
        self.total
    }

    /// Charge a movement cost.
    pub fn debit(&mut self, amount: Tenges) {
        self.total -= amount;
    }

    /// Credit a collected reward.
    pub fn credit(&mut self, amount: Tenges) {
        self.total += amount;
    }

    /// Count one successful collection at a cell.
    pub fn record_emptied(&mut self, location: Location) {
        *self.emptied.entry(location).or_insert(0) += 1;
    }

    /// Emptied counts per cell, ordered by cell.
    pub fn emptied(&self) -> &BTreeMap<Location, u32> {
        &self.emptied
    }

    /// Forget emptied counts. Called on resupply: counts measure
    /// collections since the stores were last stocked.
    pub fn clear_emptied(&mut self) {
        self.emptied.clear();
    }

    /// Append one optimizer-move profit to a robot's history.
    pub fn record_move_profit(&mut self, robot: RobotId, profit: Tenges) {
        self.history.entry(robot).or_default().push(profit);
    }

    /// The recorded move profits for a robot, oldest first.
    pub fn history(&self, robot: RobotId) -> &[Tenges] {
        self.history.get(&robot).map_or(&[], Vec::as_slice)
    }

    /// Sum of all recorded move profits for a robot.
    pub fn total_for(&self, robot: RobotId) -> Tenges {
        self.history(robot).iter().sum()
    }

    /// Discard all per-robot histories. Reboot only.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

// ===========================================================================
// Tests
// ===========================================================================
