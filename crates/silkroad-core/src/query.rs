//! Read-only snapshot queries. Never mutate state, always callable
//! (finished sessions included), and always sorted by ascending position.

use crate::id::Tenges;
use crate::session::Session;
use serde::{Deserialize, Serialize};

/// One store: 1-based position and current stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub position: i32,
    pub tenges: Tenges,
}

/// One robot: 1-based position and total profit collected across its
/// recorded optimizer moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotSnapshot {
    pub position: i32,
    pub collected: Tenges,
}

/// How many times the store cell at `position` yielded a successful
/// collection since the last resupply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptiedStoreSnapshot {
    pub position: i32,
    pub times_emptied: u32,
}

/// Per-robot move profits, oldest first, keyed by the robot's current
/// position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveProfitSnapshot {
    pub position: i32,
    pub profits: Vec<Tenges>,
}

impl Session {
    /// All stores, ordered by position.
    pub fn stores(&self) -> Vec<StoreSnapshot> {
        let mut out: Vec<StoreSnapshot> = self
            .stores
            .values()
            .map(|store| StoreSnapshot {
                position: Self::human(store.location),
                tenges: store.tenges,
            })
            .collect();
        out.sort_by_key(|s| s.position);
        out
    }

    /// All robots, ordered by position.
    pub fn robots(&self) -> Vec<RobotSnapshot> {
        let mut out: Vec<RobotSnapshot> = self
            .robot_order
            .iter()
            .filter_map(|&id| {
                self.robots.get(id).map(|robot| RobotSnapshot {
                    position: Self::human(robot.location),
                    collected: self.ledger.total_for(id),
                })
            })
            .collect();
        out.sort_by_key(|r| r.position);
        out
    }

    /// Cells that yielded collections since the last resupply, ordered by
    /// position. Counts survive removal of the store itself.
    pub fn emptied_stores(&self) -> Vec<EmptiedStoreSnapshot> {
        self.ledger
            .emptied()
            .iter()
            .map(|(&location, &times_emptied)| EmptiedStoreSnapshot {
                position: Self::human(location),
                times_emptied,
            })
            .collect()
    }

    /// Recorded optimizer-move profits for every live robot, ordered by
    /// the robot's current position. Robots that never moved have an
    /// empty row.
    pub fn profit_per_move(&self) -> Vec<MoveProfitSnapshot> {
        let mut out: Vec<MoveProfitSnapshot> = self
            .robot_order
            .iter()
            .filter_map(|&id| {
                self.robots.get(id).map(|robot| MoveProfitSnapshot {
                    position: Self::human(robot.location),
                    profits: self.ledger.history(id).to_vec(),
                })
            })
            .collect();
        out.sort_by_key(|r| r.position);
        out
    }
}

// ===========================================================================
// Tests
// ===========================================================================
