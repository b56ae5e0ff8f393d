//! Position-keyed occupancy index for the road.
//!
//! Every placement and every move destination is checked here before any
//! entity state changes. Cells track robots and stores in separate slots:
//! placement requires a fully free cell, while a moving robot may land on
//! a store cell (the store is its collection target). At most one robot
//! and at most one store ever occupy a cell.
//!
//! The index holds non-owning back-references only; the session's entity
//! collections own the records.

use crate::id::{Location, RobotId, StoreId};
use serde::{Deserialize, Serialize};

/// What kind of entity occupies a cell. When a robot stands on a store
/// cell after a collection, the robot is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OccupantKind {
    None,
    Robot,
    Store,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
struct Cell {
    robot: Option<RobotId>,
    store: Option<StoreId>,
}

/// The road: a fixed-length strip of cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Road {
    cells: Vec<Cell>,
}

impl Road {
    /// Create an empty road with `length` cells.
    pub fn new(length: usize) -> Self {
        Self {
            cells: vec![Cell::default(); length],
        }
    }

    /// Number of cells.
    pub fn length(&self) -> usize {
        self.cells.len()
    }

    /// Whether the cell holds neither a robot nor a store.
    pub fn is_free(&self, location: Location) -> bool {
        let cell = self.cells[location];
        cell.robot.is_none() && cell.store.is_none()
    }

    /// The robot standing on this cell, if any.
    pub fn robot_at(&self, location: Location) -> Option<RobotId> {
        self.cells[location].robot
    }

    /// The store built on this cell, if any.
    pub fn store_at(&self, location: Location) -> Option<StoreId> {
        self.cells[location].store
    }

    /// The kind of occupant visible on this cell.
    pub fn occupant_kind(&self, location: Location) -> OccupantKind {
        let cell = self.cells[location];
        if cell.robot.is_some() {
            OccupantKind::Robot
        } else if cell.store.is_some() {
            OccupantKind::Store
        } else {
            OccupantKind::None
        }
    }

    /// Record a robot on a cell. The cell must not already hold a robot.
    pub fn place_robot(&mut self, location: Location, robot: RobotId) {
        debug_assert!(self.cells[location].robot.is_none());
        self.cells[location].robot = Some(robot);
    }

    /// Record a store on a cell. The cell must not already hold a store.
    pub fn place_store(&mut self, location: Location, store: StoreId) {
        debug_assert!(self.cells[location].store.is_none());
        self.cells[location].store = Some(store);
    }

    /// Remove the robot reference from a cell.
    pub fn clear_robot(&mut self, location: Location) {
        self.cells[location].robot = None;
    }

    /// Remove the store reference from a cell.
    pub fn clear_store(&mut self, location: Location) {
        self.cells[location].store = None;
    }

    /// Move a robot reference between cells. The old cell becomes free for
    /// robots in the same call; no intermediate state is observable.
    pub fn move_robot(&mut self, from: Location, to: Location) {
        debug_assert!(self.cells[to].robot.is_none());
        let robot = self.cells[from].robot.take();
        self.cells[to].robot = robot;
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    fn robot_id() -> RobotId {
        let mut sm = SlotMap::<RobotId, ()>::with_key();
        sm.insert(())
    }

    fn store_id() -> StoreId {
        let mut sm = SlotMap::<StoreId, ()>::with_key();
        sm.insert(())
    }

    // -----------------------------------------------------------------------
    // Test 1: new road is entirely free
    // -----------------------------------------------------------------------
    #[test]
    fn new_road_is_free() {
        let road = Road::new(10);
        assert_eq!(road.length(), 10);
        for loc in 0..10 {
            assert!(road.is_free(loc));
            assert_eq!(road.occupant_kind(loc), OccupantKind::None);
        }
    }

    // -----------------------------------------------------------------------
    // Test 2: placement occupies exactly one cell
    // -----------------------------------------------------------------------
    #[test]
    fn placement_occupies_cell() {
        let mut road = Road::new(10);
        let robot = robot_id();
        road.place_robot(3, robot);

        assert!(!road.is_free(3));
        assert_eq!(road.robot_at(3), Some(robot));
        assert_eq!(road.occupant_kind(3), OccupantKind::Robot);
        assert!(road.is_free(2));
        assert!(road.is_free(4));
    }

    // -----------------------------------------------------------------------
    // Test 3: robot and store can share a cell after a move
    // -----------------------------------------------------------------------
    #[test]
    fn robot_can_stand_on_store_cell() {
        let mut road = Road::new(10);
        let robot = robot_id();
        let store = store_id();
        road.place_store(5, store);
        road.place_robot(1, robot);

        road.move_robot(1, 5);

        assert_eq!(road.robot_at(5), Some(robot));
        assert_eq!(road.store_at(5), Some(store));
        // The mobile entity is reported on top.
        assert_eq!(road.occupant_kind(5), OccupantKind::Robot);
        assert!(road.is_free(1));
    }

    // -----------------------------------------------------------------------
    // Test 4: move vacates the old cell atomically
    // -----------------------------------------------------------------------
    #[test]
    fn move_vacates_old_cell() {
        let mut road = Road::new(10);
        let robot = robot_id();
        road.place_robot(2, robot);
        road.move_robot(2, 7);

        assert_eq!(road.robot_at(2), None);
        assert_eq!(road.robot_at(7), Some(robot));
    }

    // -----------------------------------------------------------------------
    // Test 5: clearing restores a free cell
    // -----------------------------------------------------------------------
    #[test]
    fn clear_restores_free_cell() {
        let mut road = Road::new(10);
        road.place_store(4, store_id());
        assert_eq!(road.occupant_kind(4), OccupantKind::Store);

        road.clear_store(4);
        assert!(road.is_free(4));
    }
}
