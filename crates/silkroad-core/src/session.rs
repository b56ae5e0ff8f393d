//! The simulation session: owns the road, the ledger, and both entity
//! collections, and exposes every mutating operation.
//!
//! # Operation shape
//!
//! All operations take 1-based positions at the boundary and convert to
//! internal 0-based cells exactly once. Every mutating call:
//!
//! 1. Rejects with [`SilkRoadError::SessionFinished`] if `finish()` has
//!    run, before any other validation.
//! 2. Validates its inputs; on failure it returns a typed error, records
//!    `ok() == false`, and changes nothing.
//! 3. Applies its effects synchronously and pushes events describing them.
//!
//! The engine is single-threaded: each operation runs to completion
//! before the next is accepted, so no intermediate occupancy state is
//! ever observable.
//!
//! # Move accounting
//!
//! Moving a robot always debits the distance traveled, win or lose. If
//! the destination holds a stocked store and the net gain
//! (`tenges - distance`) is positive, the net gain is credited and the
//! store is emptied; otherwise the store is left untouched. The cost
//! asymmetry is deliberate.

use crate::error::SilkRoadError;
use crate::event::{Event, EventQueue};
use crate::id::{Location, RobotId, StoreId, Tenges};
use crate::ledger::Ledger;
use crate::optimizer::{self, RoundOutcome};
use crate::road::Road;
use crate::robot::Robot;
use crate::store::Store;
use slotmap::SlotMap;

// ---------------------------------------------------------------------------
// Domain bounds
// ---------------------------------------------------------------------------

/// Shortest road a session accepts.
pub const MIN_LENGTH: i32 = 4;
/// Longest road a session accepts.
pub const MAX_LENGTH: i32 = 100;
/// Smallest initial stock a store accepts.
pub const MIN_TENGES: Tenges = 1;
/// Largest initial stock a store accepts.
pub const MAX_TENGES: Tenges = 100;

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// A simulation session over a road of fixed length.
#[derive(Debug, Clone)]
pub struct Session {
    /// Road length in cells. Valid positions are `1..=length`.
    pub(crate) length: i32,
    /// Occupancy index.
    pub(crate) road: Road,
    /// Robot records, owned here; the road holds back-references only.
    pub(crate) robots: SlotMap<RobotId, Robot>,
    /// Store records.
    pub(crate) stores: SlotMap<StoreId, Store>,
    /// Robots in placement order. The optimizer iterates this, not the
    /// road order.
    pub(crate) robot_order: Vec<RobotId>,
    /// Stores in placement order. Fixes the optimizer's tie-break.
    pub(crate) store_order: Vec<StoreId>,
    /// Profit books.
    pub(crate) ledger: Ledger,
    /// Terminal flag. There is no un-finish transition.
    pub(crate) finished: bool,
    /// Outcome of the most recent mutating call.
    pub(crate) last_ok: bool,
    /// Last advisory estimate pushed to observers, for change detection.
    pub(crate) last_max_estimate: Tenges,
    /// Buffered notifications for the presentation layer.
    pub(crate) events: EventQueue,
}

impl Session {
    /// Create a session over a road of `length` cells.
    pub fn new(length: i32) -> Result<Self, SilkRoadError> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(SilkRoadError::InvalidLength(length));
        }
        Ok(Self {
            length,
            road: Road::new(length as usize),
            robots: SlotMap::with_key(),
            stores: SlotMap::with_key(),
            robot_order: Vec::new(),
            store_order: Vec::new(),
            ledger: Ledger::new(),
            finished: false,
            last_ok: true,
            last_max_estimate: 1,
            events: EventQueue::new(),
        })
    }

    // -----------------------------------------------------------------------
    // Boundary conversion and guards
    // -----------------------------------------------------------------------

    /// Convert a 1-based position to an internal cell index.
    fn index(&self, position: i32) -> Result<Location, SilkRoadError> {
        if position < 1 || position > self.length {
            return Err(SilkRoadError::OutOfRange {
                position,
                length: self.length,
            });
        }
        Ok((position - 1) as Location)
    }

    /// Convert an internal cell index back to a 1-based position.
    pub(crate) fn human(location: Location) -> i32 {
        location as i32 + 1
    }

    fn guard_active(&self) -> Result<(), SilkRoadError> {
        if self.finished {
            Err(SilkRoadError::SessionFinished)
        } else {
            Ok(())
        }
    }

    fn record_outcome<T>(&mut self, result: &Result<T, SilkRoadError>) {
        self.last_ok = result.is_ok();
    }

    /// Recompute the advisory estimate and notify observers on change.
    fn refresh_max_profit(&mut self) {
        let estimate = optimizer::current_max_profit(self);
        if estimate != self.last_max_estimate {
            self.last_max_estimate = estimate;
            self.events.push(Event::MaxProfitChanged { estimate });
        }
    }

    // -----------------------------------------------------------------------
    // Entity placement and removal
    // -----------------------------------------------------------------------

    /// Place a robot on a free cell.
    pub fn place_robot(&mut self, position: i32) -> Result<(), SilkRoadError> {
        let result = self.try_place_robot(position);
        self.record_outcome(&result);
        result
    }

    fn try_place_robot(&mut self, position: i32) -> Result<(), SilkRoadError> {
        self.guard_active()?;
        let location = self.index(position)?;
        if !self.road.is_free(location) {
            return Err(SilkRoadError::PositionOccupied(position));
        }
        let robot = self.robots.insert(Robot::new(location));
        self.robot_order.push(robot);
        self.road.place_robot(location, robot);
        self.events.push(Event::RobotPlaced { robot, position });
        self.refresh_max_profit();
        Ok(())
    }

    /// Remove the robot standing at `position`. Its ledger history stays.
    pub fn remove_robot(&mut self, position: i32) -> Result<(), SilkRoadError> {
        let result = self.try_remove_robot(position);
        self.record_outcome(&result);
        result
    }

    fn try_remove_robot(&mut self, position: i32) -> Result<(), SilkRoadError> {
        self.guard_active()?;
        let location = self.index(position)?;
        let Some(robot) = self.road.robot_at(location) else {
            return Err(SilkRoadError::NotFound(position));
        };
        self.robots.remove(robot);
        self.robot_order.retain(|id| *id != robot);
        self.road.clear_robot(location);
        self.events.push(Event::RobotRemoved { robot, position });
        self.refresh_max_profit();
        Ok(())
    }

    /// Place a fully stocked store on a free cell.
    pub fn place_store(&mut self, position: i32, tenges: Tenges) -> Result<(), SilkRoadError> {
        let result = self.try_place_store(position, tenges);
        self.record_outcome(&result);
        result
    }

    fn try_place_store(&mut self, position: i32, tenges: Tenges) -> Result<(), SilkRoadError> {
        self.guard_active()?;
        let location = self.index(position)?;
        if !(MIN_TENGES..=MAX_TENGES).contains(&tenges) {
            return Err(SilkRoadError::InvalidTenges(tenges));
        }
        if !self.road.is_free(location) {
            return Err(SilkRoadError::PositionOccupied(position));
        }
        let store = self.stores.insert(Store::new(location, tenges));
        self.store_order.push(store);
        self.road.place_store(location, store);
        self.events.push(Event::StorePlaced {
            store,
            position,
            tenges,
        });
        self.refresh_max_profit();
        Ok(())
    }

    /// Remove the store at `position`. Its emptied counts stay on the books.
    pub fn remove_store(&mut self, position: i32) -> Result<(), SilkRoadError> {
        let result = self.try_remove_store(position);
        self.record_outcome(&result);
        result
    }

    fn try_remove_store(&mut self, position: i32) -> Result<(), SilkRoadError> {
        self.guard_active()?;
        let location = self.index(position)?;
        let Some(store) = self.road.store_at(location) else {
            return Err(SilkRoadError::NotFound(position));
        };
        self.stores.remove(store);
        self.store_order.retain(|id| *id != store);
        self.road.clear_store(location);
        self.events.push(Event::StoreRemoved { store, position });
        self.refresh_max_profit();
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Movement
    // -----------------------------------------------------------------------

    /// Move the robot at `position` by `meters` (negative = left).
    ///
    /// A store at the destination does not block; another robot does.
    /// Moving zero meters fails: the robot's own cell counts as occupied.
    pub fn move_robot(&mut self, position: i32, meters: i32) -> Result<(), SilkRoadError> {
        let result = self.try_move_robot(position, meters);
        self.record_outcome(&result);
        result
    }

    pub(crate) fn try_move_robot(&mut self, position: i32, meters: i32) -> Result<(), SilkRoadError> {
        self.guard_active()?;
        let location = self.index(position)?;
        let Some(robot) = self.road.robot_at(location) else {
            return Err(SilkRoadError::NotFound(position));
        };
        let destination = position + meters;
        if destination < 1 || destination > self.length {
            return Err(SilkRoadError::OutOfRange {
                position: destination,
                length: self.length,
            });
        }
        let dest = (destination - 1) as Location;
        if self.road.robot_at(dest).is_some() {
            return Err(SilkRoadError::PositionOccupied(destination));
        }

        // (a) Movement always costs, win or lose.
        let distance = meters.abs();
        self.ledger.debit(distance);

        // (b) Collect only when the net gain is positive; a break-even or
        //     losing visit leaves the store untouched.
        let mut collected = None;
        if let Some(store_id) = self.road.store_at(dest) {
            if let Some(store) = self.stores.get_mut(store_id) {
                if store.is_stocked() {
                    let net = store.tenges - distance;
                    if net > 0 {
                        store.empty();
                        collected = Some((store_id, net));
                    }
                }
            }
        }
        if let Some((store_id, net)) = collected {
            self.ledger.credit(net);
            self.ledger.record_emptied(dest);
            self.events.push(Event::StoreEmptied {
                store: store_id,
                position: destination,
                collected: net,
            });
        }

        // (c) Position update; old cell frees in the same step.
        self.road.move_robot(location, dest);
        if let Some(record) = self.robots.get_mut(robot) {
            record.location = dest;
        }
        self.events.push(Event::RobotMoved {
            robot,
            from: position,
            to: destination,
        });
        self.events.push(Event::ProfitChanged {
            total: self.ledger.total(),
        });
        self.refresh_max_profit();
        Ok(())
    }

    /// Run one greedy optimizer round across all robots.
    pub fn move_robots(&mut self) -> Result<RoundOutcome, SilkRoadError> {
        let result = match self.guard_active() {
            Ok(()) => optimizer::run_round(self),
            Err(e) => Err(e),
        };
        self.record_outcome(&result);
        result
    }

    // -----------------------------------------------------------------------
    // Bulk resets and lifecycle
    // -----------------------------------------------------------------------

    /// Restore every store to its initial stock and forget emptied counts.
    pub fn resupply_stores(&mut self) -> Result<(), SilkRoadError> {
        let result = self.guard_active().map(|()| self.resupply_stores_inner());
        self.record_outcome(&result);
        result
    }

    fn resupply_stores_inner(&mut self) {
        for (_, store) in &mut self.stores {
            store.resupply();
        }
        self.ledger.clear_emptied();
        self.events.push(Event::StoresResupplied);
        self.refresh_max_profit();
    }

    /// Send every robot back to its placement cell. Profit is untouched.
    ///
    /// A robot whose post is currently occupied by another robot stays
    /// where it is; robots are processed in placement order.
    pub fn return_robots(&mut self) -> Result<(), SilkRoadError> {
        let result = self.guard_active().map(|()| self.return_robots_inner());
        self.record_outcome(&result);
        result
    }

    fn return_robots_inner(&mut self) {
        for i in 0..self.robot_order.len() {
            let robot = self.robot_order[i];
            let Some(record) = self.robots.get(robot) else {
                continue;
            };
            let (from, post) = (record.location, record.initial_location);
            if from == post || self.road.robot_at(post).is_some() {
                continue;
            }
            self.road.move_robot(from, post);
            if let Some(record) = self.robots.get_mut(robot) {
                record.location = post;
            }
        }
        self.events.push(Event::RobotsReturned);
        self.refresh_max_profit();
    }

    /// Resupply stores, return robots, and wipe move histories.
    ///
    /// Total profit survives a reboot; only the per-robot histories and
    /// emptied counts start over.
    pub fn reboot(&mut self) -> Result<(), SilkRoadError> {
        let result = self.guard_active().map(|()| {
            self.resupply_stores_inner();
            self.return_robots_inner();
            self.ledger.clear_history();
        });
        self.record_outcome(&result);
        result
    }

    /// Terminate the session. Idempotent and always succeeds; every later
    /// mutating call is rejected with [`SilkRoadError::SessionFinished`].
    pub fn finish(&mut self) -> Result<(), SilkRoadError> {
        if !self.finished {
            self.finished = true;
            self.events.push(Event::SessionFinished);
        }
        self.last_ok = true;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Read-only accessors
    // -----------------------------------------------------------------------

    /// Cumulative profit in tenges. May be negative.
    pub fn profit(&self) -> Tenges {
        self.ledger.total()
    }

    /// Whether the most recent mutating call succeeded.
    pub fn ok(&self) -> bool {
        self.last_ok
    }

    /// Whether `finish()` has run.
    pub fn finished(&self) -> bool {
        self.finished
    }

    /// Road length in cells.
    pub fn length(&self) -> i32 {
        self.length
    }

    /// Number of live robots.
    pub fn robot_count(&self) -> usize {
        self.robots.len()
    }

    /// Number of live stores.
    pub fn store_count(&self) -> usize {
        self.stores.len()
    }

    /// Advisory sum of each robot's best single-store gain, ignoring
    /// contention, floored at 1. Progress-bar upper bound only.
    pub fn max_profit_estimate(&self) -> Tenges {
        optimizer::current_max_profit(self)
    }

    /// Buffered presentation events.
    pub fn events(&self) -> &EventQueue {
        &self.events
    }

    /// Mutable access to the event queue, e.g. to suppress kinds.
    pub fn events_mut(&mut self) -> &mut EventQueue {
        &mut self.events
    }

    /// Take all buffered events in emission order.
    pub fn drain_events(&mut self) -> Vec<Event> {
        self.events.drain()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
