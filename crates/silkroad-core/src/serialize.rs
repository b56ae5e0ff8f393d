//! Binary session snapshots via `bitcode` with a versioned header.
//!
//! The payload captures everything needed to resume a session: road,
//! entities, placement orders, ledger, and lifecycle flags. The event
//! queue is presentation plumbing and is deliberately not captured; a
//! restored session starts with an empty queue.

use crate::event::EventQueue;
use crate::id::{RobotId, StoreId, Tenges};
use crate::ledger::Ledger;
use crate::road::Road;
use crate::robot::Robot;
use crate::session::Session;
use crate::store::Store;
use serde::{Deserialize, Serialize};
use slotmap::SlotMap;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Magic number identifying a session snapshot.
pub const SNAPSHOT_MAGIC: u32 = 0x5EDA_0001;

/// Current format version. Increment when breaking the wire format.
pub const FORMAT_VERSION: u32 = 1;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur during serialization.
#[derive(Debug, thiserror::Error)]
pub enum SerializeError {
    #[error("bitcode encoding failed: {0}")]
    Encode(String),
}

/// Errors that can occur during deserialization.
#[derive(Debug, thiserror::Error)]
pub enum DeserializeError {
    #[error("data too short for snapshot header")]
    TooShort,
    #[error("invalid magic number: expected 0x{:08X}, got 0x{:08X}", SNAPSHOT_MAGIC, .0)]
    InvalidMagic(u32),
    #[error("unsupported format version: expected {}, got {}", FORMAT_VERSION, .0)]
    UnsupportedVersion(u32),
    #[error("bitcode decoding failed: {0}")]
    Decode(String),
}

// ---------------------------------------------------------------------------
// Snapshot payload
// ---------------------------------------------------------------------------

#[derive(Serialize, Deserialize)]
struct SessionState {
    length: i32,
    road: Road,
    robots: SlotMap<RobotId, Robot>,
    stores: SlotMap<StoreId, Store>,
    robot_order: Vec<RobotId>,
    store_order: Vec<StoreId>,
    ledger: Ledger,
    finished: bool,
    last_ok: bool,
    last_max_estimate: Tenges,
}

impl Session {
    /// Serialize the session to bytes with a magic/version header.
    pub fn serialize(&self) -> Result<Vec<u8>, SerializeError> {
        let state = SessionState {
            length: self.length,
            road: self.road.clone(),
            robots: self.robots.clone(),
            stores: self.stores.clone(),
            robot_order: self.robot_order.clone(),
            store_order: self.store_order.clone(),
            ledger: self.ledger.clone(),
            finished: self.finished,
            last_ok: self.last_ok,
            last_max_estimate: self.last_max_estimate,
        };
        let payload =
            bitcode::serialize(&state).map_err(|e| SerializeError::Encode(e.to_string()))?;

        let mut out = Vec::with_capacity(8 + payload.len());
        out.extend_from_slice(&SNAPSHOT_MAGIC.to_le_bytes());
        out.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
        out.extend_from_slice(&payload);
        Ok(out)
    }

    /// Restore a session from snapshot bytes. The restored session has an
    /// empty event queue.
    pub fn deserialize(data: &[u8]) -> Result<Self, DeserializeError> {
        if data.len() < 8 {
            return Err(DeserializeError::TooShort);
        }
        let magic = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
        if magic != SNAPSHOT_MAGIC {
            return Err(DeserializeError::InvalidMagic(magic));
        }
        let version = u32::from_le_bytes([data[4], data[5], data[6], data[7]]);
        if version != FORMAT_VERSION {
            return Err(DeserializeError::UnsupportedVersion(version));
        }

        let state: SessionState =
            bitcode::deserialize(&data[8..]).map_err(|e| DeserializeError::Decode(e.to_string()))?;
        Ok(Self {
            length: state.length,
            road: state.road,
            robots: state.robots,
            stores: state.stores,
            robot_order: state.robot_order,
            store_order: state.store_order,
            ledger: state.ledger,
            finished: state.finished,
            last_ok: state.last_ok,
            last_max_estimate: state.last_max_estimate,
            events: EventQueue::new(),
        })
    }
}

// ===========================================================================
// Tests
// ===========================================================================
