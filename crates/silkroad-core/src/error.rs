//! Error taxonomy for session operations.
//!
//! All validation failures are local and recoverable: the session rejects
//! the call, records `ok() == false`, and leaves its state untouched.
//! [`SilkRoadError::SessionFinished`] is checked before any other
//! validation in every mutating operation.

use crate::id::Tenges;
use crate::session::{MAX_LENGTH, MAX_TENGES, MIN_LENGTH, MIN_TENGES};

/// A rejected session operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SilkRoadError {
    /// Road length outside the supported domain at session construction.
    #[error("road length {0} outside the allowed range {min}..={max}", min = MIN_LENGTH, max = MAX_LENGTH)]
    InvalidLength(i32),

    /// A 1-based position (or a move destination) left the road.
    #[error("position {position} outside the road (1..={length})")]
    OutOfRange { position: i32, length: i32 },

    /// Store reward outside the supported domain.
    #[error("tenges {0} outside the allowed range {min}..={max}", min = MIN_TENGES, max = MAX_TENGES)]
    InvalidTenges(Tenges),

    /// Placement target or move destination already holds a conflicting
    /// entity.
    #[error("position {0} is already occupied")]
    PositionOccupied(i32),

    /// No entity of the requested kind at the referenced position.
    #[error("nothing to operate on at position {0}")]
    NotFound(i32),

    /// The session was finished; every further mutation is rejected.
    #[error("session is finished, no further mutations are accepted")]
    SessionFinished,
}
