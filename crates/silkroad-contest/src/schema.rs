//! Day-script data model and JSON loader.
//!
//! Contest inputs arrive as a flat JSON array of rows, one row per day:
//! `[1, location]` places a robot, `[2, location, tenges]` places a
//! store. Rows are validated into typed [`Day`] values before any
//! simulation runs, so a malformed script fails fast with a row index.

use serde::{Deserialize, Serialize};
use silkroad_core::id::Tenges;

/// One scripted day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Day {
    /// Place a robot at a 1-based position.
    PlaceRobot { location: i32 },
    /// Place a store with its initial stock.
    PlaceStore { location: i32, tenges: Tenges },
}

impl Day {
    /// The 1-based position this day touches.
    pub fn location(&self) -> i32 {
        match *self {
            Day::PlaceRobot { location } | Day::PlaceStore { location, .. } => location,
        }
    }

    /// Decode one raw script row.
    pub fn from_row(row: &[i32]) -> Result<Self, &'static str> {
        match *row {
            [1, location] => Ok(Day::PlaceRobot { location }),
            [2, location, tenges] => Ok(Day::PlaceStore { location, tenges }),
            [1, ..] => Err("robot day must be [1, location]"),
            [2, ..] => Err("store day must be [2, location, tenges]"),
            [..] => Err("day type must be 1 (robot) or 2 (store)"),
        }
    }
}

/// Errors raised while decoding a day script.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("day {index}: {reason}")]
    BadDay { index: usize, reason: &'static str },
}

/// Parse a JSON day script into typed days.
pub fn parse_days(json: &str) -> Result<Vec<Day>, ScriptError> {
    let rows: Vec<Vec<i32>> = serde_json::from_str(json)?;
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            Day::from_row(row).map_err(|reason| ScriptError::BadDay { index, reason })
        })
        .collect()
}

// ===========================================================================
// Tests
// ===========================================================================
