//! Robot entity record.

use crate::id::Location;
use serde::{Deserialize, Serialize};

/// A mobile agent on the road. Pure state; everything visual about the
/// original robots (color, shape, blinking) lives behind the event seam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Robot {
    /// Cell the robot was placed on. `return_robots` and `reboot` send the
    /// robot back here.
    pub initial_location: Location,
    /// Cell the robot currently occupies.
    pub location: Location,
}

impl Robot {
    /// Create a robot at its placement cell.
    pub fn new(location: Location) -> Self {
        Self {
            initial_location: location,
            location,
        }
    }

    /// Whether the robot stands on its placement cell.
    pub fn is_at_post(&self) -> bool {
        self.location == self.initial_location
    }
}
