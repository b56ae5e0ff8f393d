use slotmap::new_key_type;

new_key_type! {
    /// Identifies a robot for the lifetime of a session. Stable across
    /// moves; ledger history stays keyed by this id even after the robot
    /// is removed from the road.
    pub struct RobotId;

    /// Identifies a store for the lifetime of a session.
    pub struct StoreId;
}

/// Internal 0-based cell index on the road. The public API speaks 1-based
/// positions; conversion happens once at the session boundary.
pub type Location = usize;

/// Amount of tenges (rewards, movement costs, profit totals). Signed:
/// cumulative profit can go negative when movement outruns collection.
pub type Tenges = i32;
