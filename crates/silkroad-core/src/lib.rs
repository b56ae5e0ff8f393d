//! Silk Road Core -- a headless simulation engine for a linear logistics
//! network of mobile robots and stationary stores.
//!
//! Robots move along a fixed-length road to collect tenges from stores;
//! every meter traveled costs one tenge, win or lose. The engine owns
//! all state and exposes synchronous, validated operations; rendering,
//! animation, and dialogs are somebody else's problem, reachable only
//! through the buffered event queue.
//!
//! # Operation Flow
//!
//! Each call to a [`session::Session`] operation runs to completion
//! through the following steps:
//!
//! 1. **Lifecycle guard** -- finished sessions reject every mutation.
//! 2. **Validation** -- positions, rewards, and occupancy are checked
//!    against the [`road::Road`] index before anything changes.
//! 3. **Effects** -- entity state and the [`ledger::Ledger`] update
//!    atomically from the caller's point of view.
//! 4. **Notification** -- typed [`event::Event`]s are buffered for an
//!    observer to drain; the core never blocks on them.
//!
//! # Key Types
//!
//! - [`session::Session`] -- owns the road, ledger, and both entity
//!   collections; every mutating operation lives here.
//! - [`road::Road`] -- position-keyed occupancy index; placement needs a
//!   free cell, moving robots may land on store cells to collect.
//! - [`ledger::Ledger`] -- signed profit total, per-cell emptied counts,
//!   and per-robot move-profit history keyed by permanent id.
//! - [`optimizer::RoundOutcome`] -- result of one greedy
//!   robot-to-store assignment round (`move_robots`).
//! - [`event::EventQueue`] -- buffered notifications for a presentation
//!   layer; suppression makes unwanted kinds free.
//! - [`serialize`] -- versioned binary snapshots via bitcode.

pub mod error;
pub mod event;
pub mod id;
pub mod ledger;
pub mod optimizer;
pub mod query;
pub mod road;
pub mod robot;
pub mod serialize;
pub mod session;
pub mod store;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::SilkRoadError;
pub use session::Session;
