//! Silk Road Contest -- scripted day-by-day replay over the simulation
//! engine.
//!
//! A contest input is a sequence of "days", each placing one robot or
//! one store. [`driver::solve`] replays the script through an ordinary
//! [`silkroad_core::Session`] and returns the flat move log the contest
//! format expects; [`schema::parse_days`] decodes the JSON script
//! format first.

pub mod driver;
pub mod schema;

pub use driver::{ContestError, solve, solve_with_session};
pub use schema::{Day, ScriptError, parse_days};
