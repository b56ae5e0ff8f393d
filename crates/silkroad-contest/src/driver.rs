//! Day-by-day contest replay through the simulation engine.
//!
//! The driver feeds a pre-scripted sequence of days into an ordinary
//! [`Session`] and harvests the optimizer's moves. Headless and
//! interactive runs share this exact path: a presentation layer is free
//! to drain the session's events after each day, but nothing here
//! depends on one.
//!
//! Per day: robots go back to their posts, the day's placement is
//! applied, and one greedy round runs. Stores stay emptied across days
//! (no resupply), so a store collected on day N is off the table for
//! every later day.

use crate::schema::Day;
use silkroad_core::{Session, SilkRoadError};
use tracing::debug;

/// Errors raised while replaying a day script.
#[derive(Debug, thiserror::Error)]
pub enum ContestError {
    #[error("day script is empty")]
    EmptyScript,
    #[error(transparent)]
    Session(#[from] SilkRoadError),
}

/// Replay a day script and return the flat move log
/// `[robotPos1, delta1, robotPos2, delta2, ...]`.
pub fn solve(days: &[Day]) -> Result<Vec<i32>, ContestError> {
    solve_with_session(days).map(|(log, _)| log)
}

/// Like [`solve`], but also hands back the finished session so callers
/// can inspect profit, histories, and buffered events.
pub fn solve_with_session(days: &[Day]) -> Result<(Vec<i32>, Session), ContestError> {
    if days.is_empty() {
        return Err(ContestError::EmptyScript);
    }
    let length = days.iter().map(Day::location).max().unwrap_or(0);
    let mut session = Session::new(length)?;

    let mut log = Vec::new();
    for (index, day) in days.iter().enumerate() {
        session.return_robots()?;
        match *day {
            Day::PlaceRobot { location } => session.place_robot(location)?,
            Day::PlaceStore { location, tenges } => session.place_store(location, tenges)?,
        }

        let outcome = session.move_robots()?;
        debug!(
            day = index,
            moves = outcome.moves.len(),
            profit = session.profit(),
            "day replayed"
        );
        for round_move in &outcome.moves {
            log.push(round_move.from);
            log.push(round_move.meters);
        }
    }

    Ok((log, session))
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn robot(location: i32) -> Day {
        Day::PlaceRobot { location }
    }

    fn store(location: i32, tenges: i32) -> Day {
        Day::PlaceStore { location, tenges }
    }

    // -----------------------------------------------------------------------
    // Test 1: robot then store yields one move
    // -----------------------------------------------------------------------
    #[test]
    fn robot_then_store_yields_one_move() {
        let (log, session) = solve_with_session(&[robot(1), store(5, 10)]).unwrap();
        assert_eq!(log, vec![1, 4]);
        assert_eq!(session.profit(), 2);
    }

    // -----------------------------------------------------------------------
    // Test 2: days before any pairing produce no moves
    // -----------------------------------------------------------------------
    #[test]
    fn lone_entities_produce_no_moves() {
        let log = solve(&[robot(2), robot(6)]).unwrap();
        assert!(log.is_empty());

        let log = solve(&[store(4, 10), store(8, 20)]).unwrap();
        assert!(log.is_empty());
    }

    // -----------------------------------------------------------------------
    // Test 3: robots restart from their posts each day
    // -----------------------------------------------------------------------
    #[test]
    fn robots_restart_from_their_posts() {
        // Day 2's move is evaluated from the robot's post (position 1),
        // not from wherever day 1 left it.
        let (log, _) = solve_with_session(&[robot(1), store(3, 10), store(9, 50)]).unwrap();
        assert_eq!(log, vec![1, 2, 1, 8]);
    }

    // -----------------------------------------------------------------------
    // Test 4: emptied stores stay off the table on later days
    // -----------------------------------------------------------------------
    #[test]
    fn emptied_stores_stay_off_the_table() {
        // Day 2: the first robot empties the store at 6 (net 8). Day 3
        // adds a second robot, but the only store is empty: nobody moves.
        let (log, session) = solve_with_session(&[robot(4), store(6, 10), robot(5)]).unwrap();
        assert_eq!(log, vec![4, 2]);
        assert_eq!(session.profit(), -2 + 8);
    }

    // -----------------------------------------------------------------------
    // Test 5: the script determines everything; replays are identical
    // -----------------------------------------------------------------------
    #[test]
    fn replays_are_identical() {
        let days = [robot(2), store(9, 30), robot(11), store(4, 25), store(13, 5)];
        let first = solve(&days).unwrap();
        let second = solve(&days).unwrap();
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    // -----------------------------------------------------------------------
    // Test 6: empty and undersized scripts are rejected
    // -----------------------------------------------------------------------
    #[test]
    fn empty_and_undersized_scripts_are_rejected() {
        assert!(matches!(solve(&[]), Err(ContestError::EmptyScript)));

        // Largest scripted location is 2: shorter than any valid road.
        let err = solve(&[robot(2)]).unwrap_err();
        assert!(matches!(
            err,
            ContestError::Session(SilkRoadError::InvalidLength(2))
        ));
    }
}
