//! Greedy robot-to-store assignment, one round per call.
//!
//! The round is a single pass, not a global optimum: robots are visited
//! in placement order, each takes the store with the best net gain
//! (`tenges - distance`) among the stores still stocked and not yet
//! claimed this round, and ties keep the first store in placement order.
//! There is no backtracking; calling the round again re-evaluates from
//! the robots' new positions, which is how the contest driver turns it
//! into a multi-round heuristic.
//!
//! Chosen moves execute through the ordinary move primitive, so cost,
//! collection, and emptied-count semantics apply verbatim. A robot whose
//! chosen destination is blocked (typically a robot parked on a
//! resupplied store, including the chooser itself) simply sits the round
//! out.

use crate::error::SilkRoadError;
use crate::id::{Location, RobotId, Tenges};
use crate::session::Session;

// ---------------------------------------------------------------------------
// Round results
// ---------------------------------------------------------------------------

/// One executed optimizer move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundMove {
    /// Robot that moved.
    pub robot: RobotId,
    /// 1-based position the robot started from.
    pub from: i32,
    /// Signed displacement in meters.
    pub meters: i32,
    /// Net gain recorded in the robot's history.
    pub profit: Tenges,
}

/// Everything that happened in one optimizer round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Executed moves in robot placement order.
    pub moves: Vec<RoundMove>,
    /// Robot with the greatest total recorded profit after the round.
    /// Cosmetic: presentation may highlight it.
    pub highlighted: Option<RobotId>,
}

// ---------------------------------------------------------------------------
// The round
// ---------------------------------------------------------------------------

pub(crate) fn run_round(session: &mut Session) -> Result<RoundOutcome, SilkRoadError> {
    let mut claimed = vec![false; session.road.length()];
    let mut moves = Vec::new();

    let order: Vec<RobotId> = session.robot_order.clone();
    for robot in order {
        let Some(robot_loc) = session.robots.get(robot).map(|r| r.location) else {
            continue;
        };
        let Some((target, profit)) = best_store(session, robot_loc, &claimed) else {
            continue;
        };
        if profit <= 0 {
            continue;
        }

        let from = Session::human(robot_loc);
        let meters = Session::human(target) - from;
        match session.try_move_robot(from, meters) {
            Ok(()) => {
                session.ledger.record_move_profit(robot, profit);
                claimed[target] = true;
                moves.push(RoundMove {
                    robot,
                    from,
                    meters,
                    profit,
                });
            }
            // Destination blocked by a parked robot: this robot sits the
            // round out. The store stays unclaimed.
            Err(SilkRoadError::PositionOccupied(_)) => {}
            Err(e) => return Err(e),
        }
    }

    let highlighted = best_total_robot(session);
    if let Some(robot) = highlighted {
        if let Some(record) = session.robots.get(robot) {
            session.events.push(crate::event::Event::RobotHighlighted {
                robot,
                position: Session::human(record.location),
            });
        }
    }

    Ok(RoundOutcome { moves, highlighted })
}

/// Best candidate store for one robot: stocked, unclaimed this round,
/// strictly maximal net gain. First store in placement order wins ties.
fn best_store(
    session: &Session,
    robot_loc: Location,
    claimed: &[bool],
) -> Option<(Location, Tenges)> {
    let mut best: Option<(Location, Tenges)> = None;
    for &store_id in &session.store_order {
        let Some(store) = session.stores.get(store_id) else {
            continue;
        };
        if !store.is_stocked() || claimed[store.location] {
            continue;
        }
        let distance = store.location.abs_diff(robot_loc) as Tenges;
        let profit = store.tenges - distance;
        if best.is_none_or(|(_, p)| profit > p) {
            best = Some((store.location, profit));
        }
    }
    best
}

/// Robot with the greatest total recorded profit. First in placement
/// order wins ties; robots without history are skipped.
fn best_total_robot(session: &Session) -> Option<RobotId> {
    let mut best: Option<(RobotId, Tenges)> = None;
    for &robot in &session.robot_order {
        let history = session.ledger.history(robot);
        if history.is_empty() {
            continue;
        }
        let total: Tenges = history.iter().sum();
        if best.is_none_or(|(_, t)| total > t) {
            best = Some((robot, total));
        }
    }
    best.map(|(robot, _)| robot)
}

// ---------------------------------------------------------------------------
// Advisory estimator
// ---------------------------------------------------------------------------

/// Sum of each robot's best single-store net gain, computed independently
/// per robot (cross-robot contention is ignored, so this can
/// overestimate). Floored at 1 so progress displays never divide by
/// zero. Never gates a real move.
pub(crate) fn current_max_profit(session: &Session) -> Tenges {
    let mut total = 0;
    for (_, robot) in &session.robots {
        let mut best = 0;
        for (_, store) in &session.stores {
            let distance = store.location.abs_diff(robot.location) as Tenges;
            let profit = store.tenges - distance;
            if profit > best {
                best = profit;
            }
        }
        total += best;
    }
    total.max(1)
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::session;

    // -----------------------------------------------------------------------
    // Test 1: the reference single-robot scenario
    // -----------------------------------------------------------------------
    #[test]
    fn single_robot_takes_the_only_profitable_store() {
        let mut s = session(10);
        s.place_robot(1).unwrap();
        s.place_store(5, 10).unwrap();

        let outcome = s.move_robots().unwrap();

        assert_eq!(outcome.moves.len(), 1);
        assert_eq!(outcome.moves[0].from, 1);
        assert_eq!(outcome.moves[0].meters, 4);
        assert_eq!(outcome.moves[0].profit, 6);
        // cost 4 debited, net gain 6 credited.
        assert_eq!(s.profit(), 2);
        assert_eq!(s.robots()[0].position, 5);
        assert_eq!(s.emptied_stores()[0].times_emptied, 1);
    }

    // -----------------------------------------------------------------------
    // Test 2: no candidate with positive gain means no movement
    // -----------------------------------------------------------------------
    #[test]
    fn unprofitable_round_moves_nothing() {
        let mut s = session(20);
        s.place_robot(1).unwrap();
        s.place_store(15, 10).unwrap(); // net gain 10 - 14 < 0

        let outcome = s.move_robots().unwrap();
        assert!(outcome.moves.is_empty());
        assert!(outcome.highlighted.is_none());
        assert_eq!(s.profit(), 0);
        assert_eq!(s.robots()[0].position, 1);
    }

    // -----------------------------------------------------------------------
    // Test 3: one store per round; contention resolved by robot order
    // -----------------------------------------------------------------------
    #[test]
    fn claimed_store_is_gone_for_later_robots() {
        let mut s = session(10);
        s.place_robot(1).unwrap();
        s.place_robot(2).unwrap();
        s.place_store(4, 10).unwrap();

        let outcome = s.move_robots().unwrap();

        // First-placed robot wins the store; the second has no candidate.
        assert_eq!(outcome.moves.len(), 1);
        assert_eq!(outcome.moves[0].from, 1);
        assert_eq!(outcome.moves[0].profit, 7);
        let robots = s.robots();
        assert_eq!(robots[0].position, 2, "second robot did not move");
        assert_eq!(robots[1].position, 4);
    }

    // -----------------------------------------------------------------------
    // Test 4: robots iterate in placement order, not position order
    // -----------------------------------------------------------------------
    #[test]
    fn placement_order_beats_position_order() {
        let mut s = session(10);
        s.place_robot(9).unwrap();
        s.place_robot(1).unwrap();
        s.place_store(5, 10).unwrap(); // equidistant, net gain 6 for both

        let outcome = s.move_robots().unwrap();
        assert_eq!(outcome.moves.len(), 1);
        assert_eq!(outcome.moves[0].from, 9, "first-placed robot goes first");
    }

    // -----------------------------------------------------------------------
    // Test 5: ties keep the first store in placement order
    // -----------------------------------------------------------------------
    #[test]
    fn tie_break_prefers_first_placed_store() {
        let mut s = session(10);
        s.place_robot(5).unwrap();
        s.place_store(7, 10).unwrap(); // placed first, net gain 8
        s.place_store(3, 10).unwrap(); // same net gain

        let outcome = s.move_robots().unwrap();
        assert_eq!(outcome.moves.len(), 1);
        assert_eq!(outcome.moves[0].meters, 2, "moved right to the first store");
    }

    // -----------------------------------------------------------------------
    // Test 6: highlight names the robot with the best total history
    // -----------------------------------------------------------------------
    #[test]
    fn highlight_tracks_best_total_profit() {
        let mut s = session(20);
        s.place_robot(1).unwrap();
        s.place_robot(20).unwrap();
        s.place_store(3, 50).unwrap(); // robot 1 nets 48
        s.place_store(18, 10).unwrap(); // robot 2 nets 8

        let outcome = s.move_robots().unwrap();
        assert_eq!(outcome.moves.len(), 2);
        assert_eq!(outcome.highlighted, Some(outcome.moves[0].robot));
    }

    // -----------------------------------------------------------------------
    // Test 7: a second round re-evaluates from the new positions
    // -----------------------------------------------------------------------
    #[test]
    fn second_round_continues_from_new_positions() {
        let mut s = session(12);
        s.place_robot(1).unwrap();
        s.place_store(3, 10).unwrap();
        s.place_store(9, 20).unwrap();

        // Round 1: store 9 nets 20 - 8 = 12, beats store 3's 10 - 2 = 8.
        let first = s.move_robots().unwrap();
        assert_eq!(first.moves[0].meters, 8);
        assert_eq!(s.profit(), -8 + 12);

        // Round 2: from position 9 the remaining store nets 10 - 6 = 4.
        let second = s.move_robots().unwrap();
        assert_eq!(second.moves.len(), 1);
        assert_eq!(second.moves[0].from, 9);
        assert_eq!(second.moves[0].meters, -6);
        assert_eq!(s.profit(), 4 - 6 + 4);
        assert_eq!(s.profit_per_move()[0].profits, vec![12, 4]);
    }

    // -----------------------------------------------------------------------
    // Test 8: robot parked on a resupplied store sits the round out
    // -----------------------------------------------------------------------
    #[test]
    fn parked_robot_cannot_recollect_under_it() {
        let mut s = session(10);
        s.place_robot(1).unwrap();
        s.place_store(5, 10).unwrap();
        s.move_robots().unwrap();
        assert_eq!(s.robots()[0].position, 5);

        s.resupply_stores().unwrap();
        let outcome = s.move_robots().unwrap();
        assert!(outcome.moves.is_empty(), "zero-meter move is not a move");
        assert_eq!(s.robots()[0].position, 5);
        assert_eq!(s.stores()[0].tenges, 10);
    }

    // -----------------------------------------------------------------------
    // Test 9: identical setups produce identical rounds
    // -----------------------------------------------------------------------
    #[test]
    fn rounds_are_deterministic() {
        let build = || {
            let mut s = session(30);
            s.place_robot(2).unwrap();
            s.place_robot(17).unwrap();
            s.place_robot(28).unwrap();
            s.place_store(5, 40).unwrap();
            s.place_store(13, 25).unwrap();
            s.place_store(22, 60).unwrap();
            s
        };

        let mut a = build();
        let mut b = build();
        let oa = a.move_robots().unwrap();
        let ob = b.move_robots().unwrap();

        assert_eq!(oa.moves, ob.moves);
        assert_eq!(oa.highlighted, ob.highlighted);
        assert_eq!(a.profit(), b.profit());
        assert_eq!(a.profit_per_move(), b.profit_per_move());
    }

    // -----------------------------------------------------------------------
    // Test 10: estimator sums independent bests, floored at 1
    // -----------------------------------------------------------------------
    #[test]
    fn estimator_ignores_contention_and_floors_at_one() {
        let mut s = session(10);
        assert_eq!(s.max_profit_estimate(), 1, "empty session floors at 1");

        s.place_robot(1).unwrap();
        s.place_robot(2).unwrap();
        s.place_store(4, 10).unwrap();

        // Both robots count the same store: 7 + 8, contention ignored.
        assert_eq!(s.max_profit_estimate(), 15);
    }
}
