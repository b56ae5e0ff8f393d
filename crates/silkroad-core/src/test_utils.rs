//! Shared helpers for tests. Available to dependent crates through the
//! `test-utils` feature.

use crate::id::Tenges;
use crate::session::Session;

/// Build a session, panicking on an invalid length. Test code only.
pub fn session(length: i32) -> Session {
    match Session::new(length) {
        Ok(session) => session,
        Err(e) => panic!("test session length {length}: {e}"),
    }
}

/// Place a batch of robots and stores, panicking on any rejection.
pub fn populate(session: &mut Session, robots: &[i32], stores: &[(i32, Tenges)]) {
    for &position in robots {
        if let Err(e) = session.place_robot(position) {
            panic!("placing test robot at {position}: {e}");
        }
    }
    for &(position, tenges) in stores {
        if let Err(e) = session.place_store(position, tenges) {
            panic!("placing test store at {position}: {e}");
        }
    }
}
