//! Typed event queue: the seam between the engine and any presentation
//! layer.
//!
//! Operations push events describing what changed; an observer (UI,
//! logger, test harness) drains them after the call returns. The core
//! never queries the observer for anything, and draining is optional:
//! a headless caller can ignore or suppress events entirely.
//!
//! Positions in events are 1-based, matching the public API.

use crate::id::{RobotId, StoreId, Tenges};

// ---------------------------------------------------------------------------
// Event types
// ---------------------------------------------------------------------------

/// A state-change notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    // -- Entity lifecycle --
    RobotPlaced {
        robot: RobotId,
        position: i32,
    },
    RobotRemoved {
        robot: RobotId,
        position: i32,
    },
    StorePlaced {
        store: StoreId,
        position: i32,
        tenges: Tenges,
    },
    StoreRemoved {
        store: StoreId,
        position: i32,
    },

    // -- Movement and collection --
    RobotMoved {
        robot: RobotId,
        from: i32,
        to: i32,
    },
    /// A collection succeeded; the store is now empty. Presentation may
    /// repaint the store as "used".
    StoreEmptied {
        store: StoreId,
        position: i32,
        collected: Tenges,
    },

    // -- Bulk resets --
    StoresResupplied,
    RobotsReturned,

    // -- Accounting --
    ProfitChanged {
        total: Tenges,
    },
    /// Advisory upper bound for a progress display. Never gates a move.
    MaxProfitChanged {
        estimate: Tenges,
    },

    // -- Cosmetic signals --
    /// The robot with the greatest recorded total profit after an
    /// optimizer round. Presentation may blink it; the core only names it.
    RobotHighlighted {
        robot: RobotId,
        position: i32,
    },
    SessionFinished,
}

/// Discriminant tag for event types, used for suppression and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    RobotPlaced,
    RobotRemoved,
    StorePlaced,
    StoreRemoved,
    RobotMoved,
    StoreEmptied,
    StoresResupplied,
    RobotsReturned,
    ProfitChanged,
    MaxProfitChanged,
    RobotHighlighted,
    SessionFinished,
}

impl Event {
    /// Get the discriminant kind for this event.
    pub fn kind(&self) -> EventKind {
        match self {
            Event::RobotPlaced { .. } => EventKind::RobotPlaced,
            Event::RobotRemoved { .. } => EventKind::RobotRemoved,
            Event::StorePlaced { .. } => EventKind::StorePlaced,
            Event::StoreRemoved { .. } => EventKind::StoreRemoved,
            Event::RobotMoved { .. } => EventKind::RobotMoved,
            Event::StoreEmptied { .. } => EventKind::StoreEmptied,
            Event::StoresResupplied => EventKind::StoresResupplied,
            Event::RobotsReturned => EventKind::RobotsReturned,
            Event::ProfitChanged { .. } => EventKind::ProfitChanged,
            Event::MaxProfitChanged { .. } => EventKind::MaxProfitChanged,
            Event::RobotHighlighted { .. } => EventKind::RobotHighlighted,
            Event::SessionFinished => EventKind::SessionFinished,
        }
    }
}

// ---------------------------------------------------------------------------
// EventQueue
// ---------------------------------------------------------------------------

/// Buffered delivery: events accumulate here until the observer drains
/// them. Suppressed kinds are dropped at push time at zero cost.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    buffer: Vec<Event>,
    suppressed: Vec<EventKind>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event unless its kind is suppressed.
    pub fn push(&mut self, event: Event) {
        if !self.suppressed.contains(&event.kind()) {
            self.buffer.push(event);
        }
    }

    /// Take all buffered events in emission order.
    pub fn drain(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.buffer)
    }

    /// Peek at buffered events without draining.
    pub fn events(&self) -> &[Event] {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Stop recording events of this kind.
    pub fn suppress(&mut self, kind: EventKind) {
        if !self.suppressed.contains(&kind) {
            self.suppressed.push(kind);
        }
    }

    /// Resume recording events of this kind.
    pub fn unsuppress(&mut self, kind: EventKind) {
        self.suppressed.retain(|k| *k != kind);
    }

    pub fn is_suppressed(&self, kind: EventKind) -> bool {
        self.suppressed.contains(&kind)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
