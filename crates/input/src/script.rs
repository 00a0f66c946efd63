//! Deterministic input replay: key events scheduled on frame numbers.

use crate::{KeyCode, KeyEvent};

/// Key events keyed by the frame before which they are delivered.
#[derive(Debug, Clone, Default)]
pub struct InputScript {
    events: Vec<(u64, KeyEvent)>,
}

impl InputScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule an event. Events on the same frame keep insertion order.
    pub fn push(&mut self, frame: u64, event: KeyEvent) -> &mut Self {
        let idx = self.events.partition_point(|(f, _)| *f <= frame);
        self.events.insert(idx, (frame, event));
        self
    }

    /// Press `key` at `frame` (a single key-down, like one tap).
    pub fn tap(&mut self, frame: u64, key: KeyCode) -> &mut Self {
        self.push(frame, KeyEvent::pressed(key))
            .push(frame, KeyEvent::released(key))
    }

    /// Press `key` at `from` and release it at `to`.
    pub fn hold(&mut self, key: KeyCode, from: u64, to: u64) -> &mut Self {
        self.push(from, KeyEvent::pressed(key))
            .push(to.max(from), KeyEvent::released(key))
    }

    /// Events scheduled for `frame`, in order.
    pub fn events_at(&self, frame: u64) -> impl Iterator<Item = KeyEvent> + '_ {
        self.events
            .iter()
            .filter(move |(f, _)| *f == frame)
            .map(|(_, e)| *e)
    }

    /// Frame of the last scheduled event.
    pub fn last_frame(&self) -> Option<u64> {
        self.events.last().map(|(f, _)| *f)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
