use crate::grid::{Grid, Position};
use serde::{Deserialize, Serialize};

/// A single grid mutation: a symbol written to, or cleared from, one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationEvent {
    /// The cell that changed.
    pub pos: Position,
    /// The new value; `None` means the cell was cleared by backtracking.
    pub value: Option<char>,
}

/// Chronological, append-only log of every mutation one solve performed.
///
/// The log records reversions as first-class events, so applying it in order
/// to an empty grid of the same size passes through every intermediate state
/// the search visited and ends at the search's final grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    events: Vec<MutationEvent>,
}

impl Trace {
    /// Create an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event. Events are never merged or compacted.
    pub fn record(&mut self, event: MutationEvent) {
        self.events.push(event);
    }

    /// Discard all recorded events.
    pub fn reset(&mut self) {
        self.events.clear();
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The recorded events in chronological order.
    pub fn events(&self) -> &[MutationEvent] {
        &self.events
    }

    /// Iterate over the events in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = &MutationEvent> {
        self.events.iter()
    }

    /// Apply every event in order to a fresh empty grid of the given size.
    pub fn replay(&self, size: usize) -> Grid {
        let mut grid = Grid::new(size);
        for event in &self.events {
            grid.set(event.pos, event.value);
        }
        grid
    }
}
