use alphadoku_core::{Grid, MutationEvent, Position, Trace};
use std::time::Duration;

/// Ticks a freshly written cell stays highlighted.
const FLASH_TICKS: u8 = 3;

/// Fastest and slowest allowed step intervals.
const MIN_INTERVAL: Duration = Duration::from_millis(1);
const MAX_INTERVAL: Duration = Duration::from_millis(2000);

/// Tick-driven replay of a mutation trace onto an initially empty grid.
///
/// The solve itself already happened; this only re-applies the recorded
/// events one per tick, so the viewer sees every placement and reversion in
/// the order the search made them.
pub struct Playback {
    grid: Grid,
    events: Vec<MutationEvent>,
    next: usize,
    paused: bool,
    interval: Duration,
    flashes: Vec<u8>,
}

impl Playback {
    /// Set up a replay of `trace` over an empty grid of the given size.
    pub fn new(size: usize, trace: &Trace, interval: Duration) -> Self {
        Self {
            grid: Grid::new(size),
            events: trace.events().to_vec(),
            next: 0,
            paused: false,
            interval: interval.clamp(MIN_INTERVAL, MAX_INTERVAL),
            flashes: vec![0; size * size],
        }
    }

    /// The grid in its current partially replayed state.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Delay between replayed events.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Events applied so far.
    pub fn applied(&self) -> usize {
        self.next
    }

    /// Total events in the trace.
    pub fn total(&self) -> usize {
        self.events.len()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_finished(&self) -> bool {
        self.next >= self.events.len()
    }

    /// Remaining flash strength for a cell, 0 when settled.
    pub fn flash_at(&self, pos: Position) -> u8 {
        self.flashes[pos.row * self.grid.size() + pos.col]
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Halve the step interval.
    pub fn faster(&mut self) {
        self.interval = (self.interval / 2).clamp(MIN_INTERVAL, MAX_INTERVAL);
    }

    /// Double the step interval.
    pub fn slower(&mut self) {
        self.interval = (self.interval * 2).clamp(MIN_INTERVAL, MAX_INTERVAL);
    }

    /// Rewind to the empty grid and resume playing.
    pub fn restart(&mut self) {
        self.grid = Grid::new(self.grid.size());
        self.next = 0;
        self.paused = false;
        self.flashes.fill(0);
    }

    /// Apply every remaining event at once.
    pub fn skip_to_end(&mut self) {
        while self.next < self.events.len() {
            self.apply_next();
        }
        self.flashes.fill(0);
    }

    /// Apply the next event unless paused or finished. Returns whether an
    /// event was applied.
    pub fn advance(&mut self) -> bool {
        for level in &mut self.flashes {
            *level = level.saturating_sub(1);
        }
        if self.paused || self.is_finished() {
            return false;
        }
        self.apply_next();
        true
    }

    fn apply_next(&mut self) {
        let event = self.events[self.next];
        self.grid.set(event.pos, event.value);
        // Reversions clear the highlight along with the cell.
        let idx = event.pos.row * self.grid.size() + event.pos.col;
        self.flashes[idx] = if event.value.is_some() { FLASH_TICKS } else { 0 };
        self.next += 1;
    }
}
