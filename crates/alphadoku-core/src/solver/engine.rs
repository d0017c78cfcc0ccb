//! The shared backtracking recursion.
//!
//! Both strategies run the same assign/check/revert loop; they differ only
//! in how each recursion level locates the next open cell.

use crate::alphabet::Alphabet;
use crate::grid::{Grid, Position};
use crate::solver::Strategy;
use crate::trace::{MutationEvent, Trace};

/// One in-flight search over a grid.
pub(super) struct Search<'a> {
    grid: &'a mut Grid,
    alphabet: &'a Alphabet,
    trace: &'a mut Trace,
    strategy: Strategy,
}

impl<'a> Search<'a> {
    pub(super) fn new(
        grid: &'a mut Grid,
        alphabet: &'a Alphabet,
        trace: &'a mut Trace,
        strategy: Strategy,
    ) -> Self {
        Self {
            grid,
            alphabet,
            trace,
            strategy,
        }
    }

    /// Run the search to completion. Returns `true` if the grid was filled.
    pub(super) fn run(&mut self) -> bool {
        self.step(Position::origin())
    }

    /// One recursion level: locate the next open cell, then try every
    /// symbol there in alphabet order.
    ///
    /// A candidate that leads to a dead end is reverted (and the reversion
    /// recorded) before the next one is tried; success propagates up
    /// without reverting anything. Recursion depth never exceeds the number
    /// of open cells, since each level commits exactly one cell.
    fn step(&mut self, cursor: Position) -> bool {
        let Some(pos) = self.locate(cursor) else {
            // No open cell left: the grid is complete.
            return true;
        };

        for symbol in self.alphabet.iter() {
            if !self.grid.is_safe(pos, symbol) {
                continue;
            }
            self.write(pos, Some(symbol));
            if self.step(pos) {
                return true;
            }
            self.write(pos, None);
        }

        false
    }

    /// Find the open cell this level works on.
    ///
    /// Either mechanism selects the row-major-first open cell; the carried
    /// cursor merely skips the prefix the current path has already filled.
    fn locate(&self, cursor: Position) -> Option<Position> {
        match self.strategy {
            Strategy::DepthFirst => self.grid.first_empty_from(cursor),
            Strategy::RestartScan => self.grid.first_empty(),
        }
    }

    fn write(&mut self, pos: Position, value: Option<char>) {
        self.grid.set(pos, value);
        self.trace.record(MutationEvent { pos, value });
    }
}
