//! Engine for filling generalized N×N letter-sudoku grids.
//!
//! A grid of size N is filled from an ordered alphabet of N distinct
//! symbols so that no symbol repeats in any row, column, or
//! `floor(sqrt(N))`-sized sub-block. The fill is an exhaustive,
//! deterministic backtracking search; every cell mutation it makes,
//! including the reversions, is appended to a replayable [`Trace`].

mod alphabet;
mod error;
mod grid;
mod puzzle;
mod solver;
mod trace;

pub use alphabet::Alphabet;
pub use error::PuzzleError;
pub use grid::{Grid, Position, EMPTY_MARKER};
pub use puzzle::Puzzle;
pub use solver::{Solution, Solver, Strategy};
pub use trace::{MutationEvent, Trace};
