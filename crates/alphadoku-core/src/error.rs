use thiserror::Error;

/// Rejected puzzle input, reported before any search starts.
///
/// Running out of candidates during the search is not an error; the solver
/// reports that as an ordinary "no solution" outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// The grid must have at least one row and column.
    #[error("grid size must be at least 1")]
    ZeroSize,

    /// The alphabet must provide exactly one symbol per row.
    #[error("alphabet has {found} symbols but the grid needs exactly {expected}")]
    SizeMismatch { expected: usize, found: usize },

    /// Every symbol in the alphabet must be distinct.
    #[error("duplicate symbol {0:?} in alphabet")]
    DuplicateSymbol(char),

    /// The built-in a–z alphabet only covers sizes up to 26.
    #[error("no built-in alphabet for size {0}; supply the symbols explicitly")]
    NoBuiltinAlphabet(usize),
}
