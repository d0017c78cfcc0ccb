use crate::alphabet::Alphabet;
use crate::error::PuzzleError;
use serde::{Deserialize, Serialize};

/// A validated puzzle instance: the grid size paired with the alphabet that
/// fills it.
///
/// Construction is the input-validation boundary. Anything that gets past
/// `Puzzle::new` can be handed to the solver without further checks; a bad
/// size or alphabet is rejected here, never discovered mid-search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    size: usize,
    alphabet: Alphabet,
}

impl Puzzle {
    /// Pair a grid size with an alphabet of exactly that many symbols.
    pub fn new(size: usize, alphabet: Alphabet) -> Result<Self, PuzzleError> {
        if size == 0 {
            return Err(PuzzleError::ZeroSize);
        }
        if alphabet.len() != size {
            return Err(PuzzleError::SizeMismatch {
                expected: size,
                found: alphabet.len(),
            });
        }
        Ok(Self { size, alphabet })
    }

    /// A puzzle of the given size filled from the first `size` latin letters.
    pub fn with_latin_alphabet(size: usize) -> Result<Self, PuzzleError> {
        Self::new(size, Alphabet::latin(size)?)
    }

    /// Edge length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The fill alphabet, in trial order.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }
}
