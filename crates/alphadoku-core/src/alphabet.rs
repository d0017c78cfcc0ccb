use crate::error::PuzzleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The ordered set of distinct symbols a grid is filled from.
///
/// Order matters: candidates are tried in insertion order, so two alphabets
/// with the same symbols in different orders can steer the search to
/// different solutions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet from the given symbols, rejecting duplicates.
    pub fn new(symbols: Vec<char>) -> Result<Self, PuzzleError> {
        for (i, &sym) in symbols.iter().enumerate() {
            if symbols[..i].contains(&sym) {
                return Err(PuzzleError::DuplicateSymbol(sym));
            }
        }
        Ok(Self { symbols })
    }

    /// The first `n` lowercase latin letters, `a` through `z`.
    pub fn latin(n: usize) -> Result<Self, PuzzleError> {
        if n > 26 {
            return Err(PuzzleError::NoBuiltinAlphabet(n));
        }
        Ok(Self {
            symbols: (0..n).map(|i| (b'a' + i as u8) as char).collect(),
        })
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check whether the alphabet has no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbols in trial order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Iterate over the symbols in trial order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }
}

impl FromStr for Alphabet {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.chars().collect())
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sym in &self.symbols {
            write!(f, "{}", sym)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_prefix() {
        let alphabet = Alphabet::latin(4).unwrap();
        assert_eq!(alphabet.symbols(), &['a', 'b', 'c', 'd']);
        assert_eq!(alphabet.to_string(), "abcd");
    }

    #[test]
    fn test_latin_full_range() {
        let alphabet = Alphabet::latin(26).unwrap();
        assert_eq!(alphabet.len(), 26);
        assert_eq!(alphabet.symbols()[25], 'z');
    }

    #[test]
    fn test_latin_too_large() {
        assert_eq!(Alphabet::latin(27), Err(PuzzleError::NoBuiltinAlphabet(27)));
    }

    #[test]
    fn test_rejects_duplicates() {
        assert_eq!(
            "abca".parse::<Alphabet>(),
            Err(PuzzleError::DuplicateSymbol('a'))
        );
    }

    #[test]
    fn test_preserves_order() {
        let alphabet: Alphabet = "dcba".parse().unwrap();
        assert_eq!(alphabet.symbols(), &['d', 'c', 'b', 'a']);
    }

    #[test]
    fn test_non_latin_symbols() {
        let alphabet: Alphabet = "1234".parse().unwrap();
        assert_eq!(alphabet.len(), 4);
    }
}
