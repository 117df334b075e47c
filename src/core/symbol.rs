//! Palette symbols.
//!
//! A `Symbol` is a small integer: `0` is the unset cell, `1..=PALETTE_SIZE`
//! are the colors a presentation layer maps to pegs. The engine never
//! interprets symbols beyond equality.

use serde::{Deserialize, Serialize};

use super::config::PALETTE_SIZE;

/// A palette symbol, or the unset marker.
///
/// ```
/// use mastermind_engine::core::Symbol;
///
/// let mut s = Symbol::EMPTY;
/// for _ in 0..7 {
///     s = s.next();
/// }
/// assert_eq!(s, Symbol::EMPTY);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Symbol(u8);

impl Symbol {
    /// The unset cell value.
    pub const EMPTY: Self = Self(0);

    /// Create a symbol, or `None` if `value` is outside `0..=PALETTE_SIZE`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= PALETTE_SIZE {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the raw value (0 for unset).
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Index into a `PALETTE_SIZE + 1` frequency table.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this is a palette symbol rather than the unset marker.
    #[must_use]
    pub const fn is_set(self) -> bool {
        self.0 != 0
    }

    /// Next value in the cycle unset → 1 → … → PALETTE_SIZE → unset.
    #[must_use]
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % (PALETTE_SIZE + 1))
    }

    /// Iterate over every set symbol in the palette.
    pub fn palette() -> impl Iterator<Item = Symbol> {
        (1..=PALETTE_SIZE).map(Symbol)
    }
}

impl TryFrom<u8> for Symbol {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(value)
    }
}

impl From<Symbol> for u8 {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_set() {
            write!(f, "{}", self.0)
        } else {
            write!(f, "_")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_palette() {
        assert_eq!(Symbol::new(0), Some(Symbol::EMPTY));
        assert_eq!(Symbol::new(PALETTE_SIZE).map(Symbol::raw), Some(PALETTE_SIZE));
        assert_eq!(Symbol::new(PALETTE_SIZE + 1), None);
        assert_eq!(Symbol::new(u8::MAX), None);
    }

    #[test]
    fn test_next_cycles_through_palette() {
        let mut s = Symbol::EMPTY;
        for expected in 1..=PALETTE_SIZE {
            s = s.next();
            assert_eq!(s.raw(), expected);
            assert!(s.is_set());
        }
        assert_eq!(s.next(), Symbol::EMPTY);
    }

    #[test]
    fn test_palette() {
        let palette: Vec<_> = Symbol::palette().map(Symbol::raw).collect();
        assert_eq!(palette, vec![1, 2, 3, 4, 5, 6]);
        assert!(Symbol::palette().all(Symbol::is_set));
    }

    #[test]
    fn test_display() {
        assert_eq!(Symbol::EMPTY.to_string(), "_");
        assert_eq!(Symbol::new(3).unwrap().to_string(), "3");
    }

    #[test]
    fn test_serde_rejects_out_of_palette() {
        let ok: Symbol = serde_json::from_str("5").unwrap();
        assert_eq!(ok.raw(), 5);
        assert!(serde_json::from_str::<Symbol>("9").is_err());
    }
}
