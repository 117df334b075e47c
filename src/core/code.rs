//! Rows of symbols: editable `Cells` and fully set `Code`s.
//!
//! ## Cells
//!
//! A row of `CODE_LENGTH` cells, each either unset or a palette symbol.
//! Used for the pending guess, blank board rows, and the hidden solution
//! placeholder.
//!
//! ## Code
//!
//! A row in which every cell is set. The secret and every submitted guess
//! are `Code`s; the type guarantees the feedback algorithm never sees an
//! unset cell.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::config::CODE_LENGTH;
use super::symbol::Symbol;

/// Error building a `Code` from raw values or text.
#[derive(Clone, Debug, PartialEq, Eq, derive_more::Display)]
pub enum CodeError {
    /// Input did not contain exactly `CODE_LENGTH` symbols.
    #[display("expected {} symbols, got {}", CODE_LENGTH, _0)]
    WrongLength(usize),

    /// A character was not a decimal digit.
    #[display("'{}' is not a symbol digit", _0)]
    NotADigit(char),

    /// A value was outside the palette.
    #[display("symbol {} is outside the palette", _0)]
    OutOfPalette(u8),

    /// A position held the unset marker.
    #[display("position {} is unset", _0)]
    Unset(usize),
}

impl std::error::Error for CodeError {}

/// A row of possibly-unset cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cells([Symbol; CODE_LENGTH]);

impl Cells {
    /// Create a row with every cell unset.
    #[must_use]
    pub const fn empty() -> Self {
        Self([Symbol::EMPTY; CODE_LENGTH])
    }

    /// Create a row from symbols.
    #[must_use]
    pub const fn from_symbols(symbols: [Symbol; CODE_LENGTH]) -> Self {
        Self(symbols)
    }

    /// Get the symbol in a column, or `None` if the column is out of range.
    #[must_use]
    pub fn get(&self, column: usize) -> Option<Symbol> {
        self.0.get(column).copied()
    }

    /// Borrow the underlying symbols.
    #[must_use]
    pub const fn symbols(&self) -> &[Symbol; CODE_LENGTH] {
        &self.0
    }

    /// Iterate over cells left to right.
    pub fn iter(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.0.iter().copied()
    }

    /// Check if every cell is set.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.0.iter().all(|s| s.is_set())
    }

    /// Check if every cell is unset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|s| !s.is_set())
    }

    /// Convert to a `Code` if every cell is set.
    #[must_use]
    pub fn to_code(&self) -> Option<Code> {
        Code::from_symbols(self.0).ok()
    }

    /// Overwrite one cell. Returns whether the cell changed.
    pub(crate) fn set(&mut self, column: usize, symbol: Symbol) -> bool {
        match self.0.get_mut(column) {
            Some(cell) if *cell != symbol => {
                *cell = symbol;
                true
            }
            _ => false,
        }
    }

    /// Advance one cell through the palette cycle. Returns the new symbol.
    pub(crate) fn cycle(&mut self, column: usize) -> Option<Symbol> {
        let cell = self.0.get_mut(column)?;
        *cell = cell.next();
        Some(*cell)
    }
}

impl std::fmt::Display for Cells {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for symbol in &self.0 {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

/// A fully set row: the secret or a submitted guess.
///
/// ```
/// use mastermind_engine::core::Code;
///
/// let code: Code = "1123".parse().unwrap();
/// assert_eq!(code.to_string(), "1123");
/// assert!("11x3".parse::<Code>().is_err());
/// assert!("1103".parse::<Code>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Cells", into = "Cells")]
pub struct Code(Cells);

impl Code {
    /// Build a code from raw symbol values.
    pub fn new(values: [u8; CODE_LENGTH]) -> Result<Self, CodeError> {
        let mut symbols = [Symbol::EMPTY; CODE_LENGTH];
        for (slot, value) in symbols.iter_mut().zip(values) {
            *slot = Symbol::new(value).ok_or(CodeError::OutOfPalette(value))?;
        }
        Self::from_symbols(symbols)
    }

    /// Build a code from symbols, rejecting unset cells.
    pub fn from_symbols(symbols: [Symbol; CODE_LENGTH]) -> Result<Self, CodeError> {
        if let Some(position) = symbols.iter().position(|s| !s.is_set()) {
            return Err(CodeError::Unset(position));
        }
        Ok(Self(Cells(symbols)))
    }

    /// Wrap symbols already known to be set.
    pub(crate) fn from_set_symbols(symbols: [Symbol; CODE_LENGTH]) -> Self {
        debug_assert!(symbols.iter().all(|s| s.is_set()));
        Self(Cells(symbols))
    }

    /// Get the symbol at a position.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<Symbol> {
        self.0.get(position)
    }

    /// Borrow the underlying symbols.
    #[must_use]
    pub const fn symbols(&self) -> &[Symbol; CODE_LENGTH] {
        self.0.symbols()
    }

    /// Iterate over symbols left to right.
    pub fn iter(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.0.iter()
    }

    /// View as a row of cells.
    #[must_use]
    pub const fn cells(&self) -> Cells {
        self.0
    }
}

impl TryFrom<Cells> for Code {
    type Error = CodeError;

    fn try_from(cells: Cells) -> Result<Self, Self::Error> {
        Self::from_symbols(cells.0)
    }
}

impl From<Code> for Cells {
    fn from(code: Code) -> Self {
        code.0
    }
}

impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let count = s.chars().count();
        if count != CODE_LENGTH {
            return Err(CodeError::WrongLength(count));
        }

        let mut values = [0u8; CODE_LENGTH];
        for (slot, c) in values.iter_mut().zip(s.chars()) {
            let digit = c.to_digit(10).ok_or(CodeError::NotADigit(c))?;
            *slot = digit as u8;
        }
        Self::new(values)
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(v: u8) -> Symbol {
        Symbol::new(v).unwrap()
    }

    #[test]
    fn test_empty_cells() {
        let cells = Cells::empty();
        assert!(cells.is_empty());
        assert!(!cells.is_complete());
        assert_eq!(cells.to_code(), None);
        assert_eq!(cells.to_string(), "____");
    }

    #[test]
    fn test_cells_set_reports_change() {
        let mut cells = Cells::empty();
        assert!(cells.set(1, sym(4)));
        assert!(!cells.set(1, sym(4)));
        assert!(!cells.set(CODE_LENGTH, sym(4)));
        assert_eq!(cells.get(1), Some(sym(4)));
        assert_eq!(cells.get(CODE_LENGTH), None);
    }

    #[test]
    fn test_cells_cycle() {
        let mut cells = Cells::empty();
        assert_eq!(cells.cycle(0), Some(sym(1)));
        assert_eq!(cells.cycle(0), Some(sym(2)));
        assert_eq!(cells.cycle(CODE_LENGTH), None);
        assert_eq!(cells.to_string(), "2___");
    }

    #[test]
    fn test_complete_cells_convert_to_code() {
        let cells = Cells::from_symbols([sym(1), sym(2), sym(3), sym(4)]);
        assert!(cells.is_complete());
        let code = cells.to_code().unwrap();
        assert_eq!(code.cells(), cells);
    }

    #[test]
    fn test_code_new_errors() {
        assert_eq!(Code::new([1, 2, 3, 7]), Err(CodeError::OutOfPalette(7)));
        assert_eq!(Code::new([1, 0, 3, 4]), Err(CodeError::Unset(1)));
        assert!(Code::new([6, 6, 6, 6]).is_ok());
    }

    #[test]
    fn test_code_parse() {
        let code: Code = "6152".parse().unwrap();
        assert_eq!(code.get(0), Some(sym(6)));
        assert_eq!(code.get(3), Some(sym(2)));
        assert_eq!(code.get(4), None);

        assert_eq!("123".parse::<Code>(), Err(CodeError::WrongLength(3)));
        assert_eq!("12345".parse::<Code>(), Err(CodeError::WrongLength(5)));
        assert_eq!("12a4".parse::<Code>(), Err(CodeError::NotADigit('a')));
        assert_eq!("1294".parse::<Code>(), Err(CodeError::OutOfPalette(9)));
    }

    #[test]
    fn test_code_error_display() {
        assert_eq!(CodeError::WrongLength(3).to_string(), "expected 4 symbols, got 3");
        assert_eq!(CodeError::Unset(2).to_string(), "position 2 is unset");
    }

    #[test]
    fn test_code_serde_validates() {
        let code: Code = "1123".parse().unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "[1,1,2,3]");
        assert_eq!(serde_json::from_str::<Code>(&json).unwrap(), code);
        assert!(serde_json::from_str::<Code>("[1,0,2,3]").is_err());
    }
}
