//! This module defines the `Tape` struct: a logically infinite, blank-padded
//! sequence of symbols backed by a finite double-ended buffer. Positions are
//! addressed in a stable `i64` coordinate space that never shifts when the
//! tape grows, so callers can keep raw head positions across extensions.

use crate::types::BLANK_SYMBOL;
use std::collections::VecDeque;

/// A growable, blank-padded tape.
///
/// Explicit cells live in a `VecDeque` so extension on either side stays
/// amortized-constant. `origin` is the logical position of the first explicit
/// cell; it goes negative when the tape grows to the left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: VecDeque<char>,
    origin: i64,
}

impl Tape {
    /// Creates a tape holding the input symbols starting at position 0.
    /// An empty input yields a single blank cell, so the tape is never empty.
    pub fn new(input: &str) -> Self {
        let cells: VecDeque<char> = if input.is_empty() {
            VecDeque::from([BLANK_SYMBOL])
        } else {
            input.chars().collect()
        };

        Self { cells, origin: 0 }
    }

    /// Returns the symbol at `position`, or the blank symbol if the position
    /// lies outside the explicit cell range. Reading never extends the tape.
    pub fn read(&self, position: i64) -> char {
        if position < self.origin {
            return BLANK_SYMBOL;
        }

        self.cells
            .get((position - self.origin) as usize)
            .copied()
            .unwrap_or(BLANK_SYMBOL)
    }

    /// Stores `symbol` at `position`, extending the explicit range with blank
    /// cells on whichever side is needed. Extension never truncates and never
    /// renumbers existing positions.
    pub fn write(&mut self, position: i64, symbol: char) {
        while position < self.origin {
            self.cells.push_front(BLANK_SYMBOL);
            self.origin -= 1;
        }
        while position >= self.origin + self.cells.len() as i64 {
            self.cells.push_back(BLANK_SYMBOL);
        }

        self.cells[(position - self.origin) as usize] = symbol;
    }

    /// The logical position of the first explicit cell.
    pub fn start(&self) -> i64 {
        self.origin
    }

    /// The logical position one past the last explicit cell.
    pub fn end(&self) -> i64 {
        self.origin + self.cells.len() as i64
    }

    /// Renders the explicit cells with trailing blanks stripped. An all-blank
    /// tape renders as a single blank symbol, never as an empty string.
    pub fn render(&self) -> String {
        let trailing_blanks = self
            .cells
            .iter()
            .rev()
            .take_while(|&&c| c == BLANK_SYMBOL)
            .count();

        let content: String = self
            .cells
            .iter()
            .take(self.cells.len() - trailing_blanks)
            .collect();

        if content.is_empty() {
            BLANK_SYMBOL.to_string()
        } else {
            content
        }
    }
}
