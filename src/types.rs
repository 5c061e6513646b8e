//! This module defines the core data structures and types used throughout the Turing Machine
//! simulator, including movement directions, transition rules, run results, and error types.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The reserved blank symbol. It must be a member of every tape alphabet and
/// must never be declared in an input alphabet.
pub const BLANK_SYMBOL: char = 'B';
/// The default maximum number of steps to execute before forcibly halting a run.
pub const DEFAULT_STEP_BUDGET: usize = 10_000;

/// Represents the possible directions a Turing Machine head can move.
///
/// Serialized as the single-letter tokens used by the declarative schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Move the head one position to the left.
    #[serde(rename = "L")]
    Left,
    /// Move the head one position to the right.
    #[serde(rename = "R")]
    Right,
    /// Keep the head in the same position.
    #[serde(rename = "S")]
    Stay,
}

impl Direction {
    /// The head position offset this direction applies.
    pub fn offset(self) -> i64 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
            Direction::Stay => 0,
        }
    }
}

/// The action half of a transition: what to write, where to move, and the
/// state to enter. The `(state, read)` key lives in the
/// [`TransitionTable`](crate::table::TransitionTable).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRule {
    /// The symbol written at the head position.
    pub write: char,
    /// The head movement applied after writing.
    pub movement: Direction,
    /// The state the machine enters.
    pub next: String,
}

/// Represents the outcome of a single Turing Machine step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// A transition rule was applied; the machine mutated and continues.
    Advanced,
    /// No rule matched the current `(state, symbol)` pair; nothing mutated.
    Halted,
}

/// An instantaneous description (ID): a point-in-time snapshot of the tape
/// split at the head, plus the current state. Immutable once captured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Tape content strictly left of the head.
    pub left: String,
    /// The machine state at the time of the snapshot.
    pub state: String,
    /// Tape content at and right of the head. Never empty: a head past the
    /// written region shows the blank symbol.
    pub right: String,
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]{}", self.left, self.state, self.right)
    }
}

/// The result of running a machine to completion on one input string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    /// Whether the machine halted in an accepting state.
    pub accepted: bool,
    /// The ordered trace of instantaneous descriptions, starting with the
    /// initial configuration. One entry per applied step plus the initial one.
    pub trace: Vec<Configuration>,
    /// The state the machine halted in.
    pub final_state: String,
    /// The rendered tape content at halt, trailing blanks stripped.
    pub final_tape: String,
}

impl RunResult {
    /// The number of transitions applied during the run.
    pub fn steps_taken(&self) -> usize {
        self.trace.len() - 1
    }
}

/// Represents various errors that can occur while building a machine from a
/// declarative configuration. Per-step conditions (no applicable transition,
/// budget exhaustion) are normal halting outcomes, never errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulatorError {
    /// The declared initial state is not a member of the state set.
    #[error("Initial state '{0}' is not in the declared state set")]
    UnknownInitialState(String),
    /// A declared accepting state is not a member of the state set.
    #[error("Accepting state '{0}' is not in the declared state set")]
    UnknownAcceptState(String),
    /// A transition rule references a state outside the state set.
    #[error("Transition references undeclared state '{0}'")]
    UnknownTransitionState(String),
    /// A transition rule reads or writes a symbol outside the tape alphabet.
    #[error("Symbol '{0}' is not in the tape alphabet")]
    SymbolOutsideTapeAlphabet(char),
    /// An input alphabet symbol is missing from the tape alphabet.
    #[error("Input alphabet symbol '{0}' is missing from the tape alphabet")]
    InputSymbolOutsideTapeAlphabet(char),
    /// The blank symbol is missing from the tape alphabet, or declared in the
    /// input alphabet.
    #[error("Invalid blank symbol usage: {0}")]
    InvalidBlankSymbol(String),
    /// A schema token expected to be a single-character symbol was not.
    #[error("'{0}' is not a single-character symbol")]
    InvalidSymbol(String),
    /// Indicates an error while parsing a configuration document.
    #[error("Configuration parsing error: {0}")]
    ParseError(String),
    /// Indicates an error related to file system operations, such as reading
    /// configuration files.
    #[error("File error: {0}")]
    FileError(String),
}

impl From<serde_yaml::Error> for SimulatorError {
    fn from(err: serde_yaml::Error) -> Self {
        SimulatorError::ParseError(err.to_string())
    }
}
