//! This module defines the `TransitionTable`: the immutable lookup structure
//! a machine consults on every step. Building a table from a declarative
//! `MachineSpec` performs all configuration-level validation eagerly, so no
//! simulation can start from a malformed definition.

use crate::config::{MachineSpec, TransitionDecl};
use crate::types::{SimulatorError, TransitionRule, BLANK_SYMBOL};
use std::collections::{HashMap, HashSet};

/// An immutable transition table plus the state designations a run needs:
/// the initial state and the accepting set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTable {
    rules: HashMap<String, HashMap<char, TransitionRule>>,
    initial_state: String,
    accept_states: HashSet<String>,
}

impl TransitionTable {
    /// Builds a table from a declarative machine spec, validating it eagerly.
    ///
    /// Checks performed, all fatal:
    /// - the blank symbol is in the tape alphabet and not in the input alphabet,
    /// - the input alphabet is a subset of the tape alphabet,
    /// - the initial state and every accepting state are declared states,
    /// - every rule references declared states and tape-alphabet symbols.
    ///
    /// Duplicate `(state, read)` declarations are not an error: the later
    /// declaration silently overrides the earlier one (last write wins).
    pub fn build(spec: &MachineSpec) -> Result<Self, SimulatorError> {
        let states: HashSet<&str> = spec.states.iter().map(String::as_str).collect();
        let tape_alphabet = parse_alphabet(&spec.tape_alphabet)?;
        let input_alphabet = parse_alphabet(&spec.input_alphabet)?;

        if !tape_alphabet.contains(&BLANK_SYMBOL) {
            return Err(SimulatorError::InvalidBlankSymbol(format!(
                "'{}' must be in the tape alphabet",
                BLANK_SYMBOL
            )));
        }
        if input_alphabet.contains(&BLANK_SYMBOL) {
            return Err(SimulatorError::InvalidBlankSymbol(format!(
                "'{}' must not be in the input alphabet",
                BLANK_SYMBOL
            )));
        }
        if let Some(&missing) = input_alphabet.difference(&tape_alphabet).next() {
            return Err(SimulatorError::InputSymbolOutsideTapeAlphabet(missing));
        }

        if !states.contains(spec.initial_state.as_str()) {
            return Err(SimulatorError::UnknownInitialState(
                spec.initial_state.clone(),
            ));
        }
        for accept in &spec.accept_states {
            if !states.contains(accept.as_str()) {
                return Err(SimulatorError::UnknownAcceptState(accept.clone()));
            }
        }

        let mut rules: HashMap<String, HashMap<char, TransitionRule>> = HashMap::new();
        for decl in &spec.transitions {
            let (read, rule) = parse_rule(decl, &states, &tape_alphabet)?;
            // Last declared rule for a (state, read) key wins
            rules.entry(decl.state.clone()).or_default().insert(read, rule);
        }

        Ok(Self {
            rules,
            initial_state: spec.initial_state.clone(),
            accept_states: spec.accept_states.iter().cloned().collect(),
        })
    }

    /// Returns the rule for `(state, symbol)`, or `None` if no rule is
    /// declared. Absence is a valid halting condition, not an error.
    pub fn lookup(&self, state: &str, symbol: char) -> Option<&TransitionRule> {
        self.rules.get(state).and_then(|by_symbol| by_symbol.get(&symbol))
    }

    /// The state every run starts in.
    pub fn initial_state(&self) -> &str {
        &self.initial_state
    }

    /// Whether `state` is a member of the accepting set.
    pub fn is_accepting(&self, state: &str) -> bool {
        self.accept_states.contains(state)
    }

    /// The number of distinct `(state, symbol)` keys with a rule.
    pub fn rule_count(&self) -> usize {
        self.rules.values().map(HashMap::len).sum()
    }
}

/// Converts a declared transition into a `(read symbol, rule)` pair,
/// validating its states and symbols.
fn parse_rule(
    decl: &TransitionDecl,
    states: &HashSet<&str>,
    tape_alphabet: &HashSet<char>,
) -> Result<(char, TransitionRule), SimulatorError> {
    for state in [&decl.state, &decl.next] {
        if !states.contains(state.as_str()) {
            return Err(SimulatorError::UnknownTransitionState(state.clone()));
        }
    }

    let read = parse_symbol(&decl.read)?;
    let write = parse_symbol(&decl.write)?;
    for symbol in [read, write] {
        if !tape_alphabet.contains(&symbol) {
            return Err(SimulatorError::SymbolOutsideTapeAlphabet(symbol));
        }
    }

    Ok((
        read,
        TransitionRule {
            write,
            movement: decl.movement,
            next: decl.next.clone(),
        },
    ))
}

/// Parses a list of one-character schema strings into a symbol set.
fn parse_alphabet(symbols: &[String]) -> Result<HashSet<char>, SimulatorError> {
    symbols.iter().map(|s| parse_symbol(s)).collect()
}

/// Parses a schema string that must be exactly one character.
fn parse_symbol(input: &str) -> Result<char, SimulatorError> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(SimulatorError::InvalidSymbol(input.to_string())),
    }
}
