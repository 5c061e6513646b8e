//! This module defines the declarative configuration schema for a machine:
//! the serde-facing structs a YAML document deserializes into. Schema-level
//! symbols are one-character strings; they are converted to `char`s and
//! validated when a `TransitionTable` is built from the spec.

use crate::types::Direction;
use serde::{Deserialize, Serialize};

/// A full simulation configuration: one machine plus the input strings to
/// run it on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// An optional human-readable name for the machine.
    #[serde(default)]
    pub name: String,
    /// The machine definition.
    pub mt: MachineSpec,
    /// The input strings to simulate, in order.
    #[serde(default)]
    pub inputs: Vec<String>,
}

/// The declarative definition of a single-tape machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineSpec {
    /// The finite set of state names.
    pub states: Vec<String>,
    /// The input alphabet. Must be a subset of the tape alphabet and must not
    /// contain the blank symbol.
    pub input_alphabet: Vec<String>,
    /// The tape alphabet. Must contain the blank symbol.
    pub tape_alphabet: Vec<String>,
    /// The state the machine starts in.
    pub initial_state: String,
    /// The accepting states. May be empty.
    #[serde(default)]
    pub accept_states: Vec<String>,
    /// The transition rule declarations, in declaration order.
    pub transitions: Vec<TransitionDecl>,
}

/// One declared transition rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionDecl {
    /// The source state.
    pub state: String,
    /// The symbol read under the head.
    pub read: String,
    /// The symbol written at the head position.
    pub write: String,
    /// The head movement token: `L`, `R`, or `S`.
    #[serde(rename = "move")]
    pub movement: Direction,
    /// The state the machine transitions to.
    pub next: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
name: Bit flip
mt:
  states: [q0, qf]
  input_alphabet: ["0", "1"]
  tape_alphabet: ["0", "1", "B"]
  initial_state: q0
  accept_states: [qf]
  transitions:
    - { state: q0, read: "0", write: "1", move: R, next: q0 }
    - { state: q0, read: "1", write: "0", move: R, next: q0 }
    - { state: q0, read: "B", write: "B", move: S, next: qf }
inputs:
  - "01"
  - ""
"#;

    #[test]
    fn test_deserialize_full_config() {
        let config: SimulationConfig = serde_yaml::from_str(SAMPLE).unwrap();

        assert_eq!(config.name, "Bit flip");
        assert_eq!(config.mt.states, vec!["q0", "qf"]);
        assert_eq!(config.mt.initial_state, "q0");
        assert_eq!(config.mt.accept_states, vec!["qf"]);
        assert_eq!(config.mt.transitions.len(), 3);
        assert_eq!(config.inputs, vec!["01".to_string(), String::new()]);
    }

    #[test]
    fn test_deserialize_transition_decl() {
        let config: SimulationConfig = serde_yaml::from_str(SAMPLE).unwrap();
        let decl = &config.mt.transitions[2];

        assert_eq!(decl.state, "q0");
        assert_eq!(decl.read, "B");
        assert_eq!(decl.write, "B");
        assert_eq!(decl.movement, Direction::Stay);
        assert_eq!(decl.next, "qf");
    }

    #[test]
    fn test_name_and_inputs_default() {
        let minimal = r#"
mt:
  states: [q0]
  input_alphabet: []
  tape_alphabet: ["B"]
  initial_state: q0
  transitions: []
"#;
        let config: SimulationConfig = serde_yaml::from_str(minimal).unwrap();

        assert!(config.name.is_empty());
        assert!(config.inputs.is_empty());
        assert!(config.mt.accept_states.is_empty());
    }

    #[test]
    fn test_roundtrip() {
        let config: SimulationConfig = serde_yaml::from_str(SAMPLE).unwrap();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let reparsed: SimulationConfig = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(config, reparsed);
    }
}
