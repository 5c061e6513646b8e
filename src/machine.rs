//! This module defines the `Machine` struct, which simulates a deterministic
//! single-tape Turing Machine: it holds the current state, the tape, and the
//! head position, and executes transition rules from a borrowed immutable
//! `TransitionTable`.
//!
//! A `Machine` is constructed fresh per input string and discarded after its
//! run, so nothing leaks between runs. Many inputs against the same table are
//! independent machines sharing only the read-only table.

use crate::table::TransitionTable;
use crate::tape::Tape;
use crate::types::{Configuration, RunResult, StepOutcome};

/// A running single-tape Turing Machine.
pub struct Machine<'t> {
    table: &'t TransitionTable,
    tape: Tape,
    head: i64,
    state: String,
}

impl<'t> Machine<'t> {
    /// Creates a machine for one input string: tape initialized to the input
    /// symbols (a single blank cell if the input is empty), head at position
    /// 0, state set to the table's initial state.
    pub fn new(table: &'t TransitionTable, input: &str) -> Self {
        Self {
            table,
            tape: Tape::new(input),
            head: 0,
            state: table.initial_state().to_string(),
        }
    }

    /// Executes a single step.
    ///
    /// Reads the symbol under the head (blank outside the written region),
    /// looks up `(current state, symbol)`, and either applies the rule
    /// (write, move, transition) or halts. A halted step mutates nothing:
    /// the machine is stuck, which is a normal outcome, not an error.
    pub fn step(&mut self) -> StepOutcome {
        let symbol = self.tape.read(self.head);

        let rule = match self.table.lookup(&self.state, symbol) {
            Some(rule) => rule.clone(),
            None => return StepOutcome::Halted,
        };

        self.tape.write(self.head, rule.write);
        self.head += rule.movement.offset();
        self.state = rule.next;

        StepOutcome::Advanced
    }

    /// Runs the machine until it accepts, gets stuck, or exhausts the step
    /// budget, recording one `Configuration` per applied step plus the
    /// initial one.
    ///
    /// Acceptance is evaluated after the loop exits, whatever the exit
    /// reason, so a machine that lands on an accepting state exactly at the
    /// budget boundary still accepts. A machine whose initial state is
    /// already accepting takes no steps and returns a length-1 trace.
    ///
    /// The budget must be finite and positive; exhausting it is a defined
    /// halting outcome signaling a probable non-halting computation.
    pub fn run(&mut self, step_budget: usize) -> RunResult {
        let mut trace = vec![self.configuration()];

        let mut steps_taken = 0;
        while steps_taken < step_budget && !self.table.is_accepting(&self.state) {
            match self.step() {
                // Stuck: the last appended configuration already describes
                // the halted machine
                StepOutcome::Halted => break,
                StepOutcome::Advanced => {
                    trace.push(self.configuration());
                    steps_taken += 1;
                }
            }
        }

        RunResult {
            accepted: self.table.is_accepting(&self.state),
            trace,
            final_state: self.state.clone(),
            final_tape: self.tape.render(),
        }
    }

    /// The current state name.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// The current head position, in the tape's stable coordinate space.
    pub fn head(&self) -> i64 {
        self.head
    }

    /// The machine's tape.
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Captures the current instantaneous description: explicit tape content
    /// left of the head, the state, and the content from the head rightward
    /// (at least one symbol, blank if the head is past the written region).
    pub fn configuration(&self) -> Configuration {
        let lo = self.tape.start().min(self.head);
        let hi = self.tape.end().max(self.head + 1);

        Configuration {
            left: (lo..self.head).map(|pos| self.tape.read(pos)).collect(),
            state: self.state.clone(),
            right: (self.head..hi).map(|pos| self.tape.read(pos)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MachineSpec, TransitionDecl};
    use crate::types::Direction;

    fn decl(state: &str, read: &str, write: &str, movement: Direction, next: &str) -> TransitionDecl {
        TransitionDecl {
            state: state.to_string(),
            read: read.to_string(),
            write: write.to_string(),
            movement,
            next: next.to_string(),
        }
    }

    /// Flips every bit, then accepts on the first blank.
    fn bit_flip_table() -> TransitionTable {
        let spec = MachineSpec {
            states: vec!["q0".to_string(), "qf".to_string()],
            input_alphabet: vec!["0".to_string(), "1".to_string()],
            tape_alphabet: vec!["0".to_string(), "1".to_string(), "B".to_string()],
            initial_state: "q0".to_string(),
            accept_states: vec!["qf".to_string()],
            transitions: vec![
                decl("q0", "0", "1", Direction::Right, "q0"),
                decl("q0", "1", "0", Direction::Right, "q0"),
                decl("q0", "B", "B", Direction::Stay, "qf"),
            ],
        };

        TransitionTable::build(&spec).unwrap()
    }

    #[test]
    fn test_new_machine_initial_position() {
        let table = bit_flip_table();
        let machine = Machine::new(&table, "01");

        assert_eq!(machine.state(), "q0");
        assert_eq!(machine.head(), 0);
        assert_eq!(machine.configuration().to_string(), "[q0]01");
    }

    #[test]
    fn test_single_step_applies_rule() {
        let table = bit_flip_table();
        let mut machine = Machine::new(&table, "01");

        let outcome = machine.step();

        assert_eq!(outcome, StepOutcome::Advanced);
        assert_eq!(machine.state(), "q0");
        assert_eq!(machine.head(), 1);
        assert_eq!(machine.configuration().to_string(), "1[q0]1");
    }

    #[test]
    fn test_stuck_step_mutates_nothing() {
        let table = bit_flip_table();
        let mut machine = Machine::new(&table, "2");

        let before = machine.configuration();
        let outcome = machine.step();

        assert_eq!(outcome, StepOutcome::Halted);
        assert_eq!(machine.configuration(), before);
        assert_eq!(machine.head(), 0);
    }

    #[test]
    fn test_run_example_scenario() {
        // Input "01": flip both bits, accept on the blank
        let table = bit_flip_table();
        let result = Machine::new(&table, "01").run(100);

        assert!(result.accepted);
        assert_eq!(result.trace.len(), 4);
        assert_eq!(result.steps_taken(), 3);
        assert_eq!(result.final_state, "qf");
        assert_eq!(result.final_tape, "10");

        let rendered: Vec<String> = result.trace.iter().map(|c| c.to_string()).collect();
        assert_eq!(rendered, vec!["[q0]01", "1[q0]1", "10[q0]B", "10[qf]B"]);
    }

    #[test]
    fn test_run_empty_input() {
        // Empty input: a single blank cell, one Stay step into the accept state
        let table = bit_flip_table();
        let result = Machine::new(&table, "").run(100);

        assert!(result.accepted);
        assert_eq!(result.trace.len(), 2);
        assert_eq!(result.final_tape, "B");
        assert_eq!(result.trace[0].to_string(), "[q0]B");
        assert_eq!(result.trace[1].to_string(), "[qf]B");
    }

    #[test]
    fn test_run_stuck_on_first_step() {
        // '2' has no rule from q0: stuck immediately, trace holds only the
        // initial configuration
        let table = bit_flip_table();
        let result = Machine::new(&table, "2").run(100);

        assert!(!result.accepted);
        assert_eq!(result.trace.len(), 1);
        assert_eq!(result.steps_taken(), 0);
        assert_eq!(result.final_state, "q0");
    }

    #[test]
    fn test_run_accepting_initial_state_takes_no_steps() {
        let spec = MachineSpec {
            states: vec!["q0".to_string()],
            input_alphabet: vec!["0".to_string()],
            tape_alphabet: vec!["0".to_string(), "B".to_string()],
            initial_state: "q0".to_string(),
            accept_states: vec!["q0".to_string()],
            transitions: vec![decl("q0", "0", "0", Direction::Right, "q0")],
        };
        let table = TransitionTable::build(&spec).unwrap();

        let result = Machine::new(&table, "000").run(100);

        assert!(result.accepted);
        assert_eq!(result.trace.len(), 1);
        assert_eq!(result.final_tape, "000");
    }

    #[test]
    fn test_run_budget_exhaustion() {
        // A one-rule loop that never reaches an accepting state
        let spec = MachineSpec {
            states: vec!["q0".to_string(), "qf".to_string()],
            input_alphabet: vec!["0".to_string()],
            tape_alphabet: vec!["0".to_string(), "B".to_string()],
            initial_state: "q0".to_string(),
            accept_states: vec!["qf".to_string()],
            transitions: vec![
                decl("q0", "0", "0", Direction::Right, "q0"),
                decl("q0", "B", "0", Direction::Right, "q0"),
            ],
        };
        let table = TransitionTable::build(&spec).unwrap();

        let result = Machine::new(&table, "0").run(5);

        assert!(!result.accepted);
        assert_eq!(result.steps_taken(), 5);
        assert_eq!(result.trace.len(), 6);
    }

    #[test]
    fn test_run_determinism() {
        let table = bit_flip_table();

        let first = Machine::new(&table, "1100").run(100);
        let second = Machine::new(&table, "1100").run(100);

        assert_eq!(first, second);
    }

    #[test]
    fn test_no_leakage_between_runs() {
        // Fresh machines per input: the second run must not see the first
        // run's tape or head position
        let table = bit_flip_table();

        let _ = Machine::new(&table, "111111").run(100);
        let result = Machine::new(&table, "0").run(100);

        assert_eq!(result.final_tape, "1");
        assert_eq!(result.trace[0].to_string(), "[q0]0");
    }

    #[test]
    fn test_left_movement_keeps_configuration_consistent() {
        // One rule moving left from position 0 puts the head on an implicit
        // blank cell left of the written region
        let spec = MachineSpec {
            states: vec!["q0".to_string(), "q1".to_string()],
            input_alphabet: vec!["a".to_string()],
            tape_alphabet: vec!["a".to_string(), "B".to_string()],
            initial_state: "q0".to_string(),
            accept_states: vec![],
            transitions: vec![decl("q0", "a", "a", Direction::Left, "q1")],
        };
        let table = TransitionTable::build(&spec).unwrap();

        let mut machine = Machine::new(&table, "a");
        machine.step();

        assert_eq!(machine.head(), -1);
        assert_eq!(machine.configuration().to_string(), "[q1]Ba");
    }
}
