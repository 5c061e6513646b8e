//! This crate provides the core logic for a deterministic single-tape Turing
//! Machine simulator. It includes modules for the transition table, the
//! blank-padded tape, the machine step and run loop with instantaneous
//! description traces, declarative configuration loading, and a catalog of
//! embedded example machines.

pub mod catalog;
pub mod config;
pub mod loader;
pub mod machine;
pub mod table;
pub mod tape;
pub mod types;

/// Re-exports the `CatalogManager` struct and catalog types from the catalog module.
pub use catalog::{CatalogInfo, CatalogManager, MACHINES};
/// Re-exports the declarative configuration schema from the config module.
pub use config::{MachineSpec, SimulationConfig, TransitionDecl};
/// Re-exports the `ConfigLoader` struct from the loader module.
pub use loader::ConfigLoader;
/// Re-exports the `Machine` struct from the machine module.
pub use machine::Machine;
/// Re-exports the `TransitionTable` struct from the table module.
pub use table::TransitionTable;
/// Re-exports the `Tape` struct from the tape module.
pub use tape::Tape;
/// Re-exports various types related to machine definition and execution from the types module.
pub use types::{
    Configuration, Direction, RunResult, SimulatorError, StepOutcome, TransitionRule,
    BLANK_SYMBOL, DEFAULT_STEP_BUDGET,
};
