//! This module manages the collection of embedded example machines. The
//! definitions live in `machines/*.yaml` and are compiled into the binary,
//! so the simulator is usable without any external configuration file.

use crate::config::SimulationConfig;
use crate::loader::ConfigLoader;
use crate::types::SimulatorError;

use std::sync::RwLock;

// Default embedded machine definitions
const MACHINE_TEXTS: [&str; 3] = [
    include_str!("../machines/bit-flip.yaml"),
    include_str!("../machines/even-zeros.yaml"),
    include_str!("../machines/unary-addition.yaml"),
];

lazy_static::lazy_static! {
    pub static ref MACHINES: RwLock<Vec<SimulationConfig>> = RwLock::new(Vec::new());
}

/// Summary information about one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogInfo {
    pub index: usize,
    pub name: String,
    pub initial_state: String,
    pub state_count: usize,
    pub transition_count: usize,
    pub input_count: usize,
}

pub struct CatalogManager;

impl CatalogManager {
    /// Parses the embedded machine definitions into the catalog.
    pub fn load() -> Result<(), SimulatorError> {
        let mut machines = Vec::new();

        for text in MACHINE_TEXTS {
            match ConfigLoader::load_config_from_str(text) {
                Ok(config) => machines.push(config),
                Err(e) => eprintln!("Failed to parse embedded machine: {}", e),
            }
        }

        if let Ok(mut write_guard) = MACHINES.write() {
            *write_guard = machines;
        } else {
            return Err(SimulatorError::FileError(
                "Failed to acquire write lock".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the number of available machines
    pub fn machine_count() -> usize {
        // Initialize with the embedded machines if not already initialized
        let _ = Self::load();

        MACHINES.read().map(|machines| machines.len()).unwrap_or(0)
    }

    /// Get a machine configuration by its index
    pub fn get_by_index(index: usize) -> Result<SimulationConfig, SimulatorError> {
        let _ = Self::load();

        MACHINES
            .read()
            .map_err(|_| SimulatorError::FileError("Failed to acquire read lock".to_string()))?
            .get(index)
            .cloned()
            .ok_or_else(|| {
                SimulatorError::FileError(format!("Machine index {} out of range", index))
            })
    }

    /// Get a machine configuration by its name
    pub fn get_by_name(name: &str) -> Result<SimulationConfig, SimulatorError> {
        let _ = Self::load();

        MACHINES
            .read()
            .map_err(|_| SimulatorError::FileError("Failed to acquire read lock".to_string()))?
            .iter()
            .find(|config| config.name == name)
            .cloned()
            .ok_or_else(|| SimulatorError::FileError(format!("Machine '{}' not found", name)))
    }

    /// List all machine names
    pub fn list_names() -> Vec<String> {
        let _ = Self::load();

        MACHINES
            .read()
            .map(|machines| {
                machines
                    .iter()
                    .map(|config| config.name.clone())
                    .collect()
            })
            .unwrap_or_else(|_| Vec::new())
    }

    /// Get summary information about a machine by its index
    pub fn get_info(index: usize) -> Result<CatalogInfo, SimulatorError> {
        let config = Self::get_by_index(index)?;

        Ok(CatalogInfo {
            index,
            name: config.name.clone(),
            initial_state: config.mt.initial_state.clone(),
            state_count: config.mt.states.len(),
            transition_count: config.mt.transitions.len(),
            input_count: config.inputs.len(),
        })
    }
}
