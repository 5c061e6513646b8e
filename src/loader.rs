//! This module provides the `ConfigLoader` struct, responsible for loading
//! simulation configurations from various sources, including files and strings.

use crate::config::SimulationConfig;
use crate::types::SimulatorError;
use std::fs;
use std::path::{Path, PathBuf};

/// `ConfigLoader` is a utility struct for loading simulation configurations.
/// It provides methods to load a configuration from an individual YAML file,
/// from string content, and to discover and load all `.yaml`/`.yml` files
/// within a specified directory.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads a single simulation configuration from the specified file path.
    ///
    /// # Returns
    ///
    /// * `Ok(SimulationConfig)` if the file is successfully read and parsed.
    /// * `Err(SimulatorError::FileError)` if the file cannot be read.
    /// * `Err(SimulatorError::ParseError)` if the content is not a valid configuration.
    pub fn load_config(path: &Path) -> Result<SimulationConfig, SimulatorError> {
        let content = fs::read_to_string(path).map_err(|e| {
            SimulatorError::FileError(format!("Failed to read file {}: {}", path.display(), e))
        })?;

        Self::load_config_from_str(&content)
    }

    /// Loads a simulation configuration from the provided string content.
    ///
    /// This is useful for configurations that are not stored in files, e.g.
    /// embedded documents or user input.
    pub fn load_config_from_str(content: &str) -> Result<SimulationConfig, SimulatorError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Loads all configuration files (`.yaml` or `.yml` extension) from a
    /// given directory.
    ///
    /// It iterates through the directory, attempts to load each candidate
    /// file, and collects the results. Directories and files with other
    /// extensions are skipped.
    pub fn load_configs(
        directory: &Path,
    ) -> Vec<Result<(PathBuf, SimulationConfig), SimulatorError>> {
        if !directory.exists() {
            return vec![Err(SimulatorError::FileError(format!(
                "Directory {} does not exist",
                directory.display()
            )))];
        }

        let entries = match fs::read_dir(directory) {
            Ok(entries) => entries,
            Err(e) => {
                return vec![Err(SimulatorError::FileError(format!(
                    "Failed to read directory {}: {}",
                    directory.display(),
                    e
                )))]
            }
        };

        entries
            .filter_map(|entry| {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        return Some(Err(SimulatorError::FileError(format!(
                            "Failed to read directory entry: {}",
                            e
                        ))))
                    }
                };

                let path = entry.path();

                // Skip directories and files without a YAML extension
                let is_yaml = path
                    .extension()
                    .is_some_and(|ext| ext == "yaml" || ext == "yml");
                if path.is_dir() || !is_yaml {
                    return None;
                }

                match Self::load_config(&path) {
                    Ok(config) => Some(Ok((path, config))),
                    Err(e) => Some(Err(SimulatorError::FileError(format!(
                        "Failed to load configuration from {}: {}",
                        path.display(),
                        e
                    )))),
                }
            })
            .collect()
    }
}
