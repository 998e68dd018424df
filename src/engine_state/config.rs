//! # Engine Configuration Module
//!
//! This module defines the tunable parameters of the interaction layer and
//! loads them from a JSON file. Every field has a sensible default, and a
//! config file only needs to mention the fields it wants to override, so a
//! missing or partial file never stops a session from starting.

use std::fmt;
use std::path::Path;

use serde::Deserialize;

/// Tunable parameters for a session.
///
/// Loaded once at startup and treated as read-only afterwards; nothing in
/// the per-frame path mutates configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Movement speed in world units per second.
    pub move_speed: f32,
    /// Mouse look sensitivity multiplier.
    pub mouse_sensitivity: f32,
    /// Maximum distance in world units the aim ray travels.
    pub reach_distance: f32,
    /// Initial camera (eye) position in world space.
    pub spawn_position: [f32; 3],
    /// Name of the block type selected when the session starts.
    pub starting_block: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            move_speed: 4.0,
            mouse_sensitivity: 2.0,
            reach_distance: 5.0,
            spawn_position: [8.0, 8.0, 8.0],
            starting_block: "dirt".to_string(),
        }
    }
}

impl EngineConfig {
    /// Loads configuration from a JSON file.
    ///
    /// Fields absent from the file keep their defaults.
    ///
    /// # Arguments
    /// * `path` - Path to the JSON configuration file
    ///
    /// # Returns
    /// The parsed `EngineConfig`, or a `ConfigError` when the file cannot
    /// be read or parsed.
    pub fn load_from_file(path: &Path) -> Result<EngineConfig, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

/// Why a configuration file could not be loaded.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io(std::io::Error),
    /// The file contents were not valid configuration JSON.
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(error) => write!(f, "failed to read config file: {}", error),
            ConfigError::Parse(error) => write!(f, "failed to parse config file: {}", error),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(error: std::io::Error) -> Self {
        ConfigError::Io(error)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        ConfigError::Parse(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults_for_missing_fields() {
        let config: EngineConfig =
            serde_json::from_str(r#"{ "reach_distance": 8.0 }"#).unwrap();
        assert_eq!(config.reach_distance, 8.0);
        assert_eq!(config.move_speed, EngineConfig::default().move_speed);
        assert_eq!(config.starting_block, "dirt");
    }

    #[test]
    fn full_json_overrides_everything() {
        let config: EngineConfig = serde_json::from_str(
            r#"{
                "move_speed": 6.0,
                "mouse_sensitivity": 1.5,
                "reach_distance": 10.0,
                "spawn_position": [0.0, 20.0, 0.0],
                "starting_block": "stone"
            }"#,
        )
        .unwrap();
        assert_eq!(config.move_speed, 6.0);
        assert_eq!(config.spawn_position, [0.0, 20.0, 0.0]);
        assert_eq!(config.starting_block, "stone");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = EngineConfig::load_from_file(Path::new("/nonexistent/config.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
