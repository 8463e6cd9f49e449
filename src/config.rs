// src/config.rs
//! Configuration management

use crate::error::{MonitorError, Result};
use serde::{Deserialize, Serialize};

/// Default baud rate for u-blox/Unicore style receivers.
pub const DEFAULT_BAUD_RATE: u32 = 115_200;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    pub serial_port: Option<String>,
    pub baudrate: u32,
    /// Terminal display refresh interval in milliseconds
    pub refresh_interval_ms: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            serial_port: None,
            baudrate: DEFAULT_BAUD_RATE,
            refresh_interval_ms: 1000,
        }
    }
}

impl MonitorConfig {
    /// Load configuration from the config file, falling back to defaults
    /// when no file exists.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .map_err(|e| MonitorError::Other(format!("Failed to read config file: {}", e)))?;

        let config: Self = serde_json::from_str(&contents)?;

        Ok(config)
    }

    /// Save configuration to the config file.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| MonitorError::Other(format!("Failed to create config directory: {}", e)))?;
        }

        let contents = serde_json::to_string_pretty(self)?;

        std::fs::write(&config_path, contents)
            .map_err(|e| MonitorError::Other(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Get the config file path
    fn config_path() -> Result<std::path::PathBuf> {
        use std::path::PathBuf;

        let home = std::env::var("HOME")
            .map_err(|_| MonitorError::Other("HOME environment variable not set".to_string()))?;

        Ok(PathBuf::from(home).join(".config").join("nmea-monitor").join("config.json"))
    }

    /// Update serial port settings
    pub fn update_serial(&mut self, port: String, baudrate: u32) {
        self.serial_port = Some(port);
        self.baudrate = baudrate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MonitorConfig::default();
        assert_eq!(config.serial_port, None);
        assert_eq!(config.baudrate, 115_200);
        assert_eq!(config.refresh_interval_ms, 1000);
    }

    #[test]
    fn test_update_serial() {
        let mut config = MonitorConfig::default();
        config.update_serial("/dev/ttyUSB0".to_string(), 9600);
        assert_eq!(config.serial_port, Some("/dev/ttyUSB0".to_string()));
        assert_eq!(config.baudrate, 9600);
    }

    #[test]
    fn test_config_round_trip() {
        let mut config = MonitorConfig::default();
        config.update_serial("COM4".to_string(), 115_200);

        let json = serde_json::to_string(&config).unwrap();
        let restored: MonitorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.serial_port, Some("COM4".to_string()));
        assert_eq!(restored.baudrate, 115_200);
    }
}
