// src/error.rs
//! Error types for the NMEA monitor
//!
//! Sentence parsing never fails; bad lines degrade to absence. These
//! errors cover the I/O shell around the parser.

use std::fmt;

pub type Result<T> = std::result::Result<T, MonitorError>;

#[derive(Debug)]
pub enum MonitorError {
    Io(std::io::Error),
    Serial(tokio_serial::Error),
    Json(serde_json::Error),
    Connection(String),
    Other(String),
}

impl fmt::Display for MonitorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonitorError::Io(e) => write!(f, "IO error: {}", e),
            MonitorError::Serial(e) => write!(f, "Serial error: {}", e),
            MonitorError::Json(e) => write!(f, "JSON error: {}", e),
            MonitorError::Connection(msg) => write!(f, "Connection error: {}", msg),
            MonitorError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for MonitorError {}

impl From<std::io::Error> for MonitorError {
    fn from(error: std::io::Error) -> Self {
        MonitorError::Io(error)
    }
}

impl From<tokio_serial::Error> for MonitorError {
    fn from(error: tokio_serial::Error) -> Self {
        MonitorError::Serial(error)
    }
}

impl From<serde_json::Error> for MonitorError {
    fn from(error: serde_json::Error) -> Self {
        MonitorError::Json(error)
    }
}
