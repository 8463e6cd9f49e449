// src/lib.rs
//! NMEA Monitor Library
//!
//! Reads NMEA-0183 sentences from a GNSS receiver over a serial link and
//! extracts position, fix-quality, and velocity data from GGA and RMC
//! sentences. The parser itself is a pure function over a line of text,
//! so it is usable without any serial hardware attached.

pub mod config;
pub mod display;
pub mod error;
pub mod monitor;
pub mod nmea;

// Re-export main types for convenience
pub use error::{MonitorError, Result};
pub use monitor::{MonitorSnapshot, NmeaMonitor};
pub use nmea::{parse, FixRecord, NavigationRecord, ParsedSentence};
