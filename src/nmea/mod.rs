// src/nmea/mod.rs
//! NMEA-0183 sentence handling

pub mod coords;
pub mod parser;
pub mod records;

pub use parser::parse;
pub use records::{FixRecord, NavigationRecord, ParsedSentence};
