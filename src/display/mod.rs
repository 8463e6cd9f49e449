// src/display/mod.rs
//! Display modes for parsed records

pub mod terminal;

pub use terminal::TerminalDisplay;
