//! Core type contracts for the bridge.
//!
//! - No I/O
//! - No mutable global state
//!
//! Mappings here are static; changes must be additive only.

pub mod datatype;
pub mod table;
pub mod value;

#[cfg(test)]
mod unit_tests;
