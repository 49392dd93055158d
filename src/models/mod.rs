//! Configuration and derived statistics.

pub mod settings;
pub mod stats;
