//! Configuration module
//!
//! This module handles user preferences for the markdown decorations,
//! including serialization to/from JSON and persistent storage in the
//! platform-specific config directory.

mod persistence;
mod settings;

pub use persistence::*;
pub use settings::*;
