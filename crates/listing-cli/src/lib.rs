//! Library side of the surgeon listing generator.
//!
//! The binary wires these pieces to clap; tests drive them directly.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod types;
