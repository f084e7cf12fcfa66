//! CLI library components for ptype-shim.

pub mod commands;
pub mod logging;
