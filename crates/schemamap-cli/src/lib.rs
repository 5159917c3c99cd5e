//! CLI library components for the schema mapping generator.

pub mod logging;
pub mod persist;
