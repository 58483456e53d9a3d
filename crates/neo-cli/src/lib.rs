//! CLI library components for the NEO uNID Processor.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
