//! CLI library components for medtab.

pub mod cli;
pub mod logging;
pub mod pipeline;
