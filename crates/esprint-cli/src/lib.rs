//! Command-line driver for esprint.
//!
//! Reads one ESTree/Babel JSON node, prints it with the default dispatch
//! table and writes the source text to stdout.

pub mod args;
pub mod config;
pub mod driver;
pub mod tracing_config;
