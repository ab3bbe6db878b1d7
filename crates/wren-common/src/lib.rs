//! Common utilities for the Wren style engine.
//!
//! This crate provides shared infrastructure used by the style crates and the CLI:
//! - **Warning System** - deduplicated, colored terminal output for dropped
//!   declarations and values the resolver has to work around

pub mod warning;
