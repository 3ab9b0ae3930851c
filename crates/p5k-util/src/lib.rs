//! Shared utilities for the p5k developer tool.
//!
//! This crate provides cross-cutting concerns used by the other p5k crates:
//! the unified error type, filesystem helpers, external process spawning,
//! and terminal status output.

pub mod errors;
pub mod fs;
pub mod process;
pub mod progress;
