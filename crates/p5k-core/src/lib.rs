//! Core data types for the p5k developer tool.
//!
//! This crate defines the values the `boot` workflow passes around: the
//! project configuration read from `p5k.toml`, the kernel build target, and
//! the emulator launch specification.
//!
//! This crate never spawns processes.

/// Name of the project configuration file looked up from the working directory.
pub const CONFIG_FILE: &str = "p5k.toml";

pub mod config;
pub mod launch;
pub mod target;
