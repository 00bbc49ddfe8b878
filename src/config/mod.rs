//! Configuration loading and layering.
//!
//! Handles `.pageload.toml` loading, environment variable resolution,
//! and the priority ordering applied before CLI flags.

pub mod loader;

pub use loader::{Config, ConfigError, LoginConfig, ServerConfig};
