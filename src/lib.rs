//! pageload: page data loader (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod config;
pub mod constants;
pub mod env;
pub mod loader;
pub mod models;
pub mod output;
