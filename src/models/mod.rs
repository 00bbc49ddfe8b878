//! Shared data types.
//!
//! Defines the records exchanged with the backend. The loader and the
//! renderers import from here rather than reaching into each other.

pub mod user;

pub use user::{LoginPayload, User};
