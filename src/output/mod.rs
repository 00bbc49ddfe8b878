//! Page renderers: terminal and JSON.
//!
//! These stand in for the rendering layer that consumes a resolved load.

pub mod json;
pub mod terminal;

use serde::Serialize;

use crate::loader::{LoadError, ResolvedLoad};
use crate::models::User;

/// Anything a load can resolve to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PageData {
    /// Parsed user listing.
    Users(Vec<User>),
    /// Parsed login user.
    User(User),
    /// Raw body from the logging-only listing call.
    Raw(String),
    /// Status code from the logging-only login call.
    Status(u16),
}

impl From<Vec<User>> for PageData {
    fn from(users: Vec<User>) -> Self {
        PageData::Users(users)
    }
}

impl From<User> for PageData {
    fn from(user: User) -> Self {
        PageData::User(user)
    }
}

/// Trait for rendering a resolved page load.
pub trait PageRenderer {
    /// Render the page data.
    fn render(&self, page: &ResolvedLoad<PageData>) -> String;

    /// Render the error page shown when the load fails.
    fn render_error(&self, err: &LoadError) -> String;
}
