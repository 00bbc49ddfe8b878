//! JSON output renderer.
//!
//! Outputs `{"users": ...}` for a page, `{"error": "..."}` for a failure.

use crate::loader::{LoadError, ResolvedLoad};
use crate::output::{PageData, PageRenderer};

/// JSON output renderer.
pub struct JsonRenderer;

impl PageRenderer for JsonRenderer {
    fn render(&self, page: &ResolvedLoad<PageData>) -> String {
        let json = serde_json::to_string_pretty(page).unwrap_or_else(|_| "{}".to_string());
        format!("{json}\n")
    }

    fn render_error(&self, err: &LoadError) -> String {
        let output = serde_json::json!({ "error": err.to_string() });
        let json = serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string());
        format!("{json}\n")
    }
}
