//! Environment lookups for `SERVER_URL` and the `PAGELOAD_*` settings.
//!
//! Only [`Config::load`](crate::config::Config::load) reads these, before a
//! [`PageLoader`](crate::loader::PageLoader) exists; the loader gets the
//! resolved base URL as a plain string. Config tests pass a fixed map.

use std::collections::HashMap;
use std::env::VarError;

/// Source of `SERVER_URL`, `PAGELOAD_TIMEOUT_SECS` and `PAGELOAD_FIRST_NAME`.
#[derive(Clone, Debug, Default)]
pub struct Env {
    overrides: Option<HashMap<String, String>>,
}

impl Env {
    /// Reads the process environment.
    pub fn real() -> Self {
        Self { overrides: None }
    }

    /// Fixed values for config tests; anything not listed is unset.
    #[cfg(test)]
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            overrides: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Raw lookup. `SERVER_URL` goes through this so an empty value is kept.
    pub fn var(&self, name: &str) -> Result<String, VarError> {
        match &self.overrides {
            Some(map) => map.get(name).cloned().ok_or(VarError::NotPresent),
            None => std::env::var(name),
        }
    }

    /// Lookup for the optional `PAGELOAD_*` settings, where blank means unset.
    pub fn non_empty(&self, name: &str) -> Option<String> {
        self.var(name).ok().filter(|v| !v.trim().is_empty())
    }
}
