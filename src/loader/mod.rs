//! Page data loading.
//!
//! A load function produces a [`LoadResult`] for the rendering layer: a
//! single `users` entry holding a pending computation. Nothing is fetched
//! when the result is built; the request goes out when the host awaits it.
//! Failures stay in the `Err` side of the pending value and are never
//! caught or retried here.

pub mod client;

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;

pub use client::PageLoader;

/// Errors from a load. None of them are translated or retried.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request could not be sent or the connection failed (bad URL,
    /// DNS, refused, reset, timeout).
    #[error("request to {url:?} failed: {source}")]
    Transport {
        url: String,
        source: reqwest::Error,
    },

    #[error("{url} responded with status {status}")]
    Status { url: String, status: StatusCode },

    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },
}

/// A load value that has not been resolved yet.
pub type Pending<T> = Pin<Box<dyn Future<Output = Result<T, LoadError>> + Send + 'static>>;

/// What a load function hands to the rendering layer.
///
/// Always exactly one entry, `users`, which is pending until awaited.
pub struct LoadResult<T> {
    pub users: Pending<T>,
}

impl<T> LoadResult<T> {
    /// Wrap a not-yet-started computation.
    pub fn new(users: impl Future<Output = Result<T, LoadError>> + Send + 'static) -> Self {
        Self {
            users: Box::pin(users),
        }
    }

    /// Transform the value once it resolves. Still pending afterwards.
    pub fn map<U>(self, f: impl FnOnce(T) -> U + Send + 'static) -> LoadResult<U>
    where
        T: 'static,
    {
        let users = self.users;
        LoadResult::new(async move { users.await.map(f) })
    }

    /// Await the pending value.
    pub async fn resolve(self) -> Result<ResolvedLoad<T>, LoadError> {
        let users = self.users.await?;
        Ok(ResolvedLoad { users })
    }
}

impl<T> fmt::Debug for LoadResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadResult")
            .field("users", &"<pending>")
            .finish()
    }
}

/// A load after the host awaited it. Serializes as `{"users": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedLoad<T> {
    pub users: T,
}
