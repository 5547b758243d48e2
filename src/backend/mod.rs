//! Backend seam for list queries.
//!
//! Controllers talk to the server through the [`ListBackend`] trait; the
//! production implementation is [`HttpBackend`], and tests substitute a
//! scripted mock.

pub mod http;

pub use http::HttpBackend;

use serde::Deserialize;

use crate::error::Result;

/// One page of rows plus pagination metadata as reported by the server.
///
/// Row order is server-defined; the client never re-sorts. Any response
/// body that does not deserialize into this shape is a contract violation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QueryResult<T> {
    pub rows: Vec<T>,
    pub page: u64,
    pub total: u64,
}

/// Common interface for list-query backends.
pub trait ListBackend<T>: Send + Sync {
    /// Fetch one page of `resource` using an already-encoded query string.
    fn fetch_page(
        &self,
        resource: &str,
        query: &str,
    ) -> impl std::future::Future<Output = Result<QueryResult<T>>> + Send;
}
