//! Shared fixtures for controller and selector integration tests.
//!
//! Provides a scripted mock backend so tests can drive the controller
//! through success, failure, and slow-response sequences without a server.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serde::Deserialize;

use memberdesk::{CoreError, ListBackend, QueryResult, Result};

/// Minimal row type for controller tests.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TestRow {
    pub id: u64,
    pub name: String,
}

pub fn rows(count: usize) -> Vec<TestRow> {
    (0..count)
        .map(|i| TestRow {
            id: i as u64,
            name: format!("row-{}", i),
        })
        .collect()
}

/// One scripted backend response, consumed in order.
#[derive(Debug, Clone)]
pub enum Scripted {
    Page {
        rows: usize,
        page: u64,
        total: u64,
        delay: Duration,
    },
    Fail {
        message: String,
        status: u16,
    },
}

impl Scripted {
    pub fn page(rows: usize, page: u64, total: u64) -> Self {
        Scripted::Page {
            rows,
            page,
            total,
            delay: Duration::ZERO,
        }
    }

    pub fn slow_page(rows: usize, page: u64, total: u64, delay_ms: u64) -> Self {
        Scripted::Page {
            rows,
            page,
            total,
            delay: Duration::from_millis(delay_ms),
        }
    }

    pub fn fail(message: &str, status: u16) -> Self {
        Scripted::Fail {
            message: message.to_string(),
            status,
        }
    }
}

#[derive(Debug, Default)]
struct MockInner {
    calls: Mutex<Vec<String>>,
    script: Mutex<VecDeque<Scripted>>,
}

/// Backend that answers from a script and records every call it saw.
///
/// Clones share the same script and call log, so a test can keep one handle
/// while the controller owns the other.
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    inner: Arc<MockInner>,
}

impl MockBackend {
    pub fn new(script: impl IntoIterator<Item = Scripted>) -> Self {
        Self {
            inner: Arc::new(MockInner {
                calls: Mutex::new(Vec::new()),
                script: Mutex::new(script.into_iter().collect()),
            }),
        }
    }

    /// Every `resource?query` this backend has served, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.inner.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.inner.calls.lock().len()
    }
}

impl ListBackend<TestRow> for MockBackend {
    async fn fetch_page(&self, resource: &str, query: &str) -> Result<QueryResult<TestRow>> {
        self.inner.calls.lock().push(format!("{}?{}", resource, query));
        let scripted = self
            .inner
            .script
            .lock()
            .pop_front()
            .expect("mock backend ran out of scripted responses");

        match scripted {
            Scripted::Page {
                rows: count,
                page,
                total,
                delay,
            } => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                Ok(QueryResult {
                    rows: rows(count),
                    page,
                    total,
                })
            }
            Scripted::Fail { message, status } => Err(CoreError::Server { message, status }),
        }
    }
}
