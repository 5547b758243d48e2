//! Generic list-query controller.
//!
//! One controller per list view. The controller reconciles locally-held
//! intent (page, page size, sort, filter criteria) against server-returned
//! truth (rows, total, resolved page): intent mutations raise
//! `fetch_pending`, [`ListQueryController::fetch`] issues the request and
//! merges the response metadata back in.
//!
//! Each issued request carries a monotonically increasing sequence number;
//! a completion that is no longer the latest issued is discarded so a slow
//! early response cannot overwrite state a faster later response already
//! settled. There is no request cancellation, timeout, or retry at this
//! layer.

use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use parking_lot::Mutex;

use crate::backend::ListBackend;
use crate::error::Result;
use crate::pagination::{PaginationInit, PaginationState, SortOrder, SorterDirection};
use crate::query::{self, FilterCriteria, PageQuery};
use crate::resources::ListResource;

/// Outcome of an awaited fetch.
#[derive(Debug, PartialEq)]
pub enum FetchOutcome<T> {
    /// Rows from the latest issued request; pagination metadata was merged.
    Rows(Vec<T>),
    /// The response belonged to a superseded request and was discarded;
    /// state is untouched.
    Stale,
}

/// Read-only view of the controller's pagination handed to the view layer.
///
/// `is_fetching` is derived from the request lifecycle, not stored in
/// [`PaginationState`].
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationSnapshot {
    pub page: u64,
    pub page_size: u64,
    pub total: u64,
    pub sort_field: String,
    pub sort_order: SortOrder,
    pub fetch_pending: bool,
    pub is_fetching: bool,
}

/// Orchestrates one list view's paginated queries against a backend.
///
/// Owned exclusively by the view that created it; discarded on unmount.
/// Methods take `&self` so overlapping fetches can be awaited from a single
/// event loop.
pub struct ListQueryController<T, B> {
    backend: B,
    resource: String,
    state: Mutex<PaginationState>,
    /// Sequence number of the most recently issued request.
    issued: AtomicU64,
    in_flight: AtomicUsize,
    _rows: PhantomData<fn() -> T>,
}

impl<T, B> ListQueryController<T, B>
where
    B: ListBackend<T>,
{
    pub fn new(backend: B, resource: impl Into<String>, init: PaginationInit) -> Self {
        Self {
            backend,
            resource: resource.into(),
            state: Mutex::new(PaginationState::new(init)),
            issued: AtomicU64::new(0),
            in_flight: AtomicUsize::new(0),
            _rows: PhantomData,
        }
    }

    /// Controller for a cataloged entity, using its route and default sort.
    pub fn for_resource<R>(backend: B) -> Self
    where
        R: ListResource<Row = T>,
    {
        Self::new(backend, R::PATH, R::default_sort())
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Snapshot of the pagination state plus the derived fetching flag.
    pub fn state(&self) -> PaginationSnapshot {
        let state = self.state.lock();
        PaginationSnapshot {
            page: state.page,
            page_size: state.page_size,
            total: state.total,
            sort_field: state.sort_field.clone(),
            sort_order: state.sort_order,
            fetch_pending: state.fetch_pending,
            is_fetching: self.in_flight.load(Ordering::SeqCst) > 0,
        }
    }

    /// Caller applied new filter criteria; ask for a refresh without
    /// touching page or sort.
    pub fn request_search(&self) {
        self.state.lock().mark_pending();
    }

    /// Caller cleared its filter criteria; ask for a refresh.
    ///
    /// The page is deliberately not reset to 1: the portal always refetched
    /// under the current page after a reset, and views relying on that would
    /// break if it were changed here.
    pub fn request_reset(&self) {
        self.state.lock().mark_pending();
    }

    /// Table interaction: page turn, page-size change, or sort click.
    pub fn request_table_change(
        &self,
        page: u64,
        page_size: u64,
        sorter_field: Option<&str>,
        direction: SorterDirection,
    ) {
        self.state
            .lock()
            .apply_table_change(page, page_size, sorter_field, direction);
    }

    /// Issue a request for the current state and the caller's criteria,
    /// await it, and merge the result.
    ///
    /// Criteria are read, never mutated; ownership stays with the view. On
    /// success the server's `page`/`total` are merged and `fetch_pending`
    /// clears. On error `fetch_pending` clears but `page`/`total` keep their
    /// last good values, and the raw error propagates for display. A
    /// completion superseded by a later `fetch` resolves to
    /// [`FetchOutcome::Stale`] and leaves everything untouched.
    pub async fn fetch(&self, criteria: &FilterCriteria) -> Result<FetchOutcome<T>> {
        let encoded = {
            let state = self.state.lock();
            query::encode(criteria, &PageQuery::from(&*state))
        };
        let seq = self.issued.fetch_add(1, Ordering::SeqCst) + 1;

        tracing::debug!(resource = %self.resource, seq, query = %encoded, "list fetch issued");
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        let outcome = self.backend.fetch_page(&self.resource, &encoded).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.issued.load(Ordering::SeqCst) != seq {
            match &outcome {
                Ok(_) => {
                    tracing::warn!(resource = %self.resource, seq, "discarding superseded response")
                }
                Err(e) => {
                    tracing::warn!(resource = %self.resource, seq, error = %e, "discarding superseded failure")
                }
            }
            return Ok(FetchOutcome::Stale);
        }

        match outcome {
            Ok(result) => {
                tracing::debug!(
                    resource = %self.resource,
                    seq,
                    page = result.page,
                    total = result.total,
                    "list fetch resolved"
                );
                self.state.lock().merge_result(result.page, result.total);
                Ok(FetchOutcome::Rows(result.rows))
            }
            Err(err) => {
                self.state.lock().mark_error();
                Err(err)
            }
        }
    }
}
