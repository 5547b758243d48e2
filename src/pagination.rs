//! Local pagination state for list screens.
//!
//! Each list view (and each reference selector) owns one [`PaginationState`].
//! The state records locally-held intent (requested page, page size, sort)
//! alongside the last server-reported truth (resolved page, total count).
//! `fetch_pending` is the single lever for requesting a refresh: every intent
//! mutation raises it, and only a resolved request clears it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Sort direction sent to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(CoreError::Config(format!(
                "unknown sort order '{}', expected 'asc' or 'desc'",
                s
            ))),
        }
    }
}

/// Sorter state reported by a table header interaction.
///
/// Table components report the raw header state, not a normalized order:
/// clearing the sort indicator arrives as [`SorterDirection::None`], which
/// must retain the previously selected order rather than snap back to a
/// default. Modeled as an exhaustive union so the tie-break in
/// [`PaginationState::apply_table_change`] cannot silently miss a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SorterDirection {
    Ascend,
    Descend,
    /// The user cleared the sort indicator.
    #[default]
    None,
}

/// Initial sort (required) plus optional page overrides for a new list view.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationInit {
    pub sort_field: String,
    pub sort_order: SortOrder,
    pub page: u64,
    pub page_size: u64,
}

impl PaginationInit {
    pub fn new(sort_field: impl Into<String>, sort_order: SortOrder) -> Self {
        Self {
            sort_field: sort_field.into(),
            sort_order,
            page: 1,
            page_size: 10,
        }
    }

    pub fn page_size(mut self, page_size: u64) -> Self {
        self.page_size = page_size;
        self
    }
}

/// The authoritative local record of a list view's pagination.
///
/// `page` and `total` hold the last values the server reported (the server
/// may clamp an out-of-range page request); `page_size`, `sort_field` and
/// `sort_order` hold the client's requested values.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationState {
    pub page: u64,
    pub page_size: u64,
    pub total: u64,
    pub sort_field: String,
    pub sort_order: SortOrder,
    /// True when local intent has diverged from the last fetched server
    /// state and a refresh is owed.
    pub fetch_pending: bool,
}

impl PaginationState {
    /// Fresh state for a newly mounted view. `fetch_pending` starts true so
    /// the first render triggers a load.
    pub fn new(init: PaginationInit) -> Self {
        Self {
            page: init.page,
            page_size: init.page_size,
            total: 0,
            sort_field: init.sort_field,
            sort_order: init.sort_order,
            fetch_pending: true,
        }
    }

    /// Apply a table interaction: page turn, page-size change, or header
    /// sort click. Last-writer-wins; repeating the same arguments before a
    /// round-trip completes leaves the final state unchanged.
    pub(crate) fn apply_table_change(
        &mut self,
        page: u64,
        page_size: u64,
        sorter_field: Option<&str>,
        direction: SorterDirection,
    ) {
        self.page = page;
        self.page_size = page_size;
        if let Some(field) = sorter_field {
            self.sort_field = field.to_string();
        }
        match direction {
            SorterDirection::Ascend => self.sort_order = SortOrder::Asc,
            SorterDirection::Descend => self.sort_order = SortOrder::Desc,
            // Indicator cleared: keep whatever order was last in effect.
            SorterDirection::None => {}
        }
        self.fetch_pending = true;
    }

    /// Caller applied new filter criteria; page and sort stay put.
    pub(crate) fn mark_pending(&mut self) {
        self.fetch_pending = true;
    }

    /// Merge server-reported metadata after a successful round-trip.
    pub(crate) fn merge_result(&mut self, page: u64, total: u64) {
        self.page = page;
        self.total = total;
        self.fetch_pending = false;
    }

    /// A request failed: clear the pending flag but keep the last good
    /// `page`/`total` so the UI does not flash to an empty state.
    pub(crate) fn mark_error(&mut self) {
        self.fetch_pending = false;
    }
}
