//! Query-string codec for list requests.
//!
//! One-directional by design: the client serializes UI state onto the wire
//! and never reconstructs state from a query string, so no decode exists.
//! Keys are emitted in sorted order; the backend treats the query string as
//! an unordered parameter set.

use std::collections::BTreeMap;
use std::fmt;

use url::form_urlencoded;

use crate::pagination::{PaginationState, SortOrder};

/// A single scalar filter value.
///
/// Absent fields are represented by not being present in the criteria map at
/// all; an empty string is treated as absent at encode time.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl FilterValue {
    fn is_absent(&self) -> bool {
        matches!(self, FilterValue::Str(s) if s.is_empty())
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Str(s) => write!(f, "{}", s),
            FilterValue::Int(n) => write!(f, "{}", n),
            FilterValue::Float(n) => write!(f, "{}", n),
            FilterValue::Bool(b) => write!(f, "{}", if *b { "true" } else { "false" }),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        FilterValue::Str(s.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        FilterValue::Str(s)
    }
}

impl From<i64> for FilterValue {
    fn from(n: i64) -> Self {
        FilterValue::Int(n)
    }
}

impl From<f64> for FilterValue {
    fn from(n: f64) -> Self {
        FilterValue::Float(n)
    }
}

impl From<bool> for FilterValue {
    fn from(b: bool) -> Self {
        FilterValue::Bool(b)
    }
}

/// Filter constraints a view has collected from its filter drawer.
///
/// Owned by the calling view; the controller only reads it at request time.
pub type FilterCriteria = BTreeMap<String, FilterValue>;

/// Pagination parameters included in every list request.
#[derive(Debug, Clone, PartialEq)]
pub struct PageQuery {
    pub page: u64,
    pub page_size: u64,
    pub sort_field: String,
    pub sort_order: SortOrder,
    pub total: Option<u64>,
}

impl From<&PaginationState> for PageQuery {
    fn from(state: &PaginationState) -> Self {
        Self {
            page: state.page,
            page_size: state.page_size,
            sort_field: state.sort_field.clone(),
            sort_order: state.sort_order,
            total: Some(state.total),
        }
    }
}

/// Serialize filter criteria plus pagination parameters into the canonical
/// query string the backend accepts.
///
/// Criteria with empty-string values are omitted entirely; booleans become
/// the literal tokens `true`/`false`; numbers keep their direct textual
/// form. A criteria key that collides with a pagination key loses to the
/// pagination value.
pub fn encode(criteria: &FilterCriteria, page: &PageQuery) -> String {
    let mut params: BTreeMap<&str, String> = BTreeMap::new();

    for (key, value) in criteria {
        if value.is_absent() {
            continue;
        }
        params.insert(key.as_str(), value.to_string());
    }

    params.insert("page", page.page.to_string());
    params.insert("pageSize", page.page_size.to_string());
    params.insert("sortField", page.sort_field.clone());
    params.insert("sortOrder", page.sort_order.to_string());
    if let Some(total) = page.total {
        params.insert("total", total.to_string());
    }

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in &params {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}
