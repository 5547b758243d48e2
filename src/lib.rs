//! Paginated list-query core for a membership/loyalty staff portal.
//!
//! Every list screen in the portal (staff, members, packages, coupons,
//! coupon series, children) and every typeahead selector runs on the same
//! small machine: a [`ListQueryController`] reconciling local intent
//! against server-returned pagination truth, a [`DebounceTimer`] keeping
//! fast typing from becoming a request storm, and a query codec producing
//! the flat query strings the backend accepts.

pub mod backend;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod pagination;
pub mod query;
pub mod resources;
pub mod search;

pub use backend::{HttpBackend, ListBackend, QueryResult};
pub use config::Config;
pub use controller::{FetchOutcome, ListQueryController, PaginationSnapshot};
pub use debounce::{DEFAULT_DEBOUNCE_MS, DebounceTimer};
pub use error::{CoreError, Result};
pub use pagination::{PaginationInit, PaginationState, SortOrder, SorterDirection};
pub use query::{FilterCriteria, FilterValue, PageQuery, encode};
pub use resources::{Children, CouponSeries, Coupons, ListResource, Members, Packages, Staff};
pub use search::{ReferenceSearch, SearchKey};
