//! Entity catalog for the portal's list screens.
//!
//! Each list screen is backed by one resource: a route under the staff API
//! plus the default ordering its table opens with. The generic controller is
//! instantiated per entity through [`ListResource`], so no screen carries
//! its own copy of the query logic.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::pagination::{PaginationInit, SortOrder};

/// A list screen's backing resource: route plus default ordering.
pub trait ListResource {
    type Row: DeserializeOwned + Send;
    const PATH: &'static str;

    fn default_sort() -> PaginationInit;
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRow {
    pub id: String,
    pub code: String,
    pub english_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub nationality: Option<String>,
    pub active: bool,
    pub expired_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffRow {
    pub id: String,
    pub email: String,
    pub active: bool,
    pub last_active: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageRow {
    pub id: String,
    pub name: String,
    pub cost: f64,
    pub point: i64,
    pub period: i64,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponRow {
    pub id: String,
    pub code: String,
    pub cost: f64,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub member_name: Option<String>,
    pub use_name: Option<String>,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponSeriesRow {
    pub id: String,
    pub name: String,
    pub cost: f64,
    pub count: u64,
    pub already_used: u64,
    pub remarks: Option<String>,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildRow {
    pub id: String,
    pub code: String,
    pub name: String,
    pub gender: Option<String>,
    pub date_of_birth: Option<String>,
    pub member_id: String,
    pub member_name: Option<String>,
}

pub struct Members;

impl ListResource for Members {
    type Row = MemberRow;
    const PATH: &'static str = "api/staff/member";

    fn default_sort() -> PaginationInit {
        PaginationInit::new("code", SortOrder::Asc)
    }
}

pub struct Staff;

impl ListResource for Staff {
    type Row = StaffRow;
    const PATH: &'static str = "api/staff";

    fn default_sort() -> PaginationInit {
        PaginationInit::new("email", SortOrder::Asc)
    }
}

pub struct Packages;

impl ListResource for Packages {
    type Row = PackageRow;
    const PATH: &'static str = "api/staff/package";

    fn default_sort() -> PaginationInit {
        PaginationInit::new("name", SortOrder::Asc)
    }
}

pub struct Coupons;

impl ListResource for Coupons {
    type Row = CouponRow;
    const PATH: &'static str = "api/staff/coupon";

    fn default_sort() -> PaginationInit {
        PaginationInit::new("code", SortOrder::Asc)
    }
}

pub struct CouponSeries;

impl ListResource for CouponSeries {
    type Row = CouponSeriesRow;
    const PATH: &'static str = "api/staff/coupon/series";

    fn default_sort() -> PaginationInit {
        PaginationInit::new("name", SortOrder::Asc)
    }
}

pub struct Children;

impl ListResource for Children {
    type Row = ChildRow;
    const PATH: &'static str = "api/staff/child";

    fn default_sort() -> PaginationInit {
        PaginationInit::new("code", SortOrder::Asc)
    }
}
