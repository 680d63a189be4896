//! Typed endpoint wrappers
//!
//! One module per backend domain. Each wrapper issues the request,
//! unwraps the typed field the caller actually wants, and applies the
//! unit conversions the console displays (absent averages become 0,
//! automation rate becomes a percentage).

pub mod auth;
pub mod customers;
pub mod dashboard;
pub mod products;
pub mod sessions;
pub mod upload;

use shared::models::Period;

/// Optional `?period=` query suffix.
pub(crate) fn period_query(period: Option<Period>) -> String {
    match period {
        Some(p) => format!("?period={}", p),
        None => String::new(),
    }
}
