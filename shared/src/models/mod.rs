//! Data models
//!
//! Shared between the API client and the console layer. All server ids
//! are `i64`; records that may not yet exist server-side carry
//! `Option<i64>`.

pub mod auth;
pub mod chat;
pub mod customer;
pub mod metrics;
pub mod period;
pub mod product;
pub mod sync;

// Re-exports
pub use auth::*;
pub use chat::*;
pub use customer::*;
pub use metrics::*;
pub use period::*;
pub use product::*;
pub use sync::*;
