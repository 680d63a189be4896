//! Shared types for the Lotus admin console
//!
//! Wire-format models used across the client and console crates:
//! metric responses, customers, chat sessions, the product snapshot
//! aggregate, and the action-tagged sync payload.

pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use response::{Pagination, ProductListResponse};
