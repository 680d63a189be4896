//! Lotus Client - HTTP client for the console's backend services
//!
//! Typed access to the dashboard/customer/session API, the product
//! catalog API and the auth service. All configuration (base URLs,
//! bearer token, timeout) lives in an explicit [`ClientConfig`] rather
//! than ambient globals.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
