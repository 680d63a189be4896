//! Lotus Console - orchestration layer of the admin dashboard
//!
//! Everything between the backend APIs and whatever renders the screen:
//! dashboard metric state, customer detail state, debounced product
//! browsing, the product form engine (option groups, variant generation,
//! image staging) and the action-tagged payload builder it submits.
//!
//! There is no widget code here; rendering and routing belong to the
//! embedding shell.

pub mod auth;
pub mod browse;
pub mod cell;
pub mod customer;
pub mod dashboard;
pub mod error;
pub mod form;

pub use auth::AuthSession;
pub use browse::{ProductBrowser, ProductListState};
pub use cell::DataCell;
pub use customer::CustomerDetail;
pub use dashboard::DashboardState;
pub use error::{ConsoleError, FormError};
pub use form::ProductForm;
