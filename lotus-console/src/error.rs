//! Console error types

use thiserror::Error;

/// Product form errors
#[derive(Debug, Error)]
pub enum FormError {
    /// Core field validation failed (empty name etc.)
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// A delete was requested but no server snapshot is loaded
    #[error("No loaded product to delete")]
    NothingLoaded,

    /// The referenced product is not in loaded state (stale id)
    #[error("Product {0} is not in the loaded list")]
    UnknownProduct(i64),
}

/// Top-level console error
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Client error: {0}")]
    Client(#[from] lotus_client::ClientError),

    #[error("Form error: {0}")]
    Form(#[from] FormError),
}
