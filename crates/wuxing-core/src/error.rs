//! Error types for wuxing-core.
//!
//! The adjuster and classifier are total and never fail; errors only come
//! from parsing caller input and from the cart collaborator.

use thiserror::Error;

/// The main error type for wuxing operations.
#[derive(Debug, Error)]
pub enum WuxingError {
    /// Error parsing a birth moment, date or time.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Unrecognized element name or label.
    #[error("Unknown element: {0}")]
    UnknownElement(String),

    /// Cart creation was rejected or failed.
    #[error("Cart error: {0}")]
    CartError(String),
}

/// Result type alias for wuxing operations.
pub type Result<T> = std::result::Result<T, WuxingError>;
