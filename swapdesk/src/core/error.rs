//! # Common Error Types
//!
//! Consolidated error handling for the swapdesk application.
//!
//! ## Error Categories
//!
//! Errors are categorized by where they occur:
//!
//! - **DataUnavailable**: The price feed failed or returned nothing. The
//!   catalog ends up empty; this never surfaces as a form error.
//! - **Validation**: Missing token selection or a non-positive amount.
//!   Surfaced inline next to the offending field or as a general banner.
//! - **Submission**: Failure during the simulated exchange. Surfaced as a
//!   general banner; the form stays editable with its amounts intact.
//!
//! Every error is converted into state at the boundary where it occurs;
//! none is fatal to the process.

use thiserror::Error;

/// Application-wide error type covering all failure scenarios.
///
/// Each variant carries a descriptive message. The `#[error]` attribute
/// from `thiserror` provides the `Display` and `Error` implementations.
#[derive(Debug, Error)]
pub enum AppError {
    /// The price feed could not be reached or produced an unusable payload.
    #[error("price data unavailable: {0}")]
    DataUnavailable(String),

    /// User input failed validation before submission.
    #[error("validation error: {0}")]
    Validation(String),

    /// The simulated exchange failed while settling.
    #[error("submission error: {0}")]
    Submission(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::DataUnavailable(err.to_string())
    }
}
