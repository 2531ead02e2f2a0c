//! Error types for pagination input validation.

use thiserror::Error;

/// Errors raised while validating pagination inputs.
///
/// These are the only failure paths. Every other boundary condition — a page
/// past the end of the data, zero results, a non-positive page — produces an
/// empty-but-valid view instead of an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// The configured page size cannot form pages.
    #[error("results per page must be at least 1, got {results_per_page}")]
    InvalidConfiguration { results_per_page: i64 },

    /// A numeric-like input did not parse as a number.
    #[error("{field} is not a number: {value:?}")]
    InvalidInput { field: &'static str, value: String },
}
