//! Input coercion and validation for the pagination calculator.

use crate::error::PaginationError;

/// A numeric-like value: already a number, or text expected to parse as one.
///
/// Pagination inputs often arrive as query-string text rather than numbers,
/// so both forms are accepted and coerced through the same path.
#[derive(Debug, Clone, Copy)]
pub enum RawNumber<'a> {
    Value(i64),
    Text(&'a str),
}

impl From<i64> for RawNumber<'_> {
    fn from(value: i64) -> Self {
        Self::Value(value)
    }
}

impl<'a> From<&'a str> for RawNumber<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

/// Coerce a numeric-like value to an integer.
///
/// Text parses as an integer first, then as a finite float truncated toward
/// zero. Anything else fails with `InvalidInput` naming the offending field.
pub fn coerce_number(field: &'static str, raw: RawNumber<'_>) -> Result<i64, PaginationError> {
    match raw {
        RawNumber::Value(value) => Ok(value),
        RawNumber::Text(text) => {
            let trimmed = text.trim();

            if let Ok(value) = trimmed.parse::<i64>() {
                return Ok(value);
            }

            match trimmed.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(value.trunc() as i64),
                _ => Err(PaginationError::InvalidInput {
                    field,
                    value: text.to_owned(),
                }),
            }
        }
    }
}

/// Validated inputs for one pagination computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationInput {
    /// Total number of results across all pages.
    pub results: i64,
    /// Number of results shown on each page.
    pub results_per_page: i64,
    /// The page being viewed, 1-based.
    pub page: i64,
}

impl PaginationInput {
    /// Coerce and validate raw inputs.
    ///
    /// A page size below 1 is a configuration error. A non-positive `page`
    /// is tolerated and later yields an empty visible window.
    pub fn from_raw<'a>(
        results: impl Into<RawNumber<'a>>,
        results_per_page: impl Into<RawNumber<'a>>,
        page: impl Into<RawNumber<'a>>,
    ) -> Result<Self, PaginationError> {
        let results = coerce_number("results", results.into())?;
        let results_per_page = coerce_number("results_per_page", results_per_page.into())?;
        let page = coerce_number("page", page.into())?;

        if results_per_page < 1 {
            return Err(PaginationError::InvalidConfiguration { results_per_page });
        }

        Ok(Self {
            results,
            results_per_page,
            page,
        })
    }
}
