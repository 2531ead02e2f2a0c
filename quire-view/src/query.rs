//! Query-string page extraction and link-target building.

use tracing::debug;

use crate::error::PaginationError;
use crate::input::{RawNumber, coerce_number};

/// Query parameter carrying the current page number.
pub const PAGE_QUERY_PARAM: &str = "page";

/// Build a link target of the form `?page=N`.
pub fn page_href(page_number: i64) -> String {
    format!("?{PAGE_QUERY_PARAM}={page_number}")
}

/// Extract the raw `page` value from a query string.
///
/// Accepts an optional leading `?`. Returns `None` when the parameter is
/// absent or empty, which callers treat as "use the supplied page argument".
pub fn page_from_query(query: &str) -> Option<&str> {
    let query = query.strip_prefix('?').unwrap_or(query);

    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == PAGE_QUERY_PARAM && !value.is_empty()).then_some(value)
    })
}

/// Resolve the effective page from an optional query value and a fallback.
///
/// The query value wins when present; whichever source is used must still
/// coerce to a number.
pub fn resolve_page(
    query_page: Option<&str>,
    fallback: RawNumber<'_>,
) -> Result<i64, PaginationError> {
    match query_page {
        Some(raw) => {
            debug!(raw, "page taken from query string");
            coerce_number("page", RawNumber::Text(raw))
        }
        None => coerce_number("page", fallback),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_page_from_a_query_string() {
        assert_eq!(page_from_query("?page=2"), Some("2"));
        assert_eq!(page_from_query("page=2&sort=name"), Some("2"));
        assert_eq!(page_from_query("sort=name&page=7"), Some("7"));
        assert_eq!(page_from_query("sort=name"), None);
        assert_eq!(page_from_query("page="), None);
        assert_eq!(page_from_query(""), None);
    }

    #[test]
    fn query_page_wins_over_the_fallback() {
        assert_eq!(resolve_page(Some("2"), RawNumber::Value(3)).unwrap(), 2);
        assert_eq!(resolve_page(None, RawNumber::Value(3)).unwrap(), 3);
        assert_eq!(resolve_page(None, RawNumber::Text("4")).unwrap(), 4);
    }

    #[test]
    fn non_numeric_query_page_is_an_input_error() {
        let err = resolve_page(Some("two"), RawNumber::Value(1)).unwrap_err();
        assert_eq!(
            err,
            PaginationError::InvalidInput {
                field: "page",
                value: "two".to_owned(),
            }
        );
    }

    #[test]
    fn hrefs_encode_the_target_page() {
        assert_eq!(page_href(4), "?page=4");
        assert_eq!(page_href(-1), "?page=-1");
    }
}
