//! Page slots and previous/next navigation controls.

use serde::Serialize;

use crate::page::{PageWindow, candidate_pages, within_page_range};
use crate::query::page_href;

/// One of the five candidate page positions in the navigation list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSlot {
    /// Candidate page number, possibly outside the navigable range.
    pub page_number: i64,
    /// Whether this slot is the page being viewed.
    pub is_current: bool,
    /// Whether the slot points at a reachable page.
    pub is_enabled: bool,
    /// Link target for the slot; empty for the current page.
    pub href: String,
}

/// Previous/next affordances around the slot list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavControls {
    pub has_previous: bool,
    pub has_next: bool,
}

/// Build the fixed five-slot navigation list centered on `page`.
///
/// Disabled slots stay in the list as inert placeholders so the rendered
/// layout keeps a stable shape.
pub fn build_page_slots(page: i64, results: i64, results_per_page: i64) -> [PageSlot; 5] {
    candidate_pages(page).map(|page_number| {
        let is_enabled = within_page_range(page_number, results, results_per_page);
        let is_current = is_enabled && page_number == page;
        let href = if is_current {
            String::new()
        } else {
            page_href(page_number)
        };

        PageSlot {
            page_number,
            is_current,
            is_enabled,
            href,
        }
    })
}

/// Compute the previous/next affordances for a page window.
///
/// Next disappears once the window reaches the final result, previous once
/// the first page is shown.
pub fn nav_controls(page: i64, window: PageWindow, results: i64) -> NavControls {
    NavControls {
        has_previous: page > 1,
        has_next: window.to < results,
    }
}
