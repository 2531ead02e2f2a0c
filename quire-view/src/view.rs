//! Pagination view assembly.

use serde::Serialize;

use crate::input::PaginationInput;
use crate::page::{PageWindow, page_window, visible_slice};
use crate::query::page_href;
use crate::slots::{NavControls, PageSlot, build_page_slots, nav_controls};

/// Everything a presentation layer needs to render one paginated page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaginationView<'a, T> {
    /// Total number of results across all pages.
    pub results: i64,
    /// Number of results shown on each page.
    pub results_per_page: i64,
    /// The page being viewed.
    pub page: i64,
    /// 1-based inclusive index range visible on this page.
    pub window: PageWindow,
    /// Items visible on this page, in their original order.
    pub visible: &'a [T],
    /// The five navigation slots, in `page-2 ..= page+2` order.
    pub slots: [PageSlot; 5],
    /// Previous/next affordances.
    pub nav: NavControls,
}

/// Compute the full pagination view for validated inputs and an item slice.
///
/// Pure and stateless: identical inputs always produce an identical view.
pub fn build_pagination_view<'a, T>(
    input: &PaginationInput,
    items: &'a [T],
) -> PaginationView<'a, T> {
    let PaginationInput {
        results,
        results_per_page,
        page,
    } = *input;

    let window = page_window(results, results_per_page, page);
    let slots = build_page_slots(page, results, results_per_page);
    let nav = nav_controls(page, window, results);
    let visible = visible_slice(items, window);

    PaginationView {
        results,
        results_per_page,
        page,
        window,
        visible,
        slots,
        nav,
    }
}

impl<T> PaginationView<'_, T> {
    /// Summary line for the current window.
    pub fn summary(&self) -> String {
        format!(
            "Showing {} - {} of {} results",
            self.window.from, self.window.to, self.results
        )
    }

    /// Link target for the previous page.
    pub fn previous_href(&self) -> String {
        page_href(self.page.saturating_sub(1))
    }

    /// Link target for the next page.
    pub fn next_href(&self) -> String {
        page_href(self.page.saturating_add(1))
    }
}
