//! Pure page-window math.

use serde::Serialize;

/// 1-based inclusive index range of items visible on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub from: i64,
    pub to: i64,
}

impl PageWindow {
    /// Whether the window covers no item positions.
    pub fn is_empty(&self) -> bool {
        self.to < self.from
    }
}

/// Compute the visible window for a page.
///
/// `from` may exceed `results` when the page lies past the end of the data;
/// the window is then empty rather than an error.
pub fn page_window(results: i64, results_per_page: i64, page: i64) -> PageWindow {
    let from = page
        .saturating_sub(1)
        .saturating_mul(results_per_page)
        .saturating_add(1);
    let to = results.min(page.saturating_mul(results_per_page));

    PageWindow { from, to }
}

/// The five candidate slot page numbers, centered on the current page.
pub fn candidate_pages(page: i64) -> [i64; 5] {
    [
        page.saturating_sub(2),
        page.saturating_sub(1),
        page,
        page.saturating_add(1),
        page.saturating_add(2),
    ]
}

/// Whether a candidate page number falls inside the navigable range.
///
/// The upper bound is the raw `results / results_per_page` quotient, kept
/// exact by comparing `page_number * results_per_page <= results`.
// TODO: decide whether this bound should use the ceiled page count instead;
// as written the final page's slot disappears whenever `results` is not an
// exact multiple of `results_per_page`, even though that page is reachable
// through the previous/next controls.
pub fn within_page_range(page_number: i64, results: i64, results_per_page: i64) -> bool {
    page_number >= 1 && page_number.saturating_mul(results_per_page) <= results
}

/// Slice the item sequence to a window, clamped to the available items.
///
/// Order is preserved; an out-of-range window yields an empty slice.
pub fn visible_slice<'a, T>(items: &'a [T], window: PageWindow) -> &'a [T] {
    let len = items.len() as i64;
    let start = window.from.max(1) - 1;
    let end = window.to.min(len);

    if start >= end {
        return &[];
    }

    &items[start as usize..end as usize]
}
