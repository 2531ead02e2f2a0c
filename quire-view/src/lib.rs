//! Pagination windowing and navigation view computation for listings.
//!
//! Given a total result count, a page size, and a current page — possibly
//! sourced from a URL query string — this crate computes which slice of an
//! item sequence is visible and which page numbers appear as navigation
//! controls, and renders the result for a presentation layer.

/// Typed input-validation errors.
pub mod error;
/// Numeric-like input coercion and validated inputs.
mod input;
/// Pure page-window math.
mod page;
/// Query-string page extraction and link targets.
pub mod query;
/// Markup rendering of computed views.
pub mod render;
/// Page slots and previous/next controls.
mod slots;
/// View assembly.
mod view;

pub use error::PaginationError;
pub use input::{PaginationInput, RawNumber, coerce_number};
pub use page::{PageWindow, candidate_pages, page_window, visible_slice, within_page_range};
pub use query::{PAGE_QUERY_PARAM, page_from_query, page_href, resolve_page};
pub use render::{CLASS_BLOCK, render_pagination};
pub use slots::{NavControls, PageSlot, build_page_slots, nav_controls};
pub use view::{PaginationView, build_pagination_view};
