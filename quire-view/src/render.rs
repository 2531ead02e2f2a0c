//! Markup rendering for pagination views.

use std::fmt::Write as _;

use crate::view::PaginationView;

/// Block name used for all rendered class names.
pub const CLASS_BLOCK: &str = "quire-pagination";

/// Compose a `block__element` class name, with an optional modifier.
fn element_class(element: &str, modifier: Option<&str>) -> String {
    match modifier {
        Some(modifier) => {
            format!("{CLASS_BLOCK}__{element} {CLASS_BLOCK}__{element}--{modifier}")
        }
        None => format!("{CLASS_BLOCK}__{element}"),
    }
}

/// Render a pagination view to markup.
///
/// Output order is fixed: the visible items, the summary line, a previous
/// control when one exists, the five page slots (disabled slots stay as
/// empty placeholders), and a next control when one exists.
///
/// `render_item` produces the markup for one visible item; escaping item
/// content is the caller's responsibility.
pub fn render_pagination<T>(
    view: &PaginationView<'_, T>,
    mut render_item: impl FnMut(&T) -> String,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "<div class=\"{CLASS_BLOCK}\">");
    let _ = writeln!(out, "  <div class=\"{}\">", element_class("content", None));
    for item in view.visible {
        let _ = writeln!(out, "    {}", render_item(item));
    }
    out.push_str("  </div>\n");

    out.push_str("  <nav role=\"navigation\" aria-label=\"Pagination Navigation\">\n");
    let _ = writeln!(
        out,
        "    <div class=\"{}\">{}</div>",
        element_class("summary", None),
        view.summary()
    );
    let _ = writeln!(
        out,
        "    <ul class=\"{}\">",
        element_class("list-items", None)
    );

    if view.nav.has_previous {
        let _ = writeln!(
            out,
            "      <li class=\"{}\" id=\"prevButton\"><a class=\"{}\" href=\"{}\">&laquo; Previous</a></li>",
            element_class("item", None),
            element_class("link", None),
            view.previous_href(),
        );
    }

    for slot in &view.slots {
        if !slot.is_enabled {
            let _ = writeln!(out, "      <li class=\"{}\"></li>", element_class("item", None));
            continue;
        }

        let aria_current = if slot.is_current {
            " aria-current=\"true\""
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "      <li class=\"{}\"><a class=\"{}\" href=\"{}\"{}>{}</a></li>",
            element_class("item", None),
            element_class("link", slot.is_current.then_some("current")),
            slot.href,
            aria_current,
            slot.page_number,
        );
    }

    if view.nav.has_next {
        let _ = writeln!(
            out,
            "      <li class=\"{}\" id=\"nextButton\"><a class=\"{}\" href=\"{}\">Next &raquo;</a></li>",
            element_class("item", None),
            element_class("link", None),
            view.next_href(),
        );
    }

    out.push_str("    </ul>\n  </nav>\n</div>\n");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PaginationInput;
    use crate::view::build_pagination_view;

    fn rendered(results: i64, results_per_page: i64, page: i64, items: &[u32]) -> String {
        let input = PaginationInput::from_raw(results, results_per_page, page).unwrap();
        let view = build_pagination_view(&input, items);
        render_pagination(&view, |item| format!("<p>{item}</p>"))
    }

    #[test]
    fn renders_sections_in_order() {
        let items: Vec<u32> = (1..=249).collect();
        let html = rendered(249, 25, 3, &items);

        let content_at = html.find("quire-pagination__content").unwrap();
        let summary_at = html.find("Showing 51 - 75 of 249 results").unwrap();
        let prev_at = html.find("prevButton").unwrap();
        let next_at = html.find("nextButton").unwrap();

        assert!(content_at < summary_at);
        assert!(summary_at < prev_at);
        assert!(prev_at < next_at);
        assert!(html.contains("<p>51</p>"));
        assert!(html.contains("<p>75</p>"));
        assert!(!html.contains("<p>50</p>"));
        assert!(!html.contains("<p>76</p>"));
    }

    #[test]
    fn disabled_slots_render_as_empty_items() {
        let items: Vec<u32> = (1..=249).collect();
        let html = rendered(249, 25, 1, &items);

        // Candidates -1 and 0 sit outside the range on page 1.
        let placeholder = format!("<li class=\"{}\"></li>", element_class("item", None));
        assert_eq!(html.matches(&placeholder).count(), 2);
    }

    #[test]
    fn current_slot_renders_without_a_target() {
        let items: Vec<u32> = (1..=249).collect();
        let html = rendered(249, 25, 3, &items);

        assert_eq!(html.matches("aria-current=\"true\"").count(), 1);
        assert!(html.contains("href=\"\" aria-current=\"true\">3</a>"));
        assert!(html.contains("href=\"?page=2\""));
        assert!(html.contains("href=\"?page=4\""));
    }

    #[test]
    fn first_page_renders_no_previous_control() {
        let items: Vec<u32> = (1..=249).collect();
        let html = rendered(249, 25, 1, &items);

        assert!(!html.contains("prevButton"));
        assert!(html.contains("nextButton"));
    }

    #[test]
    fn last_window_renders_no_next_control() {
        let items: Vec<u32> = (1..=20).collect();
        let html = rendered(20, 5, 4, &items);

        assert!(html.contains("prevButton"));
        assert!(!html.contains("nextButton"));
    }
}
