use std::env;

use tracing::info;

use quire_view::{
    PaginationInput, RawNumber, build_pagination_view, page_from_query, render_pagination,
    resolve_page,
};

/// Number of sample items in the demo listing.
const DEMO_RESULTS: usize = 24;
/// Items shown on each demo page.
const RESULTS_PER_PAGE: i64 = 5;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // Load the .env file
    dotenvy::dotenv().ok();

    // CGI convention: the server hands the raw query string through the
    // environment.
    let query = env::var("QUERY_STRING").unwrap_or_default();
    let page = resolve_page(page_from_query(&query), RawNumber::Value(1))?;

    let items = build_demo_items();
    let input = PaginationInput::from_raw(items.len() as i64, RESULTS_PER_PAGE, page)?;
    let view = build_pagination_view(&input, &items);

    info!(
        page = view.page,
        from = view.window.from,
        to = view.window.to,
        "rendering demo listing"
    );

    if env::var("OUTPUT").is_ok_and(|format| format == "json") {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let html = render_pagination(&view, |item| format!("<p>{item}</p>"));
    println!("{html}");

    Ok(())
}

fn build_demo_items() -> Vec<String> {
    (1..=DEMO_RESULTS)
        .map(|index| format!("Sample listing item #{index}"))
        .collect()
}
