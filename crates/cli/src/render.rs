//! Plain-text rendering.

use lookahead_catalog::Catalog;
use lookahead_fetch::{College, CollegeItem};
use lookahead_session::{DropdownView, Phase};

/// Whether the box is still waiting on a timer or a request.
pub fn is_busy<T>(view: &DropdownView<T>) -> bool {
    matches!(
        view.phase,
        Phase::Debouncing | Phase::Loading | Phase::LoadingMore
    )
}

fn college_line(c: &College) -> String {
    let mut line = c.name.clone();
    let details: Vec<&str> = [c.location.as_deref(), c.tier.as_deref(), c.kind.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if !details.is_empty() {
        line.push_str("  (");
        line.push_str(&details.join(", "));
        line.push(')');
    }
    line
}

/// Dropdown lines, numbered for `:select`.
pub fn dropdown(view: &DropdownView<CollegeItem>) -> String {
    if !view.visible {
        return "(closed)".to_string();
    }
    let rows = view.items.len();
    view.render_with(|item| college_line(&item.record))
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            if i < rows {
                format!("{:>3}. {}", i + 1, line)
            } else {
                format!("     {}", line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Current catalog page with a position footer.
pub fn catalog_page(catalog: &Catalog) -> String {
    let pages = catalog.paginator();
    let offset = pages.current() * pages.page_size();
    let mut out: Vec<String> = catalog
        .page()
        .into_iter()
        .enumerate()
        .map(|(i, c)| format!("{:>4}. {}", offset + i + 1, college_line(c)))
        .collect();
    if out.is_empty() {
        out.push("No colleges match these filters".to_string());
    }
    out.push(format!(
        "Page {} of {} ({} colleges)",
        if pages.total_pages() == 0 { 0 } else { pages.current() + 1 },
        pages.total_pages(),
        catalog.filtered_len()
    ));
    out.join("\n")
}
