//! Plain-text rendering of pagination affordances.

use crate::pagination::PageView;
use rollcall_types::PageItem;

const PREVIOUS: &str = "‹";
const NEXT: &str = "›";
const DISABLED: &str = "·";

/// `‹ 1 … 4 5 [6] 7 8 … 20 ›`, with `·` in place of an unavailable arrow.
pub fn page_bar<T>(view: &PageView<'_, T>) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(view.page_numbers.len() + 2);
    parts.push(if view.has_previous { PREVIOUS } else { DISABLED }.to_string());
    for item in &view.page_numbers {
        parts.push(match item {
            PageItem::Page(n) if *n == view.current_page => format!("[{}]", n),
            other => other.to_string(),
        });
    }
    parts.push(if view.has_next { NEXT } else { DISABLED }.to_string());
    parts.join(" ")
}

/// `Page 6 / 20`
pub fn page_info<T>(view: &PageView<'_, T>) -> String {
    format!("Page {} / {}", view.current_page, view.total_pages.max(1))
}
