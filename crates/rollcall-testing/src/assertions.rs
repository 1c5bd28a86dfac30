//! Custom assertions over `rollcall page --format json` output.
//!
//! The document carries one page view per member list under `approved` and
//! `pending`, each with `current_page`, `total_pages` and `items`.

use anyhow::{Context, Result};
use serde_json::Value;

/// Member names on the current page of `list` (`"approved"` or `"pending"`).
pub fn member_names(json: &Value, list: &str) -> Result<Vec<String>> {
    let items = json[list]["items"]
        .as_array()
        .with_context(|| format!("Expected '{}.items' array in JSON", list))?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item["memberName"]
                .as_str()
                .map(String::from)
                .with_context(|| format!("{} item {} missing memberName", list, i))
        })
        .collect()
}

/// Assert the current page of `list` holds exactly `expected`, in order.
pub fn assert_member_names(json: &Value, list: &str, expected: &[&str]) -> Result<()> {
    let actual = member_names(json, list)?;
    if actual != expected {
        anyhow::bail!("Expected {} members {:?}, got {:?}", list, expected, actual);
    }
    Ok(())
}

/// Assert `list` is on `page` of `total_pages`.
pub fn assert_page(json: &Value, list: &str, page: u64, total_pages: u64) -> Result<()> {
    let current = json[list]["current_page"]
        .as_u64()
        .with_context(|| format!("Expected '{}.current_page' in JSON", list))?;
    let total = json[list]["total_pages"]
        .as_u64()
        .with_context(|| format!("Expected '{}.total_pages' in JSON", list))?;

    if (current, total) != (page, total_pages) {
        anyhow::bail!(
            "Expected {} on page {} / {}, got {} / {}",
            list,
            page,
            total_pages,
            current,
            total
        );
    }
    Ok(())
}

/// Assert the top-level member counts.
pub fn assert_counts(json: &Value, total: u64, filtered: u64) -> Result<()> {
    let actual_total = json["total_members"]
        .as_u64()
        .context("Expected 'total_members' in JSON")?;
    let actual_filtered = json["filtered_members"]
        .as_u64()
        .context("Expected 'filtered_members' in JSON")?;

    if (actual_total, actual_filtered) != (total, filtered) {
        anyhow::bail!(
            "Expected {} total / {} filtered members, got {} / {}",
            total,
            filtered,
            actual_total,
            actual_filtered
        );
    }
    Ok(())
}
