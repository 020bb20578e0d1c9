//! Text printed around the result items.

use crate::options::{DEFAULT_SIZE, MAX_SIZE};

pub fn header(found: u64, page: u64) -> String {
    if page > 1 {
        format!("Found {found} results (page {page})\n")
    } else {
        format!("Found {found} results\n")
    }
}

pub fn no_results(query: &str) -> String {
    format!("No results found for query: {query}\n")
}

/// Shown after a capped preview, pointing at `--size` and `--page`.
pub fn preview_hint(found: u64) -> String {
    let mut out = String::new();
    if found <= u64::from(MAX_SIZE) {
        out.push_str(&format!(
            "Showing top {DEFAULT_SIZE} results. Use --size {found} to see all {found} results.\n"
        ));
    } else {
        out.push_str(&format!(
            "Showing top {DEFAULT_SIZE} results. Use --size {MAX_SIZE} to see the maximum {MAX_SIZE} results per page.\n"
        ));
        out.push_str(&format!(
            "Use --page to navigate through all {found} results.\n"
        ));
    }
    out.push_str("Use --include-matched-content for highlighted matches instead of descriptions.\n\n");
    out
}

/// Page position, or `None` when everything fits on one page.
pub fn pagination(page: u64, total_pages: u64, found: u64) -> Option<String> {
    if total_pages <= 1 {
        return None;
    }
    let mut out = format!("\nShowing page {page} of {total_pages} ({found} total results)\n");
    if page < total_pages {
        out.push_str(&format!("Use --page {} to see the next page\n", page + 1));
    }
    Some(out)
}
