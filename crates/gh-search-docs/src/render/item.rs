use std::fmt::{self, Write};

use crate::model::SearchItem;
use crate::params::CONTENT_EXPLICIT;
use crate::render::selection::truncate_intro;

/// Prefix for the relative URLs the API returns.
pub const DOCS_HOST: &str = "https://docs.github.com";

const MARK_OPEN: &str = "<mark>";
const MARK_CLOSE: &str = "</mark>";

/// Remove highlight markers, keeping the text they bracket.
pub fn strip_marks(text: &str) -> String {
    text.replace(MARK_OPEN, "").replace(MARK_CLOSE, "")
}

/// One numbered result as a markdown list item.
///
/// Highlight markers are kept for the styling engine.
pub fn item_markdown(
    number: usize,
    item: &SearchItem,
    matched_content: bool,
) -> Result<String, fmt::Error> {
    write_item(number, item, matched_content, |fragment| fragment.to_string())
}

/// One numbered result as plain text, highlight markers removed.
pub fn item_plain(
    number: usize,
    item: &SearchItem,
    matched_content: bool,
) -> Result<String, fmt::Error> {
    write_item(number, item, matched_content, strip_marks)
}

fn write_item(
    number: usize,
    item: &SearchItem,
    matched_content: bool,
    fragment_text: impl Fn(&str) -> String,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "{number}. {}", item.title)?;
    writeln!(out, "   {DOCS_HOST}{}", item.url)?;

    if matched_content {
        for fragment in item.highlight_fragments(CONTENT_EXPLICIT) {
            writeln!(out, "   • {}", fragment_text(fragment))?;
        }
    } else if !item.intro.is_empty() {
        writeln!(out, "   {}", truncate_intro(&item.intro))?;
    }

    out.push('\n');
    Ok(out)
}
