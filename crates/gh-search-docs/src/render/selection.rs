//! Decides how much of a result set gets printed.

use std::borrow::Cow;

use crate::model::SearchResult;
use crate::options::{DEFAULT_SIZE, SearchOptions};

/// Longest intro printed before it is cut.
pub const INTRO_LIMIT: usize = 150;

pub const ELLIPSIS: &str = "...";

/// What to print for one result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderDecision {
    /// Number of hits to print, never more than were returned
    pub shown: usize,
    /// Whether the "showing top 5" hint follows the items
    pub preview: bool,
    /// Print highlight fragments instead of intros
    pub matched_content: bool,
}

impl RenderDecision {
    pub fn new(opts: &SearchOptions, result: &SearchResult) -> Self {
        let shown = select_count(opts.size, result.hits.len(), opts.matched_content);
        Self {
            shown,
            preview: shows_preview_hint(shown, result.meta.found.value, opts.matched_content),
            matched_content: opts.matched_content,
        }
    }
}

/// How many of `hit_count` returned items to print for a requested `size`.
///
/// With the size left at its default, only the top results are shown even if
/// the server sent more, unless matched content was asked for.
pub fn select_count(size: u32, hit_count: usize, matched_content: bool) -> usize {
    let default = DEFAULT_SIZE as usize;
    let size = size as usize;
    if size == default && hit_count > default && !matched_content {
        default
    } else if size < hit_count {
        size
    } else {
        hit_count
    }
}

fn shows_preview_hint(shown: usize, found: u64, matched_content: bool) -> bool {
    shown == DEFAULT_SIZE as usize && found > u64::from(DEFAULT_SIZE) && !matched_content
}

/// Cut an intro to [`INTRO_LIMIT`] bytes and mark the cut with [`ELLIPSIS`].
///
/// A cut that would split a character backs off to the previous boundary.
pub fn truncate_intro(intro: &str) -> Cow<'_, str> {
    if intro.len() <= INTRO_LIMIT {
        return Cow::Borrowed(intro);
    }
    let mut end = INTRO_LIMIT;
    while !intro.is_char_boundary(end) {
        end -= 1;
    }
    Cow::Owned(format!("{}{ELLIPSIS}", &intro[..end]))
}

/// Ceiling of `found / size`; zero when the page size is zero.
pub fn total_pages(found: u64, size: u64) -> u64 {
    if size == 0 {
        return 0;
    }
    found.div_ceil(size)
}
