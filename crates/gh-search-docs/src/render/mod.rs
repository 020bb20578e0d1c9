//! Turns a decoded result set into the text printed on stdout.

mod item;
mod selection;
mod style;
mod summary;

pub use item::{DOCS_HOST, item_markdown, item_plain, strip_marks};
pub use selection::{ELLIPSIS, INTRO_LIMIT, RenderDecision, select_count, total_pages, truncate_intro};
pub use style::{Stylist, TermStylist};

use tracing::debug;

use crate::cli::OutputFormat;
use crate::error::SearchError;
use crate::model::SearchResult;
use crate::options::SearchOptions;

/// Render `result` for stdout.
///
/// JSON output skips every display rule and re-serializes the response.
/// Styling failures fall back to the unstyled block for that item.
pub fn render_results(
    opts: &SearchOptions,
    result: &SearchResult,
    stylist: &dyn Stylist,
) -> Result<String, SearchError> {
    if opts.format == OutputFormat::Json {
        let mut out = serde_json::to_string_pretty(result).map_err(SearchError::Encode)?;
        out.push('\n');
        return Ok(out);
    }

    let found = result.meta.found.value;
    if found == 0 {
        return Ok(summary::no_results(&opts.query));
    }

    let mut out = summary::header(found, result.meta.page);
    let decision = RenderDecision::new(opts, result);
    let styled = opts.styled();

    for (index, hit) in result.hits.iter().take(decision.shown).enumerate() {
        let number = index + 1;
        if !styled {
            out.push_str(&item_plain(number, hit, decision.matched_content)?);
            continue;
        }

        let markdown = item_markdown(number, hit, decision.matched_content)?;
        match stylist.style(&markdown) {
            Ok(text) => out.push_str(&text),
            Err(err) => {
                debug!("styling result {number} failed ({err}), printing it unstyled");
                out.push_str(&markdown);
            }
        }
    }

    if decision.preview {
        out.push_str(&summary::preview_hint(found));
    }

    let pages = total_pages(found, result.meta.size);
    if let Some(pagination) = summary::pagination(result.meta.page, pages, found) {
        out.push_str(&pagination);
    }

    Ok(out)
}
