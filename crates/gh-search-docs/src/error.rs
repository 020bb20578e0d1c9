//! Errors that end an invocation.
//!
//! Every variant exits with status 1. The `Display` text is the line printed
//! to stderr; [`SearchError::hint`] adds an optional second line.

use thiserror::Error;

use crate::options::{MAX_SIZE, MIN_SIZE};
use crate::versions::LISTING_FALLBACK;

#[derive(Debug, Error)]
pub enum SearchError {
    /// No query flag and no positional words. Carries the rendered help.
    #[error("{usage}")]
    MissingQuery { usage: String },

    #[error(
        "Error: --size cannot exceed {max} (GitHub Docs API limit). Use --page to navigate through more results.",
        max = MAX_SIZE
    )]
    SizeTooLarge,

    #[error("Error: --size must be at least {min}.", min = MIN_SIZE)]
    SizeTooSmall,

    #[error("error: {0}")]
    Url(#[from] url::ParseError),

    #[error("Error making request: {0}")]
    Request(#[source] Box<ureq::Error>),

    #[error("API returned status {0}")]
    Status(u16),

    #[error("error: {0}")]
    ReadBody(#[source] std::io::Error),

    #[error("Error parsing response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("error: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("error: {0}")]
    Render(#[from] std::fmt::Error),

    #[error(
        "Error loading supported versions: {0:#}\nFallback supported versions: {fallback}",
        fallback = LISTING_FALLBACK
    )]
    Versions(anyhow::Error),
}

impl SearchError {
    /// Extra guidance printed after the error line.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Status(429) => Some("Rate limited. Please try again later."),
            _ => None,
        }
    }

    /// The full text for stderr, one message per line.
    pub fn report(&self) -> String {
        let mut report = self.to_string();
        if !report.ends_with('\n') {
            report.push('\n');
        }
        if let Some(hint) = self.hint() {
            report.push_str(hint);
            report.push('\n');
        }
        report
    }
}

impl From<ureq::Error> for SearchError {
    fn from(error: ureq::Error) -> Self {
        Self::Request(Box::new(error))
    }
}
