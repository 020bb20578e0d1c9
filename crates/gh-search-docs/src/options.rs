use clap::CommandFactory;

use crate::cli::{Cli, OutputFormat};
use crate::error::SearchError;

/// Default `--size`.
///
/// Also decides the top-5 preview: results are capped at this many only
/// when `--size` was left at its default.
pub const DEFAULT_SIZE: u32 = 5;

/// Largest page size the search API accepts.
pub const MAX_SIZE: u32 = 50;

pub const MIN_SIZE: u32 = 1;

/// Validated options for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    pub query: String,
    /// Always within `MIN_SIZE..=MAX_SIZE`
    pub size: u32,
    /// The version as given on the command line, before normalization
    pub version: String,
    pub language: String,
    pub page: i64,
    pub sort: String,
    pub highlights: Vec<String>,
    pub includes: Vec<String>,
    pub toplevel: Vec<String>,
    pub aggregate: Vec<String>,
    pub matched_content: bool,
    pub debug: bool,
    pub format: OutputFormat,
    pub plain: bool,
}

impl SearchOptions {
    /// Validate parsed arguments.
    ///
    /// The query comes from `--query`, or else from the positional words
    /// joined by single spaces.
    pub fn from_cli(cli: &Cli) -> Result<Self, SearchError> {
        let query = if cli.query.is_empty() {
            cli.words.join(" ")
        } else {
            cli.query.clone()
        };

        if query.is_empty() {
            return Err(SearchError::MissingQuery {
                usage: Cli::command().render_help().to_string(),
            });
        }

        let size = match u32::try_from(cli.size) {
            Ok(size) if size > MAX_SIZE => return Err(SearchError::SizeTooLarge),
            Ok(size) if size >= MIN_SIZE => size,
            Ok(_) => return Err(SearchError::SizeTooSmall),
            Err(_) if cli.size > 0 => return Err(SearchError::SizeTooLarge),
            Err(_) => return Err(SearchError::SizeTooSmall),
        };

        Ok(Self {
            query,
            size,
            version: cli.version.clone(),
            language: cli.language.clone(),
            page: cli.page,
            sort: cli.sort.clone(),
            highlights: cli.highlights.clone(),
            includes: cli.includes.clone(),
            toplevel: cli.toplevel.clone(),
            aggregate: cli.aggregate.clone(),
            matched_content: cli.include_matched_content,
            debug: cli.debug,
            format: cli.format,
            plain: cli.plain,
        })
    }

    /// Whether results go through the styling engine.
    ///
    /// Either `--plain` or `--format plain` turns styling off.
    pub fn styled(&self) -> bool {
        !self.plain && self.format != OutputFormat::Plain
    }

    /// Whether `--size` was left at its default.
    pub fn default_size(&self) -> bool {
        self.size == DEFAULT_SIZE
    }
}
