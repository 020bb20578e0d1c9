use clap::{ArgAction, Parser, ValueEnum};

use crate::color::Color;
use crate::options::DEFAULT_SIZE;

/// Name shown in usage output, as invoked through the GitHub CLI.
pub const BIN_NAME: &str = "gh search-docs";

/// How search results are printed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Styled terminal output
    #[default]
    Pretty,
    /// Plain text with clickable URLs
    Plain,
    /// The raw API response, re-serialized
    Json,
}

/// Search the GitHub documentation
#[derive(Parser, Debug)]
#[command(name = "gh-search-docs", bin_name = BIN_NAME)]
#[command(about = "Search the GitHub documentation from the command line", long_about = None)]
#[command(disable_version_flag = true)]
#[command(override_usage = "gh search-docs [flags] <query>")]
#[command(after_help = "\
By default, output uses pretty formatting with colors.
Use --plain for simple text output with clickable URLs.

EXAMPLES:
  gh search-docs ssh key
  gh search-docs \"ssh key\" --size 10 --page 2
  gh search-docs actions secrets --version enterprise-server@3.17
  gh search-docs codespaces --include-matched-content --plain")]
pub struct Cli {
    /// Search query words (joined with spaces)
    pub words: Vec<String>,

    /// Search query (takes precedence over positional words)
    #[arg(long, default_value = "")]
    pub query: String,

    /// Number of results to return (max: 50, default shows top 5 with links and descriptions)
    #[arg(long, default_value_t = i64::from(DEFAULT_SIZE), allow_negative_numbers = true)]
    pub size: i64,

    /// Docs version: free-pro-team, enterprise-cloud, or enterprise-server@<version>
    #[arg(long, default_value = "free-pro-team")]
    pub version: String,

    /// Language code
    #[arg(long, default_value = "en")]
    pub language: String,

    /// Page number for pagination
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub page: i64,

    /// Sort order
    #[arg(long, default_value = "")]
    pub sort: String,

    /// Highlight options (repeatable): title, content, content_explicit, term
    #[arg(long = "highlights", value_name = "FIELD", action = ArgAction::Append)]
    pub highlights: Vec<String>,

    /// Additional includes (repeatable): intro, headings, toplevel
    #[arg(long = "include", value_name = "FIELD", action = ArgAction::Append)]
    pub includes: Vec<String>,

    /// Toplevel filter (repeatable)
    #[arg(long, value_name = "TOPLEVEL", action = ArgAction::Append)]
    pub toplevel: Vec<String>,

    /// Aggregate options (repeatable)
    #[arg(long, value_name = "AGGREGATE", action = ArgAction::Append)]
    pub aggregate: Vec<String>,

    /// Show highlighted matched content instead of descriptions
    #[arg(long)]
    pub include_matched_content: bool,

    /// Show the raw JSON response from the API
    #[arg(long)]
    pub debug: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,

    /// Disable pretty rendering (use plain text output)
    #[arg(long)]
    pub plain: bool,

    /// List supported GitHub Enterprise Server versions
    #[arg(long)]
    pub list_versions: bool,

    /// When to use colors in output.
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: Color,
}
