//! Search the GitHub documentation from the command line.
//!
//! The binary is a thin wrapper around [`run_cli_with`], which takes the raw
//! arguments and a [`Context`] holding the network, version catalog and
//! styling collaborators, and returns everything the process should print.

pub mod cli;
pub mod color;
pub mod error;
pub mod logging;
pub mod model;
pub mod options;
pub mod params;
pub mod render;
pub mod reorder;
pub mod transport;
pub mod versions;

use clap::Parser;
use clap::error::ErrorKind;
use tracing::debug;

use crate::cli::Cli;
use crate::error::SearchError;
use crate::model::SearchResult;
use crate::options::SearchOptions;
use crate::params::{QueryParams, SEARCH_ENDPOINT};
use crate::render::{Stylist, TermStylist, render_results};
use crate::transport::{HttpTransport, SearchTransport};
use crate::versions::{DataFileVersions, VersionSource, format_version_listing, normalize_version};

/// What one invocation prints, and how it exits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CliOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// The collaborators a search talks to.
pub struct Context {
    pub transport: Box<dyn SearchTransport>,
    pub versions: Box<dyn VersionSource>,
    pub stylist: Box<dyn Stylist>,
}

impl Context {
    /// The real network, the shipped catalog and terminal styling.
    pub fn live() -> Self {
        Self {
            transport: Box::new(HttpTransport::new()),
            versions: Box::new(DataFileVersions::new()),
            stylist: Box::new(TermStylist::default()),
        }
    }
}

/// Parse raw arguments (without the program name), accepting flags after
/// the query.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Cli, clap::Error> {
    let reordered = reorder::reorder_args(args);
    Cli::try_parse_from(std::iter::once(cli::BIN_NAME.to_string()).chain(reordered))
}

/// Run a full invocation against the live collaborators.
pub fn run_cli<S: AsRef<str>>(args: &[S]) -> CliOutput {
    run_cli_with(args, &Context::live())
}

/// Run a full invocation against the given collaborators.
pub fn run_cli_with<S: AsRef<str>>(args: &[S], ctx: &Context) -> CliOutput {
    match parse_args(args) {
        Ok(cli) => run_parsed(&cli, ctx),
        Err(err) => parse_failure(&err),
    }
}

/// Output for arguments clap refused. `--help` is not a failure.
pub fn parse_failure(err: &clap::Error) -> CliOutput {
    if err.kind() == ErrorKind::DisplayHelp {
        return CliOutput {
            stdout: err.to_string(),
            ..Default::default()
        };
    }
    CliOutput {
        stderr: err.to_string(),
        exit_code: 1,
        ..Default::default()
    }
}

/// Run already parsed arguments.
pub fn run_parsed(cli: &Cli, ctx: &Context) -> CliOutput {
    let mut output = CliOutput::default();
    if let Err(err) = run(cli, ctx, &mut output) {
        output.stderr.push_str(&err.report());
        output.exit_code = 1;
    }
    output
}

fn run(cli: &Cli, ctx: &Context, output: &mut CliOutput) -> Result<(), SearchError> {
    if cli.list_versions {
        let catalog = ctx.versions.load().map_err(SearchError::Versions)?;
        output.stdout.push_str(&format_version_listing(&catalog));
        return Ok(());
    }

    let opts = SearchOptions::from_cli(cli)?;

    let catalog = match ctx.versions.load() {
        Ok(catalog) => Some(catalog),
        Err(err) => {
            debug!("supported versions unavailable: {err:#}");
            None
        }
    };
    let version = normalize_version(&opts.version, catalog.as_ref());

    let url = QueryParams::for_search(&opts, &version).to_url(SEARCH_ENDPOINT)?;
    let body = ctx.transport.fetch(&url)?;

    if opts.debug {
        output.stderr.push_str(&format!(
            "Raw response:\n{}\n",
            String::from_utf8_lossy(&body)
        ));
    }

    let result: SearchResult = match serde_json::from_slice(&body) {
        Ok(result) => result,
        Err(err) => {
            let err = SearchError::Decode(err);
            output.stderr.push_str(&err.report());
            if opts.debug {
                output.stderr.push_str(&format!(
                    "Response body: {}\n",
                    String::from_utf8_lossy(&body)
                ));
            }
            output.exit_code = 1;
            return Ok(());
        }
    };

    output
        .stdout
        .push_str(&render_results(&opts, &result, ctx.stylist.as_ref())?);
    Ok(())
}
