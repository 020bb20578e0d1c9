use anyhow::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Install the global subscriber.
///
/// Events go to stderr so `--format json` output stays parseable. `--debug`
/// lowers the threshold to `DEBUG`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already set.
pub fn initialize_logging(debug: bool) -> Result<()> {
    let level = if debug { Level::DEBUG } else { Level::WARN };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
