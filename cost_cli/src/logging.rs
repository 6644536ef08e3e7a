//! Diagnostic tracing for the CLI.
//!
//! Estimates and reports go to stdout; tracing goes to stderr so a `--json`
//! run can be piped straight into another tool.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `RUST_LOG` selects what is shown. Without it only warnings appear, such as
/// an estimate rejected for non-finite output. Unparseable directives are
/// skipped rather than aborting the run.
///
/// ```bash
/// RUST_LOG=cost_core::catalog=trace cost_cli --catalog prices.json catalog
/// ```
pub fn init() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
