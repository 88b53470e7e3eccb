//! Logging setup
//!
//! Logs go to stderr so command output on stdout stays machine readable.

use crate::cli::LogFormat;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose { "apcalc=debug" } else { "apcalc=info" }
}

/// Initialize the global subscriber. `RUST_LOG` takes precedence over
/// `verbose`.
pub fn init_tracing(verbose: bool, format: LogFormat) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    let result = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
    result.map_err(|e| anyhow::anyhow!(e))
}
