//! Tracing setup for the CLI.

use tracing_subscriber::EnvFilter;

/// Initialize tracing to stderr.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects `debug` and the
/// default is `warn`. JSON lines are used in `--json` mode so stdout stays
/// machine-readable. Safe to call more than once.
pub fn init(verbose: bool, json: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
