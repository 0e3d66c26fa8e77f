use std::env;
use std::io;

use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber for the CLI.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects `debug` over `warn`.
/// Calling this twice is harmless.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = env::var("RUST_LOG")
        .map_or_else(|_| EnvFilter::new(default_level), |directive| EnvFilter::new(&directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
