use tracing_subscriber::EnvFilter;

/// Send log output to stderr, filtered by `RUST_LOG` if set, otherwise
/// at `info` (or `debug` if requested).
pub fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // A subscriber may already be installed, e.g. by an embedding program.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
