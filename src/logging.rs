use tracing_subscriber::{EnvFilter, fmt};

/// Initialize diagnostics on stderr, filtered by `RUST_LOG`.
///
/// Falls back to `warn`, or `debug` when `verbose` is set. Stdout is left
/// alone so command output stays machine-readable.
pub fn init_logging(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
