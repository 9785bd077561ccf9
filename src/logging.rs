use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global `tracing` subscriber for the benchmark binary.
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks between `debug` and
/// `info` for this crate. The library itself never calls this.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        "waypoint=debug"
    } else {
        "waypoint=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // a second init (e.g. from tests) is a no-op rather than a panic
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init();
}
