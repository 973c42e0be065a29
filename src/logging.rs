use tracing_subscriber::{fmt, EnvFilter};

/// Install the stderr diagnostics subscriber
///
/// `RUST_LOG` is honoured when set, otherwise only warnings are shown.
/// `debug` overrides both and enables per-file statistics.
pub fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
