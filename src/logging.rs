use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize diagnostic logging on stderr.
///
/// `RUST_LOG` wins when set; otherwise `verbosity` (the number of `-v`
/// flags) picks the level, starting at `warn`. Report output on stdout is
/// never mixed with log lines.
pub fn init(verbosity: u8) -> Result<(), tracing_subscriber::util::TryInitError> {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
}
