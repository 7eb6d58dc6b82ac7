use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize diagnostic logging to stderr.
///
/// Uses `RUST_LOG` if set, otherwise `warn` (or `adminlog=debug` with
/// `--verbose`). Table output goes to stdout and is never mixed in.
pub fn init(verbose: bool) {
    let fallback = if verbose { "warn,adminlog=debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}
