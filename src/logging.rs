//! Logging setup for the binary.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// Respects `RUST_LOG` when set; otherwise defaults to `card_brand=info`,
/// or `card_brand=debug` with `--verbose`. Logs go to stderr so they never
/// interleave with report output or the interactive prompts on stdout.
pub fn init(verbose: bool) {
    let default_filter = if verbose {
        "card_brand=debug"
    } else {
        "card_brand=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
