//! Centralized logging setup with dual output (console + bazar.log)

use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize logging with dual output: stderr + bazar.log file
///
/// The console layer writes to stderr so log lines never interleave with
/// the menu on stdout, and stays at "warn" unless `verbose` raises it to
/// "debug". The file layer always captures "info" and above. RUST_LOG
/// overrides both filters when set.
///
/// The _guard is forgotten to keep the file appender alive for the program lifetime.
pub fn init_dual_logging(verbose: bool) {
    let file_appender = tracing_appender::rolling::never(".", "bazar.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let console_default = if verbose { "debug" } else { "warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(console_default));

    let file_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(env_filter),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(file_filter),
        )
        .init();

    // Keep guard alive for the program lifetime
    std::mem::forget(_guard);
}
