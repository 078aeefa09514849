use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Installs a global `tracing` subscriber writing to stderr through a non-blocking writer.
///
/// The filter is read from `RUST_LOG` and falls back to `warn`. Keep the returned guard alive
/// until the program exits, otherwise buffered log lines are lost.
pub fn init() -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .init();
    guard
}
