use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Default level: warnings only; `--debug` shows per-file decisions
pub(crate) fn log_level(debug: bool) -> Level {
    if debug { Level::DEBUG } else { Level::WARN }
}

/// Install the stderr subscriber. `RUST_LOG` overrides the level.
pub(crate) fn init_logging(debug: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(log_level(debug)).into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
