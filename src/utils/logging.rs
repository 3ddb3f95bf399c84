use tracing::Level;

/// Install the stderr fmt subscriber. Later calls are no-ops so the CLI can
/// be driven repeatedly from tests.
pub fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
