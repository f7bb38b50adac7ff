// src/logging.rs
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Install the global subscriber. Output goes to stderr so stdout stays free.
pub fn init_logging(debug: bool) -> anyhow::Result<()> {
    let log_level = if debug { Level::DEBUG } else { Level::INFO };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
