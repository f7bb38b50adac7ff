// src/bin/jimo/main.rs
use anyhow::Result;
use clap::Parser;
use jimo::cli::Cli;
use jimo::logging::init_logging;
use jimo::{dry_run, load_and_insert};
use tracing::{debug, error};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_logging(args.debug)?;

    let dry = args.dry_run;
    let config = args.into_config()?;
    debug!(
        "loading {} into {}.{} at {}",
        config.file_path.display(),
        config.db_name,
        config.collection_name,
        config.redacted_uri()
    );

    let outcome = if dry {
        dry_run(&config)
    } else {
        load_and_insert(&config).await
    };

    if let Err(e) = &outcome {
        error!("import failed ({} error)", e.kind());
    }
    outcome?;
    Ok(())
}
