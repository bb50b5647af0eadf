use clap::Parser;
use mira::config::Cli;
use mira::{scheduler, SyncConfig, SyncLogger};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Convert CLI args to SyncConfig - this validates immediately
    let config = Arc::new(SyncConfig::try_from(cli)?);

    let logger = Arc::new(SyncLogger::open(&config.log_path)?);
    logger.log(&format!(
        "mira v{} mirroring {} -> {} every {}s",
        mira::VERSION,
        config.source.display(),
        config.replica.display(),
        config.interval.as_secs()
    ));

    scheduler::run(config, logger).await?;

    Ok(())
}
