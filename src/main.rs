use anyhow::{Context, Result};
use skillwave::adapters::http::{build_app, serve};
use skillwave::adapters::InMemoryStore;
use skillwave::config::AppConfig;
use skillwave::telemetry::init_tracing;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        error!("SkillWave exited with error: {:#}", error);
        eprintln!("SkillWave exited with error: {:#}", error);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = AppConfig::load().context("loading configuration")?;
    init_tracing(&config.server).context("initializing tracing")?;
    config.validate().context("validating configuration")?;
    info!("configuration loaded");

    let store = if config.catalog.seed_sample_data {
        InMemoryStore::seeded()
    } else {
        info!("sample catalog disabled; starting empty");
        InMemoryStore::new()
    };

    let app = build_app(&config.server, &store).context("building HTTP app")?;
    serve(&config.server, app).await.context("serving HTTP")?;

    info!("server stopped");
    Ok(())
}
