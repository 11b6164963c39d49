mod app;
mod config;
mod render;

use anyhow::Result;
use app::App;
use config::AppConfig;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load config
    let config = AppConfig::load("config.toml")?;
    info!("Loaded configuration: {:?}", config);

    // Run one audit cycle against the remote risk engine
    let mut app = App::new(config)?;
    app.run_once().await?;

    Ok(())
}
