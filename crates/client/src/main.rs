//! Terminal client entry point.
mod app;
mod config;
mod terminal;
mod ui;

use anyhow::Result;
use app::App;
use config::CliConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::from_env();
    App::new(config)?.run().await
}
