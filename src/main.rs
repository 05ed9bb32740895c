use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use product_catalog::modules::catalog::adapters::inbound::console::{self, StdConsole};
use product_catalog::modules::catalog::adapters::outbound::http_product_store::HttpProductStore;
use product_catalog::modules::catalog::controller::CatalogController;
use product_catalog::shell::config::{Cli, Command, ConsoleConfig, ServeConfig};
use product_catalog::shell::http::router;
use product_catalog::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // stderr keeps log lines out of the console's own output.
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().into_command()? {
        Command::Console(config) => run_console(config).await,
        Command::Serve(config) => serve(config).await,
    }
}

async fn run_console(config: ConsoleConfig) -> anyhow::Result<()> {
    let store = Arc::new(HttpProductStore::new(
        config.http_client()?,
        config.api_url.clone(),
    ));
    let io = Arc::new(StdConsole::stdio());
    let mut controller = CatalogController::new(store, io.clone());

    tracing::info!(url = %config.api_url, "catalog console started");
    console::run(&mut controller, io.as_ref()).await?;
    Ok(())
}

async fn serve(config: ServeConfig) -> anyhow::Result<()> {
    let app = router(AppState::in_memory());

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Products endpoint: http://{}/products", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
