// Command line and environment configuration.
//
// Every flag falls back to its CATALOG_* environment variable, then to a default.
// A `.env` file is loaded by main before parsing.

use clap::{Args, Parser, Subcommand};
use reqwest::Url;
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8080/products";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Parser)]
#[command(name = "product_catalog")]
#[command(about = "Product catalog console and development products API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage products from the terminal against a products API.
    Console(ConsoleConfig),
    /// Serve an in-memory products API.
    Serve(ServeConfig),
}

impl Cli {
    /// `console` when no subcommand is given.
    pub fn into_command(self) -> Result<Command, clap::Error> {
        match self.command {
            Some(command) => Ok(command),
            None => ConsoleConfig::from_env().map(Command::Console),
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct ConsoleConfig {
    /// Products collection URL.
    #[arg(long, env = "CATALOG_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: Url,

    /// Connect timeout for the products API, in milliseconds.
    #[arg(long, env = "CATALOG_CONNECT_TIMEOUT_MS")]
    pub connect_timeout_ms: Option<u64>,
}

impl ConsoleConfig {
    /// Environment and defaults only, no flags.
    pub fn from_env() -> Result<Self, clap::Error> {
        #[derive(Parser)]
        struct EnvOnly {
            #[command(flatten)]
            config: ConsoleConfig,
        }
        EnvOnly::try_parse_from(["console"]).map(|parsed| parsed.config)
    }

    pub fn http_client(&self) -> reqwest::Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder();
        if let Some(ms) = self.connect_timeout_ms {
            builder = builder.connect_timeout(Duration::from_millis(ms));
        }
        builder.build()
    }
}

#[derive(Debug, Clone, Args)]
pub struct ServeConfig {
    /// Listen address of the products API.
    #[arg(long, env = "CATALOG_BIND_ADDR", default_value = DEFAULT_BIND_ADDR)]
    pub bind_addr: SocketAddr,
}
