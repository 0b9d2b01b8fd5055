use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use redirnet::config::{ServerConfig, config, set_config};
use redirnet::net::server::Server;
use redirnet::redirection::{RedirectionTable, ensure_rules_file};

#[derive(Debug, Parser)]
#[command(name = "redirnet", about = "GET-only HTTP server with URI redirection rules")]
struct Args {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Redirection rules file, one `source,destination` per line
    #[arg(short, long)]
    rules: Option<PathBuf>,
}

#[async_std::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match start(Args::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "server stopped");
            ExitCode::FAILURE
        }
    }
}

async fn start(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = match &args.config {
        Some(path) => ServerConfig::from_file(path)?,
        None => ServerConfig::default(),
    };
    if let Some(port) = args.port {
        cfg.port = port;
    }
    if let Some(rules) = args.rules {
        cfg.redirection_rules = rules;
    }
    set_config(cfg)?;

    let cfg = config();
    ensure_rules_file(&cfg.redirection_rules)?;
    let redirections = RedirectionTable::load(&cfg.redirection_rules)?;

    let server = Server::bind(cfg.address, cfg.port, redirections).await?;
    server.run().await?;
    Ok(())
}
