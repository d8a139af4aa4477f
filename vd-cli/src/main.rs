//! vd-cli - Command line client for the visualization dashboard backend.

use clap::Parser;
use vd_api::{ApiClient, DEFAULT_BACKEND_URL};

#[derive(Parser)]
#[command(
    name = "vd-cli",
    version,
    about = "Create, upload and chart datasets on the visualization backend"
)]
struct Cli {
    /// Backend base URL (the `/api` prefix is added automatically)
    #[arg(long, global = true, env = "VD_BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    backend_url: String,

    #[command(subcommand)]
    command: vd_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Backend {}", cli.backend_url);
    let client = ApiClient::new(&cli.backend_url);
    vd_cmd::run(&client, cli.command).await
}
