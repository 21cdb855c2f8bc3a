//! Start the ExpenseHub server.

use std::process::ExitCode;

use clap::Args;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, config_path: &str) -> anyhow::Result<ExitCode> {
    let mut config = super::load_config(config_path)?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }

    println!("Starting ExpenseHub server...");
    println!("  Host: {}", config.server.host);
    println!("  Port: {}", config.server.port);

    expensehub_api::run_server(config).await?;
    Ok(ExitCode::SUCCESS)
}
