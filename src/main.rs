use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use pipeline_agent::connector::api::{Container, ContainerConfig, Router};
use pipeline_agent::connector::web;
use pipeline_agent::Commands;

#[derive(Parser)]
#[command(name = "pipeline-agent")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Answer with a canned workflow instead of calling the model
    #[arg(long, global = true)]
    mock_llm: bool,

    /// Chat-completion base URL (default: OPENROUTER_BASE_URL or OpenRouter)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Model identifier (default: OPENROUTER_MODEL or xai/grok-code-fast-1)
    #[arg(long, global = true)]
    model: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = ContainerConfig::resolve(cli.base_url, cli.model, cli.mock_llm);
    let container = Container::new(config);

    match cli.command {
        Commands::Serve { host, port } => {
            let addr: SocketAddr = format!("{host}:{port}")
                .parse()
                .with_context(|| format!("invalid bind address {host}:{port}"))?;
            web::serve(Arc::new(container), addr).await
        }
        command => {
            let router = Router::new(&container);
            let output = router.route(command).await?;
            println!("{}", output);
            Ok(())
        }
    }
}
