//! Arbor CLI entry point

use arbor_client::ClientConfig;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "arbor")]
#[command(version)]
#[command(about = "Mirror remote course folders as one hierarchical tree", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Listing page size sent to the API
    #[arg(long)]
    per_page: Option<u32>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch every course and print the aggregate folder tree (default)
    Tree,
    /// Fetch and print the authenticated user's profile
    Profile,
    /// Fetch and print the course list
    Courses,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!("arbor={}", log_level)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command.unwrap_or(Commands::Tree) {
        Commands::Tree => commands::tree(load_config(cli.per_page)?).await,
        Commands::Profile => commands::profile(load_config(cli.per_page)?).await,
        Commands::Courses => commands::courses(load_config(cli.per_page)?).await,
        Commands::Version => {
            println!("arbor v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Resolve the client configuration from the environment, with CLI
/// overrides applied on top.
fn load_config(per_page: Option<u32>) -> anyhow::Result<ClientConfig> {
    let mut config = ClientConfig::from_env()?;
    if let Some(per_page) = per_page {
        config = config.with_per_page(per_page);
    }
    Ok(config)
}
