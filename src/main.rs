//! Relief CLI entry point

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod render;
mod shell;

#[derive(Parser)]
#[command(name = "relief")]
#[command(about = "Relief camp network: spanning backbone and nearest-camp routing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (defaults to ./relief.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Render results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session on stdin
    Shell,
    /// Run the built-in nearest-camp scenario and exit
    Demo,
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let env_warning = config::load_env_file(Path::new(config::ENV_FILE));
    let config = config::ShellConfig::load(cli.config.as_deref())?;

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { config.log_level.as_str() };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "relief={log_level},relief_core={log_level}"
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Some(warning) = env_warning {
        tracing::warn!("{}", warning);
    }
    tracing::debug!("Relief v{}", env!("CARGO_PKG_VERSION"));

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => commands::shell(config, cli.json),
        Commands::Demo => commands::demo(cli.json),
        Commands::Version => {
            println!("Relief v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
