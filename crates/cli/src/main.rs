use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing::info;
use webfilter_domain::CliOverrides;

mod bootstrap;
mod commands;
mod di;

#[derive(Parser)]
#[command(name = "webfilter")]
#[command(version)]
#[command(about = "WebFilter - blocks navigation to URLs containing stored filter words")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Database path
    #[arg(long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a filter word
    Add { word: String },
    /// List stored filters
    List,
    /// Remove a filter by id
    Remove { id: i64 },
    /// Check whether a URL would be blocked
    Check { url: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        database_path: cli.database.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    let database_url = format!("sqlite:{}", config.database.path);
    let pool = bootstrap::init_database(&database_url, &config.database).await?;

    let repos = di::Repositories::new(pool);
    let use_cases = di::UseCases::new(&repos).await?;

    info!("WebFilter v{} ready", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Add { word } => commands::add(&use_cases, &word).await,
        Command::List => commands::list(&use_cases),
        Command::Remove { id } => commands::remove(&use_cases, id).await,
        Command::Check { url } => commands::check(&use_cases, &url),
    }
}
