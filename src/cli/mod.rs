use crate::errors::AppResult;
use clap::{Parser, Subcommand};

pub mod commands;

/// Algorand Account Reputation Analyser
#[derive(Parser)]
#[command(name = "algorand-reputation")]
#[command(about = "Heuristic, explainable reputation scoring for Algorand accounts")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command
#[derive(clap::Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Network profile: mainnet or testnet (overrides config.toml)
    #[arg(long, global = true)]
    pub network: Option<String>,

    /// Accounts scored concurrently in batch commands (overrides config.toml)
    #[arg(long, global = true)]
    pub concurrency: Option<usize>,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Normalised reputation score (0-100) of one account
    Score(commands::score::ScoreCommand),
    /// Full score breakdown and activity statistics of one account
    Detail(commands::detail::DetailCommand),
    /// Account balance in ALGO
    Balance(commands::balance::BalanceCommand),
    /// Rank several accounts by reputation
    Compare(commands::compare::CompareCommand),
    /// Export a comparison as JSON or CSV
    Export(commands::export::ExportCommand),
    /// Transaction type and score distribution across accounts
    Insights(commands::insights::InsightsCommand),
}

pub async fn run() -> AppResult<()> {
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Score(command) => command.run(&cli.global).await,
        Commands::Detail(command) => command.run(&cli.global).await,
        Commands::Balance(command) => command.run(&cli.global).await,
        Commands::Compare(command) => command.run(&cli.global).await,
        Commands::Export(command) => command.run(&cli.global).await,
        Commands::Insights(command) => command.run(&cli.global).await,
    }
}
