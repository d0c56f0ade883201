use super::{build_engine, load_config};
use crate::cli::GlobalArgs;
use crate::errors::AppResult;
use crate::reports::{OutputFormat, ReportFormatter};
use clap::Args;

/// Normalised reputation score of one account
#[derive(Args)]
pub struct ScoreCommand {
    /// Account address
    pub address: String,

    /// Output format: console or json
    #[arg(long, default_value = "console")]
    pub format: String,
}

impl ScoreCommand {
    pub async fn run(&self, global: &GlobalArgs) -> AppResult<()> {
        let config = load_config(global);
        let engine = build_engine(&config)?;
        let score = engine.get_reputation_score(&self.address).await?;
        print!(
            "{}",
            ReportFormatter::format_score(&self.address, score, &OutputFormat::parse(&self.format))?
        );
        Ok(())
    }
}
