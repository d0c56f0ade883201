use super::{build_analyser, load_config};
use crate::cli::GlobalArgs;
use crate::errors::AppResult;
use crate::reports::{OutputFormat, ReportFormatter};
use clap::Args;

/// Reputation insights across accounts
#[derive(Args)]
pub struct InsightsCommand {
    /// Account addresses
    #[arg(required = true)]
    pub addresses: Vec<String>,

    /// Output format: console or json
    #[arg(long, default_value = "console")]
    pub format: String,
}

impl InsightsCommand {
    pub async fn run(&self, global: &GlobalArgs) -> AppResult<()> {
        let config = load_config(global);
        let analyser = build_analyser(&config)?;
        let insights = analyser.get_reputation_insights(&self.addresses).await;
        print!(
            "{}",
            ReportFormatter::format_insights(&insights, &OutputFormat::parse(&self.format))?
        );
        Ok(())
    }
}
