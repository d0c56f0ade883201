use super::{build_analyser, load_config};
use crate::cli::GlobalArgs;
use crate::errors::AppResult;
use crate::reports::{OutputFormat, ReportFormatter};
use clap::Args;

/// Rank several accounts
#[derive(Args)]
pub struct CompareCommand {
    /// Account addresses
    #[arg(required = true)]
    pub addresses: Vec<String>,

    /// Output format: console or json
    #[arg(long, default_value = "console")]
    pub format: String,
}

impl CompareCommand {
    pub async fn run(&self, global: &GlobalArgs) -> AppResult<()> {
        let config = load_config(global);
        let analyser = build_analyser(&config)?;
        let comparison = analyser.compare_accounts(&self.addresses).await;
        print!(
            "{}",
            ReportFormatter::format_comparison(&comparison, &OutputFormat::parse(&self.format))?
        );
        Ok(())
    }
}
