use super::{build_engine, load_config};
use crate::cli::GlobalArgs;
use crate::errors::AppResult;
use crate::reports::{OutputFormat, ReportFormatter};
use clap::Args;

/// Score breakdown of one account
#[derive(Args)]
pub struct DetailCommand {
    /// Account address
    pub address: String,

    /// Output format: console or json
    #[arg(long, default_value = "console")]
    pub format: String,
}

impl DetailCommand {
    pub async fn run(&self, global: &GlobalArgs) -> AppResult<()> {
        let config = load_config(global);
        let engine = build_engine(&config)?;
        let breakdown = engine.get_detailed_reputation(&self.address).await?;
        print!(
            "{}",
            ReportFormatter::format_breakdown(
                &self.address,
                &breakdown,
                &OutputFormat::parse(&self.format)
            )?
        );
        Ok(())
    }
}
