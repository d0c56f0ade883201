use super::load_config;
use crate::cli::GlobalArgs;
use crate::client::{AlgorandClient, DataSource};
use crate::errors::AppResult;
use crate::reports::{OutputFormat, ReportFormatter};
use clap::Args;

/// Balance of one account
#[derive(Args)]
pub struct BalanceCommand {
    /// Account address
    pub address: String,

    /// Output format: console or json
    #[arg(long, default_value = "console")]
    pub format: String,
}

impl BalanceCommand {
    pub async fn run(&self, global: &GlobalArgs) -> AppResult<()> {
        let config = load_config(global);
        let client = AlgorandClient::new(&config.client)?;
        let address = client.validate_address(&self.address)?;
        let balance = client.fetch_account_balance(&address).await;
        print!(
            "{}",
            ReportFormatter::format_balance(&address, balance, &OutputFormat::parse(&self.format))?
        );
        Ok(())
    }
}
