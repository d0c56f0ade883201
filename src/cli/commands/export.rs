use super::{build_analyser, load_config, write_output_to_file};
use crate::cli::GlobalArgs;
use crate::errors::AppResult;
use crate::reports::ExportFormat;
use clap::Args;
use std::path::PathBuf;

/// Export a comparison
#[derive(Args)]
pub struct ExportCommand {
    /// Account addresses
    #[arg(required = true)]
    pub addresses: Vec<String>,

    /// Export format: json or csv
    #[arg(long, default_value = "json")]
    pub format: String,

    /// Write to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl ExportCommand {
    pub async fn run(&self, global: &GlobalArgs) -> AppResult<()> {
        // Reject unknown formats before building a client
        let format: ExportFormat = self.format.parse()?;

        let config = load_config(global);
        let analyser = build_analyser(&config)?;
        let content = analyser.export(&self.addresses, &format.to_string()).await?;

        match &self.output {
            Some(path) => write_output_to_file(path, &content, &format!("{} export", format)),
            None => {
                print!("{}", content);
                if !content.ends_with('\n') {
                    println!();
                }
                Ok(())
            }
        }
    }
}
