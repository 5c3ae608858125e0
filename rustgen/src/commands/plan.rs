use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use rustgen_codegen::Generator;

use super::ConfigArgs;
use crate::ops;

#[derive(Args)]
pub struct PlanCommand {
    /// Path to the parsed document (JSON)
    pub document: PathBuf,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    #[command(flatten)]
    pub config: ConfigArgs,
}

impl PlanCommand {
    pub fn run(&self) -> Result<()> {
        let config = self.config.load();
        let document = ops::load_document(&self.document)?;

        let plan = Generator::new(&config).transform(&document);
        let json = if self.pretty {
            serde_json::to_string_pretty(&plan)
        } else {
            serde_json::to_string(&plan)
        }
        .wrap_err("Failed to serialize generation plan")?;

        println!("{}", json);
        Ok(())
    }
}
