use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use rustgen_codegen::Generator;

use super::ConfigArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the parsed document (JSON)
    pub document: PathBuf,

    #[command(flatten)]
    pub config: ConfigArgs,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = self.config.load();
        let document = ops::load_document(&self.document)?;

        let generator = Generator::new(&config);
        let report = ops::check(&generator, &document, &self.document);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }

        Ok(())
    }
}
