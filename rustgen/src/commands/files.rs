use clap::Args;
use eyre::Result;
use rustgen_codegen::Generator;

use super::ConfigArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct FilesCommand {
    #[command(flatten)]
    pub config: ConfigArgs,
}

impl FilesCommand {
    pub fn run(&self) -> Result<()> {
        let config = self.config.load();
        let generator = Generator::new(&config);

        ops::files(&generator).render(&mut TerminalOutput::new());
        Ok(())
    }
}
