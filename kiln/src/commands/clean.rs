use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops::{self, clean::CleanOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CleanCommand {
    /// Project root holding .kiln/files.json
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,

    /// List the files that would be removed and keep them
    #[arg(long)]
    dry_run: bool,
}

impl CleanCommand {
    pub fn run(&self) -> Result<()> {
        let options = CleanOptions {
            output_dir: &self.output,
            dry_run: self.dry_run,
        };

        ops::clean(options)
            .unwrap_or_exit()
            .render(&mut TerminalOutput::new());
        Ok(())
    }
}
