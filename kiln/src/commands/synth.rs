use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::{DescriptorArg, UnwrapOrExit};
use crate::{
    ops::{self, synth::SynthOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct SynthCommand {
    #[command(flatten)]
    descriptor: DescriptorArg,

    /// Project root to write into [default: the descriptor's directory]
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Print the generated files without writing them
    #[arg(long)]
    dry_run: bool,
}

impl SynthCommand {
    pub fn run(&self) -> Result<()> {
        let kiln_toml = self.descriptor.load();
        let output_dir = match &self.output {
            Some(dir) => dir.clone(),
            None => kiln_toml.project_dir().to_path_buf(),
        };
        let options = SynthOptions {
            output_dir: &output_dir,
            dry_run: self.dry_run,
        };

        ops::synth(kiln_toml.descriptor(), options)
            .unwrap_or_exit()
            .render(&mut TerminalOutput::new());
        Ok(())
    }
}
