use clap::Args;
use eyre::Result;

use super::DescriptorArg;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub(super) descriptor: DescriptorArg,
}

impl CheckCommand {
    /// Exits with status 1 when any error is reported.
    pub fn run(&self) -> Result<()> {
        let kiln_toml = self.descriptor.load();
        let report = ops::check(kiln_toml.descriptor(), kiln_toml.path());
        report.render(&mut TerminalOutput::new());

        if report.is_valid() {
            Ok(())
        } else {
            std::process::exit(1)
        }
    }
}
