use clap::Args;
use eyre::Result;

use super::{DescriptorArg, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InfoCommand {
    #[command(flatten)]
    pub(super) descriptor: DescriptorArg,
}

impl InfoCommand {
    pub fn run(&self) -> Result<()> {
        let kiln_toml = self.descriptor.load();
        ops::info(kiln_toml.descriptor(), kiln_toml.path())
            .unwrap_or_exit()
            .render(&mut TerminalOutput::new());
        Ok(())
    }
}
