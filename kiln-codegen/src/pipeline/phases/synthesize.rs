//! Synthesize phase - renders every output file.

use crate::{
    Result,
    pipeline::{Phase, SynthContext},
    synth::Synthesizer,
};

pub struct SynthesizePhase;

impl Phase for SynthesizePhase {
    fn name(&self) -> &'static str {
        "synthesize"
    }

    fn description(&self) -> &'static str {
        "Render the project files"
    }

    fn run(&self, ctx: &mut SynthContext) -> Result<()> {
        let output =
            Synthesizer::new().synthesize(&ctx.descriptor, ctx.dependencies()?, ctx.targets()?)?;
        ctx.output = Some(output);
        Ok(())
    }
}
