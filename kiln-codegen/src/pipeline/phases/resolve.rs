//! Resolve phase - turns publish blocks into targets.

use crate::{
    Result,
    pipeline::{Diagnostic, Phase, SynthContext},
    targets::TargetRegistry,
};

pub struct ResolvePhase;

impl Phase for ResolvePhase {
    fn name(&self) -> &'static str {
        "resolve"
    }

    fn description(&self) -> &'static str {
        "Resolve enabled publish targets"
    }

    fn run(&self, ctx: &mut SynthContext) -> Result<()> {
        let targets =
            TargetRegistry::new().resolve(ctx.descriptor.name(), &ctx.descriptor.publish)?;

        let disabled: Vec<String> = ctx
            .descriptor
            .publish
            .iter()
            .filter(|(_, config)| !config.enabled)
            .map(|(key, _)| key.clone())
            .collect();
        for key in disabled {
            ctx.add_diagnostic(
                Diagnostic::info(self.name(), format!("publish target '{}' is disabled", key))
                    .at(format!("publish.{}", key)),
            );
        }

        ctx.targets = Some(targets);
        Ok(())
    }
}
