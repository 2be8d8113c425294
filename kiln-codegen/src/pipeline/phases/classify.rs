//! Classify phase - folds the declared dependency lists into one set.

use crate::{
    Result,
    deps::DependencyClassifier,
    pipeline::{Diagnostic, Phase, SynthContext},
};

pub struct ClassifyPhase;

impl Phase for ClassifyPhase {
    fn name(&self) -> &'static str {
        "classify"
    }

    fn description(&self) -> &'static str {
        "Classify dependencies as runtime, peer, dev or bundled"
    }

    fn run(&self, ctx: &mut SynthContext) -> Result<()> {
        let set = DependencyClassifier::new()
            .with_constraints(&ctx.descriptor.versions)
            .classify(&ctx.descriptor.dependencies)?;

        for name in set.demoted() {
            ctx.add_diagnostic(
                Diagnostic::warning(
                    self.name(),
                    format!(
                        "dependency '{}' is both runtime and peer; keeping it as a peer",
                        name
                    ),
                )
                .at("dependencies.runtime"),
            );
        }

        ctx.dependencies = Some(set);
        Ok(())
    }
}
