//! Check operation - descriptor validation.

use std::path::Path;

use kiln_codegen::pipeline::{Diagnostic, Phase, Pipeline, SynthContext, phases::ValidatePhase};
use kiln_manifest::ProjectDescriptor;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Every lint runs first so all diagnostics are reported together. The rest
/// of the pipeline then runs to surface dependency and target errors; its
/// output is discarded.
pub fn check(descriptor: &ProjectDescriptor, config_path: &Path) -> CheckReport {
    let mut ctx = SynthContext::new(descriptor.clone());
    let linted = ValidatePhase::new().run(&mut ctx);
    let mut diagnostics = ctx.diagnostics;

    if linted.is_ok() {
        // Lints already ran above.
        let pipeline = Pipeline::new().validate_with(ValidatePhase::empty());
        match pipeline.run(descriptor.clone()) {
            Ok(ctx) => diagnostics.extend(ctx.diagnostics),
            Err(e) => diagnostics.push(Diagnostic::error("synth", e.to_string())),
        }
    }

    tracing::debug!(
        config = %config_path.display(),
        diagnostics = diagnostics.len(),
        "check finished"
    );
    CheckReport::new(config_path, diagnostics)
}
