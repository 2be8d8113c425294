//! Info operation - describe the resolved project.

use std::path::Path;

use kiln_codegen::{Result, pipeline::Pipeline, targets::PublishTarget};
use kiln_manifest::ProjectDescriptor;

use crate::reports::{DependencyInfo, InfoReport, StepInfo, TargetInfo};

/// Execute the info operation.
///
/// Runs the full pipeline in memory; nothing is written.
pub fn info(descriptor: &ProjectDescriptor, config_path: &Path) -> Result<InfoReport> {
    let pipeline = Pipeline::new();
    let ctx = pipeline.run(descriptor.clone())?;
    let project = &descriptor.project;

    let dependencies = ctx
        .dependencies()?
        .iter()
        .map(|spec| DependencyInfo {
            name: spec.name.clone(),
            range: spec.range().to_string(),
            classification: spec.classification.to_string(),
        })
        .collect();

    let targets = ctx.targets()?.iter().map(target_info).collect();

    let disabled_targets = descriptor
        .publish
        .iter()
        .filter(|(_, config)| !config.enabled)
        .map(|(key, _)| key.clone())
        .collect();

    let output = ctx.output()?;

    let phases = pipeline
        .phases()
        .map(|phase| StepInfo {
            name: phase.name(),
            description: phase.description(),
        })
        .collect();
    let lints = pipeline
        .lints()
        .map(|lint| StepInfo {
            name: lint.name(),
            description: lint.description(),
        })
        .collect();

    Ok(InfoReport {
        name: project.name.clone(),
        version: project.version.to_string(),
        description: project.description.clone(),
        author: match &project.author_address {
            Some(address) => format!("{} <{}>", project.author, address),
            None => project.author.clone(),
        },
        license: project.license.clone(),
        repository: project.repository_url.trim().to_string(),
        config_path: config_path.to_path_buf(),
        dependencies,
        targets,
        disabled_targets,
        generated: output.generated_paths().map(str::to_string).collect(),
        samples: output.samples().map(str::to_string).collect(),
        phases,
        lints,
    })
}

fn target_info(target: &PublishTarget) -> TargetInfo {
    let detail = match target {
        PublishTarget::RegistryDefault { access, registry } => {
            format!("{} ({})", registry, access)
        }
        PublishTarget::AlternateRegistry { module_name, .. } => module_name.clone(),
        PublishTarget::AlternateEcosystem {
            dist_name,
            module_name,
            ..
        } => format!("{} ({})", dist_name, module_name),
    };

    TargetInfo {
        ecosystem: target.ecosystem().label().to_string(),
        detail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::testing;

    #[test]
    fn test_info() {
        let report = info(&testing::descriptor(), Path::new("kiln.toml")).unwrap();

        assert_eq!(report.name, "@matthewbonig/state-machine");
        assert_eq!(report.author, "Matthew Bonig <matthew.bonig@gmail.com>");
        assert_eq!(report.disabled_targets, vec!["go".to_string()]);
        assert_eq!(
            report
                .targets
                .iter()
                .map(|t| t.ecosystem.as_str())
                .collect::<Vec<_>>(),
            vec!["npm", "PyPI"]
        );

        let constructs = report
            .dependencies
            .iter()
            .find(|d| d.name == "constructs")
            .unwrap();
        assert_eq!(constructs.range, "^10.1.203");
        assert_eq!(constructs.classification, "peer");

        assert!(report.generated.iter().any(|p| p == "package.json"));
        assert!(report.samples.iter().any(|p| p == "src/index.ts"));
        assert_eq!(report.phases.first().map(|p| p.name), Some("validate"));
        assert!(report.lints.iter().any(|l| l.name == "duplicate-keyword"));
    }
}
