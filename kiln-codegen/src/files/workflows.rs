//! GitHub Actions workflows.

use kiln_core::{FileRules, GeneratedFile};

use super::{SynthInput, commented};
use crate::{
    builder::{CodeBuilder, yaml},
    targets::PublishTarget,
};

const RUNNER: &str = "ubuntu-latest";
const NODE_VERSION: &str = "18.x";
const ARTIFACT: &str = "build-artifact";
const PUBLIB: &str = "npx -p publib@latest";

/// `.github/workflows/build.yml`: builds pull requests against the release
/// branch.
pub struct BuildWorkflow<'a> {
    input: SynthInput<'a>,
}

impl<'a> BuildWorkflow<'a> {
    pub fn new(input: SynthInput<'a>) -> Self {
        Self { input }
    }
}

impl GeneratedFile for BuildWorkflow<'_> {
    fn path(&self) -> &str {
        ".github/workflows/build.yml"
    }

    fn rules(&self) -> FileRules {
        commented()
    }

    fn render(&self) -> eyre::Result<String> {
        let branch = yaml::scalar(self.input.default_branch())?;
        let mut b = CodeBuilder::yaml();
        b.push_line("name: build");
        b.push_block("on:", |b| {
            b.push_block("pull_request:", |b| {
                branches(b, &branch);
            });
            b.push_line("workflow_dispatch: {}");
        });
        b.push_block("jobs:", |b| {
            b.push_block("build:", |b| {
                b.push_line(&format!("runs-on: {}", RUNNER));
                permissions(b, "write");
                b.push_block("steps:", |b| {
                    step(b, "Checkout", Some("actions/checkout@v4"), &[], None);
                    setup_node(b);
                    step(b, "Install dependencies", None, &[], Some("npm ci"));
                    step(b, "build", None, &[], Some("npm run build"));
                    step(b, "test", None, &[], Some("npm test"));
                    step(b, "package", None, &[], Some("npm run package-all"));
                });
            });
        });
        Ok(b.build())
    }
}

/// `.github/workflows/release.yml`: builds on the release branch, then runs
/// one publish job per enabled target.
pub struct ReleaseWorkflow<'a> {
    input: SynthInput<'a>,
}

impl<'a> ReleaseWorkflow<'a> {
    pub fn new(input: SynthInput<'a>) -> Self {
        Self { input }
    }

    fn release_job(b: &mut CodeBuilder, target: &PublishTarget, env: &[(&str, String)]) {
        let ecosystem = target.ecosystem();
        let job = match ecosystem.key() {
            "go" => "release_golang".to_string(),
            key => format!("release_{}", key),
        };

        b.push_block(&format!("{}:", job), |b| {
            b.push_line(&format!("name: Publish to {}", ecosystem.label()));
            b.push_line("needs: release");
            b.push_line(&format!("runs-on: {}", RUNNER));
            permissions(b, "read");
            b.push_block("steps:", |b| {
                setup_node(b);
                match target {
                    PublishTarget::RegistryDefault { .. } => {}
                    PublishTarget::AlternateRegistry { .. } => {
                        step(
                            b,
                            "Setup Go",
                            Some("actions/setup-go@v5"),
                            &[("go-version", "^1.18.0")],
                            None,
                        );
                    }
                    PublishTarget::AlternateEcosystem { ecosystem, .. } => match ecosystem.key() {
                        "nuget" => step(
                            b,
                            "Setup .NET",
                            Some("actions/setup-dotnet@v4"),
                            &[("dotnet-version", "6.x")],
                            None,
                        ),
                        _ => step(
                            b,
                            "Setup Python",
                            Some("actions/setup-python@v5"),
                            &[("python-version", "3.x")],
                            None,
                        ),
                    },
                }
                step(
                    b,
                    "Download build artifacts",
                    Some("actions/download-artifact@v4"),
                    &[("name", ARTIFACT), ("path", "dist")],
                    None,
                );
                b.push_line("- name: Release");
                b.push_indent();
                b.push_block("env:", |b| {
                    for (key, value) in env {
                        b.push_line(&format!("{}: {}", key, value));
                    }
                });
                b.push_line(&format!("run: {} publib-{}", PUBLIB, publib_command(target)));
                b.push_dedent();
            });
        });
    }
}

impl GeneratedFile for ReleaseWorkflow<'_> {
    fn path(&self) -> &str {
        ".github/workflows/release.yml"
    }

    fn rules(&self) -> FileRules {
        commented()
    }

    fn render(&self) -> eyre::Result<String> {
        let branch = yaml::scalar(self.input.default_branch())?;
        let envs = self
            .input
            .targets
            .iter()
            .map(release_env)
            .collect::<eyre::Result<Vec<_>>>()?;

        let mut b = CodeBuilder::yaml();
        b.push_line("name: release");
        b.push_block("on:", |b| {
            b.push_block("push:", |b| {
                branches(b, &branch);
            });
            b.push_line("workflow_dispatch: {}");
        });
        b.push_block("concurrency:", |b| {
            b.push_line("group: release");
            b.push_line("cancel-in-progress: false");
        });
        b.push_block("jobs:", |b| {
            b.push_block("release:", |b| {
                b.push_line(&format!("runs-on: {}", RUNNER));
                permissions(b, "write");
                b.push_block("steps:", |b| {
                    step(
                        b,
                        "Checkout",
                        Some("actions/checkout@v4"),
                        &[("fetch-depth", "0")],
                        None,
                    );
                    setup_node(b);
                    step(b, "Install dependencies", None, &[], Some("npm ci"));
                    step(b, "build", None, &[], Some("npm run build"));
                    step(b, "package", None, &[], Some("npm run package-all"));
                    step(
                        b,
                        "Upload artifact",
                        Some("actions/upload-artifact@v4"),
                        &[("name", ARTIFACT), ("path", "dist")],
                        None,
                    );
                });
            });
            for (target, env) in self.input.targets.iter().zip(&envs) {
                Self::release_job(b, target, env);
            }
        });
        Ok(b.build())
    }
}

/// `.github/workflows/upgrade-main.yml`: scheduled dependency upgrade that
/// opens a pull request.
pub struct UpgradeWorkflow<'a> {
    input: SynthInput<'a>,
}

impl<'a> UpgradeWorkflow<'a> {
    pub fn new(input: SynthInput<'a>) -> Self {
        Self { input }
    }
}

impl GeneratedFile for UpgradeWorkflow<'_> {
    fn path(&self) -> &str {
        ".github/workflows/upgrade-main.yml"
    }

    fn rules(&self) -> FileRules {
        commented()
    }

    fn render(&self) -> eyre::Result<String> {
        let branch = self.input.default_branch();
        let base = yaml::scalar(branch)?;
        let pr_branch = yaml::scalar(&format!("github-actions/upgrade-{}", branch))?;
        let mut b = CodeBuilder::yaml();
        b.push_line(&format!("name: {}", yaml::scalar(&format!("upgrade-{}", branch))?));
        b.push_block("on:", |b| {
            b.push_line("workflow_dispatch: {}");
            b.push_block("schedule:", |b| {
                b.push_line("- cron: \"0 0 * * *\"");
            });
        });
        b.push_block("jobs:", |b| {
            b.push_block("upgrade:", |b| {
                b.push_line(&format!("runs-on: {}", RUNNER));
                b.push_block("permissions:", |b| {
                    b.push_line("contents: write");
                    b.push_line("pull-requests: write");
                });
                b.push_block("steps:", |b| {
                    step(
                        b,
                        "Checkout",
                        Some("actions/checkout@v4"),
                        &[("ref", base.as_str())],
                        None,
                    );
                    setup_node(b);
                    step(b, "Install dependencies", None, &[], Some("npm ci"));
                    step(b, "Upgrade dependencies", None, &[], Some("npm run upgrade"));
                    step(
                        b,
                        "Create Pull Request",
                        Some("peter-evans/create-pull-request@v6"),
                        &[
                            ("token", "${{ secrets.GITHUB_TOKEN }}"),
                            ("commit-message", "\"chore(deps): upgrade dependencies\""),
                            ("branch", pr_branch.as_str()),
                            ("base", base.as_str()),
                            ("title", "\"chore(deps): upgrade dependencies\""),
                            ("delete-branch", "true"),
                        ],
                        None,
                    );
                });
            });
        });
        Ok(b.build())
    }
}

/// `branch` must already be a rendered scalar.
fn branches(b: &mut CodeBuilder, branch: &str) {
    b.push_block("branches:", |b| {
        b.push_line(&format!("- {}", branch));
    });
}

fn permissions(b: &mut CodeBuilder, contents: &str) {
    b.push_block("permissions:", |b| {
        b.push_line(&format!("contents: {}", contents));
    });
}

fn setup_node(b: &mut CodeBuilder) {
    step(
        b,
        "Setup Node.js",
        Some("actions/setup-node@v4"),
        &[("node-version", NODE_VERSION)],
        None,
    );
}

/// One `- name:` entry of a `steps:` list.
fn step(
    b: &mut CodeBuilder,
    name: &str,
    uses: Option<&str>,
    with: &[(&str, &str)],
    run: Option<&str>,
) {
    b.push_line(&format!("- name: {}", name));
    b.push_indent();
    if let Some(uses) = uses {
        b.push_line(&format!("uses: {}", uses));
    }
    if !with.is_empty() {
        b.push_block("with:", |b| {
            for (key, value) in with {
                b.push_line(&format!("{}: {}", key, value));
            }
        });
    }
    if let Some(run) = run {
        b.push_line(&format!("run: {}", run));
    }
    b.push_dedent();
}

fn publib_command(target: &PublishTarget) -> &'static str {
    match target.ecosystem().key() {
        "npm" => "npm",
        "go" => "golang",
        "nuget" => "nuget",
        _ => "pypi",
    }
}

fn release_env(target: &PublishTarget) -> eyre::Result<Vec<(&'static str, String)>> {
    Ok(match target {
        PublishTarget::RegistryDefault { access, registry } => vec![
            ("NPM_DIST_TAG", "latest".to_string()),
            ("NPM_REGISTRY", yaml::scalar(registry)?),
            ("NPM_ACCESS_LEVEL", access.as_str().to_string()),
            ("NPM_TOKEN", "${{ secrets.NPM_TOKEN }}".to_string()),
        ],
        PublishTarget::AlternateRegistry { module_name, .. } => vec![
            ("GIT_USER_NAME", "github-actions".to_string()),
            ("GIT_USER_EMAIL", "github-actions@github.com".to_string()),
            ("GO_MODULE", yaml::scalar(module_name)?),
            ("GITHUB_TOKEN", "${{ secrets.GO_GITHUB_TOKEN }}".to_string()),
        ],
        PublishTarget::AlternateEcosystem { ecosystem, .. } if ecosystem.key() == "nuget" => {
            vec![("NUGET_API_KEY", "${{ secrets.NUGET_API_KEY }}".to_string())]
        }
        PublishTarget::AlternateEcosystem { .. } => vec![
            ("TWINE_USERNAME", "${{ secrets.TWINE_USERNAME }}".to_string()),
            ("TWINE_PASSWORD", "${{ secrets.TWINE_PASSWORD }}".to_string()),
        ],
    })
}
