use serde::Deserialize;

/// Optional behaviors toggled from the `[features]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Features {
    /// Generate the scheduled dependency upgrade workflow.
    pub deps_upgrade: bool,
    /// Generate `tsconfig.dev.json` covering sources, tests and tooling.
    pub typescript_dev_config: bool,
    /// Create starter source and test files when they are missing.
    pub sample_code: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            deps_upgrade: true,
            typescript_dev_config: false,
            sample_code: true,
        }
    }
}
