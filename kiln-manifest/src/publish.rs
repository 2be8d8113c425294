//! `[publish.<ecosystem>]` blocks.
//!
//! Blocks are kept untyped here: which keys are known and which fields each
//! ecosystem requires is decided by the target registry in `kiln-codegen`.

use std::fmt;

use serde::Deserialize;

/// Visibility of the published npm package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NpmAccess {
    Public,
    Restricted,
}

impl NpmAccess {
    pub fn as_str(&self) -> &'static str {
        match self {
            NpmAccess::Public => "public",
            NpmAccess::Restricted => "restricted",
        }
    }

    /// npm's own default: scoped packages publish as restricted.
    pub fn default_for(package_name: &str) -> Self {
        if package_name.starts_with('@') {
            NpmAccess::Restricted
        } else {
            NpmAccess::Public
        }
    }
}

impl fmt::Display for NpmAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration of one publish target.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetConfig {
    /// Disabled targets are staged in the descriptor but produce nothing.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Go module path.
    pub module_name: Option<String>,
    /// PyPI distribution name.
    pub dist_name: Option<String>,
    /// Python module name.
    pub module: Option<String>,
    /// NuGet package id.
    pub package_id: Option<String>,
    /// .NET root namespace.
    pub namespace: Option<String>,
    /// npm access level.
    pub access: Option<NpmAccess>,
    /// npm registry host.
    pub registry: Option<String>,
}

fn default_enabled() -> bool {
    true
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            module_name: None,
            dist_name: None,
            module: None,
            package_id: None,
            namespace: None,
            access: None,
            registry: None,
        }
    }
}

impl TargetConfig {
    pub fn npm(access: NpmAccess) -> Self {
        Self {
            access: Some(access),
            ..Self::default()
        }
    }

    pub fn go(module_name: impl Into<String>) -> Self {
        Self {
            module_name: Some(module_name.into()),
            ..Self::default()
        }
    }

    pub fn pypi(dist_name: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            dist_name: Some(dist_name.into()),
            module: Some(module.into()),
            ..Self::default()
        }
    }

    pub fn nuget(package_id: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            package_id: Some(package_id.into()),
            namespace: Some(namespace.into()),
            ..Self::default()
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Names of the fields set in this block, in the fixed order of the
    /// struct's fields rather than the order they appear in the file.
    pub fn present_fields(&self) -> Vec<&'static str> {
        let fields = [
            ("module_name", self.module_name.is_some()),
            ("dist_name", self.dist_name.is_some()),
            ("module", self.module.is_some()),
            ("package_id", self.package_id.is_some()),
            ("namespace", self.namespace.is_some()),
            ("access", self.access.is_some()),
            ("registry", self.registry.is_some()),
        ];
        fields
            .into_iter()
            .filter_map(|(name, present)| present.then_some(name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_by_default() {
        let config: TargetConfig = toml::from_str(
            r#"
            dist_name = "mbonig.state-machine"
            module = "mbonig.state_machine"
            "#,
        )
        .unwrap();

        assert!(config.enabled);
        assert_eq!(config.present_fields(), vec!["dist_name", "module"]);
    }

    #[test]
    fn test_disabled_block() {
        let config: TargetConfig = toml::from_str(
            r#"
            enabled = false
            module_name = "github.com/mbonig/state-machine"
            "#,
        )
        .unwrap();

        assert!(!config.enabled);
        assert_eq!(config, TargetConfig::go("github.com/mbonig/state-machine").disabled());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = toml::from_str::<TargetConfig>(r#"distName = "x""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_access_default_for_scope() {
        assert_eq!(
            NpmAccess::default_for("@matthewbonig/state-machine"),
            NpmAccess::Restricted
        );
        assert_eq!(NpmAccess::default_for("state-machine"), NpmAccess::Public);
    }
}
