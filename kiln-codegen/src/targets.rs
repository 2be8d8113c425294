//! Publish target registry.
//!
//! Maps `[publish.<key>]` blocks onto typed [`PublishTarget`]s. Unknown keys
//! are rejected even when disabled; disabled blocks resolve to nothing.

use std::fmt;

use indexmap::IndexMap;
use kiln_manifest::{NpmAccess, TargetConfig, has_control_chars};

use crate::{Error, Result};

pub const DEFAULT_NPM_REGISTRY: &str = "registry.npmjs.org";

/// A packaging ecosystem the library can be published to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ecosystem {
    Npm,
    Go,
    PyPi,
    NuGet,
}

impl Ecosystem {
    pub const ALL: [Ecosystem; 4] = [Ecosystem::Npm, Ecosystem::Go, Ecosystem::PyPi, Ecosystem::NuGet];

    /// Key used in `[publish.<key>]`.
    pub fn key(&self) -> &'static str {
        match self {
            Ecosystem::Npm => "npm",
            Ecosystem::Go => "go",
            Ecosystem::PyPi => "pypi",
            Ecosystem::NuGet => "nuget",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.key() == key)
    }

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Ecosystem::Npm => "npm",
            Ecosystem::Go => "Go",
            Ecosystem::PyPi => "PyPI",
            Ecosystem::NuGet => "NuGet",
        }
    }

    /// jsii-pacmak target name; npm is always built.
    pub fn pacmak_target(&self) -> &'static str {
        match self {
            Ecosystem::Npm => "js",
            Ecosystem::Go => "go",
            Ecosystem::PyPi => "python",
            Ecosystem::NuGet => "dotnet",
        }
    }

    /// Fields a block for this ecosystem may set.
    fn allowed_fields(&self) -> &'static [&'static str] {
        match self {
            Ecosystem::Npm => &["access", "registry"],
            Ecosystem::Go => &["module_name"],
            Ecosystem::PyPi => &["dist_name", "module"],
            Ecosystem::NuGet => &["package_id", "namespace"],
        }
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An enabled, validated publish target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishTarget {
    /// The package's home registry (npm).
    RegistryDefault { access: NpmAccess, registry: String },
    /// A registry addressed by module path only (Go).
    AlternateRegistry {
        ecosystem: Ecosystem,
        module_name: String,
    },
    /// A separate packaging ecosystem with its own distribution name
    /// (PyPI: dist name and module; NuGet: package id and namespace).
    AlternateEcosystem {
        ecosystem: Ecosystem,
        dist_name: String,
        module_name: String,
    },
}

impl PublishTarget {
    pub fn ecosystem(&self) -> Ecosystem {
        match self {
            PublishTarget::RegistryDefault { .. } => Ecosystem::Npm,
            PublishTarget::AlternateRegistry { ecosystem, .. }
            | PublishTarget::AlternateEcosystem { ecosystem, .. } => *ecosystem,
        }
    }
}

/// Resolves descriptor publish blocks into [`PublishTarget`]s.
#[derive(Debug, Clone)]
pub struct TargetRegistry {
    ecosystems: Vec<Ecosystem>,
}

impl Default for TargetRegistry {
    fn default() -> Self {
        Self {
            ecosystems: Ecosystem::ALL.to_vec(),
        }
    }
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys accepted by this registry, comma separated.
    pub fn supported_keys(&self) -> String {
        self.ecosystems
            .iter()
            .map(|e| e.key())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Resolve every enabled block, in declaration order.
    ///
    /// `package_name` decides the default npm access level.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedTarget`] for an unknown key
    /// - [`Error::Validation`] for a missing, empty or foreign field in an
    ///   enabled block
    pub fn resolve(
        &self,
        package_name: &str,
        publish: &IndexMap<String, TargetConfig>,
    ) -> Result<Vec<PublishTarget>> {
        let mut targets = Vec::new();

        for (key, config) in publish {
            let ecosystem = Ecosystem::from_key(key)
                .filter(|e| self.ecosystems.contains(e))
                .ok_or_else(|| Error::UnsupportedTarget {
                    key: key.clone(),
                    supported: self.supported_keys(),
                })?;

            if !config.enabled {
                tracing::debug!(target_key = %key, "publish target disabled");
                continue;
            }

            let block = Block { key, config };
            block.reject_foreign_fields(ecosystem)?;

            let target = match ecosystem {
                Ecosystem::Npm => PublishTarget::RegistryDefault {
                    access: config
                        .access
                        .unwrap_or_else(|| NpmAccess::default_for(package_name)),
                    registry: match &config.registry {
                        Some(_) => block.require("registry", &config.registry)?,
                        None => DEFAULT_NPM_REGISTRY.to_string(),
                    },
                },
                Ecosystem::Go => PublishTarget::AlternateRegistry {
                    ecosystem,
                    module_name: block.require("module_name", &config.module_name)?,
                },
                Ecosystem::PyPi => PublishTarget::AlternateEcosystem {
                    ecosystem,
                    dist_name: block.require("dist_name", &config.dist_name)?,
                    module_name: block.require("module", &config.module)?,
                },
                Ecosystem::NuGet => PublishTarget::AlternateEcosystem {
                    ecosystem,
                    dist_name: block.require("package_id", &config.package_id)?,
                    module_name: block.require("namespace", &config.namespace)?,
                },
            };
            targets.push(target);
        }

        Ok(targets)
    }
}

struct Block<'a> {
    key: &'a str,
    config: &'a TargetConfig,
}

impl Block<'_> {
    fn field(&self, name: &str) -> String {
        format!("publish.{}.{}", self.key, name)
    }

    fn require(&self, name: &str, value: &Option<String>) -> Result<String> {
        match value.as_deref().map(str::trim) {
            Some(v) if has_control_chars(v) => Err(Error::validation(
                self.field(name),
                "must not contain line breaks or control characters",
            )),
            Some(v) if !v.is_empty() => Ok(v.to_string()),
            Some(_) => Err(Error::validation(self.field(name), "must not be empty")),
            None => Err(Error::validation(
                self.field(name),
                "is required when the target is enabled",
            )),
        }
    }

    fn reject_foreign_fields(&self, ecosystem: Ecosystem) -> Result<()> {
        let allowed = ecosystem.allowed_fields();
        match self
            .config
            .present_fields()
            .into_iter()
            .find(|f| !allowed.contains(f))
        {
            Some(field) => Err(Error::validation(
                self.field(field),
                format!("is not used by the {} target", ecosystem.label()),
            )),
            None => Ok(()),
        }
    }
}
