//! Declared dependency lists.

use std::{fmt, str::FromStr};

use serde::Deserialize;

/// A declared dependency: `name` or `name@range`.
///
/// Scoped packages keep their leading `@`: `@types/js-yaml@^4` splits into
/// `@types/js-yaml` and `^4`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct DependencyRef {
    name: String,
    version: Option<String>,
}

impl DependencyRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

impl FromStr for DependencyRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, version) = match s.rfind('@') {
            Some(at) if at > 0 => (&s[..at], Some(&s[at + 1..])),
            _ => (s, None),
        };

        if name.is_empty() || name == "@" {
            return Err(format!("invalid dependency '{}': missing package name", s));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(format!(
                "invalid dependency '{}': package names cannot contain whitespace",
                s
            ));
        }
        if name.starts_with('@') && !name.contains('/') {
            return Err(format!(
                "invalid dependency '{}': scoped names must look like '@scope/name'",
                s
            ));
        }

        match version {
            Some("") => Err(format!("invalid dependency '{}': empty version range", s)),
            Some(v) => Ok(Self::new(name).with_version(v)),
            None => Ok(Self::new(name)),
        }
    }
}

impl TryFrom<String> for DependencyRef {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for DependencyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(v) => write!(f, "{}@{}", self.name, v),
            None => write!(f, "{}", self.name),
        }
    }
}

/// How a name declared both as peer and as runtime/bundled is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConflictPolicy {
    /// Reject the descriptor.
    #[default]
    Error,
    /// Keep the peer classification and drop the runtime one.
    PreferPeer,
}

impl ConflictPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConflictPolicy::Error => "error",
            ConflictPolicy::PreferPeer => "prefer-peer",
        }
    }
}

/// The `[dependencies]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DependencyLists {
    /// Dependencies installed alongside the package.
    #[serde(default)]
    pub runtime: Vec<DependencyRef>,
    /// Dependencies the consumer must supply.
    #[serde(default)]
    pub peer: Vec<DependencyRef>,
    /// Build-time only dependencies.
    #[serde(default)]
    pub dev: Vec<DependencyRef>,
    /// Runtime dependencies shipped inside the package tarball.
    #[serde(default)]
    pub bundled: Vec<DependencyRef>,
    #[serde(default)]
    pub conflict_policy: ConflictPolicy,
}

impl DependencyLists {
    pub fn is_empty(&self) -> bool {
        self.runtime.is_empty()
            && self.peer.is_empty()
            && self.dev.is_empty()
            && self.bundled.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_name() {
        let dep: DependencyRef = "lodash.merge".parse().unwrap();
        assert_eq!(dep.name(), "lodash.merge");
        assert_eq!(dep.version(), None);
    }

    #[test]
    fn test_parse_with_range() {
        let dep: DependencyRef = "case@^1.6.3".parse().unwrap();
        assert_eq!(dep.name(), "case");
        assert_eq!(dep.version(), Some("^1.6.3"));
        assert_eq!(dep.to_string(), "case@^1.6.3");
    }

    #[test]
    fn test_parse_scoped() {
        let dep: DependencyRef = "@types/js-yaml".parse().unwrap();
        assert_eq!(dep.name(), "@types/js-yaml");
        assert_eq!(dep.version(), None);

        let dep: DependencyRef = "@types/js-yaml@^4.0.5".parse().unwrap();
        assert_eq!(dep.name(), "@types/js-yaml");
        assert_eq!(dep.version(), Some("^4.0.5"));
    }

    #[test]
    fn test_parse_invalid() {
        assert!("".parse::<DependencyRef>().is_err());
        assert!("@".parse::<DependencyRef>().is_err());
        assert!("case@".parse::<DependencyRef>().is_err());
        assert!("@types".parse::<DependencyRef>().is_err());
        assert!("js yaml".parse::<DependencyRef>().is_err());
    }

    #[test]
    fn test_deserialize_lists() {
        let lists: DependencyLists = toml::from_str(
            r#"
            runtime = ["case", "js-yaml@^4"]
            peer = ["constructs"]
            conflict_policy = "prefer-peer"
            "#,
        )
        .unwrap();

        assert_eq!(lists.runtime.len(), 2);
        assert_eq!(lists.runtime[1].version(), Some("^4"));
        assert!(lists.dev.is_empty());
        assert_eq!(lists.conflict_policy, ConflictPolicy::PreferPeer);
    }

    #[test]
    fn test_deserialize_rejects_unknown_policy() {
        let result = toml::from_str::<DependencyLists>(r#"conflict_policy = "prefer-runtime""#);
        assert!(result.is_err());
    }
}
