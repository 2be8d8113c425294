//! Dependency classification.
//!
//! The descriptor declares four independent lists. The classifier folds them
//! into one ordered [`DependencySet`] where every name carries exactly one
//! [`Classification`], detecting peer/runtime conflicts on the way.

use std::fmt;

use indexmap::IndexMap;
use kiln_core::Version;
use kiln_manifest::{ConflictPolicy, DependencyLists, DependencyRef};
use serde::Serialize;

use crate::{Error, Result};

/// How a dependency is delivered to consumers of the package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Installed from the registry alongside the package.
    Runtime,
    /// Supplied by the consumer.
    Peer,
    /// Needed only to build and test.
    Dev,
    /// Shipped inside the package tarball. Also a runtime dependency.
    Bundled,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Runtime => "runtime",
            Classification::Peer => "peer",
            Classification::Dev => "dev",
            Classification::Bundled => "bundled",
        }
    }

    /// Whether the package manager installs it for consumers.
    pub fn is_runtime(&self) -> bool {
        matches!(self, Classification::Runtime | Classification::Bundled)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencySpec {
    pub name: String,
    /// Version range, if one was declared or derived from a version constraint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(rename = "type")]
    pub classification: Classification,
}

impl DependencySpec {
    /// The range to write into the package manifest.
    pub fn range(&self) -> &str {
        self.version.as_deref().unwrap_or("*")
    }
}

/// Classified dependencies in first-seen declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet {
    specs: IndexMap<String, DependencySpec>,
    demoted: Vec<String>,
}

impl DependencySet {
    pub fn iter(&self) -> impl Iterator<Item = &DependencySpec> {
        self.specs.values()
    }

    pub fn get(&self, name: &str) -> Option<&DependencySpec> {
        self.specs.get(name)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Runtime view: plain runtime and bundled dependencies.
    pub fn runtime(&self) -> impl Iterator<Item = &DependencySpec> {
        self.iter().filter(|d| d.classification.is_runtime())
    }

    pub fn bundled(&self) -> impl Iterator<Item = &DependencySpec> {
        self.with(Classification::Bundled)
    }

    pub fn peer(&self) -> impl Iterator<Item = &DependencySpec> {
        self.with(Classification::Peer)
    }

    pub fn dev(&self) -> impl Iterator<Item = &DependencySpec> {
        self.with(Classification::Dev)
    }

    /// Names whose runtime declaration was dropped in favor of the peer one.
    pub fn demoted(&self) -> &[String] {
        &self.demoted
    }

    fn with(&self, classification: Classification) -> impl Iterator<Item = &DependencySpec> {
        self.iter().filter(move |d| d.classification == classification)
    }
}

/// Every list a name was declared in.
#[derive(Debug, Default)]
struct Roles {
    runtime: bool,
    peer: bool,
    dev: bool,
    bundled: bool,
    version: Option<String>,
}

impl Roles {
    fn classification(&self) -> Classification {
        if self.bundled {
            Classification::Bundled
        } else if self.runtime {
            Classification::Runtime
        } else if self.peer {
            Classification::Peer
        } else {
            Classification::Dev
        }
    }

    /// The runtime-side list that collides with a peer declaration.
    fn peer_conflict(&self) -> Option<&'static str> {
        if !self.peer {
            None
        } else if self.bundled {
            Some("bundled")
        } else if self.runtime {
            Some("runtime")
        } else {
            None
        }
    }
}

/// Folds declared dependency lists into a [`DependencySet`].
#[derive(Debug, Clone, Default)]
pub struct DependencyClassifier<'a> {
    constraints: Option<&'a IndexMap<String, Version>>,
}

impl<'a> DependencyClassifier<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat each pinned subsystem as a peer dependency on `^version`.
    pub fn with_constraints(mut self, constraints: &'a IndexMap<String, Version>) -> Self {
        self.constraints = Some(constraints);
        self
    }

    /// Classify the lists, scanning runtime, peer, dev, then bundled.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conflict`] when a name is both a peer and a runtime or
    /// bundled dependency under [`ConflictPolicy::Error`], or when one name is
    /// declared with two different version ranges.
    pub fn classify(&self, lists: &DependencyLists) -> Result<DependencySet> {
        let mut roles: IndexMap<String, Roles> = IndexMap::new();

        let scan: [(&[DependencyRef], fn(&mut Roles)); 4] = [
            (&lists.runtime, |r: &mut Roles| r.runtime = true),
            (&lists.peer, |r: &mut Roles| r.peer = true),
            (&lists.dev, |r: &mut Roles| r.dev = true),
            (&lists.bundled, |r: &mut Roles| r.bundled = true),
        ];

        for (list, mark) in scan {
            for dep in list {
                let entry = roles.entry(dep.name().to_string()).or_default();
                mark(entry);
                merge_version(dep.name(), entry, dep.version())?;
            }
        }

        if let Some(constraints) = self.constraints {
            for (name, version) in constraints {
                let entry = roles.entry(name.clone()).or_default();
                if !entry.runtime && !entry.bundled {
                    entry.peer = true;
                }
                if entry.version.is_none() {
                    entry.version = Some(version.caret());
                }
            }
        }

        let mut set = DependencySet::default();
        for (name, mut entry) in roles {
            if let Some(list) = entry.peer_conflict() {
                match lists.conflict_policy {
                    ConflictPolicy::Error => {
                        return Err(Error::Conflict {
                            name,
                            message: format!("is declared as both a peer and a {} dependency", list),
                            help: Some(
                                "remove one declaration, or set conflict_policy = \"prefer-peer\" in [dependencies]"
                                    .to_string(),
                            ),
                        });
                    }
                    ConflictPolicy::PreferPeer => {
                        tracing::debug!(dependency = %name, list, "keeping peer declaration");
                        entry.runtime = false;
                        entry.bundled = false;
                        set.demoted.push(name.clone());
                    }
                }
            }

            let spec = DependencySpec {
                name: name.clone(),
                version: entry.version.take(),
                classification: entry.classification(),
            };
            set.specs.insert(name, spec);
        }

        Ok(set)
    }
}

fn merge_version(name: &str, entry: &mut Roles, version: Option<&str>) -> Result<()> {
    match (entry.version.as_deref(), version) {
        (Some(existing), Some(new)) if existing != new => Err(Error::conflict(
            name,
            format!(
                "is declared with conflicting versions '{}' and '{}'",
                existing, new
            ),
        )),
        (None, Some(new)) => {
            entry.version = Some(new.to_string());
            Ok(())
        }
        _ => Ok(()),
    }
}
