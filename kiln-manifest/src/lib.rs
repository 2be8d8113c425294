// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Descriptor model for kiln.
//!
//! A descriptor (`kiln.toml`) declares a library's identity, its dependency
//! lists, feature toggles and publish targets. This crate parses and validates
//! it; synthesis lives in `kiln-codegen`.

mod dependency;
mod descriptor;
mod error;
mod features;
mod publish;
mod repository;

pub use dependency::{ConflictPolicy, DependencyLists, DependencyRef};
pub use descriptor::{
    DescriptorBuilder, FieldIssue, KilnToml, ParseContext, ProjectDescriptor, ProjectInfo,
    has_control_chars,
};
pub use error::{Error, Result, SourceContext};
pub use features::Features;
pub use publish::{NpmAccess, TargetConfig};
pub use repository::RepositoryUrl;
