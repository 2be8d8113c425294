//! Text building blocks for the generated files.
//!
//! - [`CodeBuilder`] - Fluent API for building indented text
//! - [`yaml`] - Scalar quoting for workflow files

mod code_builder;
pub mod yaml;

pub use code_builder::CodeBuilder;
