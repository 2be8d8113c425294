//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - runs lints over the descriptor
//! - [`ClassifyPhase`] - classifies declared dependencies
//! - [`ResolvePhase`] - resolves enabled publish targets
//! - [`SynthesizePhase`] - renders the output files

mod classify;
mod resolve;
mod synthesize;
mod validate;

pub use classify::ClassifyPhase;
pub use resolve::ResolvePhase;
pub use synthesize::SynthesizePhase;
pub use validate::{
    AuthorEmailLint, DuplicateGitignoreLint, DuplicateKeywordLint, EmptyKeywordsLint, Lint,
    RequiredFieldsLint, UnversionedPeerLint, ValidatePhase,
};
