//! Built-in lints for descriptor validation.

mod author_email;
mod duplicate_gitignore;
mod duplicate_keyword;
mod empty_keywords;
mod required_fields;
mod unversioned_peer;

pub use author_email::AuthorEmailLint;
pub use duplicate_gitignore::DuplicateGitignoreLint;
pub use duplicate_keyword::DuplicateKeywordLint;
pub use empty_keywords::EmptyKeywordsLint;
pub use required_fields::RequiredFieldsLint;
pub use unversioned_peer::UnversionedPeerLint;
