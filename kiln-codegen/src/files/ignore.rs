//! `.gitignore` and `.npmignore` generators.

use kiln_core::{FileRules, GeneratedFile};

use super::{SynthInput, commented};
use crate::builder::CodeBuilder;

const GITIGNORE_DEFAULTS: &[&str] = &[
    "node_modules/",
    "*.log",
    "npm-debug.log*",
    "*.tsbuildinfo",
    ".DS_Store",
    ".env",
    "/coverage/",
    "/test-reports/",
    "junit.xml",
    "/lib/",
    "/dist/",
    "/.jsii",
    "tsconfig.json",
    ".kiln-staging-*/",
];

const NPMIGNORE_DEFAULTS: &[&str] = &[
    "/.kiln/",
    "/.github/",
    "/src/",
    "!/lib/",
    "!/lib/**/*.js",
    "!/lib/**/*.d.ts",
    "/test/",
    "/tsconfig.dev.json",
    "/coverage/",
    "/test-reports/",
    "junit.xml",
    "dist",
    "!/.jsii",
    "/.gitattributes",
    "/kiln.toml",
];

/// `.gitignore`: default rules, then the descriptor's rules in order.
pub struct GitIgnore<'a> {
    input: SynthInput<'a>,
}

impl<'a> GitIgnore<'a> {
    pub fn new(input: SynthInput<'a>) -> Self {
        Self { input }
    }
}

impl GeneratedFile for GitIgnore<'_> {
    fn path(&self) -> &str {
        ".gitignore"
    }

    fn rules(&self) -> FileRules {
        commented()
    }

    fn render(&self) -> eyre::Result<String> {
        let mut builder = CodeBuilder::flat();
        builder.push_lines(GITIGNORE_DEFAULTS);

        let extra = &self.input.descriptor.project.gitignore;
        if !extra.is_empty() {
            builder.push_blank().push_lines(extra);
        }
        Ok(builder.build())
    }
}

/// `.npmignore`: keeps sources and tooling out of the published tarball.
pub struct NpmIgnore;

impl GeneratedFile for NpmIgnore {
    fn path(&self) -> &str {
        ".npmignore"
    }

    fn rules(&self) -> FileRules {
        commented()
    }

    fn render(&self) -> eyre::Result<String> {
        let mut builder = CodeBuilder::flat();
        builder.push_lines(NPMIGNORE_DEFAULTS);
        Ok(builder.build())
    }
}
