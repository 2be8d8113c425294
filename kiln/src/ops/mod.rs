//! Core operations.
//!
//! This module contains the business logic for kiln commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod clean;
pub mod info;
pub mod init;
pub mod synth;

pub use check::check;
pub use clean::clean;
pub use info::info;
pub use init::init;
pub use synth::synth;

#[cfg(test)]
pub(crate) mod testing {
    use std::str::FromStr;

    use kiln_manifest::ProjectDescriptor;

    pub const KILN_TOML: &str = r#"
[project]
name = "@matthewbonig/state-machine"
author = "Matthew Bonig"
author_address = "matthew.bonig@gmail.com"
description = "A Step Function state machine construct"
repository_url = "https://github.com/mbonig/state-machine.git"
keywords = ["awscdk", "cdk", "AWS Step Functions"]
gitignore = [".idea/"]

[versions]
aws-cdk-lib = "2.53.0"
constructs = "10.1.203"

[dependencies]
runtime = ["lodash.merge", "case", "js-yaml"]
peer = ["constructs"]
dev = ["@types/js-yaml"]
bundled = ["lodash.merge", "case", "js-yaml"]

[publish.npm]
access = "public"

[publish.go]
enabled = false
module_name = "github.com/mbonig/state-machine"

[publish.pypi]
dist_name = "mbonig.state-machine"
module = "mbonig.state_machine"
"#;

    pub fn descriptor() -> ProjectDescriptor {
        ProjectDescriptor::from_str(KILN_TOML).unwrap()
    }
}
