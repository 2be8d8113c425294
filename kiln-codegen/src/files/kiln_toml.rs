//! Starter `kiln.toml` written by `kiln init`.

use kiln_core::{FileRules, GeneratedFile, Version};

/// Path of the descriptor, relative to the project root.
pub const KILN_TOML: &str = "kiln.toml";

/// A starter descriptor. Never overwrites an existing one.
#[derive(Debug, Clone)]
pub struct StarterDescriptor {
    pub name: String,
    pub author: String,
    pub author_address: Option<String>,
    pub description: String,
    pub repository_url: String,
    pub cdk_version: Version,
    pub constructs_version: Version,
}

impl StarterDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            author: String::new(),
            author_address: None,
            description: "A construct library".to_string(),
            repository_url: format!("https://github.com/example/{}.git", bare_name(&name)),
            cdk_version: Version::new(2, 53, 0),
            constructs_version: Version::new(10, 1, 203),
            name,
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_author_address(mut self, address: impl Into<String>) -> Self {
        self.author_address = Some(address.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_repository_url(mut self, url: impl Into<String>) -> Self {
        self.repository_url = url.into();
        self
    }
}

/// `@scope/name` → `name`
fn bare_name(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

fn quoted(value: &str) -> eyre::Result<String> {
    Ok(serde_json::to_string(value)?)
}

impl GeneratedFile for StarterDescriptor {
    fn path(&self) -> &str {
        KILN_TOML
    }

    fn rules(&self) -> FileRules {
        FileRules::sample()
    }

    fn render(&self) -> eyre::Result<String> {
        let address = match &self.author_address {
            Some(address) => format!("author_address = {}\n", quoted(address)?),
            None => String::new(),
        };

        Ok(format!(
            r#"[project]
name = {name}
author = {author}
{address}description = {description}
repository_url = {repository}
keywords = ["awscdk", "cdk"]
# default_release_branch = "main"
# license = "Apache-2.0"
# gitignore = [".idea/"]

[versions]
aws-cdk-lib = "{cdk}"
constructs = "{constructs}"

[dependencies]
runtime = []
peer = []
dev = []
bundled = []
# conflict_policy = "prefer-peer"

[features]
deps_upgrade = true
typescript_dev_config = false
sample_code = true

[publish.npm]

# [publish.pypi]
# dist_name = "acme.my-construct"
# module = "acme.my_construct"

# [publish.go]
# module_name = "github.com/acme/my-construct"

# [publish.nuget]
# package_id = "Acme.MyConstruct"
# namespace = "Acme.MyConstruct"
"#,
            name = quoted(&self.name)?,
            author = quoted(&self.author)?,
            address = address,
            description = quoted(&self.description)?,
            repository = quoted(&self.repository_url)?,
            cdk = self.cdk_version,
            constructs = self.constructs_version,
        ))
    }
}
