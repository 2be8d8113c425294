use std::{fmt, str::FromStr};

use serde::Deserialize;
use url::Url;

/// A well-formed repository URL with a host.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct RepositoryUrl(Url);

impl RepositoryUrl {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn url(&self) -> &Url {
        &self.0
    }
}

impl FromStr for RepositoryUrl {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let url = Url::parse(s.trim()).map_err(|e| format!("invalid URL '{}': {}", s, e))?;
        if !url.has_host() {
            return Err(format!("invalid URL '{}': missing host", s));
        }
        Ok(Self(url))
    }
}

impl TryFrom<String> for RepositoryUrl {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for RepositoryUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_git_url() {
        let url: RepositoryUrl = "https://github.com/mbonig/state-machine.git".parse().unwrap();
        assert_eq!(url.as_str(), "https://github.com/mbonig/state-machine.git");
        assert_eq!(url.url().host_str(), Some("github.com"));
    }

    #[test]
    fn test_reject_malformed() {
        assert!("github.com/mbonig/state-machine".parse::<RepositoryUrl>().is_err());
        assert!("mailto:someone".parse::<RepositoryUrl>().is_err());
        assert!("".parse::<RepositoryUrl>().is_err());
    }
}
