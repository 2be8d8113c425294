//! Exact release numbers for pinned subsystems.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A `major.minor.patch` release, e.g. the constructs version a library
/// builds against. Pre-release and build suffixes are not accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    major: u32,
    minor: u32,
    patch: u32,
}

impl Version {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    /// Caret range accepting compatible releases (e.g. `^2.53.0`).
    pub fn caret(&self) -> String {
        format!("^{self}")
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut numbers = s.split('.').map(|part| part.parse::<u32>().ok());
        match (numbers.next(), numbers.next(), numbers.next(), numbers.next()) {
            (Some(Some(major)), Some(Some(minor)), Some(Some(patch)), None) => {
                Ok(Self::new(major, minor, patch))
            }
            _ => Err(format!("'{s}' is not a version, expected MAJOR.MINOR.PATCH")),
        }
    }
}

impl TryFrom<String> for Version {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Version::new(2, 53, 0).to_string(), "2.53.0");
        assert_eq!(Version::default().to_string(), "0.0.0");
    }

    #[test]
    fn test_caret() {
        assert_eq!(Version::new(10, 1, 203).caret(), "^10.1.203");
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "2.53.0".parse::<Version>().unwrap(),
            Version::new(2, 53, 0)
        );
        assert_eq!(
            "10.1.203".parse::<Version>().unwrap(),
            Version::new(10, 1, 203)
        );
    }

    #[test]
    fn test_from_str_invalid() {
        assert_eq!(
            "2.53".parse::<Version>().unwrap_err(),
            "'2.53' is not a version, expected MAJOR.MINOR.PATCH"
        );
        assert!("2.53".parse::<Version>().is_err());
        assert!("1.2.3.4".parse::<Version>().is_err());
        assert!("^2.0.0".parse::<Version>().is_err());
        assert!("1.2.x".parse::<Version>().is_err());
        assert!("".parse::<Version>().is_err());
    }

    #[test]
    fn test_ordering() {
        let mut versions = vec![Version::new(10, 0, 0), Version::new(2, 9, 9), Version::new(2, 53, 0)];
        versions.sort();
        assert_eq!(versions.last(), Some(&Version::new(10, 0, 0)));
        assert!(Version::new(2, 53, 0) > Version::new(2, 9, 9));
        assert!(Version::new(10, 0, 0) > Version::new(2, 99, 99));
        assert_eq!(Version::new(2, 53, 0).major(), 2);
    }

    #[test]
    fn test_serialize() {
        #[derive(Serialize)]
        struct Versions {
            constructs: Version,
        }
        let versions = Versions {
            constructs: Version::new(10, 1, 203),
        };
        let toml = toml::to_string(&versions).unwrap();
        assert_eq!(toml.trim(), r#"constructs = "10.1.203""#);
    }

    #[test]
    fn test_deserialize() {
        #[derive(Deserialize)]
        struct Versions {
            constructs: Version,
        }
        let versions: Versions = toml::from_str(r#"constructs = "10.1.203""#).unwrap();
        assert_eq!(versions.constructs, Version::new(10, 1, 203));

        let invalid = toml::from_str::<Versions>(r#"constructs = "10.1""#);
        assert!(invalid.is_err());
    }
}
