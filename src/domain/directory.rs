use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const SHARED_PREFIX: &str = "shared:";

/// Logical storage location. The file store decides where each one lives.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Directory {
    Documents,
    Caches,
    ApplicationSupport,
    Temporary,
    SharedContainer { app_group: String },
}

impl Directory {
    #[must_use]
    pub fn raw_name(&self) -> String {
        match self {
            Directory::Documents => String::from("documents"),
            Directory::Caches => String::from("caches"),
            Directory::ApplicationSupport => String::from("application-support"),
            Directory::Temporary => String::from("temporary"),
            Directory::SharedContainer { app_group } => format!("{SHARED_PREFIX}{app_group}"),
        }
    }
}

impl fmt::Display for Directory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw_name())
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("Unknown directory '{0}'")]
pub struct ParseDirectoryError(String);

impl FromStr for Directory {
    type Err = ParseDirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "documents" => Ok(Directory::Documents),
            "caches" => Ok(Directory::Caches),
            "application-support" => Ok(Directory::ApplicationSupport),
            "temporary" => Ok(Directory::Temporary),
            other => match other.strip_prefix(SHARED_PREFIX) {
                Some(group) if !group.is_empty() => Ok(Directory::SharedContainer {
                    app_group: group.to_string(),
                }),
                _ => Err(ParseDirectoryError(other.to_string())),
            },
        }
    }
}
