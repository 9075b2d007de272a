// SPDX-License-Identifier: MPL-2.0
//! Errors raised while setting up localization: reading resources, parsing
//! string tables, and loading or saving the preference and settings files.
//!
//! Lookups and language selection never fail; only setup does.

use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Resource(ResourceError),
}

/// Problems found while building resource bundles.
#[derive(Debug, Clone)]
pub enum ResourceError {
    /// A `.ftl` table did not parse.
    Parse { table: String, message: String },

    /// A table redefines a message already present in the same bundle.
    Conflict { table: String, message: String },

    /// A bundle directory name is neither `Base` nor a language identifier.
    InvalidLanguage(String),
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceError::Parse { table, message } => {
                write!(f, "failed to parse table {}: {}", table, message)
            }
            ResourceError::Conflict { table, message } => {
                write!(f, "conflicting entries in table {}: {}", table, message)
            }
            ResourceError::InvalidLanguage(name) => {
                write!(f, "invalid language identifier: {}", name)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Resource(e) => write!(f, "Resource Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ResourceError> for Error {
    fn from(err: ResourceError) -> Self {
        Error::Resource(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
