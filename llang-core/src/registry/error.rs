//! Configuration errors
//!
//! The only fatal error kind of the pipeline: a run never starts with an
//! incomplete registry.

use llang_config::Family;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// The token document is not valid JSON or has the wrong shape
    #[error("invalid token document: {0}")]
    Parse(#[from] serde_json::Error),

    /// A top-level family is absent
    #[error("missing token section '{0}'")]
    MissingSection(Family),

    /// A required key is absent from its family
    #[error("missing token '{name}' in section '{family}'")]
    MissingKey { family: Family, name: String },

    /// A required key has no part identifiers
    #[error("token '{name}' in section '{family}' has no parts")]
    EmptyDefinition { family: Family, name: String },

    /// An alternation pattern failed to compile
    #[error("invalid pattern for '{name}': {source}")]
    Pattern {
        name: String,
        #[source]
        source: regex::Error,
    },
}

impl ConfigError {
    pub fn missing_key(family: Family, name: impl Into<String>) -> Self {
        ConfigError::MissingKey {
            family,
            name: name.into(),
        }
    }
}
