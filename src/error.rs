//! Errors that stop a policy from running at all.
//!
//! A rejected password is not an error: it is a [`CheckResult::Rejected`]
//! value. `QualityError` is reserved for the operator-facing failures where
//! the engine could not reach a verdict.
//!
//! [`CheckResult::Rejected`]: crate::CheckResult::Rejected

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QualityError {
    #[error("no password dictionary or dictionary set configured")]
    MissingDictionary,
    #[error("dictionary file not found: {0}")]
    DictionaryNotFound(PathBuf),
    #[error("cannot read dictionary {path}: {source}")]
    DictionaryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("dictionary file is empty: {0}")]
    EmptyDictionary(PathBuf),
    #[error("invalid value for {key}: {value:?}")]
    InvalidSetting { key: String, value: String },
    #[error("invalid character class rule: {0:?}")]
    InvalidClassRule(String),
    #[error("dictionary lookup failed: {0}")]
    Resource(String),
}

impl QualityError {
    /// True when the policy could not be built from its configuration,
    /// false when a dictionary backend failed during a check.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, QualityError::Resource(_))
    }
}
