//! Password quality sections
//!
//! Each section checks one aspect of a password and either passes or
//! explains the rejection. The evaluator runs them in a fixed order and stops
//! at the first rejection.

mod classes;
mod dictionary;
mod length;
mod letter;
mod principal;
mod word_set;

pub use classes::{check_classes, check_different};
pub use dictionary::query_fuzzy;
pub use length::check_length;
pub use letter::{check_ascii, check_nonletter};
pub use principal::{check_principal, local_part};
pub use word_set::check_variants;

use crate::{CheckResult, QualityError, RejectKind};

/// A failed section: what kind of rule was broken and the message for the
/// user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub kind: RejectKind,
    pub message: String,
}

impl Rejection {
    pub fn new(kind: RejectKind, message: impl Into<String>) -> Self {
        Rejection {
            kind,
            message: message.into(),
        }
    }
}

impl From<Rejection> for CheckResult {
    fn from(rejection: Rejection) -> Self {
        CheckResult::rejected(rejection.kind, rejection.message)
    }
}

/// Result type for section evaluation functions.
/// - `Ok(Some(rejection))` - Section failed
/// - `Ok(None)` - Section passed
/// - `Err(error)` - A dictionary backend could not answer
pub type SectionResult = Result<Option<Rejection>, QualityError>;
