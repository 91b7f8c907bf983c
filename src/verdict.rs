//! Verdict types returned by a policy check.

use std::fmt;

/// Which character rule a password broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClassViolation {
    /// Contains a control character or a byte outside ASCII.
    NonPrintable,
    /// Made only of letters and spaces.
    OnlyLetters,
    /// Missing a character class required for its length.
    MissingClass,
    /// Too few distinct characters.
    TooFewDistinct,
}

/// Category of a rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectKind {
    TooShort,
    CharacterClass(CharacterClassViolation),
    PrincipalDerived,
    DictionaryMatch,
}

/// Outcome of evaluating one password against a policy.
///
/// Only the first failing check is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    Accepted,
    Rejected { kind: RejectKind, message: String },
}

impl CheckResult {
    pub(crate) fn rejected(kind: RejectKind, message: impl Into<String>) -> Self {
        CheckResult::Rejected {
            kind,
            message: message.into(),
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, CheckResult::Accepted)
    }

    pub fn kind(&self) -> Option<RejectKind> {
        match self {
            CheckResult::Accepted => None,
            CheckResult::Rejected { kind, .. } => Some(*kind),
        }
    }

    /// The user-visible explanation, if the password was rejected.
    pub fn message(&self) -> Option<&str> {
        match self {
            CheckResult::Accepted => None,
            CheckResult::Rejected { message, .. } => Some(message),
        }
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckResult::Accepted => f.write_str("accepted"),
            CheckResult::Rejected { message, .. } => f.write_str(message),
        }
    }
}
