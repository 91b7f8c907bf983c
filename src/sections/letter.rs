//! Letter section - optional restrictions on which characters may appear.

use super::Rejection;
use crate::classify::{is_alpha_or_space, is_printable_ascii};
use crate::{CharacterClassViolation, RejectKind};

/// Rejects control characters and anything outside ASCII, if enabled.
pub fn check_ascii(password: &[u8], enabled: bool) -> Option<Rejection> {
    if enabled && !is_printable_ascii(password) {
        return Some(Rejection::new(
            RejectKind::CharacterClass(CharacterClassViolation::NonPrintable),
            "password contains non-ASCII or control characters",
        ));
    }
    None
}

/// Rejects passwords made only of letters and spaces, if enabled.
///
/// Passphrases then need at least a digit or punctuation mark, which makes
/// combining dictionary words less effective.
pub fn check_nonletter(password: &[u8], enabled: bool) -> Option<Rejection> {
    if enabled && is_alpha_or_space(password) {
        return Some(Rejection::new(
            RejectKind::CharacterClass(CharacterClassViolation::OnlyLetters),
            "password is only letters and spaces",
        ));
    }
    None
}
