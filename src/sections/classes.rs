//! Character variety section - length-dependent class requirements and a
//! floor on distinct characters.

use super::Rejection;
use crate::classify::{CharacterClasses, distinct_bytes};
use crate::config::ClassRule;
use crate::{CharacterClassViolation, RejectKind};

fn missing_class(message: String) -> Option<Rejection> {
    Some(Rejection::new(
        RejectKind::CharacterClass(CharacterClassViolation::MissingClass),
        message,
    ))
}

/// Checks the password against every class rule that covers its length.
///
/// Rules are tried in configuration order; within a rule the first missing
/// requirement is reported.
///
/// # Returns
/// - `Some(rejection)` if missing required character types
/// - `None` if all applicable rules are satisfied
pub fn check_classes(password: &[u8], rules: &[ClassRule]) -> Option<Rejection> {
    if rules.is_empty() {
        return None;
    }
    let classes = CharacterClasses::of(password);

    for rule in rules.iter().filter(|r| r.applies_to(password.len())) {
        let missing = [
            (rule.lower && !classes.lower, "a lowercase letter"),
            (rule.upper && !classes.upper, "an uppercase letter"),
            (rule.digit && !classes.digit, "a number"),
            (rule.symbol && !classes.symbol, "a space or punctuation character"),
        ]
        .into_iter()
        .find_map(|(absent, what)| absent.then_some(what));

        if let Some(what) = missing {
            return missing_class(format!("Password must contain {}", what));
        }
        if classes.count() < rule.num_classes {
            return missing_class(format!(
                "Password must contain at least {} types of characters (lowercase, uppercase, numbers, symbols)",
                rule.num_classes
            ));
        }
    }
    None
}

/// Rejects passwords with fewer distinct characters than `minimum`.
pub fn check_different(password: &[u8], minimum: usize) -> Option<Rejection> {
    if minimum > 0 && distinct_bytes(password) < minimum {
        return Some(Rejection::new(
            RejectKind::CharacterClass(CharacterClassViolation::TooFewDistinct),
            "password does not contain enough unique characters",
        ));
    }
    None
}
