//! Dictionary section - asks the fuzzy dictionary for a verdict.

use super::{Rejection, SectionResult};
use crate::RejectKind;
use crate::dictionary::DictionaryOracle;

/// Checks the password against the fuzzy dictionary.
///
/// The dictionary's message is passed through unchanged. Passwords longer
/// than `max_length` are not looked up at all; zero means no cap.
///
/// # Returns
/// - `Ok(Some(rejection))` if the dictionary rejects the password
/// - `Ok(None)` if it does not, or the password is over the cap
/// - `Err(_)` if the dictionary could not be queried
pub fn query_fuzzy(
    password: &[u8],
    oracle: &dyn DictionaryOracle,
    max_length: usize,
) -> SectionResult {
    if max_length > 0 && password.len() > max_length {
        return Ok(None);
    }
    Ok(oracle
        .check(password)?
        .map(|message| Rejection::new(RejectKind::DictionaryMatch, message)))
}
