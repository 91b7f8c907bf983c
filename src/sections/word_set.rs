//! Word set section - looks up the password and its edit variants in an
//! exact-match set.

use super::{Rejection, SectionResult};
use crate::RejectKind;
use crate::dictionary::SetOracle;
use crate::variants::EditVariants;

/// Checks the password and every edit variant against the set, stopping at
/// the first hit or the first lookup failure.
///
/// # Returns
/// - `Ok(Some(rejection))` if the password or a variant is in the set
/// - `Ok(None)` if nothing matched
/// - `Err(_)` if a lookup failed
pub fn check_variants(password: &[u8], set: &dyn SetOracle) -> SectionResult {
    for variant in EditVariants::new(password) {
        if set.contains(&variant)? {
            return Ok(Some(Rejection::new(
                RejectKind::DictionaryMatch,
                "password found in list of common passwords",
            )));
        }
    }
    Ok(None)
}
