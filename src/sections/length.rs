//! Length section - checks password minimum length.

use super::Rejection;
use crate::RejectKind;

/// Checks the password against the configured minimum length.
///
/// Length is counted in bytes. A minimum of zero disables the check.
///
/// # Returns
/// - `Some(rejection)` if password is too short
/// - `None` if password has sufficient length
pub fn check_length(password: &[u8], min_length: usize) -> Option<Rejection> {
    if password.len() < min_length {
        return Some(Rejection::new(RejectKind::TooShort, "password is too short"));
    }
    None
}
