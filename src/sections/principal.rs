//! Principal section - rejects passwords derived from the principal name.

use super::Rejection;
use crate::RejectKind;

const MESSAGE: &str = "password based on username or principal";

/// Returns the principal with its realm removed.
///
/// A backslash escapes the following character, so `\@` is kept as part of
/// the name and both bytes are copied. The first unescaped `@` ends the
/// local part. Without one, the whole principal is returned.
pub fn local_part(principal: &str) -> &[u8] {
    let bytes = principal.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' if i + 1 < bytes.len() => i += 2,
            b'@' => return &bytes[..i],
            _ => i += 1,
        }
    }
    bytes
}

/// Checks whether the password is the principal, its local part, the local
/// part reversed, or the local part followed only by digits.
///
/// Comparisons ignore ASCII case. An empty local part (a principal that
/// starts with `@`) matches the empty password, and any password made only
/// of digits.
pub fn check_principal(password: &[u8], principal: &str) -> Option<Rejection> {
    let rejected = || Some(Rejection::new(RejectKind::PrincipalDerived, MESSAGE));

    if password.eq_ignore_ascii_case(principal.as_bytes()) {
        return rejected();
    }
    let user = local_part(principal);

    if password.len() == user.len() {
        if password.eq_ignore_ascii_case(user) {
            return rejected();
        }
        let reversed: Vec<u8> = user.iter().rev().copied().collect();
        if password.eq_ignore_ascii_case(&reversed) {
            return rejected();
        }
    }

    if password.len() > user.len() {
        let (head, tail) = password.split_at(user.len());
        if head.eq_ignore_ascii_case(user) && tail.iter().all(u8::is_ascii_digit) {
            return rejected();
        }
    }

    None
}
