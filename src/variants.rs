//! Edit-distance-one neighbourhood of a password.
//!
//! An exact-match word set only finds the password itself. Walking every
//! single deletion, substitution and insertion (plus three two-character
//! trims) lets the same set catch near misses such as `bitterbane1`.

use std::ops::RangeInclusive;

/// Bytes tried for substitutions and insertions.
const PRINTABLE: RangeInclusive<u8> = 0x20..=0x7e;

#[derive(Debug, Clone, Copy)]
enum Stage {
    Original,
    Delete(usize),
    Substitute(usize, u8),
    Insert(usize, u8),
    Trim(u8),
    Done,
}

/// Iterator over the edit variants of a password, in lookup order.
///
/// 1. the password itself
/// 2. each single-byte deletion
/// 3. each position replaced by every printable ASCII byte
/// 4. every printable ASCII byte inserted at each position
/// 5. if longer than two bytes: first two dropped, first and last dropped,
///    last two dropped
///
/// Each item is a fresh owned buffer; the password is never modified.
#[derive(Debug, Clone)]
pub struct EditVariants<'a> {
    password: &'a [u8],
    stage: Stage,
}

impl<'a> EditVariants<'a> {
    pub fn new(password: &'a [u8]) -> Self {
        EditVariants {
            password,
            stage: Stage::Original,
        }
    }

    /// Total number of variants the iterator yields.
    pub fn total(len: usize) -> usize {
        let alphabet = PRINTABLE.len();
        let trims = if len > 2 { 3 } else { 0 };
        1 + len + alphabet * len + alphabet * (len + 1) + trims
    }

    fn after_deletions(&self) -> Stage {
        if self.password.is_empty() {
            Stage::Insert(0, *PRINTABLE.start())
        } else {
            Stage::Substitute(0, *PRINTABLE.start())
        }
    }

    fn after_insertions(&self) -> Stage {
        if self.password.len() > 2 {
            Stage::Trim(0)
        } else {
            Stage::Done
        }
    }
}

/// Next printable byte at the same position, or `None` when exhausted.
fn next_printable(c: u8) -> Option<u8> {
    if c < *PRINTABLE.end() { Some(c + 1) } else { None }
}

impl Iterator for EditVariants<'_> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Vec<u8>> {
        let pwd = self.password;
        let len = pwd.len();

        match self.stage {
            Stage::Original => {
                self.stage = if len == 0 {
                    self.after_deletions()
                } else {
                    Stage::Delete(0)
                };
                Some(pwd.to_vec())
            }
            Stage::Delete(i) => {
                self.stage = if i + 1 < len {
                    Stage::Delete(i + 1)
                } else {
                    self.after_deletions()
                };
                let mut variant = Vec::with_capacity(len - 1);
                variant.extend_from_slice(&pwd[..i]);
                variant.extend_from_slice(&pwd[i + 1..]);
                Some(variant)
            }
            Stage::Substitute(i, c) => {
                self.stage = match next_printable(c) {
                    Some(next) => Stage::Substitute(i, next),
                    None if i + 1 < len => Stage::Substitute(i + 1, *PRINTABLE.start()),
                    None => Stage::Insert(0, *PRINTABLE.start()),
                };
                let mut variant = pwd.to_vec();
                variant[i] = c;
                Some(variant)
            }
            Stage::Insert(i, c) => {
                self.stage = match next_printable(c) {
                    Some(next) => Stage::Insert(i, next),
                    None if i < len => Stage::Insert(i + 1, *PRINTABLE.start()),
                    None => self.after_insertions(),
                };
                let mut variant = Vec::with_capacity(len + 1);
                variant.extend_from_slice(&pwd[..i]);
                variant.push(c);
                variant.extend_from_slice(&pwd[i..]);
                Some(variant)
            }
            Stage::Trim(which) => {
                let variant = match which {
                    0 => &pwd[2..],
                    1 => &pwd[1..len - 1],
                    _ => &pwd[..len - 2],
                };
                self.stage = if which < 2 {
                    Stage::Trim(which + 1)
                } else {
                    Stage::Done
                };
                Some(variant.to_vec())
            }
            Stage::Done => None,
        }
    }
}
