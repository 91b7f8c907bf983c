//! Character classification over raw password bytes.

/// True if every byte is printable ASCII (0x20 through 0x7E).
pub fn is_printable_ascii(password: &[u8]) -> bool {
    password.iter().all(|&b| (0x20..=0x7e).contains(&b))
}

/// True if the password consists only of ASCII letters and spaces.
pub fn is_alpha_or_space(password: &[u8]) -> bool {
    password.iter().all(|&b| b.is_ascii_alphabetic() || b == b' ')
}

/// Number of distinct byte values in the password.
pub fn distinct_bytes(password: &[u8]) -> usize {
    let mut seen = [false; 256];
    let mut count = 0;
    for &b in password {
        if !seen[b as usize] {
            seen[b as usize] = true;
            count += 1;
        }
    }
    count
}

/// Which character classes occur in a password.
///
/// Anything that is not an ASCII letter or digit counts as a symbol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterClasses {
    pub lower: bool,
    pub upper: bool,
    pub digit: bool,
    pub symbol: bool,
}

impl CharacterClasses {
    pub fn of(password: &[u8]) -> Self {
        let mut classes = CharacterClasses::default();
        for &b in password {
            if b.is_ascii_lowercase() {
                classes.lower = true;
            } else if b.is_ascii_uppercase() {
                classes.upper = true;
            } else if b.is_ascii_digit() {
                classes.digit = true;
            } else {
                classes.symbol = true;
            }
        }
        classes
    }

    pub fn count(&self) -> usize {
        [self.lower, self.upper, self.digit, self.symbol]
            .iter()
            .filter(|&&present| present)
            .count()
    }
}
