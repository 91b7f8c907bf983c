//! Fuzzy dictionary backed by a plain wordlist.
//!
//! Gives CrackLib-style verdicts (and CrackLib's wording) without its packed
//! file format: short or low-variety passwords are refused outright, and the
//! rest are looked up case-folded, reversed, de-pluralized, un-doubled and with
//! trailing digits removed.

use super::{DictionaryOracle, read_entries};
use crate::QualityError;
use crate::classify::distinct_bytes;
use std::collections::HashSet;
use std::path::Path;

const WAY_TOO_SHORT: usize = 4;
const MIN_LENGTH: usize = 8;
const MIN_DIFFERENT: usize = 5;

/// Case-folded wordlist with CrackLib-like rejection heuristics.
#[derive(Debug, Clone, Default)]
pub struct WordlistDictionary {
    words: HashSet<Vec<u8>>,
}

impl WordlistDictionary {
    /// Loads a wordlist with one word per line.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no words
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, QualityError> {
        let path = path.as_ref();
        let dictionary = Self::from_words(read_entries(path)?);

        #[cfg(feature = "tracing")]
        tracing::info!("Dictionary initialized: {} words from {:?}", dictionary.len(), path);

        Ok(dictionary)
    }

    pub fn from_words<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<[u8]>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().to_ascii_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        WordlistDictionary { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Which mangling of the case-folded word is listed, if any.
    fn is_listed(&self, folded: &[u8]) -> Option<Mangling> {
        if self.words.contains(folded) {
            return Some(Mangling::Word);
        }
        if let Some(singular) = folded.strip_suffix(b"s") {
            if !singular.is_empty() && self.words.contains(singular) {
                return Some(Mangling::Word);
            }
        }
        let half = folded.len() / 2;
        if folded.len() % 2 == 0 && folded[..half] == folded[half..] {
            if self.words.contains(&folded[..half]) {
                return Some(Mangling::Duplicated);
            }
        }
        let stem = folded.trim_ascii_end();
        let stem = match stem.iter().rposition(|b| !b.is_ascii_digit()) {
            Some(last) => &stem[..=last],
            None => &[][..],
        };
        (!stem.is_empty() && stem.len() < folded.len() && self.words.contains(stem))
            .then_some(Mangling::Word)
    }
}

/// How a listed word was found in the password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mangling {
    /// The word itself, its plural, or the word followed by digits.
    Word,
    /// The word written twice.
    Duplicated,
}

/// Every step ascends by one, or every step descends by one.
fn is_systematic(password: &[u8]) -> bool {
    if password.len() < 4 {
        return false;
    }
    let steps = |delta: i16| {
        password
            .windows(2)
            .all(|w| i16::from(w[1]) - i16::from(w[0]) == delta)
    };
    steps(1) || steps(-1)
}

impl DictionaryOracle for WordlistDictionary {
    fn check(&self, password: &[u8]) -> Result<Option<String>, QualityError> {
        let verdict = if password.len() < WAY_TOO_SHORT {
            Some("it is WAY too short")
        } else if password.len() < MIN_LENGTH {
            Some("it is too short")
        } else if distinct_bytes(password) < MIN_DIFFERENT {
            Some("it does not contain enough DIFFERENT characters")
        } else if password.iter().all(u8::is_ascii_whitespace) {
            Some("it is all whitespace")
        } else if is_systematic(password) {
            Some("it is too simplistic/systematic")
        } else {
            let folded = password.to_ascii_lowercase();
            let mut reversed = folded.clone();
            reversed.reverse();
            match self.is_listed(&folded) {
                Some(Mangling::Word) => Some("it is based on a dictionary word"),
                Some(Mangling::Duplicated) => Some("it is based on a (duplicated) dictionary word"),
                None => self
                    .is_listed(&reversed)
                    .map(|_| "it is based on a (reversed) dictionary word"),
            }
        };
        Ok(verdict.map(str::to_string))
    }
}
