//! Dictionary backends consulted by a policy.
//!
//! Two capabilities are used: a fuzzy oracle that already knows about case,
//! reversal and similar mangling and explains its verdict, and an exact-match
//! set that is combined with [`EditVariants`](crate::EditVariants) to find
//! near misses.

mod set;
mod wordlist;

pub use set::WordSet;
pub use wordlist::WordlistDictionary;

use crate::QualityError;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// A dictionary that decides on its own whether a password is too weak.
pub trait DictionaryOracle {
    /// Returns `Ok(Some(reason))` if the password is rejected, with the
    /// reason to show the user verbatim.
    fn check(&self, password: &[u8]) -> Result<Option<String>, QualityError>;
}

/// A set of known-bad passwords matched byte for byte.
pub trait SetOracle {
    fn contains(&self, candidate: &[u8]) -> Result<bool, QualityError>;
}

/// Backends that are not safe for concurrent use can be wrapped in a
/// `Mutex`, which serializes every query.
impl<T: DictionaryOracle> DictionaryOracle for Mutex<T> {
    fn check(&self, password: &[u8]) -> Result<Option<String>, QualityError> {
        let guard = self
            .lock()
            .map_err(|_| QualityError::Resource("dictionary lock poisoned".to_string()))?;
        guard.check(password)
    }
}

impl<T: SetOracle> SetOracle for Mutex<T> {
    fn contains(&self, candidate: &[u8]) -> Result<bool, QualityError> {
        let guard = self
            .lock()
            .map_err(|_| QualityError::Resource("dictionary set lock poisoned".to_string()))?;
        guard.contains(candidate)
    }
}

impl<T: DictionaryOracle + ?Sized> DictionaryOracle for Arc<T> {
    fn check(&self, password: &[u8]) -> Result<Option<String>, QualityError> {
        (**self).check(password)
    }
}

impl<T: SetOracle + ?Sized> SetOracle for Arc<T> {
    fn contains(&self, candidate: &[u8]) -> Result<bool, QualityError> {
        (**self).contains(candidate)
    }
}

/// Reads a one-entry-per-line file and returns its non-blank lines.
///
/// Lines are split on `\n` with a trailing `\r` removed; no other
/// whitespace is touched. The file is closed before this returns.
pub(crate) fn read_entries(path: &Path) -> Result<Vec<Vec<u8>>, QualityError> {
    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Dictionary initialization FAILED: FileNotFound {:?}", path);
        return Err(QualityError::DictionaryNotFound(path.to_path_buf()));
    }

    let content = std::fs::read(path).map_err(|source| {
        #[cfg(feature = "tracing")]
        tracing::error!("Dictionary initialization FAILED: ReadError {:?}: {}", path, source);
        QualityError::DictionaryRead {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let entries: Vec<Vec<u8>> = content
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(<[u8]>::to_vec)
        .collect();

    if entries.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Dictionary initialization FAILED: Empty file {:?}", path);
        return Err(QualityError::EmptyDictionary(path.to_path_buf()));
    }

    Ok(entries)
}
