//! Exact-match password set
//!
//! Loads a list of known-bad passwords (a breach list, say) and answers
//! byte-exact membership queries from a hashed in-memory set.

use super::{SetOracle, read_entries};
use crate::QualityError;
use std::collections::HashSet;
use std::path::Path;

/// In-memory set of passwords, matched without case folding.
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    entries: HashSet<Vec<u8>>,
}

impl WordSet {
    /// Loads the set from a file with one password per line.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File is empty
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let set = pwd_quality::WordSet::open("/etc/krb5kdc/common-passwords.txt")?;
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, QualityError> {
        let path = path.as_ref();
        let set = Self::from_entries(read_entries(path)?);

        #[cfg(feature = "tracing")]
        tracing::info!("Word set initialized: {} passwords from {:?}", set.len(), path);

        Ok(set)
    }

    pub fn from_entries<I, W>(entries: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<[u8]>,
    {
        WordSet {
            entries: entries.into_iter().map(|e| e.as_ref().to_vec()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SetOracle for WordSet {
    fn contains(&self, candidate: &[u8]) -> Result<bool, QualityError> {
        Ok(self.entries.contains(candidate))
    }
}
