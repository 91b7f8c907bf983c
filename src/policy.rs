//! Resolved policy and its lifecycle.

use crate::config::{ClassRule, PolicyConfig};
use crate::dictionary::{DictionaryOracle, SetOracle, WordSet, WordlistDictionary};
use crate::{CheckResult, QualityError};
use secrecy::{ExposeSecret, SecretSlice, SecretString};
use std::fmt;

type SharedDictionary = Box<dyn DictionaryOracle + Send + Sync>;
type SharedSet = Box<dyn SetOracle + Send + Sync>;

/// A password quality policy with its dictionaries open.
///
/// Built once, then shared read-only by any number of callers; `Policy` is
/// `Send + Sync` and evaluation never mutates it.
pub struct Policy {
    pub(crate) minimum_length: usize,
    pub(crate) require_ascii_printable: bool,
    pub(crate) require_non_letter: bool,
    pub(crate) minimum_different: usize,
    pub(crate) require_classes: Vec<ClassRule>,
    pub(crate) dictionary_max_length: usize,
    pub(crate) dictionary: Option<SharedDictionary>,
    pub(crate) word_set: Option<SharedSet>,
}

impl Policy {
    /// Builds a policy, loading the dictionary and word set named in the
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Neither a dictionary nor a word set is configured
    /// - A configured file does not exist, cannot be read, or is empty
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use pwd_quality::{Policy, PolicyConfig};
    ///
    /// let config = PolicyConfig::new()
    ///     .minimum_length(12)
    ///     .set_source_path("/etc/krb5kdc/common-passwords.txt");
    /// let policy = Policy::init(&config).expect("Failed to load dictionaries");
    /// ```
    pub fn init(config: &PolicyConfig) -> Result<Policy, QualityError> {
        let mut builder = Policy::builder(config.clone());
        if let Some(path) = &config.dictionary_path {
            builder = builder.dictionary(WordlistDictionary::open(path)?);
        }
        if let Some(path) = &config.set_source_path {
            builder = builder.word_set(WordSet::open(path)?);
        }
        builder.build()
    }

    /// Starts a policy whose dictionaries are supplied by the caller.
    pub fn builder(config: PolicyConfig) -> PolicyBuilder {
        PolicyBuilder {
            config,
            dictionary: None,
            word_set: None,
        }
    }

    /// Evaluates a password for the given principal.
    ///
    /// See [`evaluate`](crate::evaluate).
    pub fn evaluate(
        &self,
        password: &SecretSlice<u8>,
        principal: &str,
    ) -> Result<CheckResult, QualityError> {
        crate::evaluate(self, password.expose_secret(), principal)
    }

    /// Evaluates a UTF-8 password for the given principal.
    pub fn evaluate_str(
        &self,
        password: &SecretString,
        principal: &str,
    ) -> Result<CheckResult, QualityError> {
        crate::evaluate(self, password.expose_secret().as_bytes(), principal)
    }

    /// Releases the dictionaries. Dropping the policy does the same.
    pub fn close(self) {
        #[cfg(feature = "tracing")]
        tracing::debug!("Closing password quality policy");
    }
}

impl fmt::Debug for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Policy")
            .field("minimum_length", &self.minimum_length)
            .field("require_ascii_printable", &self.require_ascii_printable)
            .field("require_non_letter", &self.require_non_letter)
            .field("minimum_different", &self.minimum_different)
            .field("require_classes", &self.require_classes)
            .field("dictionary_max_length", &self.dictionary_max_length)
            .field("dictionary", &self.dictionary.is_some())
            .field("word_set", &self.word_set.is_some())
            .finish()
    }
}

/// Assembles a [`Policy`] from a configuration and caller-provided
/// dictionaries. Paths in the configuration are ignored.
///
/// Backends that are not thread-safe can be passed wrapped in a
/// [`std::sync::Mutex`].
pub struct PolicyBuilder {
    config: PolicyConfig,
    dictionary: Option<SharedDictionary>,
    word_set: Option<SharedSet>,
}

impl PolicyBuilder {
    pub fn dictionary<D>(mut self, dictionary: D) -> Self
    where
        D: DictionaryOracle + Send + Sync + 'static,
    {
        self.dictionary = Some(Box::new(dictionary));
        self
    }

    pub fn word_set<S>(mut self, word_set: S) -> Self
    where
        S: SetOracle + Send + Sync + 'static,
    {
        self.word_set = Some(Box::new(word_set));
        self
    }

    /// # Errors
    ///
    /// Returns `MissingDictionary` if neither a dictionary nor a word set was
    /// supplied.
    pub fn build(self) -> Result<Policy, QualityError> {
        if self.dictionary.is_none() && self.word_set.is_none() {
            #[cfg(feature = "tracing")]
            tracing::error!("Policy initialization FAILED: no dictionary configured");
            return Err(QualityError::MissingDictionary);
        }

        let config = self.config;
        Ok(Policy {
            minimum_length: config.minimum_length,
            require_ascii_printable: config.require_ascii_printable,
            require_non_letter: config.require_non_letter,
            minimum_different: config.minimum_different,
            require_classes: config.require_classes,
            dictionary_max_length: config.dictionary_max_length,
            dictionary: self.dictionary,
            word_set: self.word_set,
        })
    }
}
