//! Policy configuration
//!
//! Settings can be built up in code or read from the environment.
//!
//! # Environment Variables
//!
//! - `PWD_QUALITY_DICTIONARY`: wordlist used as the fuzzy dictionary
//! - `PWD_QUALITY_DICTIONARY_SET`: list of passwords matched exactly, with
//!   one-character edits
//! - `PWD_QUALITY_MINIMUM_LENGTH`: minimum password length in bytes
//! - `PWD_QUALITY_MINIMUM_DIFFERENT`: minimum number of distinct characters
//! - `PWD_QUALITY_DICTIONARY_MAX_LENGTH`: skip the fuzzy dictionary for
//!   longer passwords
//! - `PWD_QUALITY_REQUIRE_ASCII_PRINTABLE`: reject control and non-ASCII
//!   characters
//! - `PWD_QUALITY_REQUIRE_NON_LETTER`: reject passwords of only letters and
//!   spaces
//! - `PWD_QUALITY_REQUIRE_CLASSES`: character class rules, see [`ClassRule`]

use crate::QualityError;
use std::path::PathBuf;
use std::str::FromStr;

const ENV_DICTIONARY: &str = "PWD_QUALITY_DICTIONARY";
const ENV_DICTIONARY_SET: &str = "PWD_QUALITY_DICTIONARY_SET";
const ENV_MINIMUM_LENGTH: &str = "PWD_QUALITY_MINIMUM_LENGTH";
const ENV_MINIMUM_DIFFERENT: &str = "PWD_QUALITY_MINIMUM_DIFFERENT";
const ENV_DICTIONARY_MAX_LENGTH: &str = "PWD_QUALITY_DICTIONARY_MAX_LENGTH";
const ENV_REQUIRE_ASCII: &str = "PWD_QUALITY_REQUIRE_ASCII_PRINTABLE";
const ENV_REQUIRE_NON_LETTER: &str = "PWD_QUALITY_REQUIRE_NON_LETTER";
const ENV_REQUIRE_CLASSES: &str = "PWD_QUALITY_REQUIRE_CLASSES";

/// Character classes required of passwords within a length range.
///
/// Written as `[MIN-[MAX]:]CLASS[,CLASS...]`, where each CLASS is one of
/// `lower`, `upper`, `digit`, `symbol`, or a number giving how many of those
/// four classes must be present. `12-19:upper,lower` applies to passwords of
/// 12 through 19 characters, `20-:3` to 20 characters and up, and a rule
/// without a range to every password.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassRule {
    pub min_length: usize,
    /// Zero means no upper bound.
    pub max_length: usize,
    pub lower: bool,
    pub upper: bool,
    pub digit: bool,
    pub symbol: bool,
    pub num_classes: usize,
}

impl ClassRule {
    /// Whether this rule governs a password of the given length.
    pub fn applies_to(&self, length: usize) -> bool {
        length >= self.min_length && (self.max_length == 0 || length <= self.max_length)
    }

    /// Parses a whitespace-separated list of rules.
    pub fn parse_list(value: &str) -> Result<Vec<ClassRule>, QualityError> {
        value.split_whitespace().map(str::parse).collect()
    }
}

impl FromStr for ClassRule {
    type Err = QualityError;

    fn from_str(rule: &str) -> Result<Self, Self::Err> {
        let invalid = || QualityError::InvalidClassRule(rule.to_string());
        let mut parsed = ClassRule::default();

        let classes = match rule.split_once(':') {
            Some((range, classes)) => {
                let (min, max) = range.split_once('-').ok_or_else(invalid)?;
                parsed.min_length = min.parse().map_err(|_| invalid())?;
                if !max.is_empty() {
                    parsed.max_length = max.parse().map_err(|_| invalid())?;
                    if parsed.max_length < parsed.min_length {
                        return Err(invalid());
                    }
                }
                classes
            }
            None => rule,
        };

        for class in classes.split(',') {
            match class {
                "lower" => parsed.lower = true,
                "upper" => parsed.upper = true,
                "digit" => parsed.digit = true,
                "symbol" => parsed.symbol = true,
                count => {
                    let count: usize = count.parse().map_err(|_| invalid())?;
                    if count == 0 || count > 4 {
                        return Err(invalid());
                    }
                    parsed.num_classes = count;
                }
            }
        }
        Ok(parsed)
    }
}

/// Everything needed to build a [`Policy`](crate::Policy).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyConfig {
    /// Zero means no minimum.
    pub minimum_length: usize,
    pub require_ascii_printable: bool,
    pub require_non_letter: bool,
    /// Zero means no minimum.
    pub minimum_different: usize,
    pub require_classes: Vec<ClassRule>,
    /// Passwords longer than this skip the fuzzy dictionary. Zero means no cap.
    pub dictionary_max_length: usize,
    pub dictionary_path: Option<PathBuf>,
    pub set_source_path: Option<PathBuf>,
}

impl PolicyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the configuration from `PWD_QUALITY_*` environment variables.
    ///
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSetting` or `InvalidClassRule` for values that do not
    /// parse.
    pub fn from_env() -> Result<Self, QualityError> {
        let mut config = PolicyConfig::default();
        config.dictionary_path = env_path(ENV_DICTIONARY);
        config.set_source_path = env_path(ENV_DICTIONARY_SET);
        if let Some(value) = env_number(ENV_MINIMUM_LENGTH)? {
            config.minimum_length = value;
        }
        if let Some(value) = env_number(ENV_MINIMUM_DIFFERENT)? {
            config.minimum_different = value;
        }
        if let Some(value) = env_number(ENV_DICTIONARY_MAX_LENGTH)? {
            config.dictionary_max_length = value;
        }
        if let Some(value) = env_bool(ENV_REQUIRE_ASCII)? {
            config.require_ascii_printable = value;
        }
        if let Some(value) = env_bool(ENV_REQUIRE_NON_LETTER)? {
            config.require_non_letter = value;
        }
        if let Ok(value) = std::env::var(ENV_REQUIRE_CLASSES) {
            config.require_classes = ClassRule::parse_list(&value)?;
        }
        Ok(config)
    }

    pub fn minimum_length(mut self, length: usize) -> Self {
        self.minimum_length = length;
        self
    }

    pub fn require_ascii_printable(mut self, enabled: bool) -> Self {
        self.require_ascii_printable = enabled;
        self
    }

    pub fn require_non_letter(mut self, enabled: bool) -> Self {
        self.require_non_letter = enabled;
        self
    }

    pub fn minimum_different(mut self, count: usize) -> Self {
        self.minimum_different = count;
        self
    }

    pub fn require_classes(mut self, rules: Vec<ClassRule>) -> Self {
        self.require_classes = rules;
        self
    }

    pub fn dictionary_max_length(mut self, length: usize) -> Self {
        self.dictionary_max_length = length;
        self
    }

    pub fn dictionary_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dictionary_path = Some(path.into());
        self
    }

    pub fn set_source_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.set_source_path = Some(path.into());
        self
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn invalid_setting(key: &str, value: &str) -> QualityError {
    QualityError::InvalidSetting {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn env_number(key: &str) -> Result<Option<usize>, QualityError> {
    match std::env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| invalid_setting(key, &value)),
        Err(_) => Ok(None),
    }
}

fn env_bool(key: &str) -> Result<Option<bool>, QualityError> {
    let Ok(value) = std::env::var(key) else {
        return Ok(None);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => Err(invalid_setting(key, &value)),
    }
}
