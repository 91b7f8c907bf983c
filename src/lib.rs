//! Password quality checks for Kerberos password changes
//!
//! This library decides whether a new password is acceptable for a
//! principal. A [`Policy`] runs an ordered series of checks and reports the
//! first one that fails:
//!
//! 1. minimum length
//! 2. printable ASCII only (optional)
//! 3. at least one non-letter (optional)
//! 4. character classes by length, and a minimum of distinct characters
//!    (optional)
//! 5. not derived from the principal name
//! 6. fuzzy dictionary lookup
//! 7. exact word set lookup, including every one-character edit
//!
//! At least one of the two dictionaries must be configured.
//!
//! # Features
//!
//! - `async` (default): Enables evaluation on tokio's blocking pool with the
//!   result delivered over a channel
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! See [`PolicyConfig::from_env`] and the [`config`] module.
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_quality::{CheckResult, Policy, PolicyConfig};
//! use secrecy::SecretString;
//!
//! // Load dictionaries (once, at startup)
//! let config = PolicyConfig::from_env().expect("Invalid configuration");
//! let policy = Policy::init(&config).expect("Failed to load dictionaries");
//!
//! // Check a password
//! let password = SecretString::from("MyP@ssw0rd!".to_string());
//! match policy.evaluate_str(&password, "someuser@EXAMPLE.ORG") {
//!     Ok(CheckResult::Accepted) => println!("accepted"),
//!     Ok(CheckResult::Rejected { message, .. }) => println!("rejected: {}", message),
//!     Err(e) => eprintln!("cannot check password: {}", e),
//! }
//! ```

// Internal modules
mod classify;
pub mod config;
mod dictionary;
mod error;
mod evaluator;
mod policy;
mod sections;
mod variants;
mod verdict;

// Public API
pub use classify::{CharacterClasses, distinct_bytes, is_alpha_or_space, is_printable_ascii};
pub use config::{ClassRule, PolicyConfig};
pub use dictionary::{DictionaryOracle, SetOracle, WordSet, WordlistDictionary};
pub use error::QualityError;
pub use evaluator::evaluate;
pub use policy::{Policy, PolicyBuilder};
pub use sections::{
    Rejection, check_ascii, check_classes, check_different, check_length, check_nonletter,
    check_principal, check_variants, local_part, query_fuzzy,
};
pub use variants::EditVariants;
pub use verdict::{CharacterClassViolation, CheckResult, RejectKind};

#[cfg(feature = "async")]
pub use evaluator::evaluate_tx;
