//! Password quality evaluator - runs the sections in order.

use crate::sections::{
    SectionResult, check_ascii, check_classes, check_different, check_length, check_nonletter,
    check_principal, check_variants, query_fuzzy,
};
use crate::{CheckResult, Policy, QualityError};

#[cfg(feature = "async")]
use secrecy::{ExposeSecret, SecretSlice};
#[cfg(feature = "async")]
use std::sync::Arc;
#[cfg(feature = "async")]
use tokio::sync::mpsc;

type Section = fn(&Policy, &[u8], &str) -> SectionResult;

/// Evaluates a password against a policy.
///
/// # Arguments
/// * `policy` - The resolved policy
/// * `password` - The candidate password, as raw bytes
/// * `principal` - The principal whose password is changing, in
///   `name[/instance]@REALM` form
///
/// # Returns
/// `Ok(CheckResult::Rejected { .. })` for the first failing section,
/// `Ok(CheckResult::Accepted)` if every section passes, or an error if a
/// dictionary could not be queried. Neither input is modified.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub fn evaluate(
    policy: &Policy,
    password: &[u8],
    principal: &str,
) -> Result<CheckResult, QualityError> {
    // Orchestrator: cheap sections first so degenerate input never reaches
    // the dictionaries
    let sections: [(&str, Section); 8] = [
        ("length", |policy, pwd, _| Ok(check_length(pwd, policy.minimum_length))),
        ("ascii", |policy, pwd, _| Ok(check_ascii(pwd, policy.require_ascii_printable))),
        ("letter", |policy, pwd, _| Ok(check_nonletter(pwd, policy.require_non_letter))),
        ("classes", |policy, pwd, _| Ok(check_classes(pwd, &policy.require_classes))),
        ("different", |policy, pwd, _| Ok(check_different(pwd, policy.minimum_different))),
        ("principal", |_, pwd, principal| Ok(check_principal(pwd, principal))),
        ("dictionary", |policy, pwd, _| match &policy.dictionary {
            Some(oracle) => query_fuzzy(pwd, &**oracle, policy.dictionary_max_length),
            None => Ok(None),
        }),
        ("word set", |policy, pwd, _| match &policy.word_set {
            Some(set) => check_variants(pwd, &**set),
            None => Ok(None),
        }),
    ];

    for (section_name, section_fn) in sections {
        match section_fn(policy, password, principal) {
            Ok(Some(rejection)) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    "Password for {} rejected by section {}: {}",
                    principal,
                    section_name,
                    rejection.message
                );
                return Ok(rejection.into());
            }
            Ok(None) => {
                // Section passed, continue
            }
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::error!("Fatal error in password quality section {}: {}", section_name, e);
                return Err(e);
            }
        }
    }
    Ok(CheckResult::Accepted)
}

/// Async version that evaluates on the blocking pool and sends the outcome
/// via channel.
#[cfg(feature = "async")]
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub async fn evaluate_tx(
    policy: Arc<Policy>,
    password: SecretSlice<u8>,
    principal: String,
    tx: mpsc::Sender<Result<CheckResult, QualityError>>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    let outcome = tokio::task::spawn_blocking(move || {
        evaluate(&policy, password.expose_secret(), &principal)
    })
    .await
    .unwrap_or_else(|e| Err(QualityError::Resource(format!("evaluation task failed: {}", e))));

    if let Err(e) = tx.send(outcome).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password quality result: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::testing::{CountingSet, ScriptedDictionary};
    use crate::dictionary::{WordSet, WordlistDictionary};
    use crate::{CharacterClassViolation, ClassRule, PolicyConfig, RejectKind};
    use secrecy::{SecretSlice, SecretString};
    use std::io::Write;
    use std::sync::Mutex;
    use tempfile::NamedTempFile;

    const PRINCIPAL: &str = "test@EXAMPLE.ORG";

    fn setup_with_tempfile(passwords: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for pwd in passwords {
            writeln!(temp_file, "{}", pwd).expect("Failed to write");
        }
        temp_file
    }

    fn word_set_policy(config: PolicyConfig) -> Policy {
        Policy::builder(config)
            .word_set(WordSet::from_entries(["password", "bitterbane", "ab", "one"]))
            .build()
            .unwrap()
    }

    fn kind_of(policy: &Policy, password: &str, principal: &str) -> Option<RejectKind> {
        evaluate(policy, password.as_bytes(), principal).unwrap().kind()
    }

    #[test]
    fn test_accepts_good_password() {
        let policy = word_set_policy(PolicyConfig::new().minimum_length(8));
        let result = evaluate(&policy, b"known good password", PRINCIPAL).unwrap();
        assert_eq!(result, CheckResult::Accepted);
    }

    #[test]
    fn test_too_short_regardless_of_dictionary() {
        let policy = word_set_policy(PolicyConfig::new().minimum_length(8));
        assert_eq!(kind_of(&policy, "", PRINCIPAL), Some(RejectKind::TooShort));
        assert_eq!(kind_of(&policy, "bitter", PRINCIPAL), Some(RejectKind::TooShort));

        let policy = Policy::builder(PolicyConfig::new().minimum_length(8))
            .dictionary(ScriptedDictionary::rejecting("", "it is WAY too short"))
            .build()
            .unwrap();
        let result = evaluate(&policy, b"", PRINCIPAL).unwrap();
        assert_eq!(result.kind(), Some(RejectKind::TooShort));
        assert_eq!(result.message(), Some("password is too short"));
    }

    #[test]
    fn test_length_check_comes_first() {
        let policy = word_set_policy(
            PolicyConfig::new()
                .minimum_length(12)
                .require_ascii_printable(true),
        );
        assert_eq!(kind_of(&policy, "\tshort", PRINCIPAL), Some(RejectKind::TooShort));
    }

    #[test]
    fn test_character_class_violations() {
        let policy = word_set_policy(
            PolicyConfig::new()
                .require_ascii_printable(true)
                .require_non_letter(true),
        );
        assert_eq!(
            kind_of(&policy, "\touchDartetch", PRINCIPAL),
            Some(RejectKind::CharacterClass(CharacterClassViolation::NonPrintable))
        );
        assert_eq!(
            kind_of(&policy, "عربى", PRINCIPAL),
            Some(RejectKind::CharacterClass(CharacterClassViolation::NonPrintable))
        );
        assert_eq!(
            kind_of(&policy, "the perils of all good dogs", PRINCIPAL),
            Some(RejectKind::CharacterClass(CharacterClassViolation::OnlyLetters))
        );
        assert_eq!(kind_of(&policy, "the perils of all good dogs!", PRINCIPAL), None);
    }

    #[test]
    fn test_class_rules() {
        let rules = ClassRule::parse_list("8-:lower,upper,digit,symbol").unwrap();
        let policy = word_set_policy(PolicyConfig::new().require_classes(rules));

        let result = evaluate(&policy, b"passwordXX!", PRINCIPAL).unwrap();
        assert_eq!(
            result.kind(),
            Some(RejectKind::CharacterClass(CharacterClassViolation::MissingClass))
        );
        assert_eq!(result.message(), Some("Password must contain a number"));

        let result = evaluate(&policy, b"passwordXX9", PRINCIPAL).unwrap();
        assert_eq!(
            result.message(),
            Some("Password must contain a space or punctuation character")
        );

        assert!(evaluate(&policy, b"passwordX9!", PRINCIPAL).unwrap().is_accepted());
    }

    #[test]
    fn test_minimum_different() {
        let policy = word_set_policy(PolicyConfig::new().minimum_different(8));
        assert_eq!(
            kind_of(&policy, "1bcd1bcd1bcd1bcd1bcd", PRINCIPAL),
            Some(RejectKind::CharacterClass(CharacterClassViolation::TooFewDistinct))
        );
        assert_eq!(kind_of(&policy, "1dbegchf1cdbfgh1ebcd", PRINCIPAL), None);
    }

    #[test]
    fn test_principal_derived() {
        let policy = word_set_policy(PolicyConfig::new());
        for password in ["someuser", "SOMEUSER", "resuemos", "someuser123", "someuser@EXAMPLE.ORG"] {
            assert_eq!(
                kind_of(&policy, password, "someuser@EXAMPLE.ORG"),
                Some(RejectKind::PrincipalDerived),
                "expected {:?} to be rejected",
                password
            );
        }
    }

    #[test]
    fn test_principal_check_before_dictionary() {
        let policy = Policy::builder(PolicyConfig::new())
            .dictionary(ScriptedDictionary::rejecting("someuser", "it is based on a dictionary word"))
            .build()
            .unwrap();
        assert_eq!(
            kind_of(&policy, "someuser", "someuser@EXAMPLE.ORG"),
            Some(RejectKind::PrincipalDerived)
        );
    }

    #[test]
    fn test_dictionary_match_from_word_set() {
        let policy = word_set_policy(PolicyConfig::new());
        for password in ["itterbane", "Citterbane", "b7itterbane", "'bitterbane'", "password"] {
            let result = evaluate(&policy, password.as_bytes(), PRINCIPAL).unwrap();
            assert_eq!(result.kind(), Some(RejectKind::DictionaryMatch), "{}", password);
            assert_eq!(result.message(), Some("password found in list of common passwords"));
        }
        assert!(evaluate(&policy, b"bitterbane123", PRINCIPAL).unwrap().is_accepted());
    }

    #[test]
    fn test_fuzzy_dictionary_message_passes_through() {
        let policy = Policy::builder(PolicyConfig::new())
            .dictionary(WordlistDictionary::from_words(["bitterbane"]))
            .build()
            .unwrap();
        let result = evaluate(&policy, b"enabrettib", PRINCIPAL).unwrap();
        assert_eq!(
            result,
            CheckResult::Rejected {
                kind: RejectKind::DictionaryMatch,
                message: "it is based on a (reversed) dictionary word".to_string(),
            }
        );
    }

    #[test]
    fn test_fuzzy_dictionary_before_word_set() {
        let policy = Policy::builder(PolicyConfig::new())
            .dictionary(ScriptedDictionary::rejecting("bitterbane1", "scripted verdict"))
            .word_set(WordSet::from_entries(["bitterbane"]))
            .build()
            .unwrap();
        let result = evaluate(&policy, b"bitterbane1", PRINCIPAL).unwrap();
        assert_eq!(result.message(), Some("scripted verdict"));
    }

    #[test]
    fn test_dictionary_max_length_skips_fuzzy_only() {
        let policy = Policy::builder(PolicyConfig::new().dictionary_max_length(8))
            .dictionary(ScriptedDictionary::rejecting("bitterbane", "scripted verdict"))
            .word_set(WordSet::from_entries(["bitterbane"]))
            .build()
            .unwrap();
        let result = evaluate(&policy, b"bitterbane", PRINCIPAL).unwrap();
        assert_eq!(result.message(), Some("password found in list of common passwords"));
    }

    #[test]
    fn test_oracle_error_is_not_a_rejection() {
        let policy = Policy::builder(PolicyConfig::new())
            .dictionary(ScriptedDictionary {
                fail: true,
                ..ScriptedDictionary::default()
            })
            .build()
            .unwrap();
        let result = evaluate(&policy, b"known good password", PRINCIPAL);
        match result {
            Err(err) => assert!(!err.is_configuration()),
            Ok(other) => panic!("Expected Resource error, got {:?}", other),
        }
    }

    #[test]
    fn test_mutex_wrapped_set_is_serialized() {
        let policy = Policy::builder(PolicyConfig::new())
            .word_set(Mutex::new(CountingSet::new(&["bitterbane"])))
            .build()
            .unwrap();
        assert_eq!(kind_of(&policy, "bitterbane1", PRINCIPAL), Some(RejectKind::DictionaryMatch));
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let policy = word_set_policy(PolicyConfig::new().minimum_length(8));
        for password in ["b7itterbane", "someuser123", "known good password", "short"] {
            let first = evaluate(&policy, password.as_bytes(), "someuser@EXAMPLE.ORG").unwrap();
            let second = evaluate(&policy, password.as_bytes(), "someuser@EXAMPLE.ORG").unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_policy_from_files() {
        let words = setup_with_tempfile(&["happenstance"]);
        let set = setup_with_tempfile(&["bitterbane"]);
        let config = PolicyConfig::new()
            .minimum_length(12)
            .dictionary_path(words.path())
            .set_source_path(set.path());
        let policy = Policy::init(&config).unwrap();

        let secret = SecretSlice::from(b"vUCZ2aX$Y.e".to_vec());
        assert_eq!(
            policy.evaluate(&secret, "test@EXAMPLE.COM").unwrap().kind(),
            Some(RejectKind::TooShort)
        );

        let secret = SecretString::from("happenstance".to_string());
        assert_eq!(
            policy.evaluate_str(&secret, "test@EXAMPLE.COM").unwrap().message(),
            Some("it is based on a dictionary word")
        );

        let secret = SecretString::from("'bitterbane'".to_string());
        assert_eq!(
            policy.evaluate_str(&secret, "test@EXAMPLE.COM").unwrap().kind(),
            Some(RejectKind::DictionaryMatch)
        );

        let secret = SecretString::from("vUCZ2aX$Y.e1".to_string());
        assert!(policy.evaluate_str(&secret, "test@EXAMPLE.COM").unwrap().is_accepted());
    }

    #[test]
    fn test_shared_across_threads() {
        let policy = std::sync::Arc::new(word_set_policy(PolicyConfig::new()));
        let handles: Vec<_> = ["bitterbane1", "known good password"]
            .into_iter()
            .map(|password| {
                let policy = std::sync::Arc::clone(&policy);
                std::thread::spawn(move || {
                    evaluate(&policy, password.as_bytes(), PRINCIPAL).unwrap()
                })
            })
            .collect();
        let results: Vec<CheckResult> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results[0].kind(), Some(RejectKind::DictionaryMatch));
        assert!(results[1].is_accepted());
    }
}
