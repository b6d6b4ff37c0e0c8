//! # Argument Validator
//!
//! Pure check of a kwargs map against the registry spec for a request. No
//! side effects, so calling it twice with the same inputs yields the same
//! outcome. The executor re-runs it before dispatching even though the CLI
//! already validated.

use crate::error::{BotError, Result};
use crate::registry::Registry;
use std::collections::BTreeMap;

/// An argument is optional iff its requirement text contains this substring.
/// The requirement text is also what `--describe` shows the user.
const OPTIONAL_MARKER: &str = "optional";

/// Fails with [`BotError::Validation`] when a declared non-optional argument
/// is absent, when a supplied argument is empty, or when kwargs carries a key
/// the request does not declare. The supplied keys must always be a subset of
/// the declared keys, including when nothing is declared at all.
pub fn check_arguments(request: &str, kwargs: &BTreeMap<String, String>) -> Result<()> {
    let registry = Registry::global();
    let declared = registry.request_arguments(request).ok_or_else(|| {
        BotError::Validation(format!(
            "request '{}' has no argument spec registered",
            request
        ))
    })?;

    for (name, requirement) in declared {
        let is_optional = requirement.contains(OPTIONAL_MARKER);
        match kwargs.get(*name) {
            None if !is_optional => {
                return Err(BotError::Validation(format!(
                    "request '{}' requires the non-optional argument '{}': {}",
                    request, name, requirement
                )));
            }
            Some(value) if value.is_empty() => {
                return Err(BotError::Validation(format!(
                    "keyword argument '{}' for request '{}' cannot be empty",
                    name, request
                )));
            }
            _ => {}
        }
    }

    for key in kwargs.keys() {
        if !declared.contains_key(key.as_str()) {
            let declared_keys: Vec<&&str> = declared.keys().collect();
            return Err(BotError::Validation(format!(
                "keyword argument '{}' is not declared for request '{}'; declared arguments: {:?}",
                key, request, declared_keys
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kwargs(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn accepts_a_complete_argument_set() {
        check_arguments("gen_comm", &kwargs(&[("command", "echo hi")])).unwrap();
    }

    #[test]
    fn rejects_missing_required_argument() {
        let err = check_arguments("gen_comm", &kwargs(&[])).unwrap_err();
        assert!(matches!(err, BotError::Validation(_)));
        assert!(err.to_string().contains("non-optional"));
    }

    #[test]
    fn rejects_empty_value() {
        let err = check_arguments("gen_comm", &kwargs(&[("command", "")])).unwrap_err();
        assert!(matches!(err, BotError::Validation(_)));
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn rejects_undeclared_key() {
        let err = check_arguments(
            "gen_comm",
            &kwargs(&[("command", "echo hi"), ("extra", "x")]),
        )
        .unwrap_err();
        assert!(matches!(err, BotError::Validation(_)));
        assert!(err.to_string().contains("extra"));
    }

    #[test]
    fn is_idempotent() {
        let args = kwargs(&[("command", "")]);
        let first = check_arguments("gen_comm", &args).unwrap_err().to_string();
        let second = check_arguments("gen_comm", &args).unwrap_err().to_string();
        assert_eq!(first, second);

        let good = kwargs(&[("command", "ls")]);
        check_arguments("gen_comm", &good).unwrap();
        check_arguments("gen_comm", &good).unwrap();
    }

    #[test]
    fn unregistered_request_is_a_validation_error() {
        let err = check_arguments("no_such_request", &kwargs(&[])).unwrap_err();
        assert!(matches!(err, BotError::Validation(_)));
    }
}
