//! # Action Resolver
//!
//! Turns raw user input into a [`ResolvedAction`] whose fields are guaranteed
//! to be valid registry keys. Resolution is case-, whitespace- and
//! quote-insensitive, and idempotent: resolving an already-canonical pair
//! yields the same result.

use crate::error::{BotError, Result};
use crate::registry::{ActionType, Registry};

/// A validated (action type, request) pair. Constructible only through
/// [`resolve`], so holders can index the registry without rechecking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedAction {
    action_type: ActionType,
    request: &'static str,
}

impl ResolvedAction {
    pub fn action_type(&self) -> ActionType {
        self.action_type
    }

    pub fn request(&self) -> &'static str {
        self.request
    }
}

/// Standard input format shared by both lookups: trimmed, lowercased, with
/// surrounding quote characters stripped.
pub fn normalize(raw: &str) -> String {
    raw.trim()
        .trim_matches(|c| c == '\'' || c == '"')
        .trim()
        .to_lowercase()
}

pub fn resolve(raw_action_type: &str, raw_request: &str) -> Result<ResolvedAction> {
    let registry = Registry::global();

    let action_key = normalize(raw_action_type);
    let action_type = registry.canonical_action(&action_key).ok_or_else(|| {
        let allowed = registry
            .allowable_actions()
            .iter()
            .map(|(key, aliases)| format!("{} (aliases: {})", key, aliases.join(", ")))
            .collect();
        BotError::UnknownActionType {
            given: action_key.clone(),
            allowed,
        }
    })?;

    let request_key = normalize(raw_request);
    let request = registry
        .canonical_request(action_type, &request_key)
        .ok_or_else(|| BotError::UnknownRequest {
            given: request_key.clone(),
            action_type: action_type.key().to_string(),
            available: registry
                .requests_for(action_type)
                .iter()
                .map(|r| r.to_string())
                .collect(),
        })?;

    Ok(ResolvedAction {
        action_type,
        request,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_resolves_to_canonical_action() {
        let resolved = resolve("c", "gen_comm").unwrap();
        assert_eq!(resolved.action_type(), ActionType::Command);
        assert_eq!(resolved.request(), "gen_comm");
    }

    #[test]
    fn all_aliases_resolve_to_their_action() {
        let registry = Registry::global();
        for (key, aliases) in registry.allowable_actions() {
            for alias in aliases {
                let action = registry.canonical_action(alias).unwrap();
                assert_eq!(action.key(), key);
                for request in registry.requests_for(action) {
                    let resolved = resolve(alias, request).unwrap();
                    assert_eq!(resolved.action_type().key(), key);
                }
            }
        }
    }

    #[test]
    fn insensitive_to_case_whitespace_and_quotes() {
        let canonical = resolve("command", "gen_comm").unwrap();
        assert_eq!(resolve(" Command ", "'gen_comm'").unwrap(), canonical);
        assert_eq!(resolve("\"C\"", " GEN_COMM ").unwrap(), canonical);
    }

    #[test]
    fn resolution_is_idempotent() {
        let first = resolve("c", "gen_comm").unwrap();
        let again = resolve(first.action_type().key(), first.request()).unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn unknown_action_type_is_rejected() {
        let err = resolve("teleport", "gen_comm").unwrap_err();
        assert!(matches!(err, BotError::UnknownActionType { .. }));
    }

    #[test]
    fn unknown_request_carries_sorted_request_list() {
        let err = resolve("command", "no_such_thing").unwrap_err();
        match err {
            BotError::UnknownRequest {
                action_type,
                available,
                ..
            } => {
                assert_eq!(action_type, "command");
                assert_eq!(available, vec!["gen_comm".to_string()]);
            }
            other => panic!("expected UnknownRequest, got {:?}", other),
        }
    }

    #[test]
    fn workflow_has_no_requests_so_everything_is_unknown() {
        let err = resolve("workflow", "anything").unwrap_err();
        match err {
            BotError::UnknownRequest { available, .. } => assert!(available.is_empty()),
            other => panic!("expected UnknownRequest, got {:?}", other),
        }
    }

    #[test]
    fn request_lookup_is_exact_not_alias_based() {
        // "g" is not an accepted shorthand for gen_comm.
        assert!(resolve("command", "g").is_err());
    }
}
