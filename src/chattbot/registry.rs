//! # Registry
//!
//! The static table of everything chattbot knows how to do: action types and
//! their aliases, the requests built out under each action type, and the
//! argument spec for each request.
//!
//! The registry is compiled-in configuration. It is built once behind a
//! [`once_cell::sync::Lazy`] and never mutated, so every component reads from
//! the same table with no synchronization.
//!
//! A requirement text like `"str, required"` or `"str, optional"` doubles as
//! the human-readable argument documentation and as the machine-checked
//! optionality flag: an argument is optional iff its requirement text
//! contains the substring `optional`. See `validate.rs`.

use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::fmt;

/// Top-level category of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ActionType {
    /// A pre-built automation routine. No requests are built out yet.
    Workflow,
    /// A straight command line call.
    Command,
}

impl ActionType {
    pub const ALL: [ActionType; 2] = [ActionType::Workflow, ActionType::Command];

    pub fn key(self) -> &'static str {
        match self {
            ActionType::Workflow => "workflow",
            ActionType::Command => "command",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

struct ActionEntry {
    action: ActionType,
    aliases: &'static [&'static str],
    description: &'static str,
    /// Sorted at construction time.
    requests: Vec<&'static str>,
}

pub struct RequestEntry {
    pub action: ActionType,
    pub description: &'static str,
    /// Argument name -> requirement text.
    pub arguments: BTreeMap<&'static str, &'static str>,
}

pub struct Registry {
    actions: Vec<ActionEntry>,
    requests: BTreeMap<&'static str, RequestEntry>,
}

static REGISTRY: Lazy<Registry> = Lazy::new(Registry::builtin);

impl Registry {
    /// The process-wide registry.
    pub fn global() -> &'static Registry {
        &REGISTRY
    }

    fn builtin() -> Self {
        let mut actions = vec![
            ActionEntry {
                action: ActionType::Workflow,
                aliases: &["w", "workflow"],
                description: "Relates to a pre-built workflow routine.",
                requests: vec![],
            },
            ActionEntry {
                action: ActionType::Command,
                aliases: &["c", "command"],
                description: "A straight command line call.",
                requests: vec!["gen_comm"],
            },
        ];
        for entry in &mut actions {
            entry.requests.sort_unstable();
        }

        let mut requests = BTreeMap::new();
        requests.insert(
            "gen_comm",
            RequestEntry {
                action: ActionType::Command,
                description: "Executes any command line argument.",
                arguments: BTreeMap::from([("command", "str, required")]),
            },
        );

        Registry { actions, requests }
    }

    /// Canonical action key -> accepted aliases.
    pub fn allowable_actions(&self) -> BTreeMap<&'static str, &'static [&'static str]> {
        self.actions
            .iter()
            .map(|entry| (entry.action.key(), entry.aliases))
            .collect()
    }

    pub fn action_description(&self, action: ActionType) -> &'static str {
        self.actions
            .iter()
            .find(|entry| entry.action == action)
            .map(|entry| entry.description)
            .unwrap_or("")
    }

    /// Sorted request keys built out under an action type.
    pub fn requests_for(&self, action: ActionType) -> &[&'static str] {
        self.actions
            .iter()
            .find(|entry| entry.action == action)
            .map(|entry| entry.requests.as_slice())
            .unwrap_or(&[])
    }

    pub fn request_description(&self, request: &str) -> Option<&'static str> {
        self.requests.get(request).map(|entry| entry.description)
    }

    pub fn request_arguments(&self, request: &str) -> Option<&BTreeMap<&'static str, &'static str>> {
        self.requests.get(request).map(|entry| &entry.arguments)
    }

    /// Maps an already-normalized string to its canonical action type via the
    /// alias table.
    pub fn canonical_action(&self, normalized: &str) -> Option<ActionType> {
        self.actions
            .iter()
            .find(|entry| entry.aliases.contains(&normalized))
            .map(|entry| entry.action)
    }

    /// Exact-match lookup of a request within an action type's list. Returns
    /// the interned key so callers can hold `&'static str`.
    pub fn canonical_request(
        &self,
        action: ActionType,
        normalized: &str,
    ) -> Option<&'static str> {
        self.requests_for(action)
            .iter()
            .find(|request| **request == normalized)
            .copied()
    }
}
