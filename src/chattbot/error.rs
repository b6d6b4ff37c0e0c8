use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    /// The raw action_type matched no registered alias.
    #[error("action_type '{given}' not recognized. Allowable action types: {allowed:?}")]
    UnknownActionType { given: String, allowed: Vec<String> },

    /// The request is not registered under the resolved action type.
    /// `available` is the sorted request list for that action type.
    #[error(
        "request '{given}' not found for action_type='{action_type}'. \
         Available requests for action_type='{action_type}': {available:?}"
    )]
    UnknownRequest {
        given: String,
        action_type: String,
        available: Vec<String>,
    },

    #[error("{0}")]
    Validation(String),

    /// A collaborator-level failure while running a resolved action.
    #[error(
        "dispatch failed for action_type='{action_type}', request='{request}' \
         with arguments {kwargs}: {detail}"
    )]
    Dispatch {
        action_type: String,
        request: String,
        kwargs: String,
        detail: String,
    },

    #[error("url '{url}' returned status {got}, expected one of {desired:?}")]
    UnexpectedStatus {
        url: String,
        got: u16,
        desired: Vec<u16>,
    },

    #[error("{0}")]
    Environment(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, BotError>;
