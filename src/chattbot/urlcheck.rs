//! URL status validation helper.
//!
//! Sits outside the dispatch core: nothing in the resolve/validate/execute
//! path depends on it. It issues a GET with a fixed timeout and compares the
//! returned status code against a desired list. A mismatch is either a
//! non-fatal warning outcome or a hard error, per the caller's choice.

use crate::error::{BotError, Result};
use reqwest::blocking::Client;
use std::str::FromStr;
use std::time::Duration;

const URL_TIMEOUT: Duration = Duration::from_secs(60);

/// What to do when the returned status code is not in the desired list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnBadStatus {
    Warn,
    Error,
}

impl FromStr for OnBadStatus {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "w" | "warn" => Ok(OnBadStatus::Warn),
            "e" | "error" => Ok(OnBadStatus::Error),
            other => Err(BotError::Validation(format!(
                "on-bad-status must be 'w' (warn) or 'e' (error), got '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusOutcome {
    Desired(u16),
    Mismatch { got: u16, desired: Vec<u16> },
}

/// Pure status comparison, separated from the fetch so it can be tested
/// without a network.
pub fn evaluate_status(got: u16, desired: &[u16]) -> StatusOutcome {
    if desired.contains(&got) {
        StatusOutcome::Desired(got)
    } else {
        StatusOutcome::Mismatch {
            got,
            desired: desired.to_vec(),
        }
    }
}

pub struct UrlValidator {
    desired: Vec<u16>,
    on_bad: OnBadStatus,
    client: Client,
}

impl UrlValidator {
    /// Defaults to requiring a 200 and warning on anything else.
    pub fn new(desired: Vec<u16>, on_bad: OnBadStatus) -> Result<Self> {
        let desired = if desired.is_empty() { vec![200] } else { desired };
        let client = Client::builder().timeout(URL_TIMEOUT).build()?;
        Ok(Self {
            desired,
            on_bad,
            client,
        })
    }

    /// GET the url and compare its status code. In `Warn` mode a mismatch is
    /// returned to the caller as an outcome; in `Error` mode it becomes
    /// [`BotError::UnexpectedStatus`].
    pub fn check(&self, url: &str) -> Result<StatusOutcome> {
        let response = self.client.get(url).send()?;
        let got = response.status().as_u16();
        match evaluate_status(got, &self.desired) {
            StatusOutcome::Mismatch { got, desired } if self.on_bad == OnBadStatus::Error => {
                Err(BotError::UnexpectedStatus {
                    url: url.to_string(),
                    got,
                    desired,
                })
            }
            outcome => Ok(outcome),
        }
    }
}
