//! Bot folder layout.
//!
//! Everything chattbot writes lives under a single bot home, by default
//! `<documents>/chatt_bot/`:
//!
//! ```text
//! chatt_bot/
//! ├── config.json        # BotConfig
//! └── chatt_bot_runs/    # one run-log file per successful execution
//! ```
//!
//! The `CHATTBOT_HOME` environment variable relocates the parent of the bot
//! home, which is how the integration tests point the binary at a temp dir.

use crate::error::{BotError, Result};
use directories::UserDirs;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const BOT_DIR: &str = "chatt_bot";
pub const RUNS_DIR: &str = "chatt_bot_runs";
pub const HOME_ENV: &str = "CHATTBOT_HOME";

#[derive(Debug, Clone)]
pub struct BotPaths {
    home: PathBuf,
}

impl BotPaths {
    /// Resolve the bot home from `CHATTBOT_HOME` or the user documents
    /// directory (home-relative `Documents` when the platform reports none).
    pub fn discover() -> Result<Self> {
        if let Some(base) = env::var_os(HOME_ENV) {
            return Ok(Self {
                home: PathBuf::from(base).join(BOT_DIR),
            });
        }

        let user_dirs = UserDirs::new().ok_or_else(|| {
            BotError::Environment("could not determine the user home directory".to_string())
        })?;
        let documents = user_dirs
            .document_dir()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| user_dirs.home_dir().join("Documents"));

        Ok(Self {
            home: documents.join(BOT_DIR),
        })
    }

    /// Use an explicit bot home (tests, embedding).
    pub fn with_home(home: PathBuf) -> Self {
        Self { home }
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn run_dir(&self) -> PathBuf {
        self.home.join(RUNS_DIR)
    }

    /// Create the run folder if absent. Idempotent.
    pub fn ensure_run_dir(&self) -> Result<PathBuf> {
        let dir = self.run_dir();
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }
}
