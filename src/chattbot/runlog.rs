//! Per-invocation run record, persisted as a flat key-value text file and
//! never read back by chattbot itself.

use crate::error::Result;
use crate::registry::ActionType;
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

/// Timestamp embedded in the run-log file name.
const STAMP_FORMAT: &str = "%Y_%m_%d_%H_%M";

#[derive(Debug, Clone)]
pub struct RunLog {
    pub action_type: ActionType,
    pub request: String,
    pub start_time: DateTime<Local>,
    pub end_time: DateTime<Local>,
    pub run_time_seconds: f64,
}

impl RunLog {
    /// `{request}_{YYYY_MM_DD_HH_MM}.txt`, stamped with the start time.
    pub fn file_name(&self) -> String {
        format!(
            "{}_{}.txt",
            self.request,
            self.start_time.format(STAMP_FORMAT)
        )
    }

    /// Free-text dump. Not a stable machine-parseable format.
    pub fn render(&self) -> String {
        format!(
            "action_type: {}\n\
             request: {}\n\
             start_time: {}\n\
             end_time: {}\n\
             run_time_seconds: {}\n",
            self.action_type,
            self.request,
            self.start_time.format("%c"),
            self.end_time.format("%c"),
            self.run_time_seconds
        )
    }

    /// Write the log into `dir` (created if absent) and return the file path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name());
        fs::write(&path, self.render())?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> RunLog {
        let start = Local.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();
        RunLog {
            action_type: ActionType::Command,
            request: "gen_comm".to_string(),
            start_time: start,
            end_time: start + chrono::Duration::milliseconds(1500),
            run_time_seconds: 1.5,
        }
    }

    #[test]
    fn file_name_is_request_plus_start_stamp() {
        assert_eq!(sample().file_name(), "gen_comm_2026_03_14_09_26.txt");
    }

    #[test]
    fn render_dumps_all_fields() {
        let text = sample().render();
        assert!(text.contains("action_type: command"));
        assert!(text.contains("request: gen_comm"));
        assert!(text.contains("start_time: "));
        assert!(text.contains("end_time: "));
        assert!(text.contains("run_time_seconds: 1.5"));
    }

    #[test]
    fn write_to_creates_the_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("nested").join("runs");

        let path = sample().write_to(&dir).unwrap();
        assert!(path.is_file());
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("request: gen_comm"));
    }
}
