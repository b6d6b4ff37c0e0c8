//! # Action Executor
//!
//! Takes a [`ResolvedAction`] plus validated kwargs and runs the routine
//! built out for it, recording a [`RunLog`] on success.
//!
//! The actual command execution sits behind the [`CommandRunner`] trait so
//! tests can swap in a recording mock the way the storage seam does it
//! elsewhere in this codebase's lineage: production uses [`ShellRunner`],
//! tests observe dispatches without spawning anything.
//!
//! Per invocation the executor walks Resolved → Validated → Executing →
//! Logged. A validation failure produces no side effects at all; a dispatch
//! failure propagates as [`BotError::Dispatch`] and no run log is written.

use crate::error::{BotError, Result};
use crate::paths::BotPaths;
use crate::registry::ActionType;
use crate::resolve::ResolvedAction;
use crate::runlog::RunLog;
use crate::validate;
use chrono::Local;
use std::collections::BTreeMap;
use std::process::Command;

const BANNER_WIDTH: usize = 100;

/// Outcome of a dispatched command. Exit status is reported, not enforced: a
/// command that runs and exits non-zero still counts as a completed action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    pub success: bool,
    pub code: Option<i32>,
}

/// The shell-command collaborator seam.
pub trait CommandRunner {
    fn run(&mut self, command: &str) -> std::io::Result<CommandStatus>;
}

/// Runs commands through `<shell> -c <command>` and waits for completion.
pub struct ShellRunner {
    shell: String,
}

impl ShellRunner {
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }
}

impl CommandRunner for ShellRunner {
    fn run(&mut self, command: &str) -> std::io::Result<CommandStatus> {
        let status = Command::new(&self.shell).arg("-c").arg(command).status()?;
        Ok(CommandStatus {
            success: status.success(),
            code: status.code(),
        })
    }
}

pub struct Executor<R: CommandRunner> {
    runner: R,
    paths: BotPaths,
    verbose: bool,
}

impl<R: CommandRunner> Executor<R> {
    pub fn new(runner: R, paths: BotPaths, verbose: bool) -> Self {
        Self {
            runner,
            paths,
            verbose,
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Run one action to completion and persist its run log.
    pub fn execute(
        &mut self,
        resolved: &ResolvedAction,
        kwargs: &BTreeMap<String, String>,
    ) -> Result<RunLog> {
        // Defense in depth: the CLI already validated before getting here.
        validate::check_arguments(resolved.request(), kwargs)?;

        let start_time = Local::now();
        println!(
            "chattbot action started\n\
             Action Type: {},\n\
            \x20   Request: {},\n\
            \x20Start Time: {}\n",
            resolved.action_type(),
            resolved.request(),
            start_time.format("%c")
        );
        println!("{}", "-".repeat(BANNER_WIDTH));

        self.dispatch(resolved, kwargs)?;

        let end_time = Local::now();
        let run_time_seconds = (end_time - start_time).num_milliseconds() as f64 / 1000.0;
        let log = RunLog {
            action_type: resolved.action_type(),
            request: resolved.request().to_string(),
            start_time,
            end_time,
            run_time_seconds,
        };
        let log_path = log.write_to(&self.paths.ensure_run_dir()?)?;
        if self.verbose {
            println!("Run log written to {}", log_path.display());
        }

        println!("{}", "-".repeat(BANNER_WIDTH));
        println!("Job completed in {} seconds.", log.run_time_seconds);
        Ok(log)
    }

    fn dispatch(
        &mut self,
        resolved: &ResolvedAction,
        kwargs: &BTreeMap<String, String>,
    ) -> Result<()> {
        match (resolved.action_type(), resolved.request()) {
            (ActionType::Command, "gen_comm") => {
                let command = kwargs
                    .get("command")
                    .ok_or_else(|| dispatch_error(resolved, kwargs, "missing 'command'"))?;
                let status = self
                    .runner
                    .run(command)
                    .map_err(|e| dispatch_error(resolved, kwargs, &e.to_string()))?;
                if !status.success {
                    eprintln!(
                        "Warning: command exited with status {}",
                        status
                            .code
                            .map(|c| c.to_string())
                            .unwrap_or_else(|| "unknown".to_string())
                    );
                }
                Ok(())
            }
            // Unreachable through resolve: no workflow requests are
            // registered yet. Refuse rather than silently no-op if a caller
            // constructs its way here.
            (ActionType::Workflow, _) => Err(dispatch_error(
                resolved,
                kwargs,
                "no workflow requests are registered",
            )),
            (_, request) => Err(dispatch_error(
                resolved,
                kwargs,
                &format!("no routine built for request '{}'", request),
            )),
        }
    }
}

fn dispatch_error(
    resolved: &ResolvedAction,
    kwargs: &BTreeMap<String, String>,
    detail: &str,
) -> BotError {
    BotError::Dispatch {
        action_type: resolved.action_type().key().to_string(),
        request: resolved.request().to_string(),
        kwargs: format!("{:?}", kwargs),
        detail: detail.to_string(),
    }
}
