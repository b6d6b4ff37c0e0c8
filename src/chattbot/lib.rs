//! # chattbot Architecture
//!
//! chattbot is a single-shot action dispatcher: one invocation validates one
//! (action_type, request) pair, checks its keyword arguments, runs the
//! matching routine, and writes one run-log file. There is no scheduling, no
//! concurrency, and no state shared between invocations.
//!
//! ## Control Flow
//!
//! ```text
//! CLI (main.rs + args.rs)
//!   └─> resolve   — normalize input, map aliases, reject unknown pairs
//!        └─> validate — check kwargs against the request's argument spec
//!             └─> exec — dispatch to the routine, persist the RunLog
//! ```
//!
//! The [`registry`] is consulted by all three stages but owns no behavior:
//! it is a compiled-in table of action types, aliases, requests, and argument
//! specs, built once behind a `Lazy` and never mutated.
//!
//! ## Key Principle: Fail Before Side Effects
//!
//! Resolution and validation are pure. Until the executor starts dispatching,
//! a failure leaves no trace — no folder creation, no run log, no spawned
//! process. A dispatch failure propagates to `main`, which prints the error
//! and exits non-zero; the run log is only written for completed actions.
//!
//! ## Module Overview
//!
//! - [`registry`]: static table of action types, requests, and argument specs
//! - [`resolve`]: raw strings → [`resolve::ResolvedAction`]
//! - [`validate`]: kwargs checking against the registry spec
//! - [`exec`]: the executor and the `CommandRunner` collaborator seam
//! - [`runlog`]: the per-run record and its text persistence
//! - [`addargs`]: `--add-args` parsing (strict JSON, deprecated fallback)
//! - [`paths`]: bot home and run-folder layout
//! - [`config`]: `config.json` (verbose flag, shell selection)
//! - [`describe`]: `--describe` rendering
//! - [`urlcheck`]: standalone URL status validation helper
//! - [`error`]: error types

pub mod addargs;
pub mod config;
pub mod describe;
pub mod error;
pub mod exec;
pub mod paths;
pub mod registry;
pub mod resolve;
pub mod runlog;
pub mod urlcheck;
pub mod validate;
