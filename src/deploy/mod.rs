// src/deploy/mod.rs

//! Netlify deployment.
//!
//! - [`args`] turns an environment name into the Netlify CLI argument list.
//! - [`output`] strips terminal colours and finds the published URL in the
//!   CLI's output.
//! - [`runner`] provides the `ProcessLauncher` trait and the real
//!   `TokioProcessLauncher`, which streams the child's output through to
//!   our own stdout/stderr.
//! - [`orchestrator`] ties it together: preconditions, config copy, launch,
//!   URL extraction and the result file.

pub mod args;
pub mod orchestrator;
pub mod output;
pub mod runner;

pub use args::build_netlify_args;
pub use orchestrator::{DeployOutcome, Orchestrator};
pub use output::{extract_deployed_url, strip_ansi};
pub use runner::{Invocation, ProcessLauncher, ProcessOutput, TokioProcessLauncher};
