// src/deploy/runner.rs

//! Pluggable process launcher.
//!
//! The orchestrator hands an [`Invocation`] to a `ProcessLauncher` instead
//! of spawning directly, so tests can swap in a fake that records what would
//! have run and returns canned output.

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::process::Stdio;

use anyhow::Context;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::errors::Result;

const CHUNK_SIZE: usize = 8 * 1024;

/// A fully resolved command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

impl Invocation {
    /// Human-readable rendering, used for logs and `--dry-run`.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// What a finished child process left behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code; `-1` if the process was terminated by a signal.
    pub exit_code: i32,
    /// Everything the process wrote to stdout.
    pub stdout: Vec<u8>,
}

/// Trait abstracting how the Netlify CLI is run.
///
/// Production code uses [`TokioProcessLauncher`].
pub trait ProcessLauncher: Send {
    /// Run `invocation` to completion.
    ///
    /// A non-zero exit is a normal `Ok` result; `Err` means the process
    /// could not be started or waited on.
    fn launch(
        &mut self,
        invocation: Invocation,
    ) -> Pin<Box<dyn Future<Output = Result<ProcessOutput>> + Send + '_>>;
}

/// Launcher that spawns a real child with `tokio::process`.
///
/// stdout and stderr are forwarded chunk by chunk to this process's own
/// streams while the child runs; stdout is also captured. There is no
/// timeout.
#[derive(Debug, Clone, Default)]
pub struct TokioProcessLauncher;

impl TokioProcessLauncher {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessLauncher for TokioProcessLauncher {
    fn launch(
        &mut self,
        invocation: Invocation,
    ) -> Pin<Box<dyn Future<Output = Result<ProcessOutput>> + Send + '_>> {
        Box::pin(run_process(invocation))
    }
}

async fn run_process(invocation: Invocation) -> Result<ProcessOutput> {
    info!(
        cmd = %invocation.command_line(),
        dir = %invocation.working_dir.display(),
        "starting netlify process"
    );

    let mut child = Command::new(&invocation.program)
        .args(&invocation.args)
        .current_dir(&invocation.working_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| {
            std::io::Error::new(e.kind(), format!("spawning '{}': {e}", invocation.program))
        })?;

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    // Drain both pipes concurrently so neither can fill up and stall the
    // child.
    let stdout_task = tokio::spawn(async move {
        match stdout {
            Some(pipe) => forward_stream(pipe, tokio::io::stdout(), true).await,
            None => Ok(Vec::new()),
        }
    });
    let stderr_task = tokio::spawn(async move {
        match stderr {
            Some(pipe) => forward_stream(pipe, tokio::io::stderr(), false)
                .await
                .map(|_| ()),
            None => Ok(()),
        }
    });

    let status = child.wait().await?;

    let captured = stdout_task
        .await
        .context("joining stdout forwarder")??;
    stderr_task
        .await
        .context("joining stderr forwarder")??;

    let exit_code = status.code().unwrap_or(-1);
    info!(
        exit_code,
        success = status.success(),
        stdout_bytes = captured.len(),
        "netlify process exited"
    );

    Ok(ProcessOutput {
        exit_code,
        stdout: captured,
    })
}

/// Copy `reader` to `writer` chunk by chunk until EOF.
///
/// When `capture` is set, every chunk read is also returned. If `writer`
/// starts failing, forwarding stops but reading (and capturing) continues
/// so the child never blocks on a full pipe.
pub async fn forward_stream<R, W>(mut reader: R, mut writer: W, capture: bool) -> std::io::Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut captured = Vec::new();
    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut forwarding = true;

    loop {
        let n = reader.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        let chunk = &buf[..n];

        if forwarding {
            let written = match writer.write_all(chunk).await {
                Ok(()) => writer.flush().await,
                Err(e) => Err(e),
            };
            if let Err(e) = written {
                warn!(error = %e, "failed to forward child output; continuing to drain");
                forwarding = false;
            }
        }

        if capture {
            captured.extend_from_slice(chunk);
        }
    }

    debug!(captured_bytes = captured.len(), "child stream closed");
    Ok(captured)
}
