use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use netlify_deploy::deploy::{Invocation, ProcessLauncher, ProcessOutput};
use netlify_deploy::errors::Result;

/// A fake launcher that:
/// - records every invocation it is asked to run
/// - returns the configured exit code and stdout without spawning anything.
#[derive(Clone)]
pub struct FakeLauncher {
    exit_code: i32,
    stdout: Vec<u8>,
    launched: Arc<Mutex<Vec<Invocation>>>,
}

impl FakeLauncher {
    pub fn new(exit_code: i32, stdout: impl Into<Vec<u8>>) -> Self {
        Self {
            exit_code,
            stdout: stdout.into(),
            launched: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Exits 0 with the given stdout.
    pub fn succeeding(stdout: impl Into<Vec<u8>>) -> Self {
        Self::new(0, stdout)
    }

    /// Shared handle to the recorded invocations.
    pub fn launched(&self) -> Arc<Mutex<Vec<Invocation>>> {
        Arc::clone(&self.launched)
    }
}

impl ProcessLauncher for FakeLauncher {
    fn launch(
        &mut self,
        invocation: Invocation,
    ) -> Pin<Box<dyn Future<Output = Result<ProcessOutput>> + Send + '_>> {
        let launched = Arc::clone(&self.launched);
        let output = ProcessOutput {
            exit_code: self.exit_code,
            stdout: self.stdout.clone(),
        };

        Box::pin(async move {
            launched.lock().unwrap().push(invocation);
            Ok(output)
        })
    }
}
