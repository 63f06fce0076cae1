//! Shared helpers for the `netlify-deploy` integration tests.
//!
//! - [`fake_launcher`] stands in for the Netlify CLI.
//! - [`builders`] produces valid `DeployRequest`s to tweak per test.

pub mod builders;
pub mod fake_launcher;

use std::future::Future;
use std::sync::Once;
use std::time::Duration;

use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Install a test-writer subscriber once per test binary.
///
/// Output is only shown for failing tests; set `RUST_LOG=debug` to see the
/// orchestrator's and launcher's debug events.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}

/// Await `f`, failing the test if a child process hangs for 10 seconds.
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: Future<Output = T>,
{
    tokio::time::timeout(Duration::from_secs(10), f)
        .await
        .expect("child process did not finish within 10 seconds")
}
