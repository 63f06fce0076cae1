// tests/process_launcher.rs
//
// Runs real child processes through `sh`, so unix only.
#![cfg(unix)]

mod common;
use crate::common::*;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use netlify_deploy::config::DeploySettings;
use netlify_deploy::deploy::runner::forward_stream;
use netlify_deploy::deploy::{Invocation, Orchestrator, ProcessLauncher, TokioProcessLauncher};
use netlify_deploy::env::MapEnv;
use netlify_deploy::errors::DeployError;
use netlify_deploy::fs::RealFileSystem;
use netlify_deploy_test_utils::with_timeout;
use tempfile::TempDir;

fn sh(script: &str, dir: &Path) -> Invocation {
    Invocation {
        program: "sh".to_string(),
        args: vec!["-c".to_string(), script.to_string()],
        working_dir: dir.to_path_buf(),
    }
}

#[tokio::test]
async fn captures_stdout_but_not_stderr() {
    init_tracing();
    let dir = TempDir::new().unwrap();

    let mut launcher = TokioProcessLauncher::new();
    let out = with_timeout(launcher.launch(sh("echo out; echo err 1>&2; echo more", dir.path())))
        .await
        .unwrap();

    assert_eq!(out.exit_code, 0);
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "out\nmore\n");
}

#[tokio::test]
async fn reports_non_zero_exit_code() {
    let dir = TempDir::new().unwrap();

    let mut launcher = TokioProcessLauncher::new();
    let out = with_timeout(launcher.launch(sh("echo partial; exit 3", dir.path())))
        .await
        .unwrap();

    assert_eq!(out.exit_code, 3);
    assert_eq!(out.stdout, b"partial\n");
}

#[tokio::test]
async fn runs_in_the_working_directory() {
    let dir = TempDir::new().unwrap();

    let mut launcher = TokioProcessLauncher::new();
    let out = with_timeout(launcher.launch(sh("pwd", dir.path())))
        .await
        .unwrap();

    let printed = String::from_utf8(out.stdout).unwrap();
    let expected = dir.path().canonicalize().unwrap();
    assert_eq!(PathBuf::from(printed.trim()).canonicalize().unwrap(), expected);
}

#[tokio::test]
async fn large_output_on_both_streams_does_not_deadlock() {
    let dir = TempDir::new().unwrap();
    let script = "i=0; while [ $i -lt 5000 ]; do \
                  echo \"stdout line $i padding padding padding\"; \
                  echo \"stderr line $i padding padding padding\" 1>&2; \
                  i=$((i+1)); done";

    let mut launcher = TokioProcessLauncher::new();
    let out = with_timeout(launcher.launch(sh(script, dir.path())))
        .await
        .unwrap();

    assert_eq!(out.exit_code, 0);
    let text = String::from_utf8(out.stdout).unwrap();
    assert_eq!(text.lines().count(), 5000);
    assert!(text.ends_with("stdout line 4999 padding padding padding\n"));
}

#[tokio::test]
async fn missing_program_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let inv = Invocation {
        program: "definitely-not-a-real-program-4c1f".to_string(),
        args: vec![],
        working_dir: dir.path().to_path_buf(),
    };

    let mut launcher = TokioProcessLauncher::new();
    match launcher.launch(inv).await {
        Err(DeployError::IoError(e)) => {
            assert!(e.to_string().contains("definitely-not-a-real-program-4c1f"));
        }
        other => panic!("expected IoError, got {other:?}"),
    }
}

#[tokio::test]
async fn forward_stream_passes_bytes_through() {
    let input: &[u8] = b"\x1b[32mcolour\x1b[0m\nand bytes \xff\n";
    let mut sink: Vec<u8> = Vec::new();

    let captured = forward_stream(input, &mut sink, true).await.unwrap();

    assert_eq!(sink, input);
    assert_eq!(captured, input);
}

#[tokio::test]
async fn forward_stream_without_capture_returns_nothing() {
    let input: &[u8] = b"stderr noise\n";
    let mut sink: Vec<u8> = Vec::new();

    let captured = forward_stream(input, &mut sink, false).await.unwrap();

    assert_eq!(sink, input);
    assert!(captured.is_empty());
}

/// Write a stand-in for the Netlify CLI and point the settings at it.
fn fake_netlify(dir: &Path, body: &str) -> DeploySettings {
    let script = dir.join("fake-netlify.sh");
    std::fs::write(&script, body).unwrap();

    DeploySettings {
        runner: "sh".to_string(),
        program: script.to_string_lossy().into_owned(),
        ..DeploySettings::default()
    }
}

fn project_with_config(root: &Path) -> String {
    let project = root.join("project");
    std::fs::create_dir_all(&project).unwrap();
    std::fs::write(project.join("netlify.toml"), "[build]\npublish = \"dist\"\n").unwrap();
    project.to_string_lossy().into_owned()
}

#[tokio::test]
async fn end_to_end_with_fake_netlify_cli() {
    init_tracing();
    let root = TempDir::new().unwrap();
    let work = root.path().join("work");
    std::fs::create_dir_all(&work).unwrap();

    // Echo the arguments so we can see them, then print a coloured URL line.
    let settings = fake_netlify(
        root.path(),
        "echo \"args: $*\"\n\
         test -f netlify.toml || { echo 'no netlify.toml' 1>&2; exit 9; }\n\
         printf '\\033[32mWebsite Draft URL: https://pr-42--site.netlify.app\\033[0m\\n'\n",
    );
    let request = DeployRequestBuilder::new()
        .project_directory(&project_with_config(root.path()))
        .build();

    let mut orch = Orchestrator::with_backends(
        settings,
        &work,
        Arc::new(RealFileSystem),
        Arc::new(full_env()),
        Box::new(TokioProcessLauncher::new()),
    );

    let outcome = with_timeout(orch.execute(&request)).await.unwrap();

    assert!(outcome.success);
    assert_eq!(
        std::fs::read_to_string(work.join("deploy.txt")).unwrap(),
        "Website Draft URL: https://pr-42--site.netlify.app"
    );
    assert!(work.join("netlify.toml").is_file());
}

#[tokio::test]
async fn end_to_end_failure_keeps_result_file_absent() {
    let root = TempDir::new().unwrap();
    let work = root.path().join("work");
    std::fs::create_dir_all(&work).unwrap();

    let settings = fake_netlify(
        root.path(),
        "echo 'Website URL: https://site.netlify.app'\necho 'Error: build failed' 1>&2\nexit 1\n",
    );
    let request = DeployRequestBuilder::new()
        .environment("production")
        .project_directory(&project_with_config(root.path()))
        .build();

    let mut orch = Orchestrator::with_backends(
        settings,
        &work,
        Arc::new(RealFileSystem),
        Arc::new(full_env()),
        Box::new(TokioProcessLauncher::new()),
    );

    let outcome = with_timeout(orch.execute(&request)).await.unwrap();

    assert!(!outcome.success);
    assert!(!work.join("deploy.txt").exists());
}

#[tokio::test]
async fn missing_credential_leaves_working_dir_empty() {
    let root = TempDir::new().unwrap();
    let work = root.path().join("work");
    std::fs::create_dir_all(&work).unwrap();

    let settings = fake_netlify(root.path(), "exit 0\n");
    let request = DeployRequestBuilder::new()
        .project_directory(&project_with_config(root.path()))
        .build();

    let mut orch = Orchestrator::with_backends(
        settings,
        &work,
        Arc::new(RealFileSystem),
        Arc::new(MapEnv::new().with_var("SITE_ID", "site-abc")),
        Box::new(TokioProcessLauncher::new()),
    );

    let result = orch.execute(&request).await;

    assert!(matches!(result, Err(DeployError::ConfigError(_))));
    assert_eq!(std::fs::read_dir(&work).unwrap().count(), 0);
}
