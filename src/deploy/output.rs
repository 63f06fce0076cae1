// src/deploy/output.rs

//! Scanning Netlify CLI output for the published URL.

use std::sync::LazyLock;

use regex::Regex;

/// Labels the Netlify CLI prints in front of the URL it deployed to.
pub const URL_MARKERS: [&str; 2] = ["Website URL:", "Website Draft URL:"];

// CSI / escape sequences as emitted by colouring libraries.
static ANSI_ESCAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x1b\x{9b}][\[()#;?]*(?:[0-9]{1,4}(?:;[0-9]{0,4})*)?[0-9A-ORZcf-nqry=><]")
        .expect("ANSI escape pattern is valid")
});

/// Remove ANSI colour/escape sequences from `line`.
pub fn strip_ansi(line: &str) -> String {
    ANSI_ESCAPE.replace_all(line, "").into_owned()
}

/// Find the deployed URL line in the CLI's stdout.
///
/// Returns the *last* line containing one of [`URL_MARKERS`], with escape
/// sequences removed and the label kept. Empty if no line matches.
pub fn extract_deployed_url(output: &str) -> String {
    output
        .split('\n')
        .rev()
        .find(|line| URL_MARKERS.iter().any(|marker| line.contains(marker)))
        .map(strip_ansi)
        .unwrap_or_default()
}
