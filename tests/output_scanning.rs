use netlify_deploy::deploy::{extract_deployed_url, strip_ansi};
use proptest::prelude::*;

#[test]
fn strips_colour_codes_and_keeps_label() {
    let line = "\u{1b}[32mWebsite Draft URL: https://pr-42--site.netlify.app\u{1b}[0m";
    assert_eq!(
        strip_ansi(line),
        "Website Draft URL: https://pr-42--site.netlify.app"
    );
}

#[test]
fn strips_compound_and_c1_sequences() {
    assert_eq!(strip_ansi("\u{1b}[1;36mbold cyan\u{1b}[39m"), "bold cyan");
    assert_eq!(strip_ansi("\u{9b}31mred\u{9b}0m"), "red");
    assert_eq!(strip_ansi("\u{1b}[2Kcleared"), "cleared");
}

#[test]
fn extracts_draft_url_from_colored_output() {
    let output = "Deploying to draft URL...\n\
                  \u{1b}[32mWebsite Draft URL: https://pr-42--site.netlify.app\u{1b}[0m\n\
                  If everything looks good, run with --prod\n";

    assert_eq!(
        extract_deployed_url(output),
        "Website Draft URL: https://pr-42--site.netlify.app"
    );
}

#[test]
fn last_matching_line_wins() {
    let output = "Website Draft URL: https://first.netlify.app\n\
                  Unique deploy URL: https://abc--site.netlify.app\n\
                  Website URL:       https://site.netlify.app\n";

    assert_eq!(
        extract_deployed_url(output),
        "Website URL:       https://site.netlify.app"
    );
}

#[test]
fn no_marker_yields_empty_string() {
    assert_eq!(extract_deployed_url("Deploy is live!\nLogs: https://app.netlify.com\n"), "");
    assert_eq!(extract_deployed_url(""), "");
}

#[test]
fn crlf_output_keeps_carriage_return() {
    let output = "\x1b[32mWebsite URL: https://site.netlify.app\x1b[0m\r\nDone\r\n";
    assert_eq!(
        extract_deployed_url(output),
        "Website URL: https://site.netlify.app\r"
    );
}

proptest! {
    #[test]
    fn plain_text_is_left_alone(s in "[a-zA-Z0-9 :/._-]{0,64}") {
        prop_assert_eq!(strip_ansi(&s), s);
    }

    #[test]
    fn stripping_is_idempotent(s in "(\u{1b}\\[[0-9;]{0,6}m|[a-z :/.]){0,32}") {
        let once = strip_ansi(&s);
        prop_assert_eq!(strip_ansi(&once), once.clone());
        prop_assert!(!once.contains('\x1b'), "escape left in {:?}", once);
    }
}
