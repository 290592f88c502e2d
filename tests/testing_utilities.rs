//! Patterns for testing code that produces `LazyResult` values.

use lazy_result::prelude::*;
use lazy_result::{assert_failure, assert_initial, assert_loading, assert_success};

#[derive(Debug, Clone, PartialEq)]
struct Config {
    retries: u32,
}

fn load_config(raw: Option<&str>) -> LazyResult<String, Config> {
    match raw {
        None => LazyResult::loading(),
        Some(text) => text
            .trim()
            .parse::<u32>()
            .map(|retries| Config { retries })
            .map_err(|e| format!("invalid retries: {}", e))
            .into(),
    }
}

#[test]
fn test_loading_when_input_missing() {
    assert_loading!(load_config(None));
}

#[test]
fn test_success_with_value() {
    assert_success!(load_config(Some(" 3 ")), Config { retries: 3 });
}

#[test]
fn test_failure_with_message() {
    let r = load_config(Some("many"));
    assert_failure!(r.clone());
    assert_eq!(
        r.error().map(String::as_str),
        Some("invalid retries: invalid digit found in string")
    );
}

#[test]
fn test_default_is_initial() {
    assert_initial!(LazyResult::<String, Config>::default());
}

#[test]
#[should_panic(expected = "Expected Success, got Loading")]
fn test_assert_success_reports_state() {
    assert_success!(load_config(None));
}

#[test]
#[should_panic(expected = "Expected Failure, got Success")]
fn test_assert_failure_reports_value() {
    assert_failure!(load_config(Some("1")));
}
