//! End-to-end behaviour of `LazyResult` as consumer code sees it.

use lazy_result::prelude::*;

fn fixtures() -> (
    LazyResult<&'static str, &'static str>,
    LazyResult<&'static str, &'static str>,
    LazyResult<&'static str, &'static str>,
    LazyResult<&'static str, &'static str>,
) {
    (
        LazyResult::initial(),
        LazyResult::loading(),
        LazyResult::failure("oops"),
        LazyResult::success("awesome"),
    )
}

#[test]
fn renders_each_variant() {
    let (r1, r2, r3, r4) = fixtures();
    assert_eq!(r1.to_string(), "Initial");
    assert_eq!(r2.to_string(), "Loading");
    assert_eq!(r3.to_string(), "Failure(oops)");
    assert_eq!(r4.to_string(), "Success(awesome)");
}

#[test]
fn free_constructors_match_factories() {
    assert!(initial::<(), ()>().is_initial());
    assert!(loading::<(), ()>().is_loading());
    assert!(failure::<(), ()>(()).is_failure());
    assert!(success::<(), ()>(()).is_success());

    let (r1, r2, r3, r4) = fixtures();
    assert_eq!(initial(), r1);
    assert_eq!(loading(), r2);
    assert_eq!(failure("oops"), r3);
    assert_eq!(success("awesome"), r4);
}

#[test]
fn dispatch_selects_matching_handler() {
    let (r1, r2, r3, r4) = fixtures();
    let render = |r: LazyResult<&str, &str>| {
        r.dispatch(
            || String::new(),
            || "Loading...".to_string(),
            |e| format!("Error: {}", e),
            |data| format!("Data: {}", data),
        )
    };

    assert_eq!(render(r1), "");
    assert_eq!(render(r2), "Loading...");
    assert_eq!(render(r3), "Error: oops");
    assert_eq!(render(r4), "Data: awesome");
}

#[test]
fn map_success_only_touches_success() {
    let (r1, r2, r3, r4) = fixtures();
    let f = |data: &str| format!("Data: {}", data);

    assert_eq!(r1.map_success(f), LazyResult::initial());
    assert_eq!(r2.map_success(f), LazyResult::loading());
    assert_eq!(r3.map_success(f), LazyResult::failure("oops"));
    assert_eq!(r4.map_success(f), success("Data: awesome".to_string()));
}

#[test]
fn map_failure_only_touches_failure() {
    let (r1, r2, r3, r4) = fixtures();

    assert_eq!(r1.map_failure(|_| 42), LazyResult::initial());
    assert_eq!(r2.map_failure(|_| 42), LazyResult::loading());
    assert_eq!(r3.map_failure(|_| 42), failure(42));
    assert_eq!(r4.map_failure(|_| 42), LazyResult::success("awesome"));
}

#[test]
fn value_and_error_extraction() {
    let (r1, r2, r3, r4) = fixtures();

    assert_eq!(r1.value(), None);
    assert_eq!(r2.value(), None);
    assert_eq!(r3.value(), None);
    assert_eq!(r4.value(), Some(&"awesome"));

    assert_eq!(r1.error(), None);
    assert_eq!(r2.error(), None);
    assert_eq!(r3.error(), Some(&"oops"));
    assert_eq!(r4.error(), None);
}

#[derive(Debug, Clone, PartialEq)]
struct User {
    id: u32,
    name: String,
}

#[derive(Debug, Clone, PartialEq)]
enum FetchError {
    NotFound(u32),
    Timeout,
}

/// A minimal holder, standing in for a UI store, that swaps its value as a
/// request progresses.
struct UserPanel {
    user: LazyResult<FetchError, User>,
    history: Vec<State>,
}

impl UserPanel {
    fn new() -> Self {
        let user: LazyResult<FetchError, User> = LazyResult::default();
        UserPanel {
            history: vec![user.state()],
            user,
        }
    }

    fn set(&mut self, next: LazyResult<FetchError, User>) {
        self.history.push(next.state());
        self.user = next;
    }

    fn headline(&self) -> String {
        self.user.as_ref().dispatch(
            || "Select a user".to_string(),
            || "Loading user...".to_string(),
            |e| match e {
                FetchError::NotFound(id) => format!("No user {}", id),
                FetchError::Timeout => "Request timed out".to_string(),
            },
            |u| format!("Hello, {}", u.name),
        )
    }
}

fn fetch(id: u32) -> Result<User, FetchError> {
    match id {
        1 => Ok(User {
            id,
            name: "Ada".to_string(),
        }),
        0 => Err(FetchError::Timeout),
        _ => Err(FetchError::NotFound(id)),
    }
}

#[test]
fn holder_walks_through_lifecycle() {
    let mut panel = UserPanel::new();
    assert_eq!(panel.headline(), "Select a user");

    panel.set(LazyResult::loading());
    assert_eq!(panel.headline(), "Loading user...");

    panel.set(fetch(1).into());
    assert_eq!(panel.headline(), "Hello, Ada");
    assert_eq!(panel.user.value().map(|u| u.id), Some(1));

    assert_eq!(
        panel.history,
        [State::Initial, State::Loading, State::Success]
    );
}

#[test]
fn holder_reports_failures() {
    let mut panel = UserPanel::new();
    panel.set(LazyResult::loading());
    panel.set(fetch(7).into());
    assert_eq!(panel.headline(), "No user 7");

    panel.set(LazyResult::loading());
    panel.set(fetch(0).into());
    assert_eq!(panel.headline(), "Request timed out");
    assert_eq!(panel.user.error(), Some(&FetchError::Timeout));
}

#[test]
fn pending_values_do_not_convert_to_result() {
    let panel = UserPanel::new();
    let err = panel.user.clone().into_result().unwrap_err();
    assert_eq!(err.state(), State::Initial);
    assert_eq!(err.to_string(), "computation has not settled: Initial");

    let settled: LazyResult<FetchError, User> = fetch(3).into();
    assert_eq!(settled.into_result(), Ok(Err(FetchError::NotFound(3))));
}

#[test]
fn mapping_preserves_error_type_for_other_variants() {
    let loaded: LazyResult<FetchError, User> = fetch(1).into();
    let name: LazyResult<FetchError, String> = loaded.map_success(|u| u.name);
    assert_eq!(name, success("Ada".to_string()));

    let failed: LazyResult<FetchError, User> = fetch(9).into();
    let message: LazyResult<String, User> = failed.map_failure(|e| format!("{:?}", e));
    assert_eq!(message.error().map(String::as_str), Some("NotFound(9)"));
}
