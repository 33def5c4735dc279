//! Debounced user search on a paused clock.

use std::time::Duration;

use assert_matches::assert_matches;
use chirp_app::views::SearchStatus;
use chirp_app::workflows::{on_search_input, SearchOutcome};
use chirp_core::ChirpError;
use chirp_testkit::{app_with_runtime, init_test_tracing, signed_in_app, user, MockRuntime};

fn directory() -> Vec<chirp_core::User> {
    ["alice", "alex", "albert", "alan", "alfred", "aly", "alvin", "bob"]
        .iter()
        .enumerate()
        .map(|(i, name)| user(&format!("u{i}"), name))
        .collect()
}

#[tokio::test(start_paused = true)]
async fn quick_typing_issues_one_query() {
    init_test_tracing();
    let runtime = MockRuntime::new().with_users(directory());
    let app = app_with_runtime(&runtime);

    let first = on_search_input(&app, "al");
    let second = async {
        tokio::time::sleep(Duration::from_millis(200)).await;
        on_search_input(&app, "ali").await
    };
    let (first, second) = tokio::join!(first, second);

    assert_eq!(first.unwrap(), SearchOutcome::Superseded);
    assert_eq!(second.unwrap(), SearchOutcome::Applied { count: 1 });
    let queries = runtime.queries();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].prefix, "ali");
}

#[tokio::test(start_paused = true)]
async fn query_waits_for_quiet_period() {
    let runtime = MockRuntime::new().with_users(directory());
    let app = app_with_runtime(&runtime);

    let search = on_search_input(&app, "al");
    let observer = async {
        tokio::time::sleep(Duration::from_millis(499)).await;
        let before = runtime.queries().len();
        let loading = app.read().await.snapshot().search.is_loading();
        tokio::time::sleep(Duration::from_millis(2)).await;
        (before, loading, runtime.queries().len())
    };
    let (outcome, (before, loading, after)) = tokio::join!(search, observer);

    assert_matches!(outcome, Ok(SearchOutcome::Applied { .. }));
    assert_eq!(before, 0);
    assert!(!loading);
    assert_eq!(after, 1);
}

#[tokio::test(start_paused = true)]
async fn slow_older_response_is_discarded() {
    let runtime = MockRuntime::new()
        .with_users(directory())
        .with_search_delay("a", 1_000);
    let app = app_with_runtime(&runtime);

    let slow = on_search_input(&app, "a");
    let fast = async {
        tokio::time::sleep(Duration::from_millis(600)).await;
        on_search_input(&app, "alv").await
    };
    let (slow, fast) = tokio::join!(slow, fast);

    assert_eq!(slow.unwrap(), SearchOutcome::Stale);
    assert_eq!(fast.unwrap(), SearchOutcome::Applied { count: 1 });
    let search = app.read().await.snapshot().search;
    assert_eq!(search.input(), "alv");
    assert_eq!(search.results()[0].username, "alvin");
    assert_eq!(runtime.queries().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn results_exclude_self_and_cap_at_five() {
    let runtime = MockRuntime::new().with_users(directory());
    let app = signed_in_app(&runtime, user("u0", "alice"));

    let outcome = on_search_input(&app, "al").await.unwrap();

    assert_eq!(outcome, SearchOutcome::Applied { count: 5 });
    let search = app.read().await.snapshot().search;
    let names: Vec<_> = search.results().iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["alan", "albert", "alex", "alfred", "alvin"]);
    assert_eq!(runtime.queries()[0].exclude_username.as_deref(), Some("alice"));
    assert_eq!(search.placeholder(), None);
}

#[tokio::test(start_paused = true)]
async fn empty_result_shows_no_user_found() {
    let runtime = MockRuntime::new().with_users(directory());
    let app = app_with_runtime(&runtime);

    let outcome = on_search_input(&app, "zed").await.unwrap();

    assert_eq!(outcome, SearchOutcome::Applied { count: 0 });
    let search = app.read().await.snapshot().search;
    assert_eq!(search.placeholder(), Some("No user found"));
}

#[tokio::test(start_paused = true)]
async fn failed_query_is_distinguishable_from_empty() {
    let runtime = MockRuntime::new().with_users(directory());
    runtime.fail_next_search(ChirpError::backend("index unavailable"));
    let app = app_with_runtime(&runtime);

    let err = on_search_input(&app, "al").await.unwrap_err();

    assert_matches!(err, ChirpError::Backend { .. });
    let search = app.read().await.snapshot().search;
    assert_eq!(search.placeholder(), Some("No user found"));
    assert_matches!(search.status(), SearchStatus::Failed { .. });
}
