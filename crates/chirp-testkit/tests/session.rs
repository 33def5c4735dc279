//! Sign-in, sign-out and the effect of switching actors on mounted cards.

use std::time::Duration;

use assert_matches::assert_matches;
use chirp_app::workflows::{
    cancel_sign_in, observe_tweet, sign_in, sign_out, toggle_bookmark, toggle_like,
    InteractionOutcome,
};
use chirp_core::{ChirpError, Mutation, TweetId, UserId};
use chirp_testkit::{app_with_runtime, bookmark, signed_in_app, tweet, user, MockRuntime};

#[tokio::test]
async fn sign_in_closes_prompt_and_loads_bookmarks() {
    let runtime = MockRuntime::new()
        .with_sign_in_user(user("u42", "alice"))
        .with_bookmarks("u42", vec![bookmark("t9", 1)])
        .with_tweet(tweet("t1", "author", &["u42"]));
    let app = app_with_runtime(&runtime);
    observe_tweet(&app, tweet("t1", "author", &["u42"])).await;

    toggle_like(&app, &TweetId::from("t1")).await.unwrap();
    assert!(app.read().await.snapshot().login_prompt.is_open());

    let signed_in = sign_in(&app).await.unwrap();

    assert_eq!(signed_in.username, "alice");
    let core = app.read().await;
    assert!(core.session().is_authenticated());
    let snapshot = core.snapshot();
    assert!(!snapshot.login_prompt.is_open());
    assert!(snapshot.bookmarks.is_bookmarked(&TweetId::from("t9")));
    assert!(snapshot.tweets.get(&TweetId::from("t1")).unwrap().is_liked());
}

#[tokio::test]
async fn refused_sign_in_keeps_session_anonymous() {
    let runtime = MockRuntime::new();
    let app = app_with_runtime(&runtime);

    let err = sign_in(&app).await.unwrap_err();

    assert_matches!(err, ChirpError::PermissionDenied { .. });
    assert!(!app.read().await.session().is_authenticated());
}

#[tokio::test]
async fn sign_out_forgets_memberships() {
    let runtime = MockRuntime::new()
        .with_sign_in_user(user("u42", "alice"))
        .with_bookmarks("u42", vec![bookmark("t1", 1)]);
    let app = app_with_runtime(&runtime);
    observe_tweet(&app, tweet("t1", "author", &["u42"])).await;
    sign_in(&app).await.unwrap();

    sign_out(&app).await.unwrap();

    assert_eq!(runtime.sign_outs(), 1);
    let snapshot = app.read().await.snapshot();
    assert!(snapshot.bookmarks.bookmarks().is_empty());
    let card = snapshot.tweets.get(&TweetId::from("t1")).unwrap();
    assert!(!card.is_liked());
    assert_eq!(card.stats().display().current_likes, 1);
}

#[tokio::test]
async fn cancel_closes_prompt() {
    let runtime = MockRuntime::new().with_tweet(tweet("t1", "author", &[]));
    let app = app_with_runtime(&runtime);
    observe_tweet(&app, tweet("t1", "author", &[])).await;
    toggle_like(&app, &TweetId::from("t1")).await.unwrap();

    cancel_sign_in(&app).await;

    assert!(!app.read().await.snapshot().login_prompt.is_open());
}

#[tokio::test(start_paused = true)]
async fn previous_user_result_does_not_settle_new_like() {
    let runtime = MockRuntime::new()
        .with_tweet(tweet("t1", "author", &[]))
        .with_mutation_delay(100);
    let app = signed_in_app(&runtime, user("u42", "alice"));
    observe_tweet(&app, tweet("t1", "author", &[])).await;
    let t1 = TweetId::from("t1");

    let first = toggle_like(&app, &t1);
    let switched = async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        sign_out(&app).await.unwrap();
        runtime.set_sign_in_user(user("u99", "bob"));
        sign_in(&app).await.unwrap();
        // Consumed by u42's call, which lands first.
        runtime.fail_next_mutation(ChirpError::network("connection reset"));
        toggle_like(&app, &t1).await
    };
    let (first, second) = tokio::join!(first, switched);

    assert_matches!(first, Err(ChirpError::Network { .. }));
    assert_matches!(
        second,
        Ok(InteractionOutcome::Applied(Mutation::Like { ref actor, .. })) if actor.as_str() == "u99"
    );
    assert_eq!(runtime.tweet(&t1).unwrap().user_likes, vec![UserId::from("u99")]);

    let snapshot = app.read().await.snapshot();
    let card = snapshot.tweets.get(&t1).unwrap();
    assert!(card.is_liked());
    assert!(!card.likes().is_failed());
    assert_eq!(card.tweet().user_likes, vec![UserId::from("u99")]);
    assert_eq!(card.stats().display().current_likes, 1);
    assert!(snapshot.notifications.is_empty());
}

#[tokio::test(start_paused = true)]
async fn sign_out_during_bookmark_skips_result_toast() {
    let runtime = MockRuntime::new()
        .with_sign_in_user(user("u42", "alice"))
        .with_mutation_delay(100);
    let app = signed_in_app(&runtime, user("u42", "alice"));
    let t1 = TweetId::from("t1");

    let bookmarking = toggle_bookmark(&app, &t1, || {});
    let leaving = async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        sign_out(&app).await.unwrap();
    };
    let (outcome, ()) = tokio::join!(bookmarking, leaving);

    assert_matches!(outcome, Ok(InteractionOutcome::Applied(Mutation::Bookmark { .. })));
    assert_eq!(runtime.bookmarks_of(&UserId::from("u42")).len(), 1);
    let snapshot = app.read().await.snapshot();
    assert!(snapshot.bookmarks.bookmarks().is_empty());
    assert!(!snapshot.bookmarks.displayed(&t1));
    assert!(snapshot.notifications.is_empty());
}
