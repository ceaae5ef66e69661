use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn new_session_is_anonymous() {
    let session = SessionStore::new();
    assert!(session.user().is_none());
    assert!(!session.is_authenticated());
}

#[test]
fn set_user_then_clear() {
    let session = SessionStore::new();
    session.set_user(Some(User::named("vova")));
    assert!(session.is_authenticated());
    assert_eq!(session.user().map(|u| u.username), Some("vova".to_owned()));

    session.clear();
    assert!(session.user().is_none());
}

#[test]
fn set_user_replaces_previous_identity() {
    let session = SessionStore::new();
    session.set_user(Some(User::named("first")));
    session.set_user(Some(User::named("second")));
    let name = session.user().map(|u| u.username);
    assert_eq!(name.as_deref(), Some("second"));
}

#[test]
fn clones_share_state() {
    let session = SessionStore::new();
    let other = session.clone();
    other.set_user(Some(User::named("shared")));
    assert!(session.is_authenticated());
}

#[test]
fn user_signal_follows_store_changes() {
    let session = SessionStore::new();
    let user = session.user_signal();
    assert!(user.get_untracked().is_none());

    session.set_user(Some(User::named("vova")));
    let name = user.get_untracked().map(|u| u.username);
    assert_eq!(name, Some("vova".to_owned()));

    session.clear();
    assert!(user.get_untracked().is_none());
}

#[test]
fn subscribers_receive_each_change() {
    let session = SessionStore::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    session.subscribe(move |user| {
        sink.lock().unwrap().push(user.map(|u| u.username.clone()));
    });

    session.set_user(Some(User::named("a")));
    session.clear();

    assert_eq!(*seen.lock().unwrap(), vec![Some("a".to_owned()), None]);
}

#[test]
fn unsubscribe_stops_notifications() {
    let session = SessionStore::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let id = session.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    session.set_user(Some(User::named("a")));
    assert!(session.unsubscribe(id));
    session.clear();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(!session.unsubscribe(id));
}

#[test]
fn subscription_ids_are_distinct() {
    let session = SessionStore::new();
    let a = session.subscribe(|_| {});
    let b = session.subscribe(|_| {});
    assert_ne!(a, b);
}

#[test]
fn listener_may_read_store_during_notification() {
    let session = SessionStore::new();
    let reader = session.clone();
    let observed = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&observed);
    session.subscribe(move |_| {
        *sink.lock().unwrap() = reader.user().map(|u| u.username);
    });

    session.set_user(Some(User::named("reentrant")));
    assert_eq!(*observed.lock().unwrap(), Some("reentrant".to_owned()));
}

#[test]
fn arbitrary_identity_shapes_are_stored_unvalidated() {
    let session = SessionStore::new();
    let raw = serde_json::json!({ "nickname": 42 });
    let user: User = serde_json::from_value(raw).unwrap();
    session.set_user(Some(user.clone()));
    assert_eq!(session.user(), Some(user));
}
