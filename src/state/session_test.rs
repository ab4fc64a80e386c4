use super::*;

#[test]
fn fresh_store_has_no_token() {
    let store = SessionStore::default();
    assert_eq!(store.get(), None);
}

#[test]
fn set_then_get_round_trips() {
    let store = SessionStore::default();
    store.set("tok_abc");
    assert_eq!(store.get(), Some("tok_abc".to_owned()));
}

#[test]
fn set_overwrites_previous_token() {
    let store = SessionStore::default();
    store.set("first");
    store.set("second");
    assert_eq!(store.get(), Some("second".to_owned()));
}

#[test]
fn clear_removes_token() {
    let store = SessionStore::default();
    store.set("tok_abc");
    store.clear();
    assert_eq!(store.get(), None);
}

#[test]
fn clones_share_the_same_slot() {
    let store = SessionStore::default();
    let other = store.clone();
    store.set("shared");
    assert_eq!(other.get(), Some("shared".to_owned()));
    other.clear();
    assert_eq!(store.get(), None);
}
