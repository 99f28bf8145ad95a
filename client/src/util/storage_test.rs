use booking::cache::MemoryStore;
use booking::session::SESSION_KEY;
use booking::Session;

use super::*;

#[test]
fn json_helpers_round_through_any_store() {
    let store = MemoryStore::default();
    let session = Session { token: "a.b.c".into(), role: Some("STAFF".into()), hub_id: Some(3), ..Session::default() };
    save_json(&store, SESSION_KEY, &session);
    assert_eq!(load_json::<Session>(&store, SESSION_KEY), Some(session));
}

#[test]
fn garbage_reads_as_none() {
    let store = MemoryStore::default();
    store.set(SESSION_KEY, "{not json");
    assert_eq!(load_json::<Session>(&store, SESSION_KEY), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_store_is_empty_outside_the_browser() {
    let store = BrowserStore::session();
    store.set("k", "v");
    assert_eq!(store.get("k"), None);
    assert_eq!(BrowserStore::local().area(), StorageArea::Local);
    assert!(booking_cache().entries().is_empty());
}
