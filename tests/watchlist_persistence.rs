mod common;

use std::sync::Arc;

use common::{
    make_context_with, make_offline_context, movie, stored, stored_watchlist, test_config,
    test_movie, THEME_KEY, WATCHLIST_KEY,
};
use movietime::api::ApiClient;
use movietime::storage::FileStore;
use movietime::store::theme::DocumentTheme;
use movietime::AppContext;

#[test]
fn starts_empty_without_stored_value() {
    let t = make_offline_context();
    assert!(t.ctx.watchlist().is_empty());
    assert_eq!(stored(&t.store, WATCHLIST_KEY), None);
}

#[test]
fn hydrates_from_stored_json() {
    let json = serde_json::to_string(&vec![test_movie(), movie("2", "Two")]).unwrap();
    let t = make_context_with("http://127.0.0.1:9", &[(WATCHLIST_KEY, &json)]);
    assert_eq!(t.ctx.watchlist().len(), 2);
    assert!(t.ctx.is_in_watchlist("2"));
}

#[test]
fn corrupt_json_hydrates_as_empty() {
    let t = make_context_with("http://127.0.0.1:9", &[(WATCHLIST_KEY, "{not json")]);
    assert!(t.ctx.watchlist().is_empty());

    t.ctx.add_to_watchlist(test_movie());
    assert_eq!(stored_watchlist(&t.store).len(), 1);
}

#[test]
fn stored_duplicates_collapse_on_hydrate() {
    let json = serde_json::to_string(&vec![test_movie(), test_movie()]).unwrap();
    let t = make_context_with("http://127.0.0.1:9", &[(WATCHLIST_KEY, &json)]);
    assert_eq!(t.ctx.watchlist().len(), 1);
}

#[test]
fn every_change_is_persisted() {
    let t = make_offline_context();

    t.ctx.add_to_watchlist(test_movie());
    assert_eq!(stored_watchlist(&t.store), vec![test_movie()]);

    t.ctx.toggle_watchlist(movie("2", "Two"));
    assert_eq!(stored_watchlist(&t.store).len(), 2);

    t.ctx.remove_from_watchlist("1");
    let ids: Vec<String> = stored_watchlist(&t.store).into_iter().map(|m| m.id).collect();
    assert_eq!(ids, vec!["2".to_string()]);

    t.ctx.clear_watchlist();
    assert_eq!(stored(&t.store, WATCHLIST_KEY).as_deref(), Some("[]"));
}

#[test]
fn noop_remove_still_writes_current_list() {
    let t = make_offline_context();
    t.ctx.remove_from_watchlist("missing");
    assert_eq!(stored(&t.store, WATCHLIST_KEY).as_deref(), Some("[]"));
}

#[test]
fn noop_remove_replaces_corrupt_stored_value() {
    let t = make_context_with("http://127.0.0.1:9", &[(WATCHLIST_KEY, "{not json")]);
    t.ctx.remove_from_watchlist("missing");
    assert_eq!(stored(&t.store, WATCHLIST_KEY).as_deref(), Some("[]"));
}

#[test]
fn duplicate_add_rewrites_deduplicated_list() {
    let json = serde_json::to_string(&vec![test_movie(), test_movie()]).unwrap();
    let t = make_context_with("http://127.0.0.1:9", &[(WATCHLIST_KEY, &json)]);
    t.ctx.add_to_watchlist(test_movie());
    assert_eq!(stored_watchlist(&t.store), vec![test_movie()]);
}

#[test]
fn clear_writes_even_when_already_empty() {
    let t = make_offline_context();
    t.ctx.clear_watchlist();
    assert_eq!(stored(&t.store, WATCHLIST_KEY).as_deref(), Some("[]"));
}

#[test]
fn write_failure_keeps_in_memory_change() {
    let t = make_offline_context();
    t.store.set_read_only(true);

    t.ctx.add_to_watchlist(test_movie());
    assert!(t.ctx.is_in_watchlist("1"));
    assert_eq!(stored(&t.store, WATCHLIST_KEY), None);

    t.store.set_read_only(false);
    t.ctx.add_to_watchlist(movie("2", "Two"));
    assert_eq!(stored_watchlist(&t.store).len(), 2);
}

#[test]
fn watchlist_and_theme_use_separate_keys() {
    let t = make_offline_context();
    t.ctx.add_to_watchlist(test_movie());
    t.ctx.toggle_theme();
    assert!(stored(&t.store, WATCHLIST_KEY).is_some());
    assert_eq!(stored(&t.store, THEME_KEY).as_deref(), Some("light"));
}

#[test]
fn file_store_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config("http://127.0.0.1:9");

    let open = || {
        AppContext::new(
            &config,
            ApiClient::new(&config.api).unwrap(),
            Arc::new(FileStore::new(dir.path())),
            Arc::new(DocumentTheme::new()),
        )
    };

    {
        let ctx = open();
        ctx.add_to_watchlist(test_movie());
        ctx.add_to_watchlist(movie("2", "Two"));
        ctx.set_theme(movietime::store::theme::Theme::Light);
    }

    let ctx = open();
    let ids: Vec<String> = ctx.watchlist().movies().iter().map(|m| m.id.clone()).collect();
    assert_eq!(ids, vec!["1".to_string(), "2".to_string()]);
    assert_eq!(ctx.theme(), movietime::store::theme::Theme::Light);
}
