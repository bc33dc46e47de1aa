mod common;

use common::{make_context_with, make_offline_context, stored, THEME_KEY};
use movietime::store::theme::Theme;

const OFFLINE: &str = "http://127.0.0.1:9";

#[test]
fn defaults_to_dark_applies_once_and_persists() {
    let t = make_offline_context();
    assert_eq!(t.ctx.theme(), Theme::Dark);
    assert!(t.document.is_dark());
    assert_eq!(t.document.applied_count(), 1);
    assert_eq!(stored(&t.store, THEME_KEY).as_deref(), Some("dark"));
}

#[test]
fn hydrates_stored_light_theme() {
    let t = make_context_with(OFFLINE, &[(THEME_KEY, "light")]);
    assert_eq!(t.ctx.theme(), Theme::Light);
    assert!(!t.document.is_dark());
    assert_eq!(stored(&t.store, THEME_KEY).as_deref(), Some("light"));
}

#[test]
fn unrecognized_value_falls_back_to_dark() {
    for raw in ["blue", "\"light\"", "Light", ""] {
        let t = make_context_with(OFFLINE, &[(THEME_KEY, raw)]);
        assert_eq!(t.ctx.theme(), Theme::Dark, "raw value {:?}", raw);
        assert!(t.document.is_dark());
        assert_eq!(stored(&t.store, THEME_KEY).as_deref(), Some("dark"));
    }
}

#[test]
fn toggle_persists_and_applies() {
    let t = make_offline_context();
    t.ctx.toggle_theme();
    assert_eq!(t.ctx.theme(), Theme::Light);
    assert_eq!(stored(&t.store, THEME_KEY).as_deref(), Some("light"));
    assert!(!t.document.is_dark());

    t.ctx.toggle_theme();
    assert_eq!(t.ctx.theme(), Theme::Dark);
    assert_eq!(stored(&t.store, THEME_KEY).as_deref(), Some("dark"));
    assert!(t.document.is_dark());
}

#[test]
fn set_to_same_value_reapplies() {
    let t = make_offline_context();
    t.ctx.set_theme(Theme::Dark);
    assert_eq!(t.document.applied_count(), 2);
    assert_eq!(stored(&t.store, THEME_KEY).as_deref(), Some("dark"));
}

#[test]
fn persisted_value_tracks_every_mutation() {
    let t = make_offline_context();
    for theme in [Theme::Light, Theme::Light, Theme::Dark, Theme::Light] {
        t.ctx.set_theme(theme);
        assert_eq!(stored(&t.store, THEME_KEY).as_deref(), Some(theme.as_str()));
        assert_eq!(t.document.theme(), theme);
    }
}

#[test]
fn write_failure_still_changes_theme() {
    let t = make_offline_context();
    t.store.set_read_only(true);
    t.ctx.toggle_theme();
    assert_eq!(t.ctx.theme(), Theme::Light);
    assert!(!t.document.is_dark());
    assert_eq!(stored(&t.store, THEME_KEY).as_deref(), Some("dark"));
}
