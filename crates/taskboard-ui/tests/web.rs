//! Browser tests for the DOM and storage glue.
//!
//! Run with `wasm-pack test --headless --firefox crates/taskboard-ui`.

#![cfg(target_arch = "wasm32")]

use taskboard_core::{PreferenceStorage, Theme, ThemeStore};
use taskboard_ui::{LocalStorage, apply_theme};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn root_has_dark_class() -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|root| root.class_list().contains("dark"))
        .unwrap_or(false)
}

#[wasm_bindgen_test]
fn local_storage_round_trip() {
    LocalStorage.save("taskboard-test", "dark");
    assert_eq!(LocalStorage.load("taskboard-test").as_deref(), Some("dark"));
}

#[wasm_bindgen_test]
fn theme_store_persists_to_local_storage() {
    let key = "taskboard-test-theme";
    LocalStorage.save(key, "light");

    let mut store = ThemeStore::load(LocalStorage, key);
    store.toggle();
    assert_eq!(LocalStorage.load(key).as_deref(), Some("dark"));

    store.toggle();
    assert_eq!(LocalStorage.load(key).as_deref(), Some("light"));
}

#[wasm_bindgen_test]
fn apply_theme_toggles_dark_class() {
    apply_theme(Theme::Dark);
    assert!(root_has_dark_class());

    apply_theme(Theme::Light);
    assert!(!root_has_dark_class());
}
