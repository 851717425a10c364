//! Theme context backed by `localStorage` and applied to the document root.
//!
//! Dark mode adds the `dark` class to `<html>` and `<body>` and sets the
//! root `color-scheme`, which is what Tailwind's class-based dark mode expects.

use leptos::prelude::*;
use taskboard_core::{PreferenceStorage, THEME_STORAGE_KEY, Theme, ThemeStore};
use wasm_bindgen::JsCast;

const DARK_CLASS: &str = "dark";

/// Browser `localStorage`. Access failures are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl PreferenceStorage for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn save(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

/// Reflect `theme` on the document root and body.
pub fn apply_theme(theme: Theme) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if let Some(root) = document.document_element() {
        set_dark_class(&root, theme);
        if let Some(root) = root.dyn_ref::<web_sys::HtmlElement>() {
            let _ = root.style().set_property("color-scheme", theme.as_str());
        }
    }

    if let Some(body) = document.body() {
        set_dark_class(&body, theme);
    }
}

fn set_dark_class(element: &web_sys::Element, theme: Theme) {
    let classes = element.class_list();
    let _ = if theme.is_dark() {
        classes.add_1(DARK_CLASS)
    } else {
        classes.remove_1(DARK_CLASS)
    };
}

/// Current theme plus the store that persists it.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
    store: StoredValue<ThemeStore<LocalStorage>>,
}

impl ThemeContext {
    /// Load the persisted preference under `storage_key`.
    pub fn new(storage_key: impl Into<String>) -> Self {
        let store = ThemeStore::load(LocalStorage, storage_key);
        let theme = store.theme();
        log::debug!("Initial theme: {theme}");

        Self {
            theme: RwSignal::new(theme),
            store: StoredValue::new(store),
        }
    }

    /// The current theme, tracked.
    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    pub fn signal(&self) -> Signal<Theme> {
        self.theme.into()
    }

    /// Flip the theme and persist the new value.
    pub fn toggle(&self) {
        self.store.update_value(|store| {
            store.toggle();
        });
        let theme = self.store.with_value(|store| store.theme());
        log::info!("Theme switched to {theme}");
        self.theme.set(theme);
    }
}

/// Provides a [`ThemeContext`] to its children and keeps the document in sync.
#[component]
pub fn ThemeProvider(
    /// Local storage key for the preference.
    #[prop(into, default = THEME_STORAGE_KEY.to_string())]
    storage_key: String,
    children: Children,
) -> impl IntoView {
    let context = ThemeContext::new(storage_key);
    provide_context(context);

    Effect::new(move |_| apply_theme(context.get()));

    children()
}

/// Get the theme context provided by [`ThemeProvider`].
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

/// Label for the toggle button given the current theme.
pub fn toggle_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "🌙 Dark Mode",
        Theme::Dark => "☀️ Light Mode",
    }
}

/// Button that switches between light and dark themes.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
      <button
        class="px-3 py-2 rounded text-sm font-medium border hover:bg-gray-100 dark:hover:bg-gray-700 transition"
        on:click=move |_| theme.toggle()
      >
        {move || toggle_label(theme.get())}
      </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_label_names_the_other_theme() {
        assert_eq!(toggle_label(Theme::Light), "🌙 Dark Mode");
        assert_eq!(toggle_label(Theme::Dark), "☀️ Light Mode");
    }
}
