use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use taskboard_core::AppConfig;
use taskboard_ui::{Navbar, ThemeProvider};

mod pages;

use pages::{AboutPage, ApiDemoPage, HomePage, TasksPage};

/// Application title, shown in the navbar and the document title.
pub const APP_TITLE: &str = "PLP Task Manager";

const CONFIG_TOML: &str = include_str!("../taskboard.toml");

/// Load the configuration embedded at build time.
///
/// Invalid configuration is logged and replaced by defaults.
pub fn load_config() -> AppConfig {
    AppConfig::from_toml_or_default(CONFIG_TOML)
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let config = load_config();
    let storage_key = config.theme.storage_key.clone();
    provide_context(config);

    view! {
      <Title text=APP_TITLE />

      <ThemeProvider storage_key=storage_key>
        <Router>
          <div class="min-h-screen bg-gray-100 text-gray-900 dark:bg-gray-900 dark:text-gray-100">
            <Navbar title=APP_TITLE />
            <main>
              <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage />
                <Route path=StaticSegment("tasks") view=TasksPage />
                <Route path=StaticSegment("api") view=ApiDemoPage />
                <Route path=StaticSegment("about") view=AboutPage />
              </Routes>
            </main>
          </div>
        </Router>
      </ThemeProvider>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = AppConfig::from_toml_str(CONFIG_TOML).expect("embedded config");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_config() {
        assert_eq!(load_config().pagination.page_size, 10);
    }
}
