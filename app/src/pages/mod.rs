//! Routed pages.

mod about;
mod home;

pub use about::AboutPage;
pub use home::HomePage;

use leptos::prelude::*;
use taskboard_core::AppConfig;
use taskboard_ui::{PostBrowser, TaskManager};

fn config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}

/// Standalone post browser.
#[component]
pub fn ApiDemoPage() -> impl IntoView {
    let config = config();

    view! {
      <div class="max-w-3xl mx-auto p-6">
        <h1 class="text-3xl font-bold mb-4 text-center">"API Demo: Posts"</h1>
        <PostBrowser posts_url=config.api.posts_url page_size=config.pagination.page_size />
      </div>
    }
}

#[component]
pub fn TasksPage() -> impl IntoView {
    view! {
      <div class="p-6">
        <h1 class="text-3xl font-bold mb-6 text-center">"My Tasks"</h1>
        <TaskManager />
      </div>
    }
}
