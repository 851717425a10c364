use leptos::prelude::*;
use taskboard_ui::{Button, ButtonVariant, PostBrowser};

use super::config;

/// Renders the home page: a button showcase and the latest posts.
#[component]
pub fn HomePage() -> impl IntoView {
    let config = config();

    let on_primary = move |_: leptos::ev::MouseEvent| {
        let _ = window().alert_with_message("Primary clicked!");
    };

    view! {
      <div class="text-center py-10">
        <h1 class="text-3xl font-bold mb-6">"Welcome to My App"</h1>

        <div class="flex justify-center gap-4 mb-8">
          <Button variant=ButtonVariant::Primary on_click=on_primary>
            "Primary"
          </Button>
          <Button variant=ButtonVariant::Secondary>"Secondary"</Button>
          <Button variant=ButtonVariant::Danger>"Delete"</Button>
          <Button variant=ButtonVariant::Success>"Save"</Button>
          <Button variant=ButtonVariant::Warning disabled=true>
            "Disabled"
          </Button>
        </div>

        <div class="max-w-3xl mx-auto text-left">
          <h2 class="text-xl font-semibold mb-2 text-center">"Latest Posts from API"</h2>
          <PostBrowser
            posts_url=config.api.posts_url
            page_size=config.pagination.page_size
            hover_zoom=true
          />
        </div>
      </div>
    }
}
