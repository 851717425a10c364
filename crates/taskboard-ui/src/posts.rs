//! Post browser: one fetch on mount, then client-side search and paging.

use leptos::{prelude::*, task::spawn_local};
use taskboard_core::{PAGE_SIZE, Post, PostBrowserState};

use crate::{
    api::fetch_posts,
    primitives::{Button, ButtonSize, ButtonVariant},
};

/// Fetches posts from `posts_url` and shows them filtered and paginated.
#[component]
pub fn PostBrowser(
    /// Endpoint returning a JSON array of posts.
    #[prop(into)]
    posts_url: String,
    /// Number of posts per page.
    #[prop(default = PAGE_SIZE)]
    page_size: usize,
    /// Slightly enlarge cards on hover.
    #[prop(optional)]
    hover_zoom: bool,
) -> impl IntoView {
    let state = RwSignal::new(PostBrowserState::new(page_size));

    state.update(|s| s.begin_loading());
    log::info!("Fetching posts from {posts_url}");
    spawn_local(async move {
        let result = fetch_posts(&posts_url).await;
        // The view may be gone by now; there is nothing to cancel.
        let _ = state.try_update(|s| match result {
            Ok(posts) => {
                log::info!("Fetched {} posts", posts.len());
                s.load_succeeded(posts);
            }
            Err(err) => {
                log::error!("Failed to fetch posts: {err}");
                s.load_failed(&err);
            }
        });
    });

    let query = Memo::new(move |_| state.with(|s| s.query().to_string()));
    let page_posts = Memo::new(move |_| state.with(|s| s.page_slice().to_vec()));
    let error = Memo::new(move |_| state.with(|s| s.error().map(str::to_string)));

    view! {
      <div class="post-browser">
        <SearchBox
          query=query.into()
          on_input=Callback::new(move |value: String| state.update(|s| s.set_query(value)))
        />

        <Show when=move || state.with(|s| s.is_loading())>
          <div class="text-center text-blue-500 py-8">"Loading..."</div>
        </Show>

        {move || {
          error
            .get()
            .map(|message| {
              view! {
                <div class="text-red-500 bg-red-50 p-4 rounded mb-4 text-center dark:bg-red-900/20">
                  "Error: " {message}
                </div>
              }
            })
        }}

        <Show when=move || state.with(|s| s.is_empty_result())>
          <div class="text-center text-gray-500 dark:text-gray-400 py-8">"No posts found."</div>
        </Show>

        <div class="grid gap-4 grid-cols-1 md:grid-cols-2">
          <For
            each=move || page_posts.get()
            key=|post| post.id
            children=move |post| view! { <PostCard post=post hover_zoom=hover_zoom /> }
          />
        </div>

        <Pager state=state />
      </div>
    }
}

/// Search input bound to the browser query.
#[component]
fn SearchBox(
    /// Current query text.
    query: Signal<String>,
    /// Called with the new text on every keystroke.
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
      <div class="mb-4 flex gap-2 items-center justify-between">
        <input
          type="text"
          class="px-4 py-2 border rounded w-full md:w-80 dark:bg-gray-700 dark:border-gray-600"
          placeholder="Search posts..."
          prop:value=move || query.get()
          on:input=move |ev| on_input.run(event_target_value(&ev))
        />
      </div>
    }
}

/// A single post.
#[component]
fn PostCard(post: Post, hover_zoom: bool) -> impl IntoView {
    let class = if hover_zoom {
        "bg-white dark:bg-gray-800 rounded shadow p-4 hover:scale-[1.025] transition duration-300"
    } else {
        "bg-white dark:bg-gray-800 rounded shadow p-4"
    };

    view! {
      <div class=class>
        <h3 class="font-semibold text-lg mb-2">{post.title}</h3>
        <p class="text-sm text-gray-700 dark:text-gray-300 mb-1">{post.body}</p>
        <span class="text-xs text-gray-400">{format!("Post #{}", post.id)}</span>
      </div>
    }
}

/// Text between the paging buttons.
pub fn page_label(page: usize, page_count: usize) -> String {
    format!("Page {page} of {page_count}")
}

/// Previous/next controls, disabled at either end.
#[component]
fn Pager(state: RwSignal<PostBrowserState>) -> impl IntoView {
    let no_previous = Signal::derive(move || !state.with(|s| s.has_previous()));
    let no_next = Signal::derive(move || !state.with(|s| s.has_next()));

    view! {
      <div class="flex gap-4 justify-center items-center mt-6">
        <Button
          variant=ButtonVariant::Secondary
          size=ButtonSize::Sm
          disabled=no_previous
          on_click=move |_| state.update(|s| s.previous_page())
        >
          "Previous"
        </Button>
        <span class="text-xs">{move || state.with(|s| page_label(s.page(), s.page_count()))}</span>
        <Button
          variant=ButtonVariant::Secondary
          size=ButtonSize::Sm
          disabled=no_next
          on_click=move |_| state.update(|s| s.next_page())
        >
          "Next"
        </Button>
      </div>
    }
}
