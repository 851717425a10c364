use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
      <div class="p-6">
        <h1 class="text-3xl font-bold">"About Page"</h1>
        <p class="mt-2 text-gray-600 dark:text-gray-300">
          "Hi! I'm a passionate web developer who enjoys building interactive and user-friendly "
          "applications. This Task Manager project showcases components, routing, and reactive "
          "state with signals and context. I love solving problems through clean code and "
          "thoughtful design, and I'm always eager to learn and explore new technologies."
        </p>
      </div>
    }
}
