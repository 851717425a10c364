//! Top navigation bar with the theme toggle.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::theme::ThemeToggle;

/// A navigation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    /// Display label.
    pub label: String,

    /// Link URL.
    pub url: String,
}

impl NavItem {
    /// Create a new navigation item.
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// The links shown in the navigation bar.
pub fn default_nav_items() -> Vec<NavItem> {
    vec![
        NavItem::new("Home", "/"),
        NavItem::new("Tasks", "/tasks"),
        NavItem::new("API Demo", "/api"),
        NavItem::new("About", "/about"),
    ]
}

/// Application title, links, and theme toggle.
///
/// Must be rendered inside a `Router` and a `ThemeProvider`.
#[component]
pub fn Navbar(
    /// Title shown on the left.
    #[prop(into)]
    title: String,
    /// Navigation links.
    #[prop(default = default_nav_items())]
    items: Vec<NavItem>,
) -> impl IntoView {
    view! {
      <nav
        class="dark:bg-gray-800 bg-white px-6 py-4 flex justify-between items-center shadow"
        aria-label="Main navigation"
      >
        <div>
          <h1 class="text-2xl font-bold">{title}</h1>
          <div class="space-x-4 mt-2">
            {items
              .into_iter()
              .map(|item| {
                view! {
                  <A href=item.url attr:class="hover:underline">
                    {item.label}
                  </A>
                }
              })
              .collect_view()}
          </div>
        </div>

        <ThemeToggle />
      </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_item_creation() {
        let item = NavItem::new("Home", "/");
        assert_eq!(item.label, "Home");
        assert_eq!(item.url, "/");
    }

    #[test]
    fn test_default_nav_items() {
        let urls: Vec<String> = default_nav_items().into_iter().map(|i| i.url).collect();
        assert_eq!(urls, vec!["/", "/tasks", "/api", "/about"]);
    }
}
