//! Taskboard UI Components
//!
//! Leptos components for the Taskboard frontend.
//!
//! # Components
//!
//! ## Primitives
//! - [`Button`] - Styled button with color variants and sizes
//! - [`Card`] - Card wrapper with an optional heading
//!
//! ## Shell
//! - [`Navbar`] - Title, links, and theme toggle
//! - [`ThemeProvider`] - Persisted light/dark theme context
//! - [`ThemeToggle`] - Button switching the theme
//!
//! ## Pages
//! - [`PostBrowser`] - Fetched posts with search and pagination
//! - [`TaskManager`] - In-memory task list
//!
//! # Example
//!
//! ```ignore
//! use leptos::prelude::*;
//! use taskboard_ui::{PostBrowser, ThemeProvider};
//!
//! #[component]
//! fn App() -> impl IntoView {
//!     view! {
//!         <ThemeProvider>
//!             <PostBrowser posts_url="https://jsonplaceholder.typicode.com/posts" />
//!         </ThemeProvider>
//!     }
//! }
//! ```

pub mod api;
pub mod navigation;
pub mod posts;
pub mod primitives;
pub mod tasks;
pub mod theme;

pub use api::fetch_posts;
pub use navigation::{NavItem, Navbar, default_nav_items};
pub use posts::PostBrowser;
pub use primitives::{Button, ButtonSize, ButtonVariant, Card, button_class};
pub use tasks::TaskManager;
pub use theme::{LocalStorage, ThemeContext, ThemeProvider, ThemeToggle, apply_theme, use_theme};
