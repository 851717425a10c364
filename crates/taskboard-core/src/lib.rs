//! Taskboard Core Library
//!
//! Domain types, post browsing state, theme preference, and configuration
//! for the Taskboard web client. Nothing here touches the browser.

pub mod browser;
pub mod config;
pub mod error;
pub mod pagination;
pub mod post;
pub mod tasks;
pub mod theme;

pub use browser::PostBrowserState;
pub use config::AppConfig;
pub use error::{CoreError, FetchError, Result};
pub use pagination::PAGE_SIZE;
pub use post::{Post, decode_posts, filter_posts};
pub use tasks::{Task, TaskFilter, TaskList};
pub use theme::{MemoryStorage, PreferenceStorage, THEME_STORAGE_KEY, Theme, ThemeStore};
