//! Button and Card presentational primitives.

use leptos::{ev::MouseEvent, prelude::*};

const BUTTON_BASE: &str = "rounded font-medium transition-colors focus:outline-none focus:ring-2";
const BUTTON_DISABLED: &str = "opacity-50 cursor-not-allowed";
const CARD_CLASS: &str = "bg-white dark:bg-gray-800 shadow-md rounded-lg p-6 mb-4";

/// Button color variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Success,
    Warning,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-blue-600 hover:bg-blue-700 text-white focus:ring-blue-400",
            ButtonVariant::Secondary => {
                "bg-gray-200 hover:bg-gray-300 text-gray-800 dark:bg-gray-700 dark:hover:bg-gray-600 dark:text-gray-100 focus:ring-gray-400"
            }
            ButtonVariant::Danger => "bg-red-600 hover:bg-red-700 text-white focus:ring-red-400",
            ButtonVariant::Success => {
                "bg-green-600 hover:bg-green-700 text-white focus:ring-green-400"
            }
            ButtonVariant::Warning => {
                "bg-yellow-500 hover:bg-yellow-600 text-white focus:ring-yellow-300"
            }
        }
    }
}

/// Button size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub fn class(self) -> &'static str {
        match self {
            ButtonSize::Sm => "px-2 py-1 text-sm",
            ButtonSize::Md => "px-4 py-2",
            ButtonSize::Lg => "px-6 py-3 text-lg",
        }
    }
}

/// Full class string for a button in the given state.
pub fn button_class(variant: ButtonVariant, size: ButtonSize, disabled: bool) -> String {
    let mut class = format!("{BUTTON_BASE} {} {}", variant.class(), size.class());
    if disabled {
        class.push(' ');
        class.push_str(BUTTON_DISABLED);
    }
    class
}

/// Styled button.
#[component]
pub fn Button(
    /// Color variant.
    #[prop(optional)]
    variant: ButtonVariant,
    /// Size.
    #[prop(optional)]
    size: ButtonSize,
    /// Whether the button is disabled.
    #[prop(into, default = false.into())]
    disabled: Signal<bool>,
    /// Click handler.
    #[prop(optional, into)]
    on_click: Option<Callback<MouseEvent>>,
    /// Button content.
    children: Children,
) -> impl IntoView {
    view! {
      <button
        type="button"
        class=move || button_class(variant, size, disabled.get())
        disabled=move || disabled.get()
        on:click=move |ev| {
          if let Some(on_click) = on_click {
            on_click.run(ev);
          }
        }
      >
        {children()}
      </button>
    }
}

/// Card wrapper with an optional heading.
#[component]
pub fn Card(
    /// Heading shown above the content.
    #[prop(optional, into)]
    title: Option<String>,
    /// Card content.
    children: Children,
) -> impl IntoView {
    view! {
      <div class=CARD_CLASS>
        {title.map(|title| view! { <h3 class="text-xl font-bold mb-2">{title}</h3> })}
        <div>{children()}</div>
      </div>
    }
}
