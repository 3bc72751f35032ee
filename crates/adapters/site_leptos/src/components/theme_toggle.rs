//! Dark/light theme toggle button.

use leptos::prelude::*;

use crate::theme::use_theme;

/// A toggle button that switches between light and dark themes.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    let label = move || {
        if theme.get().is_dark() {
            "\u{263E}"
        } else {
            "\u{2600}"
        }
    };

    view! {
        <button class="theme-toggle" on:click=move |_| theme.toggle() title="Toggle theme">
            {label}
        </button>
    }
}
