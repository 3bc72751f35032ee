//! Site-wide theme shared through Leptos context.

use folio_domain::theme::Theme;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Reactive theme state. Components read it with [`use_theme`].
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
}

impl ThemeContext {
    #[must_use]
    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    pub fn toggle(&self) {
        self.theme.update(|theme| *theme = theme.toggle());
    }
}

/// Install the theme context and keep `<html data-theme>` in sync with it.
pub fn provide_theme(initial: Theme) -> ThemeContext {
    let context = ThemeContext {
        theme: RwSignal::new(initial),
    };
    provide_context(context);
    Effect::new(move |_| apply_theme(context.get()));
    context
}

/// Theme context installed by [`provide_theme`], or a detached light theme
/// when rendered outside the app shell.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_else(|| {
        leptos::logging::warn!("no theme context, falling back to light");
        ThemeContext {
            theme: RwSignal::new(Theme::default()),
        }
    })
}

fn apply_theme(theme: Theme) {
    if let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.document_element())
    {
        let html = el.unchecked_into::<web_sys::HtmlElement>();
        if let Err(err) = html.dataset().set("theme", theme.as_str()) {
            leptos::logging::warn!("failed to apply theme: {err:?}");
        }
    }
}
