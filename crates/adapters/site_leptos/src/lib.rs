use folio_domain::theme::Theme;
use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

mod components;
pub mod content;
mod pages;
pub mod raf;
pub mod theme;
pub mod visibility;

use components::Nav;
use pages::{Contact, Home, NotFound, Path, Projects, Skills};

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    theme::provide_theme(Theme::default());

    match content::load() {
        Ok(portfolio) => {
            content::provide_portfolio(portfolio);
            view! {
                <Router>
                    <Nav/>
                    <main>
                        <Routes fallback=|| view! { <NotFound/> }>
                            <Route path=path!("/") view=Home/>
                            <Route path=path!("path") view=Path/>
                            <Route path=path!("projects") view=Projects/>
                            <Route path=path!("skills") view=Skills/>
                            <Route path=path!("contact") view=Contact/>
                        </Routes>
                    </main>
                </Router>
            }
            .into_any()
        }
        Err(err) => {
            leptos::logging::error!("site content is invalid: {err}");
            view! {
                <main class="content-error">
                    <h1>"Content failed to load"</h1>
                    <p>{err.to_string()}</p>
                </main>
            }
            .into_any()
        }
    }
}
