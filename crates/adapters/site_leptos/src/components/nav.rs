use leptos::prelude::*;

use super::ThemeToggle;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav>
            <ul>
                <li><a href="/">"Home"</a></li>
                <li><a href="/path">"Path"</a></li>
                <li><a href="/projects">"Projects"</a></li>
                <li><a href="/skills">"Skills"</a></li>
                <li><a href="/contact">"Contact"</a></li>
            </ul>
            <ThemeToggle/>
        </nav>
    }
}
