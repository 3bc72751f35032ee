use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Nothing here"</h1>
            <p>"That page is not part of the portfolio."</p>
            <a class="button" href="/">"Back to the start"</a>
        </div>
    }
}
