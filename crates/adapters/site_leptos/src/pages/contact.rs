use leptos::prelude::*;

use crate::content::use_portfolio;

#[component]
pub fn Contact() -> impl IntoView {
    use_portfolio().map(|portfolio| {
        let profile = portfolio.profile.clone();
        view! {
            <div class="contact">
                <h1>"Get in touch"</h1>
                {profile.email.map(|email| {
                    let href = format!("mailto:{email}");
                    view! { <p><a href=href>{email}</a></p> }
                })}
                <ul class="links">
                    {profile
                        .links
                        .into_iter()
                        .map(|link| view! { <li><a href=link.url>{link.label}</a></li> })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        }
    })
}
