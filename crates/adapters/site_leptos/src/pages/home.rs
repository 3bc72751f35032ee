use leptos::prelude::*;

use crate::components::HoursCounter;
use crate::content::use_portfolio;

#[component]
pub fn Home() -> impl IntoView {
    use_portfolio().map(|portfolio| {
        let profile = portfolio.profile.clone();
        view! {
            <section class="hero">
                <h2>{format!("Hi, I'm {}", profile.name)}</h2>
                <h1>{profile.headline}</h1>
                <p>{profile.summary}</p>
                <HoursCounter target=profile.hours_automated label="Hours Automated Monthly"/>
                <a class="button" href="/contact">"Let's Chat"</a>
            </section>
            <section class="companies">
                <h3>"Worked with"</h3>
                <ul>
                    {profile
                        .companies
                        .into_iter()
                        .map(|company| view! { <li>{company}</li> })
                        .collect::<Vec<_>>()}
                </ul>
            </section>
        }
    })
}
