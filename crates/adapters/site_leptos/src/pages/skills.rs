use leptos::prelude::*;

use crate::content::use_portfolio;

/// Skills timeline, one phase per period.
#[component]
pub fn Skills() -> impl IntoView {
    use_portfolio().map(|portfolio| {
        let phases = portfolio.skills.clone();
        view! {
            <div class="skills">
                <h1>"Skills"</h1>
                <ol class="timeline">
                    {phases
                        .into_iter()
                        .map(|phase| {
                            view! {
                                <li>
                                    <h2>{phase.title}</h2>
                                    <span class="entry-meta">{phase.period}</span>
                                    <p>{phase.description}</p>
                                    <p class="technologies">{phase.technologies.join(" · ")}</p>
                                    <ul>
                                        {phase
                                            .applications
                                            .into_iter()
                                            .map(|application| view! { <li>{application}</li> })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ol>
            </div>
        }
    })
}
