use folio_domain::content::{Education, Experience, MiscEntry, Volunteering};
use leptos::prelude::*;

use crate::components::MetricGrid;
use crate::content::use_portfolio;

/// Career path: work experience, education, then volunteering and other
/// interests when there are any.
#[component]
pub fn Path() -> impl IntoView {
    use_portfolio().map(|portfolio| {
        let experiences = portfolio.experiences.clone();
        let education = portfolio.education.clone();
        let volunteering = portfolio.volunteering.clone();
        let misc = portfolio.misc.clone();
        view! {
            <div class="path">
                <h1>"Path"</h1>
                <section>
                    <h2>"Experience"</h2>
                    {experiences
                        .into_iter()
                        .map(|experience| view! { <ExperienceEntry experience=experience/> })
                        .collect::<Vec<_>>()}
                </section>
                <section>
                    <h2>"Education"</h2>
                    {education
                        .into_iter()
                        .map(|education| view! { <EducationEntry education=education/> })
                        .collect::<Vec<_>>()}
                </section>
                {(!volunteering.is_empty()).then(|| view! {
                    <section>
                        <h2>"Volunteering"</h2>
                        {volunteering
                            .into_iter()
                            .map(|volunteering| view! { <VolunteeringEntry volunteering=volunteering/> })
                            .collect::<Vec<_>>()}
                    </section>
                })}
                {(!misc.is_empty()).then(|| view! {
                    <section>
                        <h2>"Misc"</h2>
                        {misc
                            .into_iter()
                            .map(|item| view! { <MiscCard item=item/> })
                            .collect::<Vec<_>>()}
                    </section>
                })}
            </div>
        }
    })
}

#[component]
fn ExperienceEntry(experience: Experience) -> impl IntoView {
    view! {
        <article class="entry">
            <header>
                <h3>{experience.title}</h3>
                <span class="entry-meta">{experience.company} " · " {experience.period}</span>
            </header>
            <p>{experience.description}</p>
            <MetricGrid metrics=experience.metrics/>
            <ul class="learnings">
                {experience
                    .key_learnings
                    .into_iter()
                    .map(|learning| view! { <li>{learning}</li> })
                    .collect::<Vec<_>>()}
            </ul>
            {experience.link.map(|href| view! { <a href=href>"Learn more"</a> })}
        </article>
    }
}

#[component]
fn EducationEntry(education: Education) -> impl IntoView {
    view! {
        <article class="entry">
            <header>
                <h3>{education.degree}</h3>
                <span class="entry-meta">{education.institution} " · " {education.period}</span>
            </header>
            <p>{education.description}</p>
            <MetricGrid metrics=education.metrics/>
            <ul class="achievements">
                {education
                    .achievements
                    .into_iter()
                    .chain(education.courses)
                    .map(|item| view! { <li>{item}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        </article>
    }
}

#[component]
fn VolunteeringEntry(volunteering: Volunteering) -> impl IntoView {
    let impact = volunteering
        .metrics
        .is_empty()
        .then_some(volunteering.impact)
        .flatten();
    view! {
        <article class="entry">
            <header>
                <h3>{volunteering.role}</h3>
                <span class="entry-meta">
                    {volunteering.organization} " · " {volunteering.period}
                </span>
            </header>
            <p>{volunteering.description}</p>
            {impact.map(|impact| view! { <p class="impact">{impact}</p> })}
            <MetricGrid metrics=volunteering.metrics/>
            <ul class="highlights">
                {volunteering
                    .highlights
                    .into_iter()
                    .map(|highlight| view! { <li>{highlight}</li> })
                    .collect::<Vec<_>>()}
            </ul>
            {volunteering.link.map(|href| view! { <a href=href>"Learn more"</a> })}
        </article>
    }
}

#[component]
fn MiscCard(item: MiscEntry) -> impl IntoView {
    view! {
        <article class="entry">
            <header>
                <h3>{item.title}</h3>
                <span class="entry-meta">{item.category}</span>
            </header>
            <p>{item.description}</p>
            <MetricGrid metrics=item.metrics/>
            <ul class="details">
                {item
                    .details
                    .into_iter()
                    .map(|detail| view! { <li>{detail}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        </article>
    }
}
