use folio_domain::content::Project;
use leptos::prelude::*;

use crate::components::MetricGrid;
use crate::content::use_portfolio;

#[component]
pub fn Projects() -> impl IntoView {
    use_portfolio().map(|portfolio| {
        let projects = portfolio.projects.clone();
        view! {
            <div class="projects">
                <h1>"Projects"</h1>
                {projects
                    .into_iter()
                    .map(|project| view! { <ProjectCard project=project/> })
                    .collect::<Vec<_>>()}
            </div>
        }
    })
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <article class="project-card">
            <h2>{project.title}</h2>
            <h3>{project.subtitle}</h3>
            <p>{project.description}</p>
            {project.problem.map(|problem| view! { <p><strong>"Problem: "</strong>{problem}</p> })}
            {project.solution.map(|solution| view! { <p><strong>"Solution: "</strong>{solution}</p> })}
            <ul class="tech-stack">
                {project
                    .tech_stack
                    .into_iter()
                    .map(|tech| view! { <li>{tech}</li> })
                    .collect::<Vec<_>>()}
            </ul>
            <MetricGrid metrics=project.metrics/>
        </article>
    }
}
