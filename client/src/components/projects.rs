//! Project cards. Each card's expand button opens `modal-<projectId>`.

use folio::dispatch::expand_control;
use folio::input::UiEvent;
use leptos::prelude::*;

use crate::content::reveal_keys::{PROJECTS_TITLE, project_card};
use crate::content::{PROJECTS, Project};
use crate::state::page::PageSignal;
use crate::state::reveal::{RevealState, revealed};
use crate::util::dom;

#[component]
pub fn Projects() -> impl IntoView {
    let reveal = expect_context::<RwSignal<RevealState>>();

    view! {
        <section id="projects" class="section projects">
            <h2 id=PROJECTS_TITLE class="section-title fade-in" class:visible=revealed(reveal, PROJECTS_TITLE)>
                "Projects"
            </h2>
            <div class="project-grid">
                {PROJECTS.iter().map(|project| view! { <ProjectCard project=*project/> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let page = expect_context::<PageSignal>();
    let reveal = expect_context::<RwSignal<RevealState>>();
    let key = project_card(project.id);
    let visible = {
        let key = key.clone();
        move || reveal.with(|state| state.is_revealed(&key))
    };
    let control = expand_control(project.id);
    let on_expand = {
        let control = control.clone();
        move |_| dom::run(page, UiEvent::click(control.clone(), dom::focused()), None)
    };

    view! {
        <article id=key class="project-card fade-in" class:visible=visible>
            <h3 class="project-title">{project.title}</h3>
            <p class="project-summary">{project.summary}</p>
            <ul class="project-tags">
                {project.tags.iter().map(|tag| view! { <li class="tag">{*tag}</li> }).collect_view()}
            </ul>
            <button id=control.to_string() class="project-expand" on:click=on_expand aria-haspopup="dialog">
                "Details"
            </button>
        </article>
    }
}
