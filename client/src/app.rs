//! Root application component and context providers.

use folio::dispatch::Page;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::{
    about::About, contact::Contact, footer::Footer, hero::Hero, lightbox::Lightbox, nav::Nav,
    parts_panel::PartsPanel, project_modal::ProjectModals, projects::Projects, resume_panel::ResumePanel,
};
use crate::content;
use crate::state::page::{LightboxImage, PageSignal};
use crate::state::reveal::RevealState;
use crate::util::config::load_timing;

/// Root application component.
///
/// Provides the page session, reveal state and lightbox image, wires the
/// document-level keyboard listener and starts the reveal triggers.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let timing = load_timing();
    let page: PageSignal = RwSignal::new_local(Page::standard(&content::project_ids(), &timing));
    let reveal = RwSignal::new(RevealState::standard());
    let lightbox = RwSignal::new(LightboxImage::default());

    provide_context(page);
    provide_context(reveal);
    provide_context(lightbox);

    #[cfg(feature = "csr")]
    {
        use folio::input::{Modifiers, UiEvent};

        use crate::util::dom;

        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            let key = ev.key();
            let focusables = if key == "Tab" { dom::focusables(page) } else { Vec::new() };
            let modifiers =
                Modifiers { shift: ev.shift_key(), ctrl: ev.ctrl_key(), alt: ev.alt_key(), meta: ev.meta_key() };
            let event = UiEvent::key(&key, modifiers, dom::focused(), focusables);
            let dom_event: &leptos::ev::Event = &ev;
            dom::run(page, event, Some(dom_event));
        });
        on_cleanup(move || handle.remove());

        // Effects run after the first render, so every reveal target exists.
        Effect::new(move || crate::util::reveal::start(reveal, timing));
    }

    view! {
        <Title text="Alex Kowalski | Mechanical Engineer"/>
        <Nav/>
        <main>
            <Hero/>
            <About/>
            <Projects/>
            <Contact/>
        </main>
        <Footer/>
        <ProjectModals/>
        <Lightbox/>
        <ResumePanel/>
        <PartsPanel/>
    }
}
