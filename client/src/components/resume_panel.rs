//! Resume viewer. A primary modal, so it replaces any open project modal.

use folio::consts::{RESUME, RESUME_CLOSE};
use folio::input::UiEvent;
use folio::surface::SurfaceId;
use leptos::prelude::*;

use crate::content::RESUME_URL;
use crate::state::page::PageSignal;
use crate::util::dom;

#[component]
pub fn ResumePanel() -> impl IntoView {
    let page = expect_context::<PageSignal>();
    let id = SurfaceId::new(RESUME);
    let active = Memo::new(move |_| page.with(|page| page.overlays.is_active(&id)));

    let on_backdrop = move |ev: leptos::ev::MouseEvent| {
        if dom::is_backdrop_click(&ev) {
            dom::run(page, UiEvent::backdrop(RESUME), None);
        }
    };
    let on_close = move |_| dom::run(page, UiEvent::click(RESUME_CLOSE, None), None);

    view! {
        <div
            id=RESUME
            class="resume-modal"
            class:active=move || active.get()
            role="dialog"
            aria-modal="true"
            aria-label="Resume"
            aria-hidden=move || if active.get() { "false" } else { "true" }
            on:click=on_backdrop
        >
            <div class="resume-modal-content">
                <div class="resume-modal-header">
                    <h2>"Resume"</h2>
                    <a class="btn" href=RESUME_URL download="">"Download"</a>
                    <button class=RESUME_CLOSE aria-label="Close resume" on:click=on_close>"×"</button>
                </div>
                // Loaded only while open.
                {move || active.get().then(|| view! { <iframe class="resume-frame" src=RESUME_URL title="Resume"></iframe> })}
            </div>
        </div>
    }
}
