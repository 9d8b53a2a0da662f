//! Full-screen image viewer opened from project galleries.

use folio::consts::{LIGHTBOX, LIGHTBOX_CLOSE, LIGHTBOX_IMAGE};
use folio::input::UiEvent;
use folio::surface::SurfaceId;
use leptos::prelude::*;

use crate::state::page::{LightboxImage, PageSignal};
use crate::util::dom;

#[component]
pub fn Lightbox() -> impl IntoView {
    let page = expect_context::<PageSignal>();
    let image = expect_context::<RwSignal<LightboxImage>>();
    let id = SurfaceId::new(LIGHTBOX);
    let active = Memo::new(move |_| page.with(|page| page.overlays.is_active(&id)));

    let on_backdrop = move |ev: leptos::ev::MouseEvent| {
        if dom::is_backdrop_click(&ev) {
            dom::run(page, UiEvent::backdrop(LIGHTBOX), None);
        }
    };
    let on_close = move |_| dom::run(page, UiEvent::click(LIGHTBOX_CLOSE, None), None);

    view! {
        <div
            id=LIGHTBOX
            class="lightbox"
            class:active=move || active.get()
            role="dialog"
            aria-modal="true"
            aria-label="Image viewer"
            aria-hidden=move || if active.get() { "false" } else { "true" }
            on:click=on_backdrop
        >
            <button class=LIGHTBOX_CLOSE aria-label="Close image" on:click=on_close>"×"</button>
            <img
                id=LIGHTBOX_IMAGE
                src=move || image.with(|image| image.src.clone())
                alt=move || image.with(|image| image.alt.clone())
            />
        </div>
    }
}
