//! Project detail modals and their shared backdrop.
//!
//! All project modals sit on one `modalOverlay` backdrop. Gallery images
//! stop their click from bubbling so opening the lightbox never reads as a
//! backdrop click on the modal underneath.

use folio::consts::{GALLERY_IMAGE, MODAL_BACKDROP, MODAL_CLOSE, PARTS_BUTTON};
use folio::input::UiEvent;
use folio::surface::SurfaceId;
use leptos::prelude::*;

use crate::content::{GalleryImage, PROJECTS, Project};
use crate::state::page::{LightboxImage, PageSignal};
use crate::util::dom;
use crate::util::markdown::render_markdown_html;

#[component]
pub fn ProjectModals() -> impl IntoView {
    let page = expect_context::<PageSignal>();
    let backdrop = SurfaceId::new(MODAL_BACKDROP);
    let backdrop_active = move || page.with(|page| page.overlays.is_backdrop_active(&backdrop));
    let on_backdrop = move |ev: leptos::ev::MouseEvent| {
        if dom::is_backdrop_click(&ev) {
            dom::run(page, UiEvent::backdrop(MODAL_BACKDROP), None);
        }
    };

    view! {
        <div id=MODAL_BACKDROP class="modal-overlay" class:active=backdrop_active on:click=on_backdrop></div>
        {PROJECTS.iter().map(|project| view! { <ProjectModal project=*project/> }).collect_view()}
    }
}

#[component]
fn ProjectModal(project: Project) -> impl IntoView {
    let page = expect_context::<PageSignal>();
    let id = SurfaceId::project(project.id);
    let active = {
        let id = id.clone();
        Memo::new(move |_| page.with(|page| page.overlays.is_active(&id)))
    };
    let title_id = format!("{id}-title");

    let on_backdrop = move |ev: leptos::ev::MouseEvent| {
        if dom::is_backdrop_click(&ev) {
            dom::run(page, UiEvent::backdrop(MODAL_BACKDROP), None);
        }
    };
    let on_close = move |_| dom::run(page, UiEvent::click(MODAL_CLOSE, None), None);
    let on_parts = move |_| dom::run(page, UiEvent::click(PARTS_BUTTON, dom::focused()), None);

    view! {
        <div
            id=id.to_string()
            class="modal"
            class:active=active
            role="dialog"
            aria-modal="true"
            aria-labelledby=title_id.clone()
            aria-hidden=move || if active.get() { "false" } else { "true" }
            on:click=on_backdrop
        >
            <div class="modal-content">
                <button class=MODAL_CLOSE aria-label="Close" on:click=on_close>"×"</button>
                <h2 id=title_id.clone() class="modal-title">{project.title}</h2>
                <div class="modal-body" inner_html=render_markdown_html(project.details)></div>
                <div class="modal-gallery">
                    {project.gallery.iter().map(|image| view! { <GalleryThumb image=*image/> }).collect_view()}
                </div>
                {project
                    .has_parts
                    .then(|| {
                        view! {
                            <button class=format!("btn {PARTS_BUTTON}") on:click=on_parts>
                                "View parts"
                            </button>
                        }
                    })}
            </div>
        </div>
    }
}

#[component]
fn GalleryThumb(image: GalleryImage) -> impl IntoView {
    let page = expect_context::<PageSignal>();
    let lightbox = expect_context::<RwSignal<LightboxImage>>();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        lightbox.set(LightboxImage::new(image.src, image.alt));
        dom::run(page, UiEvent::click(GALLERY_IMAGE, dom::focused()), None);
    };

    view! {
        <img class=GALLERY_IMAGE src=image.src alt=image.alt loading="lazy" tabindex="0" on:click=on_click/>
    }
}
