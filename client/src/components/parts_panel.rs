//! Parts list for the formula project. Stacks above its project modal.

use folio::consts::{PARTS, PARTS_CLOSE};
use folio::input::UiEvent;
use folio::surface::SurfaceId;
use leptos::prelude::*;

use crate::content::PARTS as PART_LIST;
use crate::state::page::PageSignal;
use crate::util::dom;

#[component]
pub fn PartsPanel() -> impl IntoView {
    let page = expect_context::<PageSignal>();
    let id = SurfaceId::new(PARTS);
    let active = Memo::new(move |_| page.with(|page| page.overlays.is_active(&id)));

    let on_backdrop = move |ev: leptos::ev::MouseEvent| {
        if dom::is_backdrop_click(&ev) {
            dom::run(page, UiEvent::backdrop(PARTS), None);
        }
    };
    let on_close = move |_| dom::run(page, UiEvent::click(PARTS_CLOSE, None), None);

    view! {
        <div
            id=PARTS
            class="uwfe-modal"
            class:active=move || active.get()
            role="dialog"
            aria-modal="true"
            aria-label="Parts"
            aria-hidden=move || if active.get() { "false" } else { "true" }
            on:click=on_backdrop
        >
            <div class="uwfe-modal-content">
                <button class=PARTS_CLOSE aria-label="Close parts" on:click=on_close>"×"</button>
                <h2>"Parts I designed"</h2>
                <table class="parts-table">
                    <thead>
                        <tr>
                            <th>"Part"</th>
                            <th>"Process"</th>
                            <th>"Material"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {PART_LIST
                            .iter()
                            .map(|part| {
                                view! {
                                    <tr>
                                        <td>{part.name}</td>
                                        <td>{part.process}</td>
                                        <td>{part.material}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
