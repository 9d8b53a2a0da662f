//! Hero section: staggered pop-in text, the resume button and the ornament.

use folio::consts::{ORNAMENT_CANVAS, RESUME_BUTTON};
use folio::input::UiEvent;
use leptos::prelude::*;

use crate::content::HOME_ID;
use crate::content::reveal_keys::{HERO_ACTIONS, HERO_GREETING, HERO_NAME, HERO_TAGLINE, HERO_VISUAL};
use crate::state::page::PageSignal;
use crate::state::reveal::{RevealState, pop_style, revealed};
use crate::util::dom;

#[component]
pub fn Hero() -> impl IntoView {
    let page = expect_context::<PageSignal>();
    let reveal = expect_context::<RwSignal<RevealState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "csr")]
    {
        let mounted = StoredValue::new(false);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if mounted.get_value() {
                return;
            }
            mounted.set_value(true);
            // Decoration only: without a canvas context the hero stays static.
            if let Err(err) = ornament::engine::mount(Some(canvas)) {
                log::debug!("ornament not mounted: {err}");
            }
        });
    }

    let on_resume = move |_| dom::run(page, UiEvent::click(RESUME_BUTTON, dom::focused()), None);
    let on_projects = move |ev: leptos::ev::MouseEvent| {
        if dom::scroll_to_anchor("#projects") {
            ev.prevent_default();
        }
    };

    view! {
        <section id=HOME_ID class="hero">
            <div class="hero-text">
                <p id=HERO_GREETING class="pop-in" class:visible=revealed(reveal, HERO_GREETING) style=pop_style(reveal, HERO_GREETING)>
                    "Hi, I'm"
                </p>
                <h1 id=HERO_NAME class="pop-in" class:visible=revealed(reveal, HERO_NAME) style=pop_style(reveal, HERO_NAME)>
                    "Alex Kowalski"
                </h1>
                <p id=HERO_TAGLINE class="pop-in" class:visible=revealed(reveal, HERO_TAGLINE) style=pop_style(reveal, HERO_TAGLINE)>
                    "Mechanical engineer building things that move, carry current and survive the track."
                </p>
                <div id=HERO_ACTIONS class="hero-actions pop-in" class:visible=revealed(reveal, HERO_ACTIONS) style=pop_style(reveal, HERO_ACTIONS)>
                    <a class="btn btn--primary" href="#projects" on:click=on_projects>"See projects"</a>
                    <button class=format!("btn {RESUME_BUTTON}") on:click=on_resume>"Resume"</button>
                </div>
            </div>
            <div id=HERO_VISUAL class="hero-visual fade-in" class:visible=revealed(reveal, HERO_VISUAL)>
                <canvas id=ORNAMENT_CANVAS node_ref=canvas_ref aria-hidden="true"></canvas>
            </div>
        </section>
    }
}
