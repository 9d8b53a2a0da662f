use leptos::prelude::*;

use crate::content::reveal_keys::{ABOUT_CONTENT, ABOUT_TITLE};
use crate::state::reveal::{RevealState, pop_style, revealed};

/// About section. Its heading and body close the hero's pop-in sequence.
#[component]
pub fn About() -> impl IntoView {
    let reveal = expect_context::<RwSignal<RevealState>>();

    view! {
        <section id="about" class="section about">
            <h2 id=ABOUT_TITLE class="section-title pop-in" class:visible=revealed(reveal, ABOUT_TITLE) style=pop_style(reveal, ABOUT_TITLE)>
                "About"
            </h2>
            <div id=ABOUT_CONTENT class="about-content" class:visible=revealed(reveal, ABOUT_CONTENT)>
                <p>
                    "I design mechanical systems for electric vehicles and small robots, "
                    "from first sketch through FEA to parts on the bench."
                </p>
                <p>
                    "Most recently I led accumulator packaging for a student formula team "
                    "and built the telemetry that let the pit watch the car live."
                </p>
            </div>
        </section>
    }
}
