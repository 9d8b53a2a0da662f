//! Site header with the collapsible navigation menu.

use folio::consts::{NAV_LINK, NAV_MENU, NAV_TOGGLE};
use folio::input::UiEvent;
use leptos::prelude::*;

use crate::content::{HOME_ANCHOR, NAV_LINKS};
use crate::state::page::PageSignal;
use crate::util::dom;

#[component]
pub fn Nav() -> impl IntoView {
    let page = expect_context::<PageSignal>();
    let expanded = move || page.with(|page| page.nav.expanded());

    let on_logo = move |ev: leptos::ev::MouseEvent| {
        if dom::scroll_to_anchor(HOME_ANCHOR) {
            ev.prevent_default();
        }
    };
    let on_toggle = move |_| dom::run(page, UiEvent::click(NAV_TOGGLE, dom::focused()), None);

    view! {
        <header class="site-header">
            <nav class="nav">
                <a class="nav-logo" href=HOME_ANCHOR on:click=on_logo>"AK"</a>
                <button
                    id=NAV_TOGGLE
                    class="nav-toggle"
                    class:active=expanded
                    aria-label="Toggle navigation"
                    aria-controls=NAV_MENU
                    aria-expanded=move || page.with(|page| page.nav.aria_expanded())
                    on:click=on_toggle
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <ul id=NAV_MENU class="nav-menu" class:active=expanded>
                    {NAV_LINKS
                        .iter()
                        .map(|&(href, label)| {
                            let on_click = move |ev: leptos::ev::MouseEvent| {
                                if dom::scroll_to_anchor(href) {
                                    ev.prevent_default();
                                }
                                dom::run(page, UiEvent::click(NAV_LINK, None), None);
                            };
                            view! {
                                <li>
                                    <a class="nav-link" href=href on:click=on_click>{label}</a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
        </header>
    }
}
