//! Applying page effects to the document.
//!
//! [`run`] is the single entry point components use: it feeds a [`UiEvent`]
//! through the page signal and applies the returned effects. Overlay
//! visibility itself is reactive (`class:active` reads the page), so `Shown`
//! and `Hidden` only log here.
//!
//! Every DOM lookup that comes back empty is a silent no-op.

use folio::engine::Effect as PageEffect;
use folio::input::UiEvent;
use leptos::prelude::*;

use crate::state::page::{FocusTarget, PageSignal};

#[cfg(feature = "csr")]
use folio::focus::FOCUSABLE_SELECTOR;
#[cfg(feature = "csr")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;

/// Dispatch `event` and apply its effects. `dom_event` is the browser event
/// that triggered it, for `PreventDefault`. Unbound events (most key
/// presses) never touch the signal, so readers are not woken.
pub fn run(page: PageSignal, event: UiEvent<FocusTarget>, dom_event: Option<&leptos::ev::Event>) {
    if !page.with_untracked(|page| page.handles(&event)) {
        return;
    }
    let effects = page.try_update(|page| page.dispatch(event)).unwrap_or_default();
    apply(&effects, dom_event);
}

/// Whether a click landed on the element carrying the handler rather than
/// on its content.
pub fn is_backdrop_click(ev: &leptos::ev::MouseEvent) -> bool {
    ev.target().is_some() && ev.target() == ev.current_target()
}

#[cfg(feature = "csr")]
fn apply(effects: &[PageEffect<FocusTarget>], dom_event: Option<&leptos::ev::Event>) {
    for effect in effects {
        match effect {
            PageEffect::Shown(id) => log::debug!("overlay shown: {id}"),
            PageEffect::Hidden(id) => log::debug!("overlay hidden: {id}"),
            PageEffect::LockScroll => set_body_overflow("hidden"),
            PageEffect::UnlockScroll => set_body_overflow(""),
            PageEffect::Focus(el) => focus(el),
            PageEffect::FocusInitial { surface, selector, delay_ms } => {
                let surface = surface.clone();
                let selector = selector.clone();
                Timeout::new(*delay_ms, move || focus_within(surface.as_str(), &selector)).forget();
            }
            PageEffect::PreventDefault => {
                if let Some(ev) = dom_event {
                    ev.prevent_default();
                }
            }
        }
    }
}

#[cfg(not(feature = "csr"))]
fn apply(_effects: &[PageEffect<FocusTarget>], _dom_event: Option<&leptos::ev::Event>) {}

/// The element holding keyboard focus, if it is an HTML element.
pub fn focused() -> Option<FocusTarget> {
    #[cfg(feature = "csr")]
    {
        document().active_element()?.dyn_into::<web_sys::HtmlElement>().ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Focusable descendants of the topmost active overlay, queried fresh.
pub fn focusables(page: PageSignal) -> Vec<FocusTarget> {
    #[cfg(feature = "csr")]
    {
        let Some(top) = page.with_untracked(|page| page.overlays.top().cloned()) else {
            return Vec::new();
        };
        let Some(overlay) = document().get_element_by_id(top.as_str()) else {
            return Vec::new();
        };
        let Ok(nodes) = overlay.query_selector_all(FOCUSABLE_SELECTOR) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
            .collect()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = page;
        Vec::new()
    }
}

/// Smooth-scroll to an in-page anchor. Returns whether a target was found,
/// in which case the caller should cancel the link's default navigation.
pub fn scroll_to_anchor(href: &str) -> bool {
    let Some(target) = folio::nav::anchor_target(href) else {
        return false;
    };
    #[cfg(feature = "csr")]
    {
        let Some(el) = document().get_element_by_id(target) else {
            return false;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = target;
        false
    }
}

#[cfg(feature = "csr")]
fn set_body_overflow(value: &str) {
    let Some(body) = document().body() else {
        return;
    };
    if let Err(err) = body.style().set_property("overflow", value) {
        log::debug!("body overflow not set: {err:?}");
    }
}

#[cfg(feature = "csr")]
fn focus(el: &web_sys::HtmlElement) {
    if let Err(err) = el.focus() {
        log::debug!("focus failed: {err:?}");
    }
}

#[cfg(feature = "csr")]
fn focus_within(surface: &str, selector: &str) {
    let Some(overlay) = document().get_element_by_id(surface) else {
        return;
    };
    let Ok(Some(el)) = overlay.query_selector(selector) else {
        return;
    };
    if let Ok(el) = el.dyn_into::<web_sys::HtmlElement>() {
        focus(&el);
    }
}
