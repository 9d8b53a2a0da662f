//! Driving the reveal state from timers and the viewport.
//!
//! At load: immediate entries reveal at once and the stagger plan is put on
//! timers. After the grace delay an `IntersectionObserver` watches every
//! still-hidden viewport entry and unobserves each one once it reveals.

use folio::config::Timing;
use leptos::prelude::*;

use crate::state::reveal::RevealState;

#[cfg(feature = "csr")]
use folio::reveal::Watch;
#[cfg(feature = "csr")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
#[cfg(feature = "csr")]
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Kick off every reveal trigger. Call once, after the page has rendered.
pub fn start(reveal: RwSignal<RevealState>, timing: Timing) {
    reveal.update(|state| {
        state.board.reveal_immediate();
    });
    let Some(plan) = reveal.try_update(|state| state.schedule(&timing)) else {
        return;
    };

    #[cfg(feature = "csr")]
    {
        for scheduled in plan.iter() {
            let key = scheduled.key.clone();
            Timeout::new(scheduled.fire_at_ms, move || {
                reveal.update(|state| {
                    state.reveal(&key);
                });
            })
            .forget();
        }
        Timeout::new(timing.reveal_grace_ms, move || {
            if let Err(err) = watch_viewport(reveal, &timing) {
                log::debug!("viewport reveal unavailable: {err:?}");
            }
        })
        .forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = plan;
    }
}

#[cfg(feature = "csr")]
fn watch_viewport(reveal: RwSignal<RevealState>, timing: &Timing) -> Result<(), JsValue> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let watch = reveal
                    .try_update(|state| state.observe(&target.id(), entry.is_intersecting()))
                    .unwrap_or(Watch::Retire);
                if watch != Watch::Keep {
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(timing.reveal_threshold));
    options.set_root_margin(&timing.root_margin());
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    let document = document();
    for key in reveal.with_untracked(|state| state.board.watch_list()) {
        if let Some(el) = document.get_element_by_id(&key) {
            observer.observe(&el);
        }
    }
    Ok(())
}
