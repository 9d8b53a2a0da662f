//! Contact section. Submitting only validates and acknowledges; nothing is
//! sent anywhere.

use folio::consts::CONTACT_FORM;
use folio::form::{ContactForm, submit};
use leptos::prelude::*;

use crate::content::reveal_keys::{CONTACT_BODY, CONTACT_TITLE};
use crate::state::reveal::{RevealState, revealed};
use crate::util::notify::AlertNotifier;

#[component]
pub fn Contact() -> impl IntoView {
    let reveal = expect_context::<RwSignal<RevealState>>();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut form = ContactForm::new(name.get_untracked(), email.get_untracked(), message.get_untracked());
        if submit(&mut form, &mut AlertNotifier).is_ok() {
            name.set(form.name);
            email.set(form.email);
            message.set(form.message);
        }
    };

    view! {
        <section id="contact" class="section contact">
            <h2 id=CONTACT_TITLE class="section-title fade-in" class:visible=revealed(reveal, CONTACT_TITLE)>
                "Get in touch"
            </h2>
            <div id=CONTACT_BODY class="contact-body fade-in" class:visible=revealed(reveal, CONTACT_BODY)>
                <form id=CONTACT_FORM class="contact-form" on:submit=on_submit novalidate=true>
                    <label for="name">"Name"</label>
                    <input
                        id="name"
                        name="name"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        name="email"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label for="message">"Message"</label>
                    <textarea
                        id="message"
                        name="message"
                        rows="5"
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                    <button class="btn btn--primary" type="submit">"Send"</button>
                </form>
            </div>
        </section>
    }
}
