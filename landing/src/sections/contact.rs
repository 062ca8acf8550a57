use heplink_core::forms::{self, FormKind};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

struct Mailbox {
    label: &'static str,
    address: &'static str,
}

const MAILBOXES: &[Mailbox] = &[
    Mailbox {
        label: "General",
        address: "hello@heplink.co",
    },
    Mailbox {
        label: "New business",
        address: "newbiz@heplink.co",
    },
];

/// "Got a brief?" panel. The form has no backend; submitting it does
/// nothing.
#[component]
pub fn Contact() -> impl IntoView {
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        forms::intercept(FormKind::Contact);
    };

    view! {
        <section id="contact" class="container section">
            <div class="grid grid-md-2" style="gap: 40px;">
                <div>
                    <h3 class="heading">"Got a brief?"</h3>
                    <p class="lead">
                        "Tell us what you’re trying to achieve. We’ll reply within two working days."
                    </p>
                    <div class="grid grid-sm-2" style="margin-top: 24px;">
                        {MAILBOXES
                            .iter()
                            .map(|mailbox| {
                                view! {
                                    <div>
                                        <div class="mailbox-label">{mailbox.label}</div>
                                        <div class="mailbox-address">{mailbox.address}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <form class="contact-form" on:submit=on_submit>
                    <div class="grid grid-sm-2" style="gap: 16px;">
                        <input class="input" placeholder="Name" />
                        <input class="input" placeholder="Email" />
                    </div>
                    <input class="input" placeholder="Company" />
                    <textarea class="input" placeholder="Tell us about your project" rows="5"></textarea>
                    <button class="btn btn-accent" type="submit">"Send"</button>
                </form>
            </div>
        </section>
    }
}
