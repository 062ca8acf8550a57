use heplink_core::ViewSelection;
use heplink_core::forms::{self, FormKind};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::{Button, Tone};

const PULSE_POINTS: &[&str] = &[
    "Platform shift: captions + hooks that keep watch time",
    "Creator collabs: smaller creators, bigger trust",
    "Attribution: simple frameworks that clients get",
];

/// "Heplink Pulse" newsletter pitch with the latest issue.
#[component]
pub fn Community() -> impl IntoView {
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        forms::intercept(FormKind::Newsletter);
    };

    view! {
        <div id="community" class="border-y" style="position: relative; overflow: hidden;">
            <div class="container section">
                <div class="grid grid-lg-2 items-center" style="gap: 40px;">
                    <div class="fade-in">
                        <h3 class="heading">"Heplink Pulse"</h3>
                        <p class="lead">
                            "A weekly signal on what actually matters in social: trends, formats, and tactics you can use."
                        </p>
                        <form class="pulse-form" on:submit=on_submit>
                            <input class="input" type="email" placeholder="Your email" />
                            <button class="btn btn-accent" type="submit">"Join"</button>
                        </form>
                        <p class="dim" style="margin-top: 8px; font-size: 12px;">
                            "No spam. Unsubscribe anytime."
                        </p>
                    </div>
                    <div class="card pulse-card fade-in">
                        <div style="font-size: 14px; font-weight: 500;">"Latest Pulse"</div>
                        <h4 style="margin: 12px 0 0; font-size: 18px; font-weight: 600;">
                            "Creative that converts: short-form edits that actually move the funnel"
                        </h4>
                        <ul class="pulse-list">
                            {PULSE_POINTS.iter().map(|point| view! { <li>{*point}</li> }).collect_view()}
                        </ul>
                        <div style="margin-top: 24px;">
                            <Button href=ViewSelection::Insights.fragment() tone=Tone::Outline>
                                "Read more"
                            </Button>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
