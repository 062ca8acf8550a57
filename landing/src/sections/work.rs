use heplink_core::ViewSelection;
use heplink_core::content::WORK_ITEMS;
use leptos::prelude::*;

use super::{Button, CardImage, GhostLink, Tone};

#[component]
pub fn Work() -> impl IntoView {
    view! {
        <section id="work" class="container section border-top">
            <div class="section-head">
                <div>
                    <h2 class="heading">"Selected work"</h2>
                    <p class="lead" style="max-width: 576px;">
                        "A taste of how brand + performance blend to move the numbers that matter."
                    </p>
                </div>
                <Button href=ViewSelection::Contact.fragment() tone=Tone::Outline class="hide-mobile">
                    "Start a project"
                </Button>
            </div>

            <div class="grid grid-md-3" style="margin-top: 40px;">
                {WORK_ITEMS
                    .iter()
                    .map(|item| {
                        view! {
                            <div class="card card-tilt">
                                <div class="media media-tall">
                                    <CardImage base=item.image alt=item.title />
                                </div>
                                <div class="card-body">
                                    <div class="eyebrow">{item.tag}</div>
                                    <div class="card-title">{item.title}</div>
                                    <div class="card-text">{item.blurb}</div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div style="margin-top: 32px;">
                <GhostLink href=ViewSelection::Work.fragment()>"See more case studies →"</GhostLink>
            </div>
        </section>
    }
}
