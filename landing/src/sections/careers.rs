use heplink_core::ViewSelection;
use leptos::prelude::*;

use super::{Button, Tone};

/// Headline numbers: (value, label).
const STATS: &[(&str, &str)] = &[
    ("200+", "projects shipped"),
    ("4", "core capabilities"),
    ("10y", "in social"),
];

#[component]
pub fn Careers() -> impl IntoView {
    view! {
        <section id="careers" class="container section border-top">
            <div class="grid grid-lg-2 items-center" style="gap: 40px;">
                <div>
                    <h3 class="heading">"Culture & careers"</h3>
                    <p class="lead">
                        "We’re a team of platform natives, creators and marketers who love solving hard problems. Sound like you?"
                    </p>
                    <div class="actions" style="margin-top: 24px;">
                        <Button href=ViewSelection::Careers.fragment() tone=Tone::Accent>
                            "See open roles"
                        </Button>
                        <Button href=ViewSelection::Careers.fragment() tone=Tone::Outline>
                            "Life here"
                        </Button>
                    </div>
                </div>
                <div class="card" style="padding: 24px;">
                    <div class="stats">
                        {STATS
                            .iter()
                            .map(|(value, label)| {
                                view! {
                                    <div>
                                        <div class="stat-value">{*value}</div>
                                        <div class="stat-label">{*label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
