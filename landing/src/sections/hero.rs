use heplink_core::asset::default_placeholder;
use heplink_core::content::HERO_IMAGE;
use heplink_core::{AssetCandidates, ViewSelection};
use leptos::prelude::*;

use super::{Button, Tone};
use crate::asset::use_asset_url;

#[component]
pub fn Hero() -> impl IntoView {
    let background = use_asset_url(AssetCandidates::from(HERO_IMAGE), default_placeholder());

    view! {
        <div
            id="hero"
            class="hero"
            style:background-image=move || format!("url(\"{}\")", background.get())
        >
            <div class="hero-shade"></div>
            <div class="container hero-body">
                <div class="hero-copy fade-in">
                    <p class="hero-kicker">"Social-first creative partner"</p>
                    <h1 class="hero-title">
                        "Helping brands "
                        <span class="hero-accent">"earn attention"</span>
                        " in a social-first world."
                    </h1>
                    <p class="hero-sub">
                        "Strategy. Creative. Creators. Media. Integrated to turn communities into customers."
                    </p>
                    <div class="actions">
                        <Button href=ViewSelection::Work.fragment() tone=Tone::Accent>
                            "See our work"
                        </Button>
                        <Button href=ViewSelection::Services.fragment() tone=Tone::Light>
                            "What we do"
                        </Button>
                    </div>
                </div>
            </div>
        </div>
    }
}
