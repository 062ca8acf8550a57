use heplink_core::ViewSelection;
use heplink_core::content::POSTS;
use leptos::prelude::*;

use super::{CardImage, GhostLink};

#[component]
pub fn Insights() -> impl IntoView {
    view! {
        <section id="insights" class="container section">
            <h3 class="heading">"News & insights"</h3>
            <div class="grid grid-md-3" style="margin-top: 32px;">
                {POSTS
                    .iter()
                    .map(|post| {
                        view! {
                            <div class="card" style="overflow: hidden;">
                                <div class="media media-short">
                                    <CardImage base=post.image alt=post.title />
                                </div>
                                <div class="card-body">
                                    <div class="eyebrow">{post.tag}</div>
                                    <div class="card-title">{post.title}</div>
                                    <GhostLink href=ViewSelection::Insights.fragment()>"Read →"</GhostLink>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
