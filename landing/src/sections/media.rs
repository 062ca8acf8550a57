use heplink_core::AssetCandidates;
use heplink_core::asset::default_placeholder;
use leptos::prelude::*;

use crate::asset::use_asset_url;

/// Card image for one stem; shows the placeholder until the file is found.
/// An empty `base` never resolves.
#[component]
pub fn CardImage(base: &'static str, alt: &'static str) -> impl IntoView {
    let url = use_asset_url(AssetCandidates::from(base), default_placeholder());

    view! { <img src=move || url.get() alt=alt loading="lazy" /> }
}
