// Page compositions
// Built by the Heplink team

use heplink_core::ViewSelection;
use heplink_core::compose::Section;
use leptos::prelude::*;

use crate::sections::{Approach, Careers, Community, Contact, Hero, Insights, Services, Work};

/// Every section `selection` lists, top to bottom.
#[component]
pub fn Page(selection: ViewSelection) -> impl IntoView {
    view! {
        <main class=format!("page page-{}", selection.as_label())>
            {selection.sections().iter().copied().map(render).collect_view()}
        </main>
    }
}

fn render(section: Section) -> AnyView {
    match section {
        Section::Hero => view! { <Hero /> }.into_any(),
        Section::Services => view! { <Services /> }.into_any(),
        Section::Approach => view! { <Approach /> }.into_any(),
        Section::Work => view! { <Work /> }.into_any(),
        Section::Community => view! { <Community /> }.into_any(),
        Section::Insights => view! { <Insights /> }.into_any(),
        Section::Careers => view! { <Careers /> }.into_any(),
        Section::Contact => view! { <Contact /> }.into_any(),
    }
}
