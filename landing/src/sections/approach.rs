use heplink_core::content::ApproachTab;
use leptos::prelude::*;

#[component]
pub fn Approach() -> impl IntoView {
    let (tab, set_tab) = signal(ApproachTab::default());

    view! {
        <section id="approach" class="container section-tight">
            <div class="approach-head">
                <h2 class="heading">"Our approach"</h2>
                <div class="tabs">
                    {ApproachTab::ALL
                        .into_iter()
                        .map(|t| {
                            view! {
                                <button
                                    class="tab"
                                    class:active=move || tab.get() == t
                                    on:click=move |_| set_tab.set(t)
                                >
                                    {t.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            // Rebuilt per tab so the panel animates in again.
            {move || {
                let current = tab.get();
                view! {
                    <div class="card tab-panel tab-in">
                        <div class="tab-title">{current.title()}</div>
                        <div class="tab-body">{current.body()}</div>
                    </div>
                }
            }}
        </section>
    }
}
