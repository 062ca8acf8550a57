use heplink_core::ViewSelection;
use heplink_core::content::{LOGO_PATH, NAV_LINKS};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use super::{Button, Tone};

const MENU_OPEN_ICON: &str = "M4 7h16M4 12h16M4 17h16";
const MENU_CLOSE_ICON: &str = "M6 6l12 12M18 6L6 18";

/// Logo linking home. The image hides itself if `/logo.png` is missing.
#[component]
pub fn Logo(#[prop(optional)] on_click: Option<Callback<()>>) -> impl IntoView {
    let (image_ok, set_image_ok) = signal(true);

    view! {
        <a
            href=ViewSelection::Home.fragment()
            class="logo"
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            <img
                src=LOGO_PATH
                alt="Heplink"
                style:display=move || if image_ok.get() { "" } else { "none" }
                on:error=move |_| set_image_ok.set(false)
            />
            <span class="logo-text">"Heplink"</span>
        </a>
    }
}

#[component]
pub fn Nav() -> impl IntoView {
    let (open, set_open) = signal(false);
    let close = Callback::new(move |_: ()| set_open.set(false));

    view! {
        <div class="navbar">
            <div class="container navbar-inner">
                <Logo on_click=close />
                <nav class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! { <a href=link.view.fragment() class="nav-link">{link.label}</a> }
                        })
                        .collect_view()}
                </nav>
                <div class="nav-cta">
                    <Button href=ViewSelection::Contact.fragment() tone=Tone::Accent>
                        "Let's talk"
                    </Button>
                </div>
                <button
                    class="hamburger"
                    aria-label="Toggle menu"
                    aria-expanded=move || open.get().to_string()
                    on:click=move |_| set_open.update(|o| *o = !*o)
                >
                    <svg width="20" height="20" viewBox="0 0 24 24" stroke="currentColor" fill="none" stroke-width="2">
                        <path d=move || if open.get() { MENU_CLOSE_ICON } else { MENU_OPEN_ICON } />
                    </svg>
                </button>
            </div>
        </div>

        // Mobile sheet; a click on the backdrop closes it, clicks inside don't.
        <Show when=move || open.get()>
            <div class="sheet-backdrop" on:click=move |_| close.run(())>
                <nav class="sheet" on:click=|ev: MouseEvent| ev.stop_propagation()>
                    <div class="sheet-links">
                        <Logo on_click=close />
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.view.fragment()
                                        class="nav-link"
                                        on:click=move |_| close.run(())
                                    >
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <Button href=ViewSelection::Contact.fragment() tone=Tone::Accent>
                            "Let's talk"
                        </Button>
                    </div>
                </nav>
            </div>
        </Show>
    }
}
