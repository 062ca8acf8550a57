use heplink_core::motion::{MAGNETIC_REST, Rect, magnetic_transform};
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Visual weight of a [`Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Solid red, the primary call to action
    Accent,
    /// White on black
    Light,
    /// Hairline border
    Outline,
}

impl Tone {
    fn class(self) -> &'static str {
        match self {
            Tone::Accent => "btn btn-accent",
            Tone::Light => "btn btn-light",
            Tone::Outline => "btn btn-outline",
        }
    }
}

/// Link styled as a button, pulled toward the pointer.
#[component]
pub fn Button(
    href: &'static str,
    tone: Tone,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let class = if class.is_empty() {
        tone.class().to_string()
    } else {
        format!("{} {class}", tone.class())
    };

    view! {
        <a href=href class="magnetic-link">
            <Magnetic>
                <span class=class>{children()}</span>
            </Magnetic>
        </a>
    }
}

/// Plain accent-colored text link.
#[component]
pub fn GhostLink(href: &'static str, children: Children) -> impl IntoView {
    view! { <a href=href class="ghost-link">{children()}</a> }
}

/// Wrapper that drifts toward the pointer while hovered.
#[component]
fn Magnetic(children: Children) -> impl IntoView {
    let (transform, set_transform) = signal(MAGNETIC_REST.to_string());

    let on_move = move |ev: MouseEvent| {
        let Some(el) = ev
            .current_target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        let r = el.get_bounding_client_rect();
        let rect = Rect {
            left: r.left(),
            top: r.top(),
            width: r.width(),
            height: r.height(),
        };
        set_transform.set(magnetic_transform(
            f64::from(ev.client_x()),
            f64::from(ev.client_y()),
            rect,
        ));
    };

    view! {
        <div
            class="magnetic"
            style:transform=move || transform.get()
            on:mousemove=on_move
            on:mouseleave=move |_| set_transform.set(MAGNETIC_REST.to_string())
        >
            {children()}
        </div>
    }
}
