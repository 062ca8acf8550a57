use heplink_core::motion::cursor_dot_transform;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

const INTERACTIVE: &str = r#"a, button, [role="button"]"#;

/// Small dot trailing the pointer; grows over links and buttons.
///
/// Listeners sit on the window and are removed with the component, as is
/// the dot itself.
#[component]
pub fn CursorDot() -> impl IntoView {
    let (transform, set_transform) = signal(cursor_dot_transform(-100.0, -100.0));
    let (over_interactive, set_over_interactive) = signal(false);

    let moved = window_event_listener(ev::mousemove, move |e| {
        set_transform.set(cursor_dot_transform(
            f64::from(e.client_x()),
            f64::from(e.client_y()),
        ));
    });
    let entered = window_event_listener(ev::mouseover, move |e| {
        set_over_interactive.set(is_interactive(e.target()));
    });
    let left = window_event_listener(ev::mouseout, move |e| {
        if is_interactive(e.target()) && !is_interactive(e.related_target()) {
            set_over_interactive.set(false);
        }
    });

    on_cleanup(move || {
        moved.remove();
        entered.remove();
        left.remove();
    });

    view! {
        <div
            class="cursor-dot"
            class:pointer=move || over_interactive.get()
            style:transform=move || transform.get()
        ></div>
    }
}

fn is_interactive(target: Option<web_sys::EventTarget>) -> bool {
    target
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(INTERACTIVE).ok().flatten())
        .is_some()
}
