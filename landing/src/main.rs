// Heplink landing page, Leptos 0.8 CSR
// Built by the Heplink team

mod asset;
mod browser;
mod pages;
mod sections;
mod styles;

use heplink_core::{HashRouter, RouteToken};
use leptos::prelude::*;
use wasm_bindgen::JsValue;

use browser::BrowserLocation;
use pages::Page;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    print_banner();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

fn print_banner() {
    web_sys::console::log_2(
        &JsValue::from_str("%cHeplink. Born social. Built for outcomes."),
        &JsValue::from_str("color: #ff0000; font-weight: bold;"),
    );
    web_sys::console::log_2(
        &JsValue::from_str("%cNew business: newbiz@heplink.co"),
        &JsValue::from_str("color: #d4d4d8;"),
    );
}

#[component]
fn App() -> impl IntoView {
    let router = BrowserLocation::current().map(|location| HashRouter::mount(&location));
    let initial = router
        .as_ref()
        .map(HashRouter::token)
        .unwrap_or_else(RouteToken::home);
    let (route, set_route) = signal(initial);

    if let Some(router) = router {
        router.on_change(move |token| set_route.set(token.clone()));
        // Lives as long as the app; dropping it removes the hashchange listener.
        StoredValue::new_local(router);
    }

    view! {
        <style>{styles::site_css()}</style>
        <div class="app">
            <CursorDot />
            <Nav />
            // Re-rendered per fragment so the enter animation replays.
            {move || {
                let token = route.get();
                view! {
                    <div class="page-transition">
                        <Page selection=token.selection() />
                    </div>
                }
            }}
            <Footer />
        </div>
    }
}
