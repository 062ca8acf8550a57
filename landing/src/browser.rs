//! The browser window as a navigation source.

use heplink_core::NavigationSource;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen::closure::Closure;
use web_sys::Window;

/// `window.location.hash`, with `hashchange` as the change signal.
#[derive(Clone)]
pub struct BrowserLocation {
    window: Window,
}

impl BrowserLocation {
    /// `None` outside a browser.
    pub fn current() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }
}

impl NavigationSource for BrowserLocation {
    type Subscription = HashChangeListener;

    fn fragment(&self) -> Option<String> {
        self.window
            .location()
            .hash()
            .ok()
            .filter(|hash| !hash.is_empty())
    }

    fn subscribe(&self, on_change: Box<dyn Fn()>) -> HashChangeListener {
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            on_change();
        }) as Box<dyn FnMut(_)>);

        if let Err(err) = self
            .window
            .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref())
        {
            web_sys::console::warn_2(
                &JsValue::from_str("hashchange listener not registered; route will not update:"),
                &err,
            );
        }

        HashChangeListener {
            window: self.window.clone(),
            closure,
        }
    }
}

/// Registered `hashchange` listener; removed on drop.
pub struct HashChangeListener {
    window: Window,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl Drop for HashChangeListener {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            "hashchange",
            self.closure.as_ref().unchecked_ref(),
        );
    }
}
