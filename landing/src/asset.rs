//! Image slots backed by HEAD probes against the serving origin.

use heplink_core::{AssetCandidates, AssetProbe, AssetSlot, ProbeError};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{RequestInit, Response};

/// `fetch(path, { method: "HEAD" })` on the current origin.
pub struct FetchProbe;

impl AssetProbe for FetchProbe {
    async fn check(&self, path: &str) -> Result<(), ProbeError> {
        let window = web_sys::window().ok_or_else(|| ProbeError::transport("no window"))?;

        let init = RequestInit::new();
        init.set_method("HEAD");

        let value = JsFuture::from(window.fetch_with_str_and_init(path, &init))
            .await
            .map_err(|err| ProbeError::transport(format!("{err:?}")))?;
        let response: Response = value
            .dyn_into()
            .map_err(|_| ProbeError::transport("fetch did not yield a Response"))?;

        if response.ok() {
            Ok(())
        } else {
            Err(ProbeError::Status(response.status()))
        }
    }
}

/// URL for an image slot: `fallback` until a probe finds a real file, then
/// that file's path.
///
/// Changing `candidates` starts a new resolution; results from an earlier
/// one, or from after the owning component is gone, are dropped.
pub fn use_asset_url(
    candidates: impl Into<Signal<AssetCandidates>>,
    fallback: String,
) -> ReadSignal<String> {
    let candidates = candidates.into();
    let (url, set_url) = signal(fallback);
    let slot = AssetSlot::new();

    let driver = slot.clone();
    Effect::new(move || {
        if let Some(attempt) = driver.begin(candidates.get()) {
            wasm_bindgen_futures::spawn_local(async move {
                if let Some(found) = attempt.run(&FetchProbe).await {
                    set_url.set(found);
                }
            });
        }
    });

    on_cleanup(move || slot.teardown());
    url
}

#[cfg(test)]
mod tests {
    use heplink_core::asset::default_placeholder;
    use leptos::task::Executor;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn starts_on_the_callers_fallback() {
        let _ = Executor::init_wasm_bindgen();
        let owner = Owner::new();
        owner.with(|| {
            let url = use_asset_url(AssetCandidates::from(""), "data:custom".to_string());
            assert_eq!(url.get_untracked(), "data:custom");
        });
    }

    #[wasm_bindgen_test]
    fn placeholder_fallback_is_kept_before_resolution() {
        let _ = Executor::init_wasm_bindgen();
        let owner = Owner::new();
        owner.with(|| {
            let url = use_asset_url(AssetCandidates::from("gst"), default_placeholder());
            assert_eq!(url.get_untracked(), default_placeholder());
        });
    }
}
