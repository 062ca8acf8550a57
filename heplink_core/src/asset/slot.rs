//! Generation-guarded asset slot.
//!
//! A slot is the resolver state owned by one mounted image. Every time its
//! candidate list changes a new [`Attempt`] starts with a higher generation.
//! An attempt may only commit while it is the newest one and the slot has not
//! been torn down. Older attempts keep probing until they finish; their
//! result is dropped on the floor.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, trace};

use super::{AssetCandidates, AssetProbe, resolve};

/// Resolution state for one image slot. Cheap to clone; clones share state.
#[derive(Debug, Clone, Default)]
pub struct AssetSlot {
    inner: Arc<SlotState>,
}

#[derive(Debug, Default)]
struct SlotState {
    generation: AtomicU64,
    torn_down: AtomicBool,
    last: Mutex<Option<AssetCandidates>>,
}

impl AssetSlot {
    /// Fresh slot with no attempt yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new attempt for `candidates`.
    ///
    /// Returns `None` when the list is structurally equal to the previous
    /// attempt's (nothing to recompute) or when the slot is torn down.
    /// Starting an attempt retires every earlier one.
    pub fn begin(&self, candidates: AssetCandidates) -> Option<Attempt> {
        if self.is_torn_down() {
            return None;
        }

        let mut last = self
            .inner
            .last
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if last.as_ref() == Some(&candidates) {
            trace!(bases = ?candidates.bases(), "candidates unchanged, keeping current attempt");
            return None;
        }
        *last = Some(candidates.clone());

        let generation = self.inner.generation.fetch_add(1, Ordering::AcqRel) + 1;
        trace!(generation, bases = ?candidates.bases(), "asset attempt started");
        Some(Attempt {
            slot: self.clone(),
            generation,
            candidates,
        })
    }

    /// Retire every in-flight attempt; the owning view is going away.
    ///
    /// Network requests already issued are not aborted.
    pub fn teardown(&self) {
        self.inner.torn_down.store(true, Ordering::Release);
        self.inner.generation.fetch_add(1, Ordering::AcqRel);
    }

    /// True once [`AssetSlot::teardown`] ran.
    pub fn is_torn_down(&self) -> bool {
        self.inner.torn_down.load(Ordering::Acquire)
    }

    fn is_current(&self, generation: u64) -> bool {
        !self.is_torn_down() && self.inner.generation.load(Ordering::Acquire) == generation
    }
}

/// One resolution run of an [`AssetSlot`].
#[derive(Debug)]
pub struct Attempt {
    slot: AssetSlot,
    generation: u64,
    candidates: AssetCandidates,
}

impl Attempt {
    /// Generation number; strictly increasing per slot.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Candidates this attempt probes.
    pub fn candidates(&self) -> &AssetCandidates {
        &self.candidates
    }

    /// Whether a result from this attempt may still be applied.
    pub fn is_live(&self) -> bool {
        self.slot.is_current(self.generation)
    }

    /// Probe the candidates and return the winning path if, by the time it
    /// is found, this attempt is still the live one.
    pub async fn run<P: AssetProbe>(self, probe: &P) -> Option<String> {
        let found = resolve(probe, &self.candidates).await?;
        if self.is_live() {
            Some(found)
        } else {
            debug!(
                generation = self.generation,
                path = %found,
                "discarding stale asset result"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use tokio::sync::Notify;

    use super::*;
    use crate::asset::testing::ScriptedProbe;
    use crate::error::ProbeError;

    /// Probe that parks on every check until released.
    struct GatedProbe {
        inner: ScriptedProbe,
        gate: Rc<Notify>,
    }

    impl AssetProbe for GatedProbe {
        async fn check(&self, path: &str) -> Result<(), ProbeError> {
            self.gate.notified().await;
            self.inner.check(path).await
        }
    }

    #[tokio::test]
    async fn only_the_newest_attempt_commits() {
        let slot = AssetSlot::new();
        let gate = Rc::new(Notify::new());
        let slow = GatedProbe {
            inner: ScriptedProbe::with(&["/durham-image.png"]),
            gate: gate.clone(),
        };
        let fast = ScriptedProbe::with(&["/gst.png"]);

        let first = slot.begin(AssetCandidates::from("durham-image")).unwrap();
        let second_candidates = AssetCandidates::from("gst");

        let (stale, fresh) = tokio::join!(first.run(&slow), async {
            let second = slot.begin(second_candidates).unwrap();
            let url = second.run(&fast).await;
            gate.notify_one();
            url
        });

        assert_eq!(fresh.as_deref(), Some("/gst.png"));
        assert_eq!(stale, None);
    }

    #[tokio::test]
    async fn teardown_discards_in_flight_result() {
        let slot = AssetSlot::new();
        let gate = Rc::new(Notify::new());
        let probe = GatedProbe {
            inner: ScriptedProbe::with(&["/gst.png"]),
            gate: gate.clone(),
        };

        let attempt = slot.begin(AssetCandidates::from("gst")).unwrap();
        let (result, ()) = tokio::join!(attempt.run(&probe), async {
            slot.teardown();
            gate.notify_one();
        });

        assert_eq!(result, None);
        // The request itself still went out.
        assert_eq!(probe.inner.calls(), vec!["/gst.png"]);
    }

    #[test]
    fn unchanged_candidates_do_not_restart() {
        let slot = AssetSlot::new();
        let first = slot.begin(AssetCandidates::from(["a", "b"])).unwrap();

        assert!(slot.begin(AssetCandidates::from(["a", "b"])).is_none());
        assert!(first.is_live());

        let second = slot.begin(AssetCandidates::from(["b", "a"])).unwrap();
        assert!(second.generation() > first.generation());
        assert!(!first.is_live());
        assert!(second.is_live());
    }

    #[test]
    fn torn_down_slot_refuses_new_attempts() {
        let slot = AssetSlot::new();
        slot.teardown();
        assert!(slot.is_torn_down());
        assert!(slot.begin(AssetCandidates::from("gst")).is_none());
    }

    #[tokio::test]
    async fn single_attempt_commits_its_result() {
        let slot = AssetSlot::new();
        let probe = ScriptedProbe::with(&["/aspect-bathrooms.jpeg"]);

        let attempt = slot
            .begin(AssetCandidates::from("aspect-bathrooms"))
            .unwrap();

        assert_eq!(
            attempt.run(&probe).await.as_deref(),
            Some("/aspect-bathrooms.jpeg")
        );
    }
}
