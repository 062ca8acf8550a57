//! Best-effort image resolution.
//!
//! Callers name an image by its stem ("durham-image") and let the resolver
//! find which extension the deployment actually has. Candidates are tried in
//! order, extensions in the fixed order of [`EXTENSIONS`], one existence
//! check at a time. The first check that succeeds wins and nothing after it
//! is probed. Every failure, whatever its cause, just means "try the next".
//!
//! There is no cache: two slots asking for the same stems each run the full
//! sequence.

mod placeholder;
mod slot;

pub use placeholder::{DEFAULT_LABEL, data_uri, default_placeholder, svg};
pub use slot::{AssetSlot, Attempt};

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::ProbeError;

/// Extensions tried for every candidate, in priority order.
pub const EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

/// Stem substituted when a caller passes no usable candidate.
///
/// No deployment ships `/__nope__.*`, so the probe loop exhausts and the
/// fallback stays visible.
pub const SENTINEL: &str = "__nope__";

/// Existence check against the site's static root.
///
/// `Ok(())` means the path is servable. Implementations report why a path is
/// not available through [`ProbeError`], but the resolver treats all errors
/// alike.
#[allow(async_fn_in_trait)]
pub trait AssetProbe {
    /// Check whether `path` (always of the form `/<base>.<ext>`) exists.
    async fn check(&self, path: &str) -> Result<(), ProbeError>;
}

/// Ordered candidate stems for one image slot.
///
/// Empty stems are dropped on construction. Two candidate lists are equal
/// when they hold the same stems in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AssetCandidates {
    bases: Vec<String>,
}

impl AssetCandidates {
    /// Collect stems, skipping empty ones.
    pub fn new<I, S>(bases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let bases = bases
            .into_iter()
            .map(Into::into)
            .filter(|base| !base.is_empty())
            .collect();
        Self { bases }
    }

    /// The stems that survived filtering.
    pub fn bases(&self) -> &[String] {
        &self.bases
    }

    /// True when no usable stem was supplied.
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// Stems actually probed: the candidates, or [`SENTINEL`] if there are none.
    pub fn effective_bases(&self) -> impl Iterator<Item = &str> {
        let fallback = self.bases.is_empty().then_some(SENTINEL);
        self.bases.iter().map(String::as_str).chain(fallback)
    }

    /// Every path the resolver may check, in the order it checks them.
    pub fn probe_paths(&self) -> impl Iterator<Item = String> + '_ {
        self.effective_bases()
            .flat_map(|base| EXTENSIONS.iter().map(move |ext| asset_path(base, ext)))
    }
}

impl From<&str> for AssetCandidates {
    fn from(base: &str) -> Self {
        Self::new([base])
    }
}

impl From<&[&str]> for AssetCandidates {
    fn from(bases: &[&str]) -> Self {
        Self::new(bases.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for AssetCandidates {
    fn from(bases: [&str; N]) -> Self {
        Self::new(bases)
    }
}

impl From<Vec<String>> for AssetCandidates {
    fn from(bases: Vec<String>) -> Self {
        Self::new(bases)
    }
}

/// Site-root path for a stem and extension.
pub fn asset_path(base: &str, ext: &str) -> String {
    format!("/{base}.{ext}")
}

/// Probe candidates in priority order and return the first path that exists.
///
/// Checks run strictly one after another; a full miss costs
/// `candidates × EXTENSIONS` round trips. Returns `None` when nothing
/// resolved.
pub async fn resolve<P: AssetProbe>(probe: &P, candidates: &AssetCandidates) -> Option<String> {
    for path in candidates.probe_paths() {
        trace!(%path, "probing asset");
        match probe.check(&path).await {
            Ok(()) => {
                debug!(%path, "asset resolved");
                return Some(path);
            }
            Err(err) => debug!(%path, %err, "asset probe missed"),
        }
    }
    debug!(bases = ?candidates.bases(), "no asset resolved, keeping fallback");
    None
}

/// Like [`resolve`], but never empty: yields `fallback` on a full miss.
pub async fn resolve_or<P: AssetProbe>(
    probe: &P,
    candidates: &AssetCandidates,
    fallback: &str,
) -> String {
    resolve(probe, candidates)
        .await
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::HashSet;

    use super::AssetProbe;
    use crate::error::ProbeError;

    /// Probe over a fixed set of existing paths that records every check.
    #[derive(Default)]
    pub struct ScriptedProbe {
        existing: HashSet<String>,
        broken: HashSet<String>,
        calls: RefCell<Vec<String>>,
    }

    impl ScriptedProbe {
        pub fn with(paths: &[&str]) -> Self {
            Self {
                existing: paths.iter().map(|p| p.to_string()).collect(),
                ..Default::default()
            }
        }

        /// Paths that fail at the transport level instead of with a status.
        pub fn broken(mut self, paths: &[&str]) -> Self {
            self.broken = paths.iter().map(|p| p.to_string()).collect();
            self
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl AssetProbe for ScriptedProbe {
        async fn check(&self, path: &str) -> Result<(), ProbeError> {
            self.calls.borrow_mut().push(path.to_string());
            if self.broken.contains(path) {
                return Err(ProbeError::transport("connection reset"));
            }
            if self.existing.contains(path) {
                Ok(())
            } else {
                Err(ProbeError::Status(404))
            }
        }
    }
}
