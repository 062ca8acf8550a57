//! Native [`AssetProbe`] transports.

use std::io::ErrorKind;
use std::path::PathBuf;

use heplink_core::asset::AssetProbe;
use heplink_core::error::ProbeError;
use reqwest::Client;

/// HEAD requests against a deployed site.
pub struct HttpProbe {
    client: Client,
    base_url: String,
}

impl HttpProbe {
    /// Probe paths relative to `base_url` (trailing `/` is ignored).
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl AssetProbe for HttpProbe {
    async fn check(&self, path: &str) -> Result<(), ProbeError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .head(&url)
            .send()
            .await
            .map_err(ProbeError::transport)?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ProbeError::Status(status.as_u16()))
        }
    }
}

/// File existence under a local static root (e.g. a build's `dist/`).
pub struct DirProbe {
    root: PathBuf,
}

impl DirProbe {
    /// Probe files under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetProbe for DirProbe {
    async fn check(&self, path: &str) -> Result<(), ProbeError> {
        let file = self.root.join(path.trim_start_matches('/'));
        match tokio::fs::metadata(&file).await {
            Ok(meta) if meta.is_file() => Ok(()),
            Ok(_) => Err(ProbeError::Status(404)),
            Err(err) if err.kind() == ErrorKind::NotFound => Err(ProbeError::Status(404)),
            Err(err) => Err(ProbeError::transport(err)),
        }
    }
}
