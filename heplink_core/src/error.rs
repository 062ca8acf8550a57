//! Error types.
//!
//! The only failure the site models is "an asset probe did not succeed".
//! Probe implementations report why; the resolver folds every variant into
//! "not found" and moves on.

use thiserror::Error;

/// Why a single existence check did not report success.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    /// The request never produced a response (DNS, connection, CORS, ...).
    #[error("probe transport failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("probe returned status {0}")]
    Status(u16),
}

impl ProbeError {
    /// Build a transport error from anything printable.
    pub fn transport(err: impl std::fmt::Display) -> Self {
        ProbeError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_cause() {
        assert_eq!(
            ProbeError::Status(404).to_string(),
            "probe returned status 404"
        );
        assert_eq!(
            ProbeError::transport("connection refused").to_string(),
            "probe transport failed: connection refused"
        );
    }
}
