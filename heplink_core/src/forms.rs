//! Inert form handling.
//!
//! The newsletter and contact forms have no backend. A submit is swallowed
//! after the browser default is prevented: nothing is validated, sent or
//! stored.

use tracing::debug;

/// Forms present on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    /// "Heplink Pulse" email signup
    Newsletter,
    /// "Got a brief?" contact form
    Contact,
}

/// What happened to a submission. There is only one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The submission was dropped without side effects.
    Discarded,
}

/// Handle a submit of `kind`. Callers prevent the default action first.
pub fn intercept(kind: FormKind) -> SubmitOutcome {
    debug!(form = ?kind, "form submit intercepted, nothing sent");
    SubmitOutcome::Discarded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_form_discards() {
        assert_eq!(intercept(FormKind::Newsletter), SubmitOutcome::Discarded);
        assert_eq!(intercept(FormKind::Contact), SubmitOutcome::Discarded);
    }
}
