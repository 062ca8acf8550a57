//! Fragment pseudo-routes.
//!
//! The whole navigation surface is six literal fragments. Matching is by
//! prefix, in a fixed order, and anything unmatched lands on the home page,
//! so the mapping is total.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::compose::{Section, composition};

/// Fragment assumed when the location has none.
pub const HOME_FRAGMENT: &str = "#/home";

/// Page compositions the site can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewSelection {
    /// Full landing page
    Home,
    /// Case studies + community
    Work,
    /// Services + case studies
    Services,
    /// News and insights
    Insights,
    /// Culture and careers
    Careers,
    /// Contact form
    Contact,
}

/// Prefix table, evaluated top to bottom. Home is the fallthrough.
const PREFIXES: [(&str, ViewSelection); 5] = [
    ("#/work", ViewSelection::Work),
    ("#/services", ViewSelection::Services),
    ("#/insights", ViewSelection::Insights),
    ("#/careers", ViewSelection::Careers),
    ("#/contact", ViewSelection::Contact),
];

impl ViewSelection {
    /// Every view, in navigation order.
    pub const ALL: [ViewSelection; 6] = [
        ViewSelection::Home,
        ViewSelection::Work,
        ViewSelection::Services,
        ViewSelection::Insights,
        ViewSelection::Careers,
        ViewSelection::Contact,
    ];

    /// Map a raw fragment to a view. First matching prefix wins; no other
    /// validation happens, so `#/services?x=1` is still Services.
    pub fn from_fragment(fragment: &str) -> Self {
        PREFIXES
            .iter()
            .find(|(prefix, _)| fragment.starts_with(*prefix))
            .map(|(_, view)| *view)
            .unwrap_or(ViewSelection::Home)
    }

    /// Canonical fragment used in links.
    pub const fn fragment(&self) -> &'static str {
        match self {
            ViewSelection::Home => HOME_FRAGMENT,
            ViewSelection::Work => "#/work",
            ViewSelection::Services => "#/services",
            ViewSelection::Insights => "#/insights",
            ViewSelection::Careers => "#/careers",
            ViewSelection::Contact => "#/contact",
        }
    }

    /// Lowercase name, handy for CLI output and CSS hooks.
    pub fn as_label(&self) -> &'static str {
        match self {
            ViewSelection::Home => "home",
            ViewSelection::Work => "work",
            ViewSelection::Services => "services",
            ViewSelection::Insights => "insights",
            ViewSelection::Careers => "careers",
            ViewSelection::Contact => "contact",
        }
    }

    /// Sections rendered for this view, top to bottom.
    pub fn sections(&self) -> &'static [Section] {
        composition(*self)
    }
}

impl fmt::Display for ViewSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_label())
    }
}

/// The location fragment as last observed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RouteToken(String);

impl RouteToken {
    /// Token for a raw fragment; absent or empty reads as `#/home`.
    pub fn from_fragment(fragment: Option<&str>) -> Self {
        match fragment {
            Some(raw) if !raw.is_empty() => RouteToken(raw.to_string()),
            _ => RouteToken::home(),
        }
    }

    /// The `#/home` token.
    pub fn home() -> Self {
        RouteToken(HOME_FRAGMENT.to_string())
    }

    /// Raw fragment text, including the leading `#`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// View this token selects.
    pub fn selection(&self) -> ViewSelection {
        ViewSelection::from_fragment(&self.0)
    }
}

impl Default for RouteToken {
    fn default() -> Self {
        RouteToken::home()
    }
}

impl fmt::Display for RouteToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_prefixes_select_their_views() {
        assert_eq!(ViewSelection::from_fragment("#/work"), ViewSelection::Work);
        assert_eq!(
            ViewSelection::from_fragment("#/services"),
            ViewSelection::Services
        );
        assert_eq!(
            ViewSelection::from_fragment("#/insights"),
            ViewSelection::Insights
        );
        assert_eq!(
            ViewSelection::from_fragment("#/careers"),
            ViewSelection::Careers
        );
        assert_eq!(
            ViewSelection::from_fragment("#/contact"),
            ViewSelection::Contact
        );
    }

    #[test]
    fn suffixes_after_prefix_are_ignored() {
        assert_eq!(
            ViewSelection::from_fragment("#/services?x=1"),
            ViewSelection::Services
        );
        assert_eq!(
            ViewSelection::from_fragment("#/work/durham"),
            ViewSelection::Work
        );
        // Prefix matching is literal: this is still "work".
        assert_eq!(
            ViewSelection::from_fragment("#/workshop"),
            ViewSelection::Work
        );
    }

    #[test]
    fn everything_else_is_home() {
        for fragment in ["", "#", "#/", "#/home", "#/unknown", "work", "#/Work", "/#/work"] {
            assert_eq!(
                ViewSelection::from_fragment(fragment),
                ViewSelection::Home,
                "fragment {fragment:?}"
            );
        }
    }

    #[test]
    fn canonical_fragments_round_trip() {
        for view in ViewSelection::ALL {
            assert_eq!(ViewSelection::from_fragment(view.fragment()), view);
        }
    }

    #[test]
    fn missing_fragment_reads_as_home() {
        assert_eq!(RouteToken::from_fragment(None).as_str(), "#/home");
        assert_eq!(RouteToken::from_fragment(Some("")).as_str(), "#/home");
        assert_eq!(
            RouteToken::from_fragment(Some("#/careers")).selection(),
            ViewSelection::Careers
        );
    }

    #[test]
    fn display_uses_label_and_honors_padding() {
        for view in ViewSelection::ALL {
            assert_eq!(view.to_string(), view.as_label());
        }
        assert_eq!(format!("{:<9}|", ViewSelection::Work), "work     |");
    }

    #[test]
    fn view_serializes_lowercase() {
        let json = serde_json::to_string(&ViewSelection::Insights).unwrap();
        assert_eq!(json, "\"insights\"");
    }
}
