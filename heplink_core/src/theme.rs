//! Design tokens.
//!
//! The palette is configuration, not state: one immutable [`Theme`] value
//! that components receive by reference.

use serde::Serialize;

/// Colors shared by every section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    /// Page background
    pub bg: &'static str,
    /// Raised surfaces (sticky nav, sheets)
    pub surface: &'static str,
    /// Primary text
    pub text: &'static str,
    /// Secondary text
    pub sub: &'static str,
    /// Hairline borders
    pub border: &'static str,
    /// Card fill
    pub card: &'static str,
    /// Brand accent
    pub accent: &'static str,
    /// Lighter accent used in gradients
    pub accent_light: &'static str,
}

impl Theme {
    /// The Heplink palette: black canvas, zinc neutrals, red accent.
    pub const HEPLINK: Theme = Theme {
        bg: "#000000",
        surface: "#09090b",
        text: "#ffffff",
        sub: "#d4d4d8",
        border: "#27272a",
        card: "#09090b",
        accent: "#ff0000",
        accent_light: "#ff6666",
    };

    /// `:root` block exposing the tokens as CSS custom properties.
    pub fn css_variables(&self) -> String {
        format!(
            ":root {{\n    --bg: {};\n    --surface: {};\n    --text: {};\n    --sub: {};\n    \
             --border: {};\n    --card: {};\n    --accent: {};\n    --accent-light: {};\n}}\n",
            self.bg,
            self.surface,
            self.text,
            self.sub,
            self.border,
            self.card,
            self.accent,
            self.accent_light,
        )
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::HEPLINK
    }
}
