//! Generated fallback image.
//!
//! When no probe succeeds the slot keeps showing an inline SVG: a 1600x900
//! diagonal gradient in the brand accents with a centered label. It needs no
//! network, so the fallback always renders.

use crate::theme::Theme;

/// Label drawn on the default placeholder.
pub const DEFAULT_LABEL: &str = "Heplink image";

const WIDTH: u32 = 1600;
const HEIGHT: u32 = 900;

/// Raw SVG markup for a placeholder carrying `label`.
pub fn svg(label: &str, theme: &Theme) -> String {
    format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{WIDTH}' height='{HEIGHT}'>\
<defs><linearGradient id='g' x1='0' y1='0' x2='1' y2='1'>\
<stop offset='0%' stop-color='{light}'/><stop offset='100%' stop-color='{accent}'/>\
</linearGradient></defs>\
<rect fill='url(#g)' width='100%' height='100%'/>\
<text x='50%' y='50%' fill='white' font-family='Arial, Helvetica, sans-serif' \
font-size='36' text-anchor='middle'>{label}</text>\
</svg>",
        light = theme.accent_light,
        accent = theme.accent,
        label = escape_xml(label),
    )
}

/// Placeholder as a `data:` URI usable directly in `src` or `url(...)`.
pub fn data_uri(label: &str, theme: &Theme) -> String {
    format!(
        "data:image/svg+xml;utf8,{}",
        urlencoding::encode(&svg(label, theme))
    )
}

/// The site's default placeholder: [`DEFAULT_LABEL`] on [`Theme::HEPLINK`].
pub fn default_placeholder() -> String {
    data_uri(DEFAULT_LABEL, &Theme::HEPLINK)
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_carries_dimensions_gradient_and_label() {
        let markup = svg("Heplink image", &Theme::HEPLINK);
        assert!(markup.contains("width='1600'"));
        assert!(markup.contains("height='900'"));
        assert!(markup.contains("stop-color='#ff6666'"));
        assert!(markup.contains("stop-color='#ff0000'"));
        assert!(markup.contains(">Heplink image</text>"));
    }

    #[test]
    fn data_uri_is_percent_encoded_once() {
        let uri = default_placeholder();
        assert!(uri.starts_with("data:image/svg+xml;utf8,"));
        assert!(uri.contains("%23ff0000"));
        assert!(!uri.contains("%2523"));
        assert!(!uri.contains('<'));
    }

    #[test]
    fn label_is_escaped() {
        let markup = svg("R&D <lab>", &Theme::HEPLINK);
        assert!(markup.contains("R&amp;D &lt;lab&gt;"));
    }
}
