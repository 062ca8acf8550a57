//! Pointer math for the decorative effects.
//!
//! The landing page only wires DOM events to these functions; keeping the
//! arithmetic here lets it be tested without a browser.

/// Fraction of the pointer's distance from center that a magnetic element
/// follows.
pub const MAGNETIC_STRENGTH: f64 = 0.06;

/// Half the cursor dot's size; the dot is centered on the pointer.
pub const CURSOR_DOT_RADIUS: f64 = 5.0;

/// Transform restoring a magnetic element to rest.
pub const MAGNETIC_REST: &str = "translate(0,0)";

/// Element box in viewport coordinates (as from `getBoundingClientRect`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge
    pub left: f64,
    /// Top edge
    pub top: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl Rect {
    /// Center point.
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Offset a magnetic element should move by for a pointer at `(x, y)`.
pub fn magnetic_offset(x: f64, y: f64, rect: Rect) -> (f64, f64) {
    let (cx, cy) = rect.center();
    ((x - cx) * MAGNETIC_STRENGTH, (y - cy) * MAGNETIC_STRENGTH)
}

/// CSS transform for a magnetic element under a pointer at `(x, y)`.
pub fn magnetic_transform(x: f64, y: f64, rect: Rect) -> String {
    let (dx, dy) = magnetic_offset(x, y, rect);
    translate(dx, dy)
}

/// CSS transform placing the cursor dot centered on `(x, y)`.
pub fn cursor_dot_transform(x: f64, y: f64) -> String {
    translate(x - CURSOR_DOT_RADIUS, y - CURSOR_DOT_RADIUS)
}

fn translate(dx: f64, dy: f64) -> String {
    format!("translate({dx}px, {dy}px)")
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUTTON: Rect = Rect {
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 40.0,
    };

    #[test]
    fn pointer_at_center_does_not_move() {
        assert_eq!(magnetic_offset(200.0, 70.0, BUTTON), (0.0, 0.0));
    }

    #[test]
    fn offset_follows_six_percent_of_distance() {
        let (dx, dy) = magnetic_offset(300.0, 20.0, BUTTON);
        assert!((dx - 6.0).abs() < 1e-9);
        assert!((dy + 3.0).abs() < 1e-9);
    }

    #[test]
    fn cursor_dot_is_centered_on_pointer() {
        assert_eq!(cursor_dot_transform(15.0, 25.0), "translate(10px, 20px)");
    }
}
