//! Text measurement collaborator

/// Pixel bounding box of a measured string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    pub width: f64,
    pub height: f64,
}

/// Host-provided text measurement primitive.
///
/// The layout derives its margins from one reference glyph measured at the
/// axis font size, so implementations are called once per update. Any
/// backing resource (an off-screen element, a font rasterizer handle) must
/// be acquired and released within the call, on every path.
pub trait TextMeasurer {
    fn measure(&mut self, text: &str, font_size_pt: f64) -> TextMetrics;
}

/// Character-box approximation for hosts without a measurement primitive,
/// and for tests and benches. Uses the CSS pt-to-px ratio and an average
/// advance of 0.6em.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproxMeasurer;

impl TextMeasurer for ApproxMeasurer {
    fn measure(&mut self, text: &str, font_size_pt: f64) -> TextMetrics {
        let px = font_size_pt * 4.0 / 3.0;
        TextMetrics {
            width: text.chars().count() as f64 * px * 0.6,
            height: px,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_scales_with_font_size() {
        let mut m = ApproxMeasurer;
        let small = m.measure("W", 9.0);
        let large = m.measure("W", 18.0);
        assert_eq!(small.height, 12.0);
        assert_eq!(large.height, 24.0);
        assert!(large.width > small.width);
    }

    #[test]
    fn test_approx_scales_with_length() {
        let mut m = ApproxMeasurer;
        let one = m.measure("W", 9.0);
        let three = m.measure("WWW", 9.0);
        assert!((three.width - 3.0 * one.width).abs() < 1e-9);
    }
}
