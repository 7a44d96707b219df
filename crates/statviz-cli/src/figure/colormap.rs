//! Diverging blue-white-red scale for correlation coefficients.

use ratatui::style::Color;

/// Anchor colors at -1, -0.5, 0, 0.5 and 1.
const ANCHORS: [(f64, [u8; 3]); 5] = [
    (-1.0, [59, 76, 192]),
    (-0.5, [141, 176, 254]),
    (0.0, [221, 220, 219]),
    (0.5, [244, 154, 123]),
    (1.0, [180, 4, 38]),
];

pub(crate) const NEGATIVE: Color = rgb(ANCHORS[0].1);
pub(crate) const NEUTRAL: Color = rgb(ANCHORS[2].1);
pub(crate) const POSITIVE: Color = rgb(ANCHORS[4].1);
/// Color of cells without a defined value.
pub(crate) const MISSING: Color = Color::Rgb(127, 127, 127);

const fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::Rgb(r, g, b)
}

/// Maps a correlation in `[-1, 1]` to a color, clamping values outside the range.
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn coolwarm(value: f64) -> Color {
    if value.is_nan() {
        return MISSING;
    }
    let value = value.clamp(-1.0, 1.0);
    let upper = ANCHORS
        .iter()
        .position(|&(at, _)| value <= at)
        .unwrap_or(ANCHORS.len() - 1)
        .max(1);
    let (lo_at, lo) = ANCHORS[upper - 1];
    let (hi_at, hi) = ANCHORS[upper];
    let t = (value - lo_at) / (hi_at - lo_at);
    let channel = |i: usize| {
        let (a, b) = (f64::from(lo[i]), f64::from(hi[i]));
        (a + (b - a) * t).round() as u8
    };
    Color::Rgb(channel(0), channel(1), channel(2))
}

/// Picks black or white text, whichever reads better on `background`.
pub(crate) fn contrast_text(background: Color) -> Color {
    match background {
        Color::Rgb(r, g, b) => {
            let luma = 0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b);
            if luma > 140.0 {
                Color::Black
            } else {
                Color::White
            }
        }
        _ => Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extremes_and_center() {
        assert_eq!(coolwarm(-1.0), NEGATIVE);
        assert_eq!(coolwarm(0.0), NEUTRAL);
        assert_eq!(coolwarm(1.0), POSITIVE);
    }

    #[test]
    fn test_clamps_out_of_range() {
        assert_eq!(coolwarm(-3.0), NEGATIVE);
        assert_eq!(coolwarm(1.0 + 1e-9), POSITIVE);
        assert_eq!(coolwarm(f64::NAN), MISSING);
    }

    #[test]
    fn test_interpolates_between_anchors() {
        let Color::Rgb(r, g, b) = coolwarm(0.25) else {
            panic!("expected rgb color");
        };
        assert_eq!((r, g, b), (233, 187, 171));
        // Positive values lean red, negative values lean blue
        let Color::Rgb(r, _, b) = coolwarm(-0.75) else {
            panic!("expected rgb color");
        };
        assert!(b > r);
    }

    #[test]
    fn test_contrast_text() {
        assert_eq!(contrast_text(NEUTRAL), Color::Black);
        assert_eq!(contrast_text(POSITIVE), Color::White);
        assert_eq!(contrast_text(NEGATIVE), Color::White);
    }
}
