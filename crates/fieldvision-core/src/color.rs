use serde::{Deserialize, Serialize};

/// An 8-bit HSV triple in the common embedded-vision convention:
/// hue in `[0, 180)` (degrees / 2), saturation and value in `[0, 255]`.
pub type Hsv = [u8; 3];

/// Inclusive per-channel bounds in a 3-channel color space.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ColorRange {
    pub lower: [u8; 3],
    pub upper: [u8; 3],
}

impl ColorRange {
    pub const fn new(lower: [u8; 3], upper: [u8; 3]) -> Self {
        Self { lower, upper }
    }

    /// Red sits on the hue seam, so it needs two bands.
    pub const FTC_RED_HIGH: ColorRange = ColorRange::new([165, 80, 80], [180, 255, 255]);
    pub const FTC_RED_LOW: ColorRange = ColorRange::new([0, 80, 80], [15, 255, 255]);
    pub const FTC_BLUE: ColorRange = ColorRange::new([75, 40, 80], [120, 255, 255]);
    pub const FTC_WHITE: ColorRange = ColorRange::new([0, 0, 40], [180, 30, 255]);

    pub fn red() -> Vec<ColorRange> {
        vec![Self::FTC_RED_HIGH, Self::FTC_RED_LOW]
    }

    pub fn blue() -> Vec<ColorRange> {
        vec![Self::FTC_BLUE]
    }

    pub fn white() -> Vec<ColorRange> {
        vec![Self::FTC_WHITE]
    }

    #[inline]
    pub fn contains(&self, px: [u8; 3]) -> bool {
        (0..3).all(|c| self.lower[c] <= px[c] && px[c] <= self.upper[c])
    }
}

/// Convert one 8-bit RGB pixel to [`Hsv`].
#[inline]
pub fn rgb_to_hsv(rgb: [u8; 3]) -> Hsv {
    let [r, g, b] = rgb.map(|c| c as f32);
    let v = r.max(g).max(b);
    let min = r.min(g).min(b);
    let diff = v - min;

    let s = if v > 0.0 { 255.0 * diff / v } else { 0.0 };
    let mut h = if diff == 0.0 {
        0.0
    } else if v == r {
        60.0 * (g - b) / diff
    } else if v == g {
        120.0 + 60.0 * (b - r) / diff
    } else {
        240.0 + 60.0 * (r - g) / diff
    };
    if h < 0.0 {
        h += 360.0;
    }

    let h = (h / 2.0).round() as u16 % 180;
    [h as u8, s.round() as u8, v as u8]
}
