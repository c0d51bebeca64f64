//! Rating badge math: clamp a 1-10 rating and map it onto a red-to-green hue.

/// Lowest rating shown on a badge
pub const MIN_RATING: f64 = 1.0;
/// Highest rating shown on a badge
pub const MAX_RATING: f64 = 10.0;

/// Partial circle glyphs from empty to full
const SWEEP_GLYPHS: [&str; 5] = ["○", "◔", "◑", "◕", "●"];

/// A diagnosis confidence rating ready for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingBadge {
    value: f64,
}

impl RatingBadge {
    /// Clamp `rating` into [1, 10]. NaN reads as the lowest rating.
    pub fn new(rating: f64) -> Self {
        let value = if rating.is_nan() {
            MIN_RATING
        } else {
            rating.clamp(MIN_RATING, MAX_RATING)
        };
        Self { value }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Position of the rating on the scale, 0 to 100
    pub fn percentage(&self) -> f64 {
        (self.value - MIN_RATING) / (MAX_RATING - MIN_RATING) * 100.0
    }

    /// Hue in degrees: 0 is red, 120 is green
    pub fn hue(&self) -> f64 {
        self.percentage() * 1.2
    }

    /// Arc length of the badge ring out of 100
    pub fn sweep(&self) -> f64 {
        self.percentage() * 1.13
    }

    /// Badge color at full saturation and 50% lightness
    pub fn rgb(&self) -> (u8, u8, u8) {
        hsl_to_rgb(self.hue(), 1.0, 0.5)
    }

    /// Ring glyph approximating the sweep
    pub fn glyph(&self) -> &'static str {
        let fraction = (self.sweep() / 100.0).clamp(0.0, 1.0);
        let index = (fraction * (SWEEP_GLYPHS.len() - 1) as f64).round() as usize;
        SWEEP_GLYPHS[index]
    }

    /// Rating text: whole numbers without a decimal point
    pub fn label(&self) -> String {
        if self.value.fract() == 0.0 {
            format!("{}", self.value as i64)
        } else {
            format!("{:.1}", self.value)
        }
    }
}

/// Convert HSL (hue in degrees, saturation and lightness in 0..=1) to RGB.
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    let h = hue.rem_euclid(360.0) / 60.0;
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = lightness - c / 2.0;

    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (channel(r), channel(g), channel(b))
}
