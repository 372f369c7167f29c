use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    math::{approach_num, normalize_zero_to_one},
};

/// Upper bound of a colour channel.
pub const CHANNEL_MAX: f64 = 255.0;

/// An RGBA colour. Channels are in `[0, 255]`, alpha in `[0, 1]`. Values are
/// kept as floats so that colours can be interpolated smoothly; drawing
/// backends round them.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
    /// Opacity.
    #[serde(default = "opaque")]
    pub a: f64,
}

/// Serde default for alpha.
fn opaque() -> f64 {
    1.0
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    /// Red.
    pub const RED: Self = Self::new(255.0, 0.0, 0.0);
    /// Green.
    pub const GREEN: Self = Self::new(0.0, 255.0, 0.0);
    /// Blue.
    pub const BLUE: Self = Self::new(0.0, 0.0, 255.0);
    /// Pink.
    pub const PINK: Self = Self::new(255.0, 0.0, 255.0);
    /// Yellow.
    pub const YELLOW: Self = Self::new(255.0, 255.0, 0.0);
    /// Aqua.
    pub const AQUA: Self = Self::new(0.0, 255.0, 255.0);
    /// Pastel red.
    pub const P_RED: Self = Self::new(255.0, 128.0, 128.0);
    /// Pastel green.
    pub const P_GREEN: Self = Self::new(128.0, 255.0, 128.0);
    /// Pastel blue.
    pub const P_BLUE: Self = Self::new(128.0, 128.0, 255.0);
    /// Pastel pink.
    pub const P_PINK: Self = Self::new(255.0, 128.0, 255.0);
    /// Pastel yellow.
    pub const P_YELLOW: Self = Self::new(255.0, 255.0, 128.0);
    /// Pastel aqua.
    pub const P_AQUA: Self = Self::new(128.0, 255.0, 255.0);
    /// Dark red.
    pub const D_RED: Self = Self::new(128.0, 0.0, 0.0);
    /// Dark green.
    pub const D_GREEN: Self = Self::new(0.0, 128.0, 0.0);
    /// Dark blue.
    pub const D_BLUE: Self = Self::new(0.0, 0.0, 128.0);
    /// White.
    pub const WHITE: Self = Self::new(255.0, 255.0, 255.0);
    /// Light gray.
    pub const P_GRAY: Self = Self::new(191.0, 191.0, 191.0);
    /// Gray.
    pub const GRAY: Self = Self::new(128.0, 128.0, 128.0);
    /// Dark gray.
    pub const D_GRAY: Self = Self::new(40.0, 40.0, 40.0);
    /// Black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    /// Orange.
    pub const ORANGE: Self = Self::new(255.0, 128.0, 0.0);
    /// Purple.
    pub const PURPLE: Self = Self::new(128.0, 0.0, 255.0);

    /// An opaque colour.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// A colour with explicit opacity.
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Parse "#RRGGBB", "RRGGBB" or the short "#RGB" form.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim_start_matches('#');
        let bad = || Error::Invalid(format!("hex colour {hex:?}"));
        if !digits.is_ascii() {
            return Err(bad());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map(f64::from).map_err(|_| bad());
        match digits.len() {
            6 => Ok(Self::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                let mut c = [0.0; 3];
                for (i, ch) in digits.chars().enumerate() {
                    c[i] = channel(&format!("{ch}{ch}"))?;
                }
                Ok(Self::new(c[0], c[1], c[2]))
            }
            _ => Err(bad()),
        }
    }

    /// The colour as "#rrggbb", rounding each channel.
    pub fn to_hex(&self) -> String {
        let n = self.normalize();
        format!(
            "#{:02x}{:02x}{:02x}",
            n.r.round() as u8,
            n.g.round() as u8,
            n.b.round() as u8
        )
    }

    /// Rounded RGB channels.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        let n = self.normalize();
        (n.r.round() as u8, n.g.round() as u8, n.b.round() as u8)
    }

    /// A copy with a different opacity.
    pub fn with_a(&self, a: f64) -> Self {
        Self { a, ..*self }
    }

    /// Clamp every channel into range.
    pub fn normalize(&self) -> Self {
        let c = |n: f64| n.clamp(0.0, CHANNEL_MAX);
        Self::rgba(c(self.r), c(self.g), c(self.b), normalize_zero_to_one(self.a))
    }

    /// Step each channel towards `other` by at most `step`. Alpha moves by
    /// `step / 255`.
    pub fn approach(&self, other: &Self, step: f64) -> Self {
        Self::rgba(
            approach_num(self.r, other.r, step),
            approach_num(self.g, other.g, step),
            approach_num(self.b, other.b, step),
            approach_num(self.a, other.a, step / CHANNEL_MAX),
        )
    }

    /// Average this colour with `others`. RGB channels are floored.
    pub fn merge(&self, others: &[Self]) -> Self {
        let n = (others.len() + 1) as f64;
        let sum = others.iter().fold(*self, |acc, c| {
            Self::rgba(acc.r + c.r, acc.g + c.g, acc.b + c.b, acc.a + c.a)
        });
        Self::rgba(
            (sum.r / n).floor(),
            (sum.g / n).floor(),
            (sum.b / n).floor(),
            sum.a / n,
        )
    }

    /// Scale RGB by `factor`, keeping alpha.
    pub fn darken(&self, factor: f64) -> Self {
        let f = normalize_zero_to_one(factor);
        Self::rgba(self.r * f, self.g * f, self.b * f, self.a)
    }

    /// Do the RGB channels match exactly?
    pub fn eq_rgb(&self, other: &Self) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b
    }

    /// Are the RGB channels within `tolerance` of each other?
    pub fn nearly_equal(&self, other: &Self, tolerance: f64) -> bool {
        self.eq_rgb(&other.approach(self, tolerance))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex() {
        assert_eq!(Color::from_hex("#ff8000").unwrap(), Color::ORANGE);
        assert_eq!(Color::from_hex("fff").unwrap(), Color::WHITE);
        assert!(Color::from_hex("#12").is_err());
        assert!(Color::from_hex("#gg0000").is_err());
        assert_eq!(Color::P_YELLOW.to_hex(), "#ffff80");
    }

    #[test]
    fn approach_steps_alpha_by_channel_fraction() {
        let c = Color::rgba(0.0, 0.0, 0.0, 0.0).approach(&Color::WHITE, 51.0);
        assert_eq!(c, Color::rgba(51.0, 51.0, 51.0, 0.2));
        let c = Color::rgba(250.0, 0.0, 0.0, 1.0).approach(&Color::RED, 51.0);
        assert_eq!(c, Color::RED);
    }

    #[test]
    fn merge_floors() {
        let m = Color::WHITE.merge(&[Color::BLACK]);
        assert_eq!(m, Color::new(127.0, 127.0, 127.0));
        assert_eq!(Color::RED.merge(&[]), Color::RED);
    }

    #[test]
    fn nearly_equal() {
        assert!(Color::new(100.0, 100.0, 100.0).nearly_equal(&Color::new(110.0, 95.0, 100.0), 25.5));
        assert!(!Color::BLACK.nearly_equal(&Color::WHITE, 25.5));
    }

    #[test]
    fn serde_defaults_alpha() {
        let c: Color = serde_json::from_str(r#"{"r": 1, "g": 2, "b": 3}"#).unwrap();
        assert_eq!(c, Color::new(1.0, 2.0, 3.0));
    }
}
