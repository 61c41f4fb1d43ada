//! RGB color value with hex parsing and interpolation

use serde::{Deserialize, Serialize};

use crate::types::{HourmapError, Result};

/// 24-bit RGB color, serialized as a `#rrggbb` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or shorthand `#rgb`.
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| HourmapError::InvalidColor(s.to_string()))?;

        let parse = |hx: &str| u8::from_str_radix(hx, 16);
        match digits.len() {
            6 => {
                let r = parse(&digits[0..2]);
                let g = parse(&digits[2..4]);
                let b = parse(&digits[4..6]);
                match (r, g, b) {
                    (Ok(r), Ok(g), Ok(b)) => Ok(Self::new(r, g, b)),
                    _ => Err(HourmapError::InvalidColor(s.to_string())),
                }
            }
            3 => {
                let channel = |hx: &str| parse(hx).map(|v| v * 0x11);
                let r = channel(&digits[0..1]);
                let g = channel(&digits[1..2]);
                let b = channel(&digits[2..3]);
                match (r, g, b) {
                    (Ok(r), Ok(g), Ok(b)) => Ok(Self::new(r, g, b)),
                    _ => Err(HourmapError::InvalidColor(s.to_string())),
                }
            }
            _ => Err(HourmapError::InvalidColor(s.to_string())),
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Linear interpolation toward `other`, channel-wise, rounded to the
    /// nearest value. `t` is clamped to 0..=1.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Self::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }

    /// Relative luminance proxy, used only by tests to assert monotone ramps.
    pub fn luma(self) -> f64 {
        0.2126 * self.r as f64 + 0.7152 * self.g as f64 + 0.0722 * self.b as f64
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> Self {
        c.to_hex()
    }
}

impl TryFrom<String> for Rgb {
    type Error = HourmapError;

    fn try_from(s: String) -> Result<Self> {
        Rgb::from_hex(&s)
    }
}
