//! Color normalization and luminance helpers.
//!
//! Theme authors write colors in several hex spellings (`#abc`, `#AABBCC`,
//! `#aabbccdd`). The registry normalizes every value once at load time so the
//! derivation layer can pass colors through verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Luminance above this value classifies a background as light.
///
/// A background whose luminance is exactly at the threshold is dark.
pub const LIGHT_LUMINANCE_THRESHOLD: f64 = 0.5;

/// A color value as stored in a theme document.
///
/// Hex inputs are normalized to uppercase `#RRGGBB` / `#RRGGBBAA`. Anything
/// else (named colors, `rgb()` functions, garbage) is preserved verbatim and
/// flagged as unnormalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorValue {
    value: String,
    normalized: bool,
}

impl ColorValue {
    /// Normalize a raw color string.
    pub fn parse(raw: &str) -> Self {
        match normalize_hex(raw) {
            Some(value) => Self {
                value,
                normalized: true,
            },
            None => Self {
                value: raw.to_string(),
                normalized: false,
            },
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Whether the value was recognized as hex and rewritten to canonical form.
    pub fn is_normalized(&self) -> bool {
        self.normalized
    }

    /// RGB channels of a normalized value; the alpha channel is ignored.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        if !self.normalized {
            return None;
        }
        let hex = &self.value[1..];
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some((r, g, b))
    }

    /// Relative luminance of a normalized value.
    pub fn luminance(&self) -> Option<f64> {
        self.rgb().map(|(r, g, b)| relative_luminance(r, g, b))
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl From<&str> for ColorValue {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

/// Rewrite a hex color to canonical uppercase form, expanding short forms.
///
/// Returns `None` for anything that is not `#` followed by 3, 4, 6 or 8 hex
/// digits.
pub fn normalize_hex(raw: &str) -> Option<String> {
    let digits = raw.trim().strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let expanded: String = match digits.len() {
        3 | 4 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => digits.to_string(),
        _ => return None,
    };

    Some(format!("#{}", expanded.to_ascii_uppercase()))
}

/// Relative luminance after gamma-decoding each sRGB channel.
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    fn channel(c: u8) -> f64 {
        let c = f64::from(c) / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }
    0.2126 * channel(r) + 0.7152 * channel(g) + 0.0722 * channel(b)
}
