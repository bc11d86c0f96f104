#![forbid(unsafe_code)]

//! Color-math primitives for tenant theming.
//!
//! Everything here operates on plain 24-bit RGB values. Brand colors arrive
//! as tenant-supplied hex strings, so parsing is strict and returns a typed
//! error; every other operation assumes an already-constructed [`Rgb`] and
//! cannot fail or panic. Validation and fallback policy live one layer up,
//! in the theme resolver.
//!
//! # Example
//! ```
//! use fdk_color::Rgb;
//!
//! let brand = Rgb::parse_hex("#10b981").unwrap();
//! assert!(brand.is_light());
//! assert_eq!(brand.with_alpha(0.15), "rgba(16, 185, 129, 0.15)");
//! assert_eq!(brand.darken(65).to_hex(), "#001300");
//! ```

use std::fmt;

/// Near-black text constant, used on light backgrounds.
pub const TEXT_ON_LIGHT: Rgb = Rgb::new(0x0f, 0x17, 0x2a);

/// Near-white text constant, used on dark backgrounds.
pub const TEXT_ON_DARK: Rgb = Rgb::new(0xf8, 0xfa, 0xfc);

/// Errors that can occur when parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HexColorError {
    /// Input was not exactly six hex digits (after an optional `#`).
    WrongLength {
        /// Digit count actually seen.
        len: usize,
    },
    /// Input contained a character outside `[0-9a-fA-F]`.
    InvalidDigit,
}

impl fmt::Display for HexColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { len } => {
                write!(f, "expected 6 hex digits, got {len}")
            }
            Self::InvalidDigit => write!(f, "invalid hex digit"),
        }
    }
}

impl std::error::Error for HexColorError {}

/// RGB color (opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0–255).
    pub r: u8,
    /// Green channel (0–255).
    pub g: u8,
    /// Blue channel (0–255).
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a 6-digit hex color, with or without a leading `#`.
    ///
    /// Shorthand (`#abc`) and 8-digit (`#rrggbbaa`) forms are rejected;
    /// tenant-facing inputs are normalized to the 6-digit form before they
    /// reach storage, so anything else here is malformed data.
    pub fn parse_hex(input: &str) -> Result<Self, HexColorError> {
        let trimmed = input.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if hex.len() != 6 {
            return Err(HexColorError::WrongLength { len: hex.len() });
        }
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(HexColorError::InvalidDigit);
        }
        let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| HexColorError::InvalidDigit)?;
        let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| HexColorError::InvalidDigit)?;
        let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| HexColorError::InvalidDigit)?;
        Ok(Self::new(r, g, b))
    }

    /// Compute perceived luminance as a `u8` (0 = black, 255 = white).
    ///
    /// Uses the 0.299 R + 0.587 G + 0.114 B weighting in integer math. This
    /// is a perceptual heuristic for picking legible text colors, not a
    /// certified WCAG relative-luminance calculation.
    #[must_use]
    pub const fn luminance_u8(self) -> u8 {
        let luma = 299 * self.r as u32 + 587 * self.g as u32 + 114 * self.b as u32;
        ((luma + 500) / 1000) as u8
    }

    /// Whether this color reads as light (luminance above the midpoint).
    #[must_use]
    pub const fn is_light(self) -> bool {
        self.luminance_u8() > 127
    }

    /// Return a legible text color for use on a solid background of this
    /// color: [`TEXT_ON_LIGHT`] when the background is light,
    /// [`TEXT_ON_DARK`] otherwise.
    #[must_use]
    pub const fn contrasting_text(self) -> Rgb {
        if self.is_light() {
            TEXT_ON_LIGHT
        } else {
            TEXT_ON_DARK
        }
    }

    /// Darken by `percent` (0–100), shifting each channel down by
    /// `round(2.55 * percent)` and clamping at zero.
    #[must_use]
    pub fn darken(self, percent: u8) -> Rgb {
        let amount = channel_shift(percent);
        Rgb::new(
            self.r.saturating_sub(amount),
            self.g.saturating_sub(amount),
            self.b.saturating_sub(amount),
        )
    }

    /// Lighten by `percent` (0–100), shifting each channel up by
    /// `round(2.55 * percent)` and clamping at 255.
    #[must_use]
    pub fn lighten(self, percent: u8) -> Rgb {
        let amount = channel_shift(percent);
        Rgb::new(
            self.r.saturating_add(amount),
            self.g.saturating_add(amount),
            self.b.saturating_add(amount),
        )
    }

    /// Emit a CSS `rgba(r, g, b, a)` string with the given alpha, clamped
    /// to `[0, 1]`.
    #[must_use]
    pub fn with_alpha(self, alpha: f32) -> String {
        let alpha = if alpha.is_nan() {
            1.0
        } else {
            alpha.clamp(0.0, 1.0)
        };
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }

    /// Emit the `#rrggbb` form of this color.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

/// Map a percentage to the channel delta used by darken/lighten.
fn channel_shift(percent: u8) -> u8 {
    let shift = (255 * percent as u32 + 50) / 100;
    if shift > 255 { 255 } else { shift as u8 }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl serde::Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::parse_hex(&raw).map_err(serde::de::Error::custom)
    }
}
