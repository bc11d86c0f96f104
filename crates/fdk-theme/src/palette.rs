//! Fixed palettes: platform brand defaults, mode base palettes, status hues.
//!
//! Only primary-accented elements derive from the tenant's brand color; the
//! base palette is fixed per mode, and status hues are fixed outright so a
//! red-branded tenant can never make error states ambiguous.

use fdk_color::Rgb;

/// Platform default primary brand color (indigo), used when a tenant's
/// primary color is missing or malformed.
pub const DEFAULT_BRAND_PRIMARY: Rgb = Rgb::new(0x63, 0x66, 0xf1);

/// Platform default secondary brand color (violet).
pub const DEFAULT_BRAND_SECONDARY: Rgb = Rgb::new(0x8b, 0x5c, 0xf6);

/// Platform default accent brand color (cyan).
pub const DEFAULT_BRAND_ACCENT: Rgb = Rgb::new(0x06, 0xb6, 0xd4);

/// The non-brand-derived slots of a mode's base palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasePalette {
    /// Page background.
    pub background: Rgb,
    /// Card / panel surface.
    pub card: Rgb,
    /// Hover surface.
    pub hover: Rgb,
    /// Primary text.
    pub text: Rgb,
    /// Muted text.
    pub text_muted: Rgb,
    /// Border color.
    pub border: Rgb,
}

/// Dark-mode base palette.
pub const DARK_BASE: BasePalette = BasePalette {
    background: Rgb::new(0x0f, 0x17, 0x2a),
    card: Rgb::new(0x1e, 0x29, 0x3b),
    hover: Rgb::new(0x28, 0x35, 0x48),
    text: Rgb::new(0xf1, 0xf5, 0xf9),
    text_muted: Rgb::new(0x94, 0xa3, 0xb8),
    border: Rgb::new(0x33, 0x41, 0x55),
};

/// Light-mode base palette.
pub const LIGHT_BASE: BasePalette = BasePalette {
    background: Rgb::new(0xf8, 0xfa, 0xfc),
    card: Rgb::new(0xff, 0xff, 0xff),
    hover: Rgb::new(0xf1, 0xf5, 0xf9),
    text: Rgb::new(0x0f, 0x17, 0x2a),
    text_muted: Rgb::new(0x64, 0x74, 0x8b),
    border: Rgb::new(0xe2, 0xe8, 0xf0),
};

/// Semantic status hues for one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusHues {
    /// Error / destructive.
    pub error: Rgb,
    /// Warning.
    pub warning: Rgb,
    /// Informational.
    pub info: Rgb,
    /// Success / confirmation.
    pub success: Rgb,
}

/// Status hues against dark backgrounds.
pub const DARK_STATUS: StatusHues = StatusHues {
    error: Rgb::new(0xef, 0x44, 0x44),
    warning: Rgb::new(0xf5, 0x9e, 0x0b),
    info: Rgb::new(0x3b, 0x82, 0xf6),
    success: Rgb::new(0x22, 0xc5, 0x5e),
};

/// Status hues against light backgrounds (deeper shades of the same hues).
pub const LIGHT_STATUS: StatusHues = StatusHues {
    error: Rgb::new(0xdc, 0x26, 0x26),
    warning: Rgb::new(0xd9, 0x77, 0x06),
    info: Rgb::new(0x25, 0x63, 0xeb),
    success: Rgb::new(0x16, 0xa3, 0x4a),
};
