//! The resolved theme record and the resolution algorithm.

use fdk_color::Rgb;
use fdk_tenant::{Branding, ThemeOverrides};
use serde::{Deserialize, Serialize};

use crate::palette::{
    DARK_BASE, DARK_STATUS, DEFAULT_BRAND_ACCENT, DEFAULT_BRAND_PRIMARY, DEFAULT_BRAND_SECONDARY,
    LIGHT_BASE, LIGHT_STATUS,
};

/// Alpha used for the low-emphasis tint of the primary and status colors.
const TINT_ALPHA: f32 = 0.15;

/// Alpha used for the sidebar's active-item highlight.
const ACTIVE_ITEM_ALPHA: f32 = 0.3;

/// How far the sidebar background is darkened from the brand primary.
const SIDEBAR_DARKEN: u8 = 65;

/// A fully-resolved tenant palette.
///
/// Every field is always populated and every color parsable, no matter how
/// malformed the branding input was; consumers read fields unconditionally
/// and never mutate them. Solid colors are [`Rgb`] (serialized as
/// `#rrggbb`); tint variants are prebuilt `rgba(...)` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedTheme {
    /// Whether the shell renders on dark backgrounds.
    pub is_dark: bool,
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
    /// Tenant brand primary.
    pub primary: Rgb,
    /// Tenant brand secondary.
    pub secondary: Rgb,
    /// Tenant brand accent.
    pub accent: Rgb,
    /// Legible text color on top of solid `primary`.
    pub primary_on_color: Rgb,
    /// Low-alpha wash of `primary` for chips and selected rows.
    pub primary_tint: String,
    /// Sidebar background: the brand primary darkened, in both modes, so
    /// agency identity stays visible even in a light shell.
    pub sidebar_background: Rgb,
    /// Active-item highlight inside the sidebar.
    pub sidebar_active_item: String,
    /// Error base color.
    pub error: Rgb,
    /// Error tint.
    pub error_tint: String,
    /// Warning base color.
    pub warning: Rgb,
    /// Warning tint.
    pub warning_tint: String,
    /// Info base color.
    pub info: Rgb,
    /// Info tint.
    pub info_tint: String,
    /// Success base color.
    pub success: Rgb,
    /// Success tint.
    pub success_tint: String,
}

/// Resolve a tenant's branding into a complete palette.
///
/// The steps, in order: validate brand colors (falling back to platform
/// defaults), pick the mode base palette, derive the primary-accented
/// fields, attach the fixed status hues, then merge tenant overrides
/// field-by-field with override-last-wins. Overrides replace exactly the
/// slot they name; derived fields are computed before the merge and are
/// not re-derived afterwards.
#[must_use]
pub fn resolve_theme(branding: &Branding) -> ResolvedTheme {
    let primary = brand_color_or(
        branding.primary_color.as_deref(),
        DEFAULT_BRAND_PRIMARY,
        "primary",
    );
    let secondary = brand_color_or(
        branding.secondary_color.as_deref(),
        DEFAULT_BRAND_SECONDARY,
        "secondary",
    );
    let accent = brand_color_or(
        branding.accent_color.as_deref(),
        DEFAULT_BRAND_ACCENT,
        "accent",
    );

    let is_dark = branding.site_mode.unwrap_or_default().is_dark();
    let base = if is_dark { DARK_BASE } else { LIGHT_BASE };
    let status = if is_dark { DARK_STATUS } else { LIGHT_STATUS };

    let mut theme = ResolvedTheme {
        is_dark,
        background: base.background,
        card: base.card,
        hover: base.hover,
        text: base.text,
        text_muted: base.text_muted,
        border: base.border,
        primary,
        secondary,
        accent,
        primary_on_color: primary.contrasting_text(),
        primary_tint: primary.with_alpha(TINT_ALPHA),
        sidebar_background: primary.darken(SIDEBAR_DARKEN),
        sidebar_active_item: primary.with_alpha(ACTIVE_ITEM_ALPHA),
        error: status.error,
        error_tint: status.error.with_alpha(TINT_ALPHA),
        warning: status.warning,
        warning_tint: status.warning.with_alpha(TINT_ALPHA),
        info: status.info,
        info_tint: status.info.with_alpha(TINT_ALPHA),
        success: status.success,
        success_tint: status.success.with_alpha(TINT_ALPHA),
    };
    apply_overrides(&mut theme, &branding.overrides);
    theme
}

/// Validate a tenant-supplied brand color, falling back to the platform
/// default on missing or malformed input. Recovery is local; no error
/// escapes to the render path.
fn brand_color_or(raw: Option<&str>, default: Rgb, slot: &str) -> Rgb {
    match raw {
        None => default,
        Some(value) => match Rgb::parse_hex(value) {
            Ok(color) => color,
            Err(err) => {
                tracing::warn!(slot, value, %err, "invalid brand color, using platform default");
                default
            }
        },
    }
}

/// Merge tenant overrides over the computed theme, later-wins per slot.
/// Overrides that fail hex validation are discarded so the output stays
/// parsable.
fn apply_overrides(theme: &mut ResolvedTheme, overrides: &ThemeOverrides) {
    override_slot(&mut theme.background, overrides.background.as_deref(), "background");
    override_slot(&mut theme.card, overrides.card.as_deref(), "card");
    override_slot(&mut theme.text, overrides.text.as_deref(), "text");
    override_slot(&mut theme.text_muted, overrides.text_muted.as_deref(), "text_muted");
    override_slot(&mut theme.border, overrides.border.as_deref(), "border");
    override_slot(&mut theme.primary, overrides.primary.as_deref(), "primary");
    override_slot(&mut theme.secondary, overrides.secondary.as_deref(), "secondary");
    override_slot(&mut theme.accent, overrides.accent.as_deref(), "accent");
    override_slot(
        &mut theme.sidebar_background,
        overrides.sidebar_background.as_deref(),
        "sidebar_background",
    );
    override_slot(&mut theme.error, overrides.error.as_deref(), "error");
    override_slot(&mut theme.warning, overrides.warning.as_deref(), "warning");
    override_slot(&mut theme.info, overrides.info.as_deref(), "info");
    override_slot(&mut theme.success, overrides.success.as_deref(), "success");
}

fn override_slot(slot: &mut Rgb, raw: Option<&str>, name: &str) {
    if let Some(value) = raw {
        match Rgb::parse_hex(value) {
            Ok(color) => *slot = color,
            Err(err) => {
                tracing::warn!(slot = name, value, %err, "discarding malformed theme override");
            }
        }
    }
}
