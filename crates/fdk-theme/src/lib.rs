#![forbid(unsafe_code)]

//! Theme resolution: one brand color in, a complete render palette out.
//!
//! Every themed surface — dashboard shell, marketing site, outreach pages —
//! reads the same [`ResolvedTheme`] record, computed once per tenant-record
//! change and passed down explicitly. The resolver is total: malformed or
//! missing brand input falls back to platform defaults, tenant overrides
//! that do not parse are discarded, and the output never contains an
//! unparsable color.
//!
//! # Example
//! ```
//! use fdk_tenant::{Branding, SiteMode};
//! use fdk_theme::resolve_theme;
//!
//! let theme = resolve_theme(&Branding {
//!     primary_color: Some("#10b981".to_string()),
//!     site_mode: Some(SiteMode::Light),
//!     ..Branding::default()
//! });
//! assert!(!theme.is_dark);
//! assert_eq!(theme.primary.to_hex(), "#10b981");
//! ```

pub mod palette;
pub mod theme;

pub use palette::{DEFAULT_BRAND_ACCENT, DEFAULT_BRAND_PRIMARY, DEFAULT_BRAND_SECONDARY};
pub use theme::{ResolvedTheme, resolve_theme};
