#![forbid(unsafe_code)]

//! FrontDesk Kit public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for hosts. It
//! re-exports the engine's types from the internal crates and offers a
//! lightweight prelude for day-to-day usage.

// --- Color re-exports ------------------------------------------------------

pub use fdk_color::{HexColorError, Rgb, TEXT_ON_DARK, TEXT_ON_LIGHT};

// --- Tenant boundary re-exports --------------------------------------------

pub use fdk_tenant::{
    Branding, PlanType, SiteMode, SubscriptionStatus, TenantRecord, ThemeOverrides,
};

// --- Theme re-exports ------------------------------------------------------

pub use fdk_theme::{
    DEFAULT_BRAND_ACCENT, DEFAULT_BRAND_PRIMARY, DEFAULT_BRAND_SECONDARY, ResolvedTheme,
    resolve_theme,
};

// --- Entitlement re-exports ------------------------------------------------

pub use fdk_entitlement::{
    AccessDecision, BlockedReason, Entitlement, FeatureSet, PlanLimits, plan_at_least,
    plan_features, plan_limits, resolve_entitlement,
};

// --- Shell re-exports ------------------------------------------------------

pub use fdk_shell::{
    BlockingScreen, GateDecision, MemoStats, RouteAllowlist, SessionProvider, ShellView,
    StaticSession, TenantChangeCallback, ThemeMemo, gate_route, resolve_shell,
};

// --- Prelude ---------------------------------------------------------------

pub mod prelude {
    //! Everything a hosting shell typically needs in scope.
    pub use crate::{
        AccessDecision, Branding, Entitlement, FeatureSet, GateDecision, PlanType, ResolvedTheme,
        Rgb, RouteAllowlist, SessionProvider, ShellView, SiteMode, SubscriptionStatus,
        TenantRecord, ThemeOverrides, gate_route, resolve_entitlement, resolve_shell,
        resolve_theme,
    };
}
