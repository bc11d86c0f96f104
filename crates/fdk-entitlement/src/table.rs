//! The static plan → feature/limit table.
//!
//! Feature sets are strictly nested along the plan order, so entitlement
//! monotonicity (everything a lower plan can do, a higher plan can too)
//! holds by construction. This table is versioned product data: adding a
//! feature means adding a flag and placing it in the nesting, nothing in
//! the resolver changes.

use bitflags::bitflags;
use fdk_tenant::PlanType;
use serde::Serialize;

bitflags! {
    /// Boolean feature flags a plan grants.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FeatureSet: u16 {
        /// Serve the marketing site from a tenant-owned domain.
        const CUSTOM_DOMAIN = 1 << 0;
        /// Generated marketing site.
        const MARKETING_SITE = 1 << 1;
        /// Provisioned demo phone number for the AI receptionist.
        const DEMO_PHONE = 1 << 2;
        /// Programmatic API access.
        const API_ACCESS = 1 << 3;
        /// Priority support queue.
        const PRIORITY_SUPPORT = 1 << 4;
        /// Outreach email templates.
        const OUTREACH_TEMPLATES = 1 << 5;
        /// Tenant-supplied theme overrides beyond the brand color.
        const CUSTOM_BRANDING = 1 << 6;
        /// Call and lead analytics.
        const ANALYTICS = 1 << 7;
    }
}

impl FeatureSet {
    /// Flag names in declaration order, for map-shaped serialization.
    pub const NAMED: [(&'static str, FeatureSet); 8] = [
        ("custom_domain", FeatureSet::CUSTOM_DOMAIN),
        ("marketing_site", FeatureSet::MARKETING_SITE),
        ("demo_phone", FeatureSet::DEMO_PHONE),
        ("api_access", FeatureSet::API_ACCESS),
        ("priority_support", FeatureSet::PRIORITY_SUPPORT),
        ("outreach_templates", FeatureSet::OUTREACH_TEMPLATES),
        ("custom_branding", FeatureSet::CUSTOM_BRANDING),
        ("analytics", FeatureSet::ANALYTICS),
    ];
}

const STARTER_FEATURES: FeatureSet =
    FeatureSet::OUTREACH_TEMPLATES.union(FeatureSet::ANALYTICS);

const PROFESSIONAL_FEATURES: FeatureSet = STARTER_FEATURES
    .union(FeatureSet::MARKETING_SITE)
    .union(FeatureSet::DEMO_PHONE)
    .union(FeatureSet::CUSTOM_BRANDING);

const ENTERPRISE_FEATURES: FeatureSet = PROFESSIONAL_FEATURES
    .union(FeatureSet::CUSTOM_DOMAIN)
    .union(FeatureSet::API_ACCESS)
    .union(FeatureSet::PRIORITY_SUPPORT);

/// Numeric caps a plan grants. `None` means unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanLimits {
    /// Maximum client seats the agency may hold.
    pub client_seats: Option<u32>,
}

/// Look up the feature flags for a canonical plan.
#[must_use]
pub const fn plan_features(plan: PlanType) -> FeatureSet {
    match plan {
        PlanType::Starter => STARTER_FEATURES,
        PlanType::Professional => PROFESSIONAL_FEATURES,
        PlanType::Enterprise => ENTERPRISE_FEATURES,
    }
}

/// Look up the numeric limits for a canonical plan.
#[must_use]
pub const fn plan_limits(plan: PlanType) -> PlanLimits {
    match plan {
        PlanType::Starter => PlanLimits {
            client_seats: Some(10),
        },
        PlanType::Professional => PlanLimits {
            client_seats: Some(50),
        },
        PlanType::Enterprise => PlanLimits { client_seats: None },
    }
}

/// Whether `effective` sits at or above `required` in the plan order.
///
/// Order comparison, not a flag lookup — call sites that only need "is
/// this professional or better" should not re-derive feature sets.
#[must_use]
pub fn plan_at_least(effective: PlanType, required: PlanType) -> bool {
    effective >= required
}
