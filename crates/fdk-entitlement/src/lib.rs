#![forbid(unsafe_code)]

//! Entitlement resolution: what may this tenant access right now?
//!
//! Two pieces: a static plan → feature table (adding a feature means
//! touching the table and nothing else) and a pure resolver that combines
//! the stored plan, the subscription lifecycle state, and the trial window
//! into an [`Entitlement`] — the effective plan, its feature set and
//! limits, and the route-level [`AccessDecision`].
//!
//! # Example
//! ```
//! use chrono::Utc;
//! use fdk_entitlement::{AccessDecision, FeatureSet, resolve_entitlement};
//! use fdk_tenant::{PlanType, SubscriptionStatus, TenantRecord, ThemeOverrides};
//!
//! let record = TenantRecord {
//!     id: "t_agency1".to_string(),
//!     plan_type: PlanType::Starter,
//!     subscription_status: SubscriptionStatus::Trialing,
//!     trial_ends_at: None,
//!     has_completed_checkout: false,
//!     suspended: false,
//!     brand_primary_color: None,
//!     brand_secondary_color: None,
//!     brand_accent_color: None,
//!     site_mode: None,
//!     branding_overrides: ThemeOverrides::default(),
//! };
//!
//! let entitlement = resolve_entitlement(&record, Utc::now());
//! // Trials get enterprise-level features, but the stored plan is kept
//! // separately for billing display.
//! assert_eq!(entitlement.effective_plan, PlanType::Enterprise);
//! assert_eq!(entitlement.display_plan, PlanType::Starter);
//! assert!(entitlement.allows(FeatureSet::API_ACCESS));
//! // Never completed checkout, so routes still gate on billing.
//! assert_eq!(entitlement.access, AccessDecision::RequiresCheckout);
//! ```

pub mod resolver;
pub mod table;

pub use resolver::{AccessDecision, BlockedReason, Entitlement, resolve_entitlement};
pub use table::{FeatureSet, PlanLimits, plan_at_least, plan_features, plan_limits};
