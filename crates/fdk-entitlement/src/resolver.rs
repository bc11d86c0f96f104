//! The entitlement resolver and the route-level access decision.

use chrono::{DateTime, Utc};
use fdk_tenant::{PlanType, SubscriptionStatus, TenantRecord};
use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::table::{FeatureSet, PlanLimits, plan_features, plan_limits};

/// Why a blocked tenant is blocked; picks the blocking screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockedReason {
    /// Payment failed, lapsed, or the subscription was cancelled;
    /// recoverable through a payment update.
    PaymentFailed,
    /// Suspended by the platform operator.
    Suspended,
}

/// Route-level access classification for a tenant.
///
/// The checks that produce this are strictly ordered: a tenant who never
/// completed payment setup is `RequiresCheckout` even if a suspension flag
/// is simultaneously set, so the shell's blocking screens stay mutually
/// exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessDecision {
    /// Tenant may use every route its plan allows.
    Full,
    /// Tenant has never completed payment setup; show plan selection.
    RequiresCheckout,
    /// Tenant is shut out of all but the exempt routes.
    Blocked(BlockedReason),
}

impl AccessDecision {
    /// Whether this decision imposes no route gating.
    #[must_use]
    pub const fn is_full(self) -> bool {
        matches!(self, Self::Full)
    }
}

/// The resolved entitlement for one tenant at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entitlement {
    /// Plan used for feature lookup; may exceed the stored plan during a
    /// trial.
    pub effective_plan: PlanType,
    /// Stored plan, for billing and display. Never conflated with
    /// `effective_plan`.
    pub display_plan: PlanType,
    /// Feature flags granted by the effective plan.
    #[serde(serialize_with = "features_as_map")]
    pub features: FeatureSet,
    /// Numeric caps granted by the effective plan.
    pub limits: PlanLimits,
    /// Route-level access classification.
    pub access: AccessDecision,
}

impl Entitlement {
    /// Whether every flag in `features` is granted.
    #[must_use]
    pub fn allows(&self, features: FeatureSet) -> bool {
        self.features.contains(features)
    }
}

/// Resolve a tenant record into its entitlement.
///
/// Pure and synchronous: `now` is a parameter, not a clock read, so the
/// same record and instant always produce the same output. The trial
/// upgrade is one-way — it affects the effective plan here and is never
/// written back to the record.
#[must_use]
pub fn resolve_entitlement(record: &TenantRecord, now: DateTime<Utc>) -> Entitlement {
    let display_plan = record.plan_type;

    // A trialing tenant gets top-tier features while the trial window is
    // open. A stale `trialing` status with an elapsed window (webhook lag)
    // does not.
    let trial_active = record.subscription_status == SubscriptionStatus::Trialing
        && record.trial_ends_at.is_none_or(|ends| ends > now);
    let effective_plan = if trial_active {
        if display_plan != PlanType::Enterprise {
            tracing::debug!(tenant = %record.id, plan = %display_plan, "trial grants enterprise-level features");
        }
        PlanType::Enterprise
    } else {
        display_plan
    };

    Entitlement {
        effective_plan,
        display_plan,
        features: plan_features(effective_plan),
        limits: plan_limits(effective_plan),
        access: classify_access(record),
    }
}

/// Classify route-level access. Check order is load-bearing; see
/// [`AccessDecision`].
fn classify_access(record: &TenantRecord) -> AccessDecision {
    let status = record.subscription_status;

    if !record.has_completed_checkout && status != SubscriptionStatus::Active {
        return AccessDecision::RequiresCheckout;
    }
    if record.suspended || status == SubscriptionStatus::Suspended {
        return AccessDecision::Blocked(BlockedReason::Suspended);
    }
    if status.is_delinquent() {
        // `Cancelled` lands here too and is therefore recoverable through
        // a payment update; see DESIGN.md for the open question on making
        // cancellation terminal instead.
        return AccessDecision::Blocked(BlockedReason::PaymentFailed);
    }
    AccessDecision::Full
}

/// Serialize a [`FeatureSet`] as a `{feature: bool}` map so page consumers
/// can read flags by name.
fn features_as_map<S>(features: &FeatureSet, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(FeatureSet::NAMED.len()))?;
    for (name, flag) in FeatureSet::NAMED {
        map.serialize_entry(name, &features.contains(flag))?;
    }
    map.end()
}
