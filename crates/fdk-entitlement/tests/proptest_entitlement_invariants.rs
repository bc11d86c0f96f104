//! Property-based invariant tests for entitlement resolution.
//!
//! These tests verify the resolver's contractual invariants for any
//! combination of plan, lifecycle state, and flags:
//!
//! 1. Monotonicity: a higher plan grants every flag a lower plan grants.
//! 2. Trials resolve to enterprise features regardless of stored plan.
//! 3. The display plan always equals the stored plan.
//! 4. RequiresCheckout takes precedence whenever checkout never happened
//!    and the subscription is not active.
//! 5. Exactly the documented states yield Full.

use chrono::{DateTime, TimeZone, Utc};
use fdk_entitlement::{AccessDecision, plan_at_least, plan_features, resolve_entitlement};
use fdk_tenant::{PlanType, SubscriptionStatus, TenantRecord, ThemeOverrides};
use proptest::option;
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
}

fn plan_strategy() -> impl Strategy<Value = PlanType> {
    prop_oneof![
        Just(PlanType::Starter),
        Just(PlanType::Professional),
        Just(PlanType::Enterprise),
    ]
}

fn status_strategy() -> impl Strategy<Value = SubscriptionStatus> {
    prop_oneof![
        Just(SubscriptionStatus::Trialing),
        Just(SubscriptionStatus::Active),
        Just(SubscriptionStatus::PastDue),
        Just(SubscriptionStatus::Unpaid),
        Just(SubscriptionStatus::Suspended),
        Just(SubscriptionStatus::Cancelled),
    ]
}

fn record_strategy() -> impl Strategy<Value = TenantRecord> {
    (
        plan_strategy(),
        status_strategy(),
        any::<bool>(),
        any::<bool>(),
        option::of(-30i64..30),
    )
        .prop_map(|(plan, status, has_completed_checkout, suspended, trial_offset_days)| {
            TenantRecord {
                id: "t_prop".to_string(),
                plan_type: plan,
                subscription_status: status,
                trial_ends_at: trial_offset_days
                    .map(|days| now() + chrono::Duration::days(days)),
                has_completed_checkout,
                suspended,
                brand_primary_color: None,
                brand_secondary_color: None,
                brand_accent_color: None,
                site_mode: None,
                branding_overrides: ThemeOverrides::default(),
            }
        })
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Monotonicity in plan order
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn higher_plans_grant_superset_of_flags(a in plan_strategy(), b in plan_strategy()) {
        if plan_at_least(b, a) {
            prop_assert!(plan_features(b).contains(plan_features(a)));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Trials resolve to enterprise features
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn open_trial_is_enterprise_equivalent(mut record in record_strategy()) {
        record.subscription_status = SubscriptionStatus::Trialing;
        record.trial_ends_at = None;
        let entitlement = resolve_entitlement(&record, now());
        prop_assert_eq!(entitlement.effective_plan, PlanType::Enterprise);
        prop_assert_eq!(entitlement.features, plan_features(PlanType::Enterprise));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Display plan always equals the stored plan
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn display_plan_is_never_upgraded(record in record_strategy()) {
        let entitlement = resolve_entitlement(&record, now());
        prop_assert_eq!(entitlement.display_plan, record.plan_type);
        prop_assert!(plan_at_least(entitlement.effective_plan, entitlement.display_plan));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. RequiresCheckout precedence
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn missing_checkout_outranks_everything(mut record in record_strategy()) {
        record.has_completed_checkout = false;
        let entitlement = resolve_entitlement(&record, now());
        if record.subscription_status != SubscriptionStatus::Active {
            prop_assert_eq!(entitlement.access, AccessDecision::RequiresCheckout);
        } else {
            prop_assert_ne!(entitlement.access, AccessDecision::RequiresCheckout);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Full access arises exactly where documented
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn full_access_conditions(record in record_strategy()) {
        let entitlement = resolve_entitlement(&record, now());
        let checkout_ok = record.has_completed_checkout
            || record.subscription_status == SubscriptionStatus::Active;
        let not_blocked = !record.suspended
            && record.subscription_status != SubscriptionStatus::Suspended
            && !record.subscription_status.is_delinquent();
        prop_assert_eq!(
            entitlement.access == AccessDecision::Full,
            checkout_ok && not_blocked
        );
    }
}
