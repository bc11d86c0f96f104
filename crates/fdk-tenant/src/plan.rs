//! Canonical plan tiers and subscription lifecycle states.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical subscription plan for a tenant.
///
/// Plans form a strict total order (`Starter < Professional < Enterprise`),
/// which the derived `Ord` implements directly; feature lookups and order
/// comparisons must agree, so nothing else in the workspace re-derives the
/// ordering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PlanType {
    /// Entry tier.
    Starter,
    /// Mid tier.
    Professional,
    /// Top tier.
    Enterprise,
}

impl PlanType {
    /// Normalize a raw plan string to a canonical plan.
    ///
    /// This is the single normalization point for plan values. Legacy
    /// aliases map deterministically: `"basic"` was the original name for
    /// the entry tier, `"pro"` and `"growth"` for the mid tier, `"scale"`
    /// for the top tier. Anything unrecognized fails closed to
    /// [`PlanType::Starter`], never to a more permissive plan.
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "starter" | "basic" => Self::Starter,
            "professional" | "pro" | "growth" => Self::Professional,
            "enterprise" | "scale" => Self::Enterprise,
            other => {
                tracing::debug!(plan = other, "unrecognized plan value, failing closed to starter");
                Self::Starter
            }
        }
    }

    /// The canonical wire name of this plan.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Starter => "starter",
            Self::Professional => "professional",
            Self::Enterprise => "enterprise",
        }
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Subscription lifecycle state, as reported by the payment provider's
/// webhooks.
///
/// Unknown states are rejected at deserialization rather than guessed at;
/// unlike plan strings there is no documented legacy mapping for lifecycle
/// values, and the webhook owns their semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    /// In a free trial; no successful payment yet.
    Trialing,
    /// Paid and in good standing.
    Active,
    /// Most recent payment failed; provider is retrying.
    PastDue,
    /// Provider gave up retrying.
    Unpaid,
    /// Suspended by the platform operator.
    Suspended,
    /// Subscription was cancelled.
    Cancelled,
}

impl SubscriptionStatus {
    /// Whether this state represents a payment that has failed or lapsed.
    #[must_use]
    pub const fn is_delinquent(self) -> bool {
        matches!(self, Self::PastDue | Self::Unpaid | Self::Cancelled)
    }

    /// The wire name of this state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trialing => "trialing",
            Self::Active => "active",
            Self::PastDue => "past_due",
            Self::Unpaid => "unpaid",
            Self::Suspended => "suspended",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
