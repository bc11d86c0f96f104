//! The tenant record and its branding projection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::plan::{PlanType, SubscriptionStatus};

/// Shell rendering mode for a tenant's surfaces.
///
/// White-label tenants default to a dark shell unless they opt into light;
/// the default lives here so every consumer agrees on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteMode {
    /// Light shell.
    Light,
    /// Dark shell (the default).
    #[default]
    Dark,
}

impl SiteMode {
    /// Whether this mode renders on dark backgrounds.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Sparse, tenant-supplied theme overrides.
///
/// Each field, when present, replaces the computed value for that exact
/// theme slot and nothing else. The set of overridable slots is closed:
/// solid colors only — derived fields (contrast text, alpha tints) always
/// track their computed inputs.
///
/// Values are raw hex strings because they are tenant-supplied and may be
/// malformed; the theme resolver validates each one and discards those that
/// do not parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeOverrides {
    /// Page background.
    pub background: Option<String>,
    /// Card / panel surface.
    pub card: Option<String>,
    /// Primary text.
    pub text: Option<String>,
    /// Muted text.
    pub text_muted: Option<String>,
    /// Border color.
    pub border: Option<String>,
    /// Primary brand color.
    pub primary: Option<String>,
    /// Secondary brand color.
    pub secondary: Option<String>,
    /// Accent brand color.
    pub accent: Option<String>,
    /// Sidebar background.
    pub sidebar_background: Option<String>,
    /// Error status base color.
    pub error: Option<String>,
    /// Warning status base color.
    pub warning: Option<String>,
    /// Info status base color.
    pub info: Option<String>,
    /// Success status base color.
    pub success: Option<String>,
}

impl ThemeOverrides {
    /// Whether no override is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// The theme-relevant projection of a tenant record.
///
/// The theme resolver takes this instead of the full record so entitlement
/// inputs and branding inputs stay independent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Branding {
    /// Primary brand color, raw hex.
    pub primary_color: Option<String>,
    /// Secondary brand color, raw hex.
    pub secondary_color: Option<String>,
    /// Accent brand color, raw hex.
    pub accent_color: Option<String>,
    /// Shell mode; absent means dark.
    pub site_mode: Option<SiteMode>,
    /// Per-slot color overrides.
    pub overrides: ThemeOverrides,
}

/// One agency account within the platform, as loaded from the hosted
/// database.
///
/// This is read-only input to the engine. Everything derived from it —
/// entitlement, access decision, theme — is recomputed wholesale when the
/// record changes; nothing is written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantRecord {
    /// Stable tenant identifier.
    pub id: String,
    /// Stored plan, normalized from raw strings on read.
    #[serde(deserialize_with = "plan_from_raw")]
    pub plan_type: PlanType,
    /// Lifecycle state from the payment provider.
    pub subscription_status: SubscriptionStatus,
    /// Trial expiry, if one was granted.
    #[serde(default)]
    pub trial_ends_at: Option<DateTime<Utc>>,
    /// Whether the tenant has ever completed payment setup (i.e. has a
    /// payment-provider subscription id).
    #[serde(default)]
    pub has_completed_checkout: bool,
    /// Platform-operator suspension flag, independent of billing state.
    #[serde(default)]
    pub suspended: bool,
    /// Primary brand color, raw hex, may be malformed.
    #[serde(default)]
    pub brand_primary_color: Option<String>,
    /// Secondary brand color, raw hex, may be malformed.
    #[serde(default)]
    pub brand_secondary_color: Option<String>,
    /// Accent brand color, raw hex, may be malformed.
    #[serde(default)]
    pub brand_accent_color: Option<String>,
    /// Shell mode; absent means dark.
    #[serde(default)]
    pub site_mode: Option<SiteMode>,
    /// Per-slot color overrides.
    #[serde(default)]
    pub branding_overrides: ThemeOverrides,
}

impl TenantRecord {
    /// Project the theme-relevant fields for the theme resolver.
    #[must_use]
    pub fn branding(&self) -> Branding {
        Branding {
            primary_color: self.brand_primary_color.clone(),
            secondary_color: self.brand_secondary_color.clone(),
            accent_color: self.brand_accent_color.clone(),
            site_mode: self.site_mode,
            overrides: self.branding_overrides.clone(),
        }
    }
}

/// Deserialize a plan field from its raw string form, normalizing legacy
/// aliases and failing closed on unknown values.
fn plan_from_raw<'de, D>(deserializer: D) -> Result<PlanType, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(PlanType::from_raw(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_json(plan: &str, status: &str) -> String {
        format!(
            r##"{{
                "id": "t_agency1",
                "plan_type": "{plan}",
                "subscription_status": "{status}",
                "has_completed_checkout": true,
                "brand_primary_color": "#10b981",
                "site_mode": "light"
            }}"##
        )
    }

    #[test]
    fn deserializes_canonical_record() {
        let record: TenantRecord =
            serde_json::from_str(&record_json("professional", "active")).unwrap();
        assert_eq!(record.plan_type, PlanType::Professional);
        assert_eq!(record.subscription_status, SubscriptionStatus::Active);
        assert!(record.has_completed_checkout);
        assert!(!record.suspended);
        assert_eq!(record.site_mode, Some(SiteMode::Light));
        assert_eq!(record.trial_ends_at, None);
    }

    #[test]
    fn normalizes_legacy_plan_on_read() {
        let record: TenantRecord = serde_json::from_str(&record_json("scale", "active")).unwrap();
        assert_eq!(record.plan_type, PlanType::Enterprise);
    }

    #[test]
    fn unknown_plan_fails_closed_on_read() {
        let record: TenantRecord =
            serde_json::from_str(&record_json("platinum", "active")).unwrap();
        assert_eq!(record.plan_type, PlanType::Starter);
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(serde_json::from_str::<TenantRecord>(&record_json("starter", "paused")).is_err());
    }

    #[test]
    fn missing_optional_fields_default() {
        let record: TenantRecord = serde_json::from_str(
            r#"{"id": "t_1", "plan_type": "starter", "subscription_status": "trialing"}"#,
        )
        .unwrap();
        assert!(!record.has_completed_checkout);
        assert!(!record.suspended);
        assert_eq!(record.brand_primary_color, None);
        assert_eq!(record.site_mode, None);
        assert!(record.branding_overrides.is_empty());
    }

    #[test]
    fn branding_projection_carries_theme_fields_only() {
        let mut record: TenantRecord =
            serde_json::from_str(&record_json("starter", "active")).unwrap();
        record.branding_overrides.background = Some("#000000".to_string());

        let branding = record.branding();
        assert_eq!(branding.primary_color.as_deref(), Some("#10b981"));
        assert_eq!(branding.site_mode, Some(SiteMode::Light));
        assert_eq!(branding.overrides.background.as_deref(), Some("#000000"));
    }

    #[test]
    fn site_mode_defaults_to_dark() {
        assert_eq!(SiteMode::default(), SiteMode::Dark);
        assert!(SiteMode::Dark.is_dark());
        assert!(!SiteMode::Light.is_dark());
    }

    #[test]
    fn overrides_is_empty_tracks_fields() {
        let mut overrides = ThemeOverrides::default();
        assert!(overrides.is_empty());
        overrides.info = Some("#3b82f6".to_string());
        assert!(!overrides.is_empty());
    }

    #[test]
    fn trial_timestamp_parses() {
        let record: TenantRecord = serde_json::from_str(
            r#"{
                "id": "t_2",
                "plan_type": "starter",
                "subscription_status": "trialing",
                "trial_ends_at": "2026-09-01T00:00:00Z"
            }"#,
        )
        .unwrap();
        assert!(record.trial_ends_at.is_some());
    }
}
