#![forbid(unsafe_code)]

//! Shell-level composition: route gating, the session seam, and resolver
//! memoization.
//!
//! The hosting shell loads a tenant record through a [`SessionProvider`],
//! runs both resolvers, and asks the gate whether the current route may
//! render or must redirect to one of three blocking screens. Everything
//! here is a thin, pure consumer of the resolver crates; the shell owns
//! navigation and storage, this crate only decides.
//!
//! # Example
//! ```
//! use chrono::Utc;
//! use fdk_shell::{GateDecision, RouteAllowlist, resolve_shell};
//! use fdk_tenant::{PlanType, SubscriptionStatus, TenantRecord, ThemeOverrides};
//!
//! let record = TenantRecord {
//!     id: "t_agency1".to_string(),
//!     plan_type: PlanType::Professional,
//!     subscription_status: SubscriptionStatus::Active,
//!     trial_ends_at: None,
//!     has_completed_checkout: true,
//!     suspended: false,
//!     brand_primary_color: Some("#10b981".to_string()),
//!     brand_secondary_color: None,
//!     brand_accent_color: None,
//!     site_mode: None,
//!     branding_overrides: ThemeOverrides::default(),
//! };
//!
//! let view = resolve_shell(&record, "/clients", &RouteAllowlist::standard(), Utc::now());
//! assert_eq!(view.gate, GateDecision::Proceed);
//! assert_eq!(view.theme.primary.to_hex(), "#10b981");
//! ```

pub mod gate;
pub mod memo;
pub mod session;
pub mod view;

pub use gate::{BlockingScreen, GateDecision, RouteAllowlist, gate_route};
pub use memo::{MemoStats, ThemeMemo};
pub use session::{SessionProvider, StaticSession, TenantChangeCallback};
pub use view::{ShellView, resolve_shell};
