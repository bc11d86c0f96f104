#![forbid(unsafe_code)]

//! Tenant record types and the validated data-loading boundary.
//!
//! The hosted database hands the platform a plain row per agency; this crate
//! turns that row into closed, typed data once, at the boundary, so the
//! resolvers downstream never see duck-typed branding objects or raw plan
//! strings. Plan values are normalized on read (legacy aliases included) and
//! unknown plans fail closed to the least-privileged tier.
//!
//! Nothing in this crate performs I/O; loading the record is the session
//! layer's job.

pub mod plan;
pub mod record;

pub use plan::{PlanType, SubscriptionStatus};
pub use record::{Branding, SiteMode, TenantRecord, ThemeOverrides};
