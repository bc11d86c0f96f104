//! One-call shell composition: both resolvers plus the gate.

use chrono::{DateTime, Utc};
use fdk_entitlement::{Entitlement, resolve_entitlement};
use fdk_tenant::TenantRecord;
use fdk_theme::{ResolvedTheme, resolve_theme};
use serde::Serialize;

use crate::gate::{GateDecision, RouteAllowlist, gate_route};

/// Everything a page tree needs for one render, derived wholesale from one
/// tenant record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShellView {
    /// Fully-resolved palette.
    pub theme: ResolvedTheme,
    /// Effective plan, features, and access decision.
    pub entitlement: Entitlement,
    /// Verdict for the route being rendered.
    pub gate: GateDecision,
}

/// Run both resolvers and the route gate for one render.
///
/// Neither resolver depends on the other; this is plain composition for
/// the common call site, recomputed on every tenant-record change.
#[must_use]
pub fn resolve_shell(
    record: &TenantRecord,
    route: &str,
    allowlist: &RouteAllowlist,
    now: DateTime<Utc>,
) -> ShellView {
    let entitlement = resolve_entitlement(record, now);
    let theme = resolve_theme(&record.branding());
    let gate = gate_route(entitlement.access, route, allowlist);
    ShellView {
        theme,
        entitlement,
        gate,
    }
}
