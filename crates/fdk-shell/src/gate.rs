//! The route gate: turns an access decision plus a route into a render or
//! redirect.

use fdk_entitlement::{AccessDecision, BlockedReason};
use serde::Serialize;

/// Route prefixes that stay reachable even when a tenant is blocked.
///
/// A blocked tenant must still be able to sign in and fix billing.
/// Changing this list is a product decision, not something the gate
/// infers.
pub const STANDARD_EXEMPT_ROUTES: [&str; 3] = ["/login", "/settings/billing", "/settings/account"];

/// Fixed set of route prefixes exempt from blocking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteAllowlist {
    prefixes: Vec<String>,
}

impl RouteAllowlist {
    /// The platform's standard allowlist ([`STANDARD_EXEMPT_ROUTES`]).
    #[must_use]
    pub fn standard() -> Self {
        Self::new(STANDARD_EXEMPT_ROUTES.iter().map(|s| s.to_string()))
    }

    /// Build an allowlist from explicit prefixes.
    pub fn new(prefixes: impl IntoIterator<Item = String>) -> Self {
        Self {
            prefixes: prefixes.into_iter().collect(),
        }
    }

    /// Whether `route` falls under an exempt prefix.
    #[must_use]
    pub fn is_exempt(&self, route: &str) -> bool {
        self.prefixes.iter().any(|prefix| route.starts_with(prefix))
    }
}

impl Default for RouteAllowlist {
    fn default() -> Self {
        Self::standard()
    }
}

/// Which blocking screen to render when a route may not proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockingScreen {
    /// Plan-selection CTA for tenants who never completed payment setup.
    CheckoutRequired,
    /// Payment-update CTA.
    PaymentFailed,
    /// Suspension notice.
    Suspended,
}

/// The gate's verdict for one route render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GateDecision {
    /// Render the requested route.
    Proceed,
    /// Redirect to the given blocking screen.
    Block(BlockingScreen),
}

impl GateDecision {
    /// Whether this decision blocks rendering.
    #[must_use]
    pub const fn is_blocked(self) -> bool {
        matches!(self, Self::Block(_))
    }
}

/// Decide whether a route may render for the given access decision.
///
/// Exempt routes always proceed. Otherwise the access decision maps onto
/// exactly one of the three blocking screens; the screens are mutually
/// exclusive because the entitlement resolver's classification already is.
#[must_use]
pub fn gate_route(
    access: AccessDecision,
    route: &str,
    allowlist: &RouteAllowlist,
) -> GateDecision {
    if allowlist.is_exempt(route) {
        return GateDecision::Proceed;
    }
    let decision = match access {
        AccessDecision::Full => GateDecision::Proceed,
        AccessDecision::RequiresCheckout => GateDecision::Block(BlockingScreen::CheckoutRequired),
        AccessDecision::Blocked(BlockedReason::PaymentFailed) => {
            GateDecision::Block(BlockingScreen::PaymentFailed)
        }
        AccessDecision::Blocked(BlockedReason::Suspended) => {
            GateDecision::Block(BlockingScreen::Suspended)
        }
    };
    if decision.is_blocked() {
        tracing::debug!(route, ?access, "redirecting blocked route to billing surface");
    }
    decision
}
