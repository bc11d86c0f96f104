//! The injected session seam.
//!
//! The engine never reaches into storage or the navigation stack; whatever
//! holds the session (browser storage, a server session cache) implements
//! [`SessionProvider`] and hands over plain records. Resolvers are called
//! only after a record is available — a `None` here means the shell must
//! not render protected routes at all.

use std::fmt;

use fdk_tenant::TenantRecord;

/// Callback invoked when the tenant record changes (settings save,
/// webhook-driven refetch).
pub type TenantChangeCallback = Box<dyn Fn(&TenantRecord) + Send + Sync>;

/// Source of the current tenant record.
pub trait SessionProvider {
    /// The currently loaded tenant record, if any.
    fn tenant_record(&self) -> Option<TenantRecord>;

    /// Register a callback to run whenever the record is replaced.
    fn on_tenant_record_change(&mut self, callback: TenantChangeCallback);
}

/// In-memory [`SessionProvider`] holding one record; the test and preview
/// implementation.
#[derive(Default)]
pub struct StaticSession {
    record: Option<TenantRecord>,
    listeners: Vec<TenantChangeCallback>,
}

impl StaticSession {
    /// Create a session holding the given record.
    #[must_use]
    pub fn new(record: Option<TenantRecord>) -> Self {
        Self {
            record,
            listeners: Vec::new(),
        }
    }

    /// Replace the held record wholesale and notify listeners.
    ///
    /// Derived state is never patched in place; consumers re-resolve from
    /// the new record.
    pub fn replace_record(&mut self, record: TenantRecord) {
        for listener in &self.listeners {
            listener(&record);
        }
        self.record = Some(record);
    }
}

impl SessionProvider for StaticSession {
    fn tenant_record(&self) -> Option<TenantRecord> {
        self.record.clone()
    }

    fn on_tenant_record_change(&mut self, callback: TenantChangeCallback) {
        self.listeners.push(callback);
    }
}

impl fmt::Debug for StaticSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticSession")
            .field("record", &self.record)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
