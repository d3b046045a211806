#![forbid(unsafe_code)]

//! Ordered portal registry.
//!
//! Holds weak handles in registration order, most recent last. The registry
//! itself never reasons about liveness and never drops an entry on its own:
//! a handle stays listed, dead or alive, until an explicit
//! [`unregister`](PortalRegistry::unregister). Skipping dead handles is the
//! resolver's job (see [`crate::resolve`]).
//!
//! One registry per process is the expected shape — the free façade
//! functions use [`PortalRegistry::global`] — but the type is an ordinary
//! constructible object, so tests and embedded apps can run their own.
//!
//! # Invariants
//!
//! - Insertion order is preserved; duplicates are permitted.
//! - `unregister` removes at most one occurrence per call, the first found
//!   scanning from the start.
//! - No operation here inspects liveness except the `live_count` observer.

use std::sync::{Mutex, MutexGuard, OnceLock};

use tracing::debug;

use crate::handle::PortalHandle;
use crate::id::PortalId;

static GLOBAL: OnceLock<PortalRegistry> = OnceLock::new();

/// Ordered collection of weak portal handles.
pub struct PortalRegistry {
    entries: Mutex<Vec<PortalHandle>>,
}

impl PortalRegistry {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// The process-wide registry backing the free façade functions.
    ///
    /// Created empty on first use; lives for the rest of the process.
    pub fn global() -> &'static PortalRegistry {
        GLOBAL.get_or_init(PortalRegistry::new)
    }

    /// Append `handle` (most recent = last) and hand back a fresh id.
    ///
    /// No uniqueness check is made: double registration is the caller's
    /// mistake, and [`unregister`](Self::unregister) still behaves, removing
    /// one occurrence per call. The returned id is generated and returned,
    /// never consulted again by this crate.
    pub fn register(&self, handle: PortalHandle) -> PortalId {
        let id = PortalId::generate();
        let mut entries = self.lock();
        entries.push(handle);
        debug!(portal = %id, portals = entries.len(), "portal registered");
        id
    }

    /// Remove the first occurrence of `handle`, by identity.
    ///
    /// Silent no-op when the handle was never registered; safe to call from
    /// unmount hooks in any order relative to façade calls.
    pub fn unregister(&self, handle: &PortalHandle) {
        let mut entries = self.lock();
        if let Some(idx) = entries.iter().position(|e| e.ptr_eq(handle)) {
            entries.remove(idx);
            debug!(portals = entries.len(), "portal unregistered");
        }
    }

    /// Number of registered handles, dead ones included.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no handles are registered at all.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Number of registered handles whose target is still alive.
    pub fn live_count(&self) -> usize {
        self.lock().iter().filter(|h| h.is_live()).count()
    }

    /// Registration-order snapshot for the resolver's scan.
    pub(crate) fn snapshot(&self) -> Vec<PortalHandle> {
        self.lock().clone()
    }

    // Registry operations are idempotent, so a poisoned lock is recovered by
    // taking the inner value.
    fn lock(&self) -> MutexGuard<'_, Vec<PortalHandle>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for PortalRegistry {
    fn default() -> Self {
        Self::new()
    }
}
