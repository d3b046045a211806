#![forbid(unsafe_code)]

//! Instance selection: which registered portal services a façade call.
//!
//! The default policy assumes the most recently mounted portal is the
//! topmost/active rendering surface (the focused screen of a navigation
//! stack, the frontmost window), so it wins over older, possibly
//! backgrounded portals. The policy is a named seam: substitute your own
//! [`SelectionPolicy`] (explicit focus tracking, pinning) without touching
//! the façade.
//!
//! Selection is a linear scan over the registry on every façade call. The
//! registry is expected to hold single-digit entry counts, so O(n) here is
//! deliberate.
//!
//! # Invariants
//!
//! - A dead handle is skipped, never returned.
//! - [`MostRecentLiveWins`] prefers later registrations over earlier ones.
//! - An exhausted scan fails with [`PortalError::NoPortalFound`].

use std::sync::Arc;

use crate::error::PortalError;
use crate::handle::PortalHandle;
use crate::host::ModalHost;
use crate::registry::PortalRegistry;

/// Strategy for picking the portal that services a call.
pub trait SelectionPolicy {
    /// Pick a live host from `entries` (registration order, oldest first).
    fn select(&self, entries: &[PortalHandle]) -> Option<Arc<dyn ModalHost>>;
}

/// Default policy: the last-registered entry whose target is still alive.
#[derive(Debug, Clone, Copy, Default)]
pub struct MostRecentLiveWins;

impl SelectionPolicy for MostRecentLiveWins {
    fn select(&self, entries: &[PortalHandle]) -> Option<Arc<dyn ModalHost>> {
        entries.iter().rev().find_map(PortalHandle::upgrade)
    }
}

impl PortalRegistry {
    /// Resolve the host that should service a façade call, using
    /// [`MostRecentLiveWins`].
    pub fn resolve(&self) -> Result<Arc<dyn ModalHost>, PortalError> {
        self.resolve_with(&MostRecentLiveWins)
    }

    /// Resolve with an explicit policy.
    pub fn resolve_with(
        &self,
        policy: &dyn SelectionPolicy,
    ) -> Result<Arc<dyn ModalHost>, PortalError> {
        policy
            .select(&self.snapshot())
            .ok_or(PortalError::NoPortalFound)
    }
}
