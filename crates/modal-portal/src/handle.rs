#![forbid(unsafe_code)]

//! Non-owning portal handles.
//!
//! The rendering side owns its host instance; the registry holds only this
//! weak view of it. A handle must never extend the host's lifetime and must
//! tolerate the target dropping at any time — a resolve racing an unmount
//! simply sees the handle as dead.

use std::fmt;
use std::sync::{Arc, Weak};

use crate::host::ModalHost;

/// Non-owning reference to a mounted portal's host instance.
///
/// Cloning a handle clones the weak reference, so clones compare identical
/// under [`ptr_eq`](Self::ptr_eq): registration identity is the pointed-to
/// allocation, not the handle value.
#[derive(Clone)]
pub struct PortalHandle {
    host: Weak<dyn ModalHost>,
}

impl PortalHandle {
    /// Create a handle for a live host.
    pub fn new<H>(host: &Arc<H>) -> Self
    where
        H: ModalHost + 'static,
    {
        let host: Weak<H> = Arc::downgrade(host);
        let host: Weak<dyn ModalHost> = host;
        Self { host }
    }

    /// Create a handle from an already type-erased host.
    pub fn from_shared(host: &Arc<dyn ModalHost>) -> Self {
        Self {
            host: Arc::downgrade(host),
        }
    }

    /// Whether the target instance currently exists.
    pub fn is_live(&self) -> bool {
        self.host.strong_count() > 0
    }

    /// Upgrade to the live host, if any.
    pub fn upgrade(&self) -> Option<Arc<dyn ModalHost>> {
        self.host.upgrade()
    }

    /// Identity comparison: do both handles point at the same allocation?
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Weak::ptr_eq(&self.host, &other.host)
    }
}

impl fmt::Debug for PortalHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PortalHandle")
            .field("live", &self.is_live())
            .finish()
    }
}
