#![forbid(unsafe_code)]

//! Global modal façade.
//!
//! Free functions bound to the process-wide registry, plus [`PortalFacade`]
//! for callers that inject their own registry (tests, embedded apps). Every
//! call resolves a live portal first and then delegates; whatever the host
//! returns or raises passes through unchanged.
//!
//! Absence of a portal is a hard error everywhere except [`hide_all`]: that
//! one is meant for unconditional cleanup hooks (test teardown, navigation
//! resets) where no portal may be mounted, so it downgrades the miss to a
//! debug log instead of making every such caller guard the call. The
//! asymmetry is intentional; do not extend it to the other four functions.

use tracing::debug;

use crate::error::PortalError;
use crate::handle::PortalHandle;
use crate::host::{ModalFactory, ModalId, ModalOutcome, ShowConfig, ShowTicket};
use crate::id::PortalId;
use crate::registry::PortalRegistry;

/// Façade bound to an explicit registry.
///
/// Stateless between calls; it is nothing but resolution plus delegation.
#[derive(Clone, Copy)]
pub struct PortalFacade<'a> {
    registry: &'a PortalRegistry,
}

impl<'a> PortalFacade<'a> {
    /// Bind to a registry.
    pub const fn new(registry: &'a PortalRegistry) -> Self {
        Self { registry }
    }

    /// Façade over the process-wide registry.
    pub fn global() -> PortalFacade<'static> {
        PortalFacade::new(PortalRegistry::global())
    }

    /// Register `handle` as the now-most-recent portal. Called by hosting
    /// components on mount.
    pub fn register_portal(&self, handle: PortalHandle) -> PortalId {
        self.registry.register(handle)
    }

    /// Unregister `handle`; silent no-op when it was never registered.
    /// Called by hosting components on unmount.
    pub fn unregister_portal(&self, handle: &PortalHandle) {
        self.registry.unregister(handle);
    }

    /// Show a modal on the resolved portal.
    ///
    /// The returned ticket resolves once a later hide removes the modal.
    pub fn show(
        &self,
        factory: ModalFactory,
        config: Option<ShowConfig>,
    ) -> Result<ShowTicket, PortalError> {
        Ok(self.registry.resolve()?.show(factory, config))
    }

    /// Hide the modal `modal_id` on the resolved portal, reporting `outcome`
    /// to its ticket.
    pub fn hide(
        &self,
        outcome: Option<ModalOutcome>,
        modal_id: ModalId,
    ) -> Result<(), PortalError> {
        self.registry.resolve()?.hide(outcome, modal_id);
        Ok(())
    }

    /// Hide every modal on the resolved portal.
    ///
    /// Unlike the other façade calls this swallows the missing-portal case:
    /// a process with no portal mounted has nothing to hide. The miss is
    /// logged, not raised.
    pub fn hide_all(&self) {
        match self.registry.resolve() {
            Ok(host) => host.hide_all(),
            Err(PortalError::NoPortalFound) => {
                debug!("hide_all called with no live portal; nothing to hide");
            }
        }
    }

    /// Lift the resolved portal's modal layer into a full-window overlay.
    ///
    /// Whether this means anything on the current platform is the host's
    /// concern; the façade only delivers the call.
    pub fn enable_full_window_overlay(&self) -> Result<(), PortalError> {
        self.registry.resolve()?.enable_full_window_overlay();
        Ok(())
    }

    /// Undo [`enable_full_window_overlay`](Self::enable_full_window_overlay).
    pub fn disable_full_window_overlay(&self) -> Result<(), PortalError> {
        self.registry.resolve()?.disable_full_window_overlay();
        Ok(())
    }
}

// --- free functions over the process-wide registry -------------------------

/// Register a portal host on mount. See [`PortalFacade::register_portal`].
pub fn register_portal(handle: PortalHandle) -> PortalId {
    PortalFacade::global().register_portal(handle)
}

/// Unregister a portal host on unmount. See
/// [`PortalFacade::unregister_portal`].
pub fn unregister_portal(handle: &PortalHandle) {
    PortalFacade::global().unregister_portal(handle);
}

/// Show a modal on the most recent live portal. See [`PortalFacade::show`].
pub fn show(factory: ModalFactory, config: Option<ShowConfig>) -> Result<ShowTicket, PortalError> {
    PortalFacade::global().show(factory, config)
}

/// Hide a specific modal. See [`PortalFacade::hide`].
pub fn hide(outcome: Option<ModalOutcome>, modal_id: ModalId) -> Result<(), PortalError> {
    PortalFacade::global().hide(outcome, modal_id)
}

/// Hide every modal; silent no-op without a portal. See
/// [`PortalFacade::hide_all`].
pub fn hide_all() {
    PortalFacade::global().hide_all();
}

/// Enable the full-window overlay on the most recent live portal.
pub fn enable_full_window_overlay() -> Result<(), PortalError> {
    PortalFacade::global().enable_full_window_overlay()
}

/// Disable the full-window overlay on the most recent live portal.
pub fn disable_full_window_overlay() -> Result<(), PortalError> {
    PortalFacade::global().disable_full_window_overlay()
}
