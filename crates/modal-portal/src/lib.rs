#![forbid(unsafe_code)]

//! Global modal portal: registry, selection policy, and delegation façade.
//!
//! Application code anywhere in a process can open and close modals without
//! holding a reference to the component tree that renders them. Hosting
//! surfaces ("portals") implement [`ModalHost`] and register themselves on
//! mount; the façade functions ([`show`], [`hide`], [`hide_all`],
//! [`enable_full_window_overlay`], [`disable_full_window_overlay`]) pick the
//! most recently mounted portal that is still alive and delegate the call to
//! it unchanged.
//!
//! Several portals may be mounted at once (nested navigators, multiple
//! windows). The registry holds a *non-owning* handle per portal and never
//! prunes entries on its own: a portal stays listed until it unregisters,
//! and resolution simply skips handles whose target has already dropped.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use modal_portal::{ModalHost, PortalHandle, register_portal, show, unregister_portal};
//!
//! let host: Arc<dyn ModalHost> = Arc::new(MyHost::default());
//! let handle = PortalHandle::from_shared(&host);
//! let _id = register_portal(handle.clone());
//!
//! let ticket = show(Box::new(|| Box::new(ConfirmPrompt::new())), None)?;
//! // ... later, a `hide` on the host resolves the ticket ...
//!
//! unregister_portal(&handle);
//! # Ok::<(), modal_portal::PortalError>(())
//! ```
//!
//! # Invariants
//!
//! - Registration order is preserved; the most recent registration is last.
//! - The registry never removes an entry implicitly; only unregistration does.
//! - Resolution returns the most recently registered portal whose host is
//!   still alive, or fails with [`PortalError::NoPortalFound`].
//! - Only [`hide_all`] tolerates the no-portal case; the other four façade
//!   calls surface the error to the caller.
//!
//! # Failure Modes
//!
//! - Façade call with no live portal: [`PortalError::NoPortalFound`]
//!   (`hide_all`: logged no-op).
//! - Portal dropped without unregistering: its handle goes stale and is
//!   skipped; the entry lingers harmlessly until unregistered.

pub mod error;
pub mod facade;
pub mod handle;
pub mod host;
pub mod id;
pub mod registry;
pub mod resolve;

pub use error::PortalError;
pub use facade::{
    PortalFacade, disable_full_window_overlay, enable_full_window_overlay, hide, hide_all,
    register_portal, show, unregister_portal,
};
pub use handle::PortalHandle;
pub use host::{
    ModalCompleter, ModalFactory, ModalHost, ModalId, ModalOutcome, ShowConfig, ShowTicket,
};
pub use id::PortalId;
pub use registry::PortalRegistry;
pub use resolve::{MostRecentLiveWins, SelectionPolicy};
