#![forbid(unsafe_code)]

//! Host capability contract: what a mounted portal must be able to do.
//!
//! A portal is whatever component currently renders the modal stack — a
//! navigator screen, a secondary window, an overlay layer. This module
//! defines the trait such a component implements ([`ModalHost`]) and the
//! thin types that flow across that seam. The shapes of modal *content* and
//! show-time *configuration* stay host-defined: both are `Any`-erased and
//! forwarded verbatim, never inspected here.
//!
//! # Invariants
//!
//! - [`ModalId`]s are unique for the lifetime of the process.
//! - A [`ShowTicket`] resolves at most once, when its [`ModalCompleter`]
//!   fires or is dropped.
//!
//! # Failure Modes
//!
//! - Host unmounts while modals are pending: dropped completers resolve
//!   their tickets as [`ModalOutcome::Dismissed`].
//! - Caller drops its ticket: the completer's send is ignored.

use std::any::Any;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};

/// Global counter for unique modal IDs.
static MODAL_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a modal mounted inside a host.
///
/// Minted by hosts via [`ModalId::next`] when servicing a `show`; callers
/// pass it back to target a specific modal in [`ModalHost::hide`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModalId(u64);

impl ModalId {
    /// Mint a new unique modal ID.
    pub fn next() -> Self {
        Self(MODAL_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    #[inline]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Outcome a modal reports when it is hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalOutcome {
    /// The modal was dismissed (escape, backdrop, cleanup, unmount).
    Dismissed,
    /// The modal was confirmed.
    Confirmed,
    /// The modal returned a custom value.
    Custom(String),
}

/// Factory invoked by the host to build modal content when it mounts.
///
/// The produced value is the host's to interpret; hosts downcast to the
/// content types they support.
pub type ModalFactory = Box<dyn FnOnce() -> Box<dyn Any + Send> + Send>;

/// Host-defined configuration for a `show` call, forwarded verbatim.
pub type ShowConfig = Box<dyn Any + Send>;

/// Deferred result of [`ModalHost::show`].
///
/// Carries the id the host assigned to the new modal and resolves with the
/// modal's [`ModalOutcome`] once a later hide completes it. Hosts construct
/// the ticket with [`ShowTicket::pending`] and keep the matching
/// [`ModalCompleter`] until the modal leaves their stack.
#[derive(Debug)]
pub struct ShowTicket {
    modal_id: ModalId,
    outcome: Receiver<ModalOutcome>,
}

impl ShowTicket {
    /// Create a pending ticket plus the completer that resolves it.
    pub fn pending(modal_id: ModalId) -> (Self, ModalCompleter) {
        let (tx, rx) = channel();
        (
            Self {
                modal_id,
                outcome: rx,
            },
            ModalCompleter { tx },
        )
    }

    /// The id the host assigned to the shown modal.
    pub fn modal_id(&self) -> ModalId {
        self.modal_id
    }

    /// Non-blocking poll for the outcome.
    ///
    /// Returns `None` while the modal is still shown. A completer dropped
    /// without firing (host unmounted mid-show) reads as
    /// [`ModalOutcome::Dismissed`].
    pub fn try_outcome(&self) -> Option<ModalOutcome> {
        match self.outcome.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(ModalOutcome::Dismissed),
        }
    }

    /// Block until the modal is hidden.
    pub fn wait(self) -> ModalOutcome {
        self.outcome.recv().unwrap_or(ModalOutcome::Dismissed)
    }
}

/// Resolves a [`ShowTicket`] when the host hides the corresponding modal.
#[derive(Debug)]
pub struct ModalCompleter {
    tx: Sender<ModalOutcome>,
}

impl ModalCompleter {
    /// Fire the outcome. A caller that already dropped its ticket is ignored.
    pub fn complete(self, outcome: ModalOutcome) {
        let _ = self.tx.send(outcome);
    }
}

/// Capability set a mounted portal exposes to the façade.
///
/// All methods take `&self`: the registry shares hosts behind `Arc`, so
/// hosts use interior mutability for their modal stack. Errors raised inside
/// these methods are the host's own contract with its callers; the façade
/// neither wraps nor reinterprets them.
pub trait ModalHost: Send + Sync {
    /// Mount a modal built by `factory`; the ticket resolves when a later
    /// hide removes it.
    fn show(&self, factory: ModalFactory, config: Option<ShowConfig>) -> ShowTicket;

    /// Hide the modal identified by `modal_id`, reporting `outcome` (or
    /// [`ModalOutcome::Dismissed`] when `None`) to the ticket returned from
    /// the corresponding `show`.
    fn hide(&self, outcome: Option<ModalOutcome>, modal_id: ModalId);

    /// Hide every modal currently mounted, topmost first.
    fn hide_all(&self);

    /// Lift the modal layer into a full-window overlay. Only meaningful on
    /// platforms with a distinct overlay surface; hosts elsewhere no-op.
    fn enable_full_window_overlay(&self);

    /// Undo [`enable_full_window_overlay`](Self::enable_full_window_overlay).
    fn disable_full_window_overlay(&self);
}
