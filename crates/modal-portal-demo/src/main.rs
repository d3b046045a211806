#![forbid(unsafe_code)]

//! Demo wiring for the modal-portal façade.
//!
//! Implements a toy host that "renders" modals by logging them, mounts it as
//! a portal, and drives the full façade surface: the cleanup-hook `hide_all`
//! before anything is mounted, show/hide with an outcome, the overlay
//! toggles, and the error path after unmount.

use std::any::Any;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::info;

use modal_portal::{
    ModalCompleter, ModalFactory, ModalHost, ModalId, ModalOutcome, PortalHandle, ShowConfig,
    ShowTicket,
};

/// Host that logs modal activity instead of rendering it.
#[derive(Default)]
struct EchoHost {
    pending: Mutex<Vec<(ModalId, ModalCompleter)>>,
    overlay: AtomicBool,
}

impl ModalHost for EchoHost {
    fn show(&self, factory: ModalFactory, _config: Option<ShowConfig>) -> ShowTicket {
        let content = factory();
        let label = content
            .downcast::<String>()
            .map(|s| *s)
            .unwrap_or_else(|_| "<opaque content>".to_string());

        let modal_id = ModalId::next();
        let (ticket, completer) = ShowTicket::pending(modal_id);
        self.pending.lock().unwrap().push((modal_id, completer));
        info!(modal = modal_id.id(), %label, "modal shown");
        ticket
    }

    fn hide(&self, outcome: Option<ModalOutcome>, modal_id: ModalId) {
        let mut pending = self.pending.lock().unwrap();
        if let Some(idx) = pending.iter().position(|(id, _)| *id == modal_id) {
            let (_, completer) = pending.remove(idx);
            info!(modal = modal_id.id(), "modal hidden");
            completer.complete(outcome.unwrap_or(ModalOutcome::Dismissed));
        }
    }

    fn hide_all(&self) {
        let mut pending = self.pending.lock().unwrap();
        info!(count = pending.len(), "hiding all modals");
        while let Some((_, completer)) = pending.pop() {
            completer.complete(ModalOutcome::Dismissed);
        }
    }

    fn enable_full_window_overlay(&self) {
        self.overlay.store(true, Ordering::Relaxed);
        info!("full-window overlay enabled");
    }

    fn disable_full_window_overlay(&self) {
        self.overlay.store(false, Ordering::Relaxed);
        info!("full-window overlay disabled");
    }
}

fn prompt(text: &str) -> ModalFactory {
    let text = text.to_string();
    Box::new(move || Box::new(text) as Box<dyn Any + Send>)
}

fn main() {
    tracing_subscriber::fmt().init();

    // Cleanup-hook pattern: legal (and logged) before any portal is mounted.
    modal_portal::hide_all();

    let host = std::sync::Arc::new(EchoHost::default());
    let handle = PortalHandle::new(&host);
    let portal_id = modal_portal::register_portal(handle.clone());
    info!(portal = %portal_id, "portal mounted");

    let ticket = modal_portal::show(prompt("Save changes before closing?"), None)
        .expect("portal just registered");

    modal_portal::enable_full_window_overlay().expect("portal live");
    modal_portal::hide(Some(ModalOutcome::Confirmed), ticket.modal_id()).expect("portal live");
    modal_portal::disable_full_window_overlay().expect("portal live");

    info!(outcome = ?ticket.wait(), "dialog finished");

    modal_portal::unregister_portal(&handle);
    match modal_portal::show(prompt("Anyone there?"), None) {
        Err(err) => info!(%err, "show after unmount fails as expected"),
        Ok(_) => unreachable!("no portal is mounted"),
    }

    // And the asymmetric case: cleanup stays silent.
    modal_portal::hide_all();
}
