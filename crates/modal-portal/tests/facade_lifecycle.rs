//! End-to-end façade scenarios: portals mounting, unmounting, and going
//! stale while application code keeps calling the global functions.

use std::any::Any;
use std::sync::{Arc, Mutex};

use modal_portal::{
    ModalFactory, ModalHost, ModalId, ModalOutcome, PortalError, PortalFacade, PortalHandle,
    PortalRegistry, ShowConfig, ShowTicket,
};

/// Minimal host keeping pending completers so hide/hide_all resolve tickets.
#[derive(Default)]
struct TestHost {
    pending: Mutex<Vec<(ModalId, modal_portal::ModalCompleter)>>,
    shown: Mutex<Vec<&'static str>>,
    overlay: Mutex<bool>,
}

impl TestHost {
    fn mounted() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn shown(&self) -> Vec<&'static str> {
        self.shown.lock().unwrap().clone()
    }

    fn overlay(&self) -> bool {
        *self.overlay.lock().unwrap()
    }
}

impl ModalHost for TestHost {
    fn show(&self, factory: ModalFactory, _config: Option<ShowConfig>) -> ShowTicket {
        let content = factory();
        if let Ok(label) = content.downcast::<&'static str>() {
            self.shown.lock().unwrap().push(*label);
        }
        let modal_id = ModalId::next();
        let (ticket, completer) = ShowTicket::pending(modal_id);
        self.pending.lock().unwrap().push((modal_id, completer));
        ticket
    }

    fn hide(&self, outcome: Option<ModalOutcome>, modal_id: ModalId) {
        let mut pending = self.pending.lock().unwrap();
        if let Some(idx) = pending.iter().position(|(id, _)| *id == modal_id) {
            let (_, completer) = pending.remove(idx);
            completer.complete(outcome.unwrap_or(ModalOutcome::Dismissed));
        }
    }

    fn hide_all(&self) {
        let mut pending = self.pending.lock().unwrap();
        while let Some((_, completer)) = pending.pop() {
            completer.complete(ModalOutcome::Dismissed);
        }
    }

    fn enable_full_window_overlay(&self) {
        *self.overlay.lock().unwrap() = true;
    }

    fn disable_full_window_overlay(&self) {
        *self.overlay.lock().unwrap() = false;
    }
}

fn labeled_factory(label: &'static str) -> ModalFactory {
    Box::new(move || Box::new(label) as Box<dyn Any + Send>)
}

#[test]
fn register_resolve_fallback_and_failure() {
    let registry = PortalRegistry::new();
    let facade = PortalFacade::new(&registry);

    let a = TestHost::mounted();
    let b = TestHost::mounted();
    let ha = PortalHandle::new(&a);
    let hb = PortalHandle::new(&b);

    facade.register_portal(ha.clone());
    facade.register_portal(hb.clone());

    // B is most recent: it services the call.
    facade.show(labeled_factory("on-b"), None).unwrap();
    assert_eq!(b.shown(), vec!["on-b"]);
    assert!(a.shown().is_empty());

    // Unregister B: calls fall back to A.
    facade.unregister_portal(&hb);
    facade.show(labeled_factory("on-a"), None).unwrap();
    assert_eq!(a.shown(), vec!["on-a"]);

    // Unregister A: non-hide_all calls fail, hide_all stays silent.
    facade.unregister_portal(&ha);
    assert!(matches!(
        facade.show(labeled_factory("nowhere"), None),
        Err(PortalError::NoPortalFound)
    ));
    assert!(matches!(
        facade.hide(None, ModalId::next()),
        Err(PortalError::NoPortalFound)
    ));
    assert!(matches!(
        facade.enable_full_window_overlay(),
        Err(PortalError::NoPortalFound)
    ));
    assert!(matches!(
        facade.disable_full_window_overlay(),
        Err(PortalError::NoPortalFound)
    ));
    facade.hide_all();
    assert!(registry.is_empty());
}

#[test]
fn stale_portal_is_skipped_without_unregistration() {
    let registry = PortalRegistry::new();
    let facade = PortalFacade::new(&registry);

    let a = TestHost::mounted();
    let b = TestHost::mounted();
    facade.register_portal(PortalHandle::new(&a));
    facade.register_portal(PortalHandle::new(&b));

    // B unmounts without cleanup; its entry stays but must never resolve.
    drop(b);
    facade.show(labeled_factory("fallback"), None).unwrap();
    assert_eq!(a.shown(), vec!["fallback"]);
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.live_count(), 1);

    // A gone too: nothing live left.
    drop(a);
    assert!(matches!(
        facade.show(labeled_factory("nowhere"), None),
        Err(PortalError::NoPortalFound)
    ));
    facade.hide_all();
}

#[test]
fn ticket_resolves_through_facade_hide() {
    let registry = PortalRegistry::new();
    let facade = PortalFacade::new(&registry);
    let host = TestHost::mounted();
    facade.register_portal(PortalHandle::new(&host));

    let ticket = facade.show(labeled_factory("confirm"), None).unwrap();
    assert_eq!(ticket.try_outcome(), None);

    facade
        .hide(Some(ModalOutcome::Confirmed), ticket.modal_id())
        .unwrap();
    assert_eq!(ticket.try_outcome(), Some(ModalOutcome::Confirmed));
}

#[test]
fn hide_all_resolves_every_pending_ticket() {
    let registry = PortalRegistry::new();
    let facade = PortalFacade::new(&registry);
    let host = TestHost::mounted();
    facade.register_portal(PortalHandle::new(&host));

    let first = facade.show(labeled_factory("first"), None).unwrap();
    let second = facade.show(labeled_factory("second"), None).unwrap();

    facade.hide_all();
    assert_eq!(first.try_outcome(), Some(ModalOutcome::Dismissed));
    assert_eq!(second.try_outcome(), Some(ModalOutcome::Dismissed));
}

#[test]
fn overlay_toggles_reach_the_host() {
    let registry = PortalRegistry::new();
    let facade = PortalFacade::new(&registry);
    let host = TestHost::mounted();
    facade.register_portal(PortalHandle::new(&host));

    facade.enable_full_window_overlay().unwrap();
    assert!(host.overlay());
    facade.disable_full_window_overlay().unwrap();
    assert!(!host.overlay());
}

// The one test that touches the process-wide registry; self-contained so it
// cannot interfere with (or be affected by) the registry-injected tests.
#[test]
fn global_free_functions_round_trip() {
    let host = TestHost::mounted();
    let handle = PortalHandle::new(&host);

    // Cleanup hook pattern: legal before anything is mounted.
    modal_portal::hide_all();

    let id = modal_portal::register_portal(handle.clone());
    assert!(!id.as_str().is_empty());

    let ticket = modal_portal::show(labeled_factory("global"), None).unwrap();
    modal_portal::hide(Some(ModalOutcome::Confirmed), ticket.modal_id()).unwrap();
    assert_eq!(ticket.try_outcome(), Some(ModalOutcome::Confirmed));

    modal_portal::enable_full_window_overlay().unwrap();
    modal_portal::disable_full_window_overlay().unwrap();

    modal_portal::unregister_portal(&handle);
    assert!(matches!(
        modal_portal::show(labeled_factory("gone"), None),
        Err(PortalError::NoPortalFound)
    ));
    modal_portal::hide_all();
}
