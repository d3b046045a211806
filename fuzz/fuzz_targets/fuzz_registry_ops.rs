#![no_main]

//! Drives arbitrary register/unregister/drop/resolve sequences against a
//! registry and checks the selection invariants: no panic, and resolution
//! never yields a host that has already dropped.

use std::sync::Arc;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use modal_portal::{
    ModalFactory, ModalHost, ModalId, ModalOutcome, PortalHandle, PortalRegistry, ShowConfig,
    ShowTicket,
};

struct StubHost;

impl ModalHost for StubHost {
    fn show(&self, _factory: ModalFactory, _config: Option<ShowConfig>) -> ShowTicket {
        let (ticket, completer) = ShowTicket::pending(ModalId::next());
        completer.complete(ModalOutcome::Dismissed);
        ticket
    }
    fn hide(&self, _outcome: Option<ModalOutcome>, _modal_id: ModalId) {}
    fn hide_all(&self) {}
    fn enable_full_window_overlay(&self) {}
    fn disable_full_window_overlay(&self) {}
}

#[derive(Debug, Arbitrary)]
enum Op {
    Register,
    RegisterDuplicate(u8),
    Unregister(u8),
    DropHost(u8),
    Resolve,
}

fuzz_target!(|ops: Vec<Op>| {
    let registry = PortalRegistry::new();
    let mut hosts: Vec<Option<Arc<StubHost>>> = Vec::new();
    let mut handles: Vec<PortalHandle> = Vec::new();

    for op in ops {
        match op {
            Op::Register => {
                let host = Arc::new(StubHost);
                let handle = PortalHandle::new(&host);
                registry.register(handle.clone());
                hosts.push(Some(host));
                handles.push(handle);
            }
            Op::RegisterDuplicate(k) => {
                if !handles.is_empty() {
                    let slot = k as usize % handles.len();
                    registry.register(handles[slot].clone());
                }
            }
            Op::Unregister(k) => {
                if !handles.is_empty() {
                    let slot = k as usize % handles.len();
                    registry.unregister(&handles[slot]);
                }
            }
            Op::DropHost(k) => {
                if !hosts.is_empty() {
                    let slot = k as usize % hosts.len();
                    hosts[slot] = None;
                }
            }
            Op::Resolve => {
                if let Ok(resolved) = registry.resolve() {
                    // A resolved host must be one we still hold alive.
                    let known = hosts.iter().flatten().any(|h| {
                        let held: Arc<dyn ModalHost> = Arc::clone(h);
                        Arc::ptr_eq(&resolved, &held)
                    });
                    assert!(known, "resolver returned a dropped host");
                }
            }
        }
    }
});
