#![forbid(unsafe_code)]

//! Error taxonomy for portal resolution.
//!
//! Deliberately small: resolution either finds a live portal or it does not.
//! Failures raised inside a resolved host's own methods are the host's types
//! and pass through the façade untouched.

/// Errors surfaced by portal resolution and the façade functions.
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    /// The registry scan found no handle with a live host instance.
    #[error(
        "no live modal portal is registered; mount a portal host (and keep it mounted) \
         before calling the modal facade"
    )]
    NoPortalFound,
}
