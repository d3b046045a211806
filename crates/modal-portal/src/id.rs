#![forbid(unsafe_code)]

//! Portal identity generation.
//!
//! Ids only need to be collision-improbable for the handful of portals a
//! process hosts at once, not globally unique in any cryptographic sense.
//! A random base-36 fragment keeps rapid repeated calls apart; the
//! wall-clock suffix keeps separate process runs apart.

use std::fmt;

use web_time::{SystemTime, UNIX_EPOCH};

/// Opaque identifier handed out by portal registration.
///
/// Generated on registration and returned to the caller. The registry keeps
/// no id-to-handle mapping — unregistration takes the handle itself — so the
/// id is purely a diagnostic token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PortalId(String);

impl PortalId {
    /// Generate a fresh id from a random base-36 fragment and the current
    /// wall-clock milliseconds.
    ///
    /// No side effects beyond reading the clock and the thread RNG.
    pub fn generate() -> Self {
        let frag = to_base36(rand::random::<u64>());
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        Self(format!("{frag}-{millis}"))
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PortalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    // u64::MAX is 13 digits in base 36.
    let mut buf = [0u8; 13];
    let mut i = buf.len();
    while n > 0 {
        i -= 1;
        buf[i] = DIGITS[(n % 36) as usize];
        n /= 36;
    }
    String::from_utf8_lossy(&buf[i..]).into_owned()
}
