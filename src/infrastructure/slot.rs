// src/infrastructure/slot.rs
//
// Per-slot request sequencing.
//
// A slot is a logical channel with at most one "current" in-flight
// request whose result matters: the search box, the overlay target, the
// actor row. Cancellation here means effect suppression, not aborting
// the transport: a caller takes a token before awaiting and compares it
// at completion time; a stale token means the response must be dropped.

use std::sync::atomic::{AtomicU64, Ordering};

/// Token identifying one issued request within a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotToken(u64);

/// Monotonic sequence counter for one logical request slot.
#[derive(Debug, Default)]
pub struct RequestSlot {
    current: AtomicU64,
}

impl RequestSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new token, superseding every previously issued one.
    pub fn issue(&self) -> SlotToken {
        SlotToken(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `token` is still the most recently issued one.
    pub fn is_current(&self, token: SlotToken) -> bool {
        self.current.load(Ordering::SeqCst) == token.0
    }

    /// Supersede every outstanding token without issuing a new one.
    /// Used when the slot's target goes away entirely (overlay close,
    /// actor filter cleared).
    pub fn invalidate(&self) {
        self.current.fetch_add(1, Ordering::SeqCst);
    }
}
