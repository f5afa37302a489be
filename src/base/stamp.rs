//! Content version tokens.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_STAMP: AtomicU64 = AtomicU64::new(1);

/// A monotonically increasing version token.
///
/// Stamps come from a single process-wide counter, so a stamp handed out
/// later always compares greater than every stamp handed out before it,
/// whichever unit or directory it belongs to. This lets a directory derive
/// its own version as the maximum over its members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Stamp(u64);

impl Stamp {
    /// The stamp older than every allocated stamp.
    pub const ZERO: Stamp = Stamp(0);

    /// Allocate a fresh stamp, strictly greater than all previous ones.
    pub fn next() -> Self {
        Self(NEXT_STAMP.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}
