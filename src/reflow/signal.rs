//! Pending-reflow signal shared between event sources and the coordinator

use std::cell::Cell;
use std::rc::Rc;

/// Accumulated triggers since the last pass started
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PendingReflow {
    /// Number of events folded into this reflow
    pub events: u32,
    /// At least one event may shrink the page count (geometry, overlay,
    /// explicit content shrink)
    pub exact: bool,
}

impl PendingReflow {
    fn merge(self, exact: bool) -> Self {
        self.combine(Self { events: 1, exact })
    }

    fn combine(self, other: Self) -> Self {
        Self {
            events: self.events.saturating_add(other.events),
            exact: self.exact || other.exact,
        }
    }
}

/// Cloneable handle event sources post reflow requests through
///
/// Posting only sets a flag. Any number of posts between two passes fold
/// into a single pending reflow.
#[derive(Debug, Clone, Default)]
pub struct ReflowSignal {
    pending: Rc<Cell<Option<PendingReflow>>>,
}

impl ReflowSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content was committed
    pub fn content_changed(&self) {
        self.post(false);
    }

    /// Content was removed; the page count may drop
    pub fn content_shrunk(&self) {
        self.post(true);
    }

    /// Geometry or header/footer changed
    pub(crate) fn layout_changed(&self) {
        self.post(true);
    }

    fn post(&self, exact: bool) {
        let pending = self.pending.get().unwrap_or_default().merge(exact);
        self.pending.set(Some(pending));
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }

    /// Put back a reflow that was claimed but not run
    pub(crate) fn restore(&self, pending: PendingReflow) {
        let merged = match self.pending.get() {
            Some(current) => current.combine(pending),
            None => pending,
        };
        self.pending.set(Some(merged));
    }

    /// Claim everything posted so far
    pub fn take(&self) -> Option<PendingReflow> {
        self.pending.take()
    }
}
