/// Throttle interval targeting one recomputation per display frame.
pub const DEFAULT_SCROLL_INTERVAL_MS: u64 = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Pending {
    offset: u64,
    due_ms: u64,
}

/// Coalesces high-frequency scroll reports into at most one recomputation per interval.
///
/// This is a trailing-edge throttle with last-write-wins semantics: `report` never fires
/// anything itself, it only (re)records the latest offset and, when nothing is pending, arms a
/// deadline one interval away. The host's frame loop calls [`Self::poll`] with the current
/// monotonic time; once the deadline passes, exactly one offset (the last one reported) is
/// handed back. Intermediate offsets are dropped, never queued.
///
/// The throttler owns no timer and never blocks; all timing comes from the `now_ms` values the
/// caller supplies. A missed poll is not retried; the next `report` simply re-arms.
#[derive(Clone, Debug)]
pub struct ScrollThrottler {
    interval_ms: u64,
    pending: Option<Pending>,
}

impl Default for ScrollThrottler {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_INTERVAL_MS)
    }
}

impl ScrollThrottler {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            pending: None,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Changes the interval. Takes effect for the next armed deadline; an already-pending fire
    /// keeps its deadline.
    pub fn set_interval_ms(&mut self, interval_ms: u64) {
        self.interval_ms = interval_ms.max(1);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The most recently reported offset, if a fire is pending.
    pub fn latest_offset(&self) -> Option<u64> {
        self.pending.map(|p| p.offset)
    }

    /// Records a scroll position. Arms a deadline if none is pending; otherwise only the
    /// offset is updated (last-write-wins).
    pub fn report(&mut self, offset: u64, now_ms: u64) {
        wtrace!(offset, now_ms, "ScrollThrottler::report");
        match &mut self.pending {
            Some(pending) => pending.offset = offset,
            None => {
                self.pending = Some(Pending {
                    offset,
                    due_ms: now_ms.saturating_add(self.interval_ms),
                });
            }
        }
    }

    /// Returns the coalesced offset once its deadline has passed, clearing the pending state.
    pub fn poll(&mut self, now_ms: u64) -> Option<u64> {
        match self.pending {
            Some(pending) if now_ms >= pending.due_ms => {
                self.pending = None;
                wtrace!(offset = pending.offset, now_ms, "ScrollThrottler::poll fired");
                Some(pending.offset)
            }
            _ => None,
        }
    }

    /// Fires immediately with the latest reported offset, bypassing the deadline.
    ///
    /// Used on teardown or when an urgent recompute is required (e.g. the list was replaced).
    pub fn flush(&mut self) -> Option<u64> {
        self.pending.take().map(|p| p.offset)
    }

    /// Drops any pending fire without recomputing.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
