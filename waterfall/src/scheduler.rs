/// Trailing-edge flush timer plus the chunk continuation point.
///
/// This type holds no clock. The engine passes `now_ms` in from the host: every
/// [`Self::schedule`] pushes the deadline to `now_ms + wait_ms`, so a burst of changes produces
/// one flush after the burst settles.
///
/// A chunk continuation is tracked separately from the deadline. It fires on the next tick and
/// only resumes the interrupted walk; it never consumes changes still inside their coalescing
/// window.
#[derive(Clone, Debug)]
pub(crate) struct FlushScheduler {
    wait_ms: u64,
    deadline: Option<u64>,
    continuation: Option<usize>,
    last_now_ms: u64,
}

impl FlushScheduler {
    pub(crate) fn new(wait_ms: u64) -> Self {
        Self {
            wait_ms,
            deadline: None,
            continuation: None,
            last_now_ms: 0,
        }
    }

    pub(crate) fn set_wait_ms(&mut self, wait_ms: u64) {
        self.wait_ms = wait_ms;
    }

    /// (Re)starts the coalescing window at `now_ms`.
    pub(crate) fn schedule(&mut self, now_ms: u64) {
        self.last_now_ms = self.last_now_ms.max(now_ms);
        self.deadline = Some(now_ms.saturating_add(self.wait_ms));
    }

    /// Requests a walk from `index` on the very next tick. Keeps the lower index if one is
    /// already pending.
    pub(crate) fn resume_at(&mut self, index: usize) {
        self.continuation = Some(self.continuation.map_or(index, |c| c.min(index)));
    }

    /// Drops a pending continuation that a walk starting at `start` will reach.
    pub(crate) fn cover_continuation(&mut self, start: usize) {
        if self.continuation.is_some_and(|c| c >= start) {
            self.continuation = None;
        }
    }

    pub(crate) fn continuation(&self) -> Option<usize> {
        self.continuation
    }

    pub(crate) fn take_continuation(&mut self) -> Option<usize> {
        self.continuation.take()
    }

    pub(crate) fn has_deadline(&self) -> bool {
        self.deadline.is_some()
    }

    pub(crate) fn next_deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Time of the tick that will run the pending continuation.
    pub(crate) fn next_continuation(&self) -> Option<u64> {
        self.continuation.map(|_| self.last_now_ms)
    }

    /// Returns `true` (and disarms the deadline) if the coalescing window has elapsed at `now_ms`.
    pub(crate) fn take_due(&mut self, now_ms: u64) -> bool {
        self.last_now_ms = self.last_now_ms.max(now_ms);
        let due = self.deadline.is_some_and(|d| now_ms >= d);
        if due {
            self.deadline = None;
        }
        due
    }

    pub(crate) fn cancel(&mut self) {
        self.deadline = None;
        self.continuation = None;
    }
}
