use alloc::collections::BTreeMap;

/// Delay applied to raw size reports before they are forwarded.
pub const DEFAULT_RESIZE_DELAY_MS: u64 = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingResize {
    pub height: u32,
    pub due_ms: u64,
}

/// Coalesces raw per-item size reports (e.g. from a resize observer) into one edge-triggered
/// size change per item.
///
/// Each new report for an index replaces the previous one and restarts that index's delay, so a
/// burst of intermediate sizes produces a single report with the final size.
#[derive(Clone, Debug)]
pub struct ResizeDebouncer {
    delay_ms: u64,
    pending: BTreeMap<usize, PendingResize>,
}

impl Default for ResizeDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_RESIZE_DELAY_MS)
    }
}

impl ResizeDebouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: BTreeMap::new(),
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    pub fn push(&mut self, index: usize, height: u32, now_ms: u64) {
        atrace!(index, height, now_ms, "ResizeDebouncer::push");
        self.pending.insert(
            index,
            PendingResize {
                height,
                due_ms: now_ms.saturating_add(self.delay_ms),
            },
        );
    }

    /// Removes every report that is due at `now_ms` and passes it to `f` in ascending index
    /// order. Returns the number of forwarded reports.
    pub fn drain_due(&mut self, now_ms: u64, mut f: impl FnMut(usize, u32)) -> usize {
        let mut drained = 0usize;
        self.pending.retain(|&index, pending| {
            if pending.due_ms > now_ms {
                return true;
            }
            f(index, pending.height);
            drained += 1;
            false
        });
        drained
    }

    pub fn get(&self, index: usize) -> Option<PendingResize> {
        self.pending.get(&index).copied()
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.values().map(|p| p.due_ms).min()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drops reports for indices at or past `len`.
    pub fn truncate(&mut self, len: usize) {
        let _ = self.pending.split_off(&len);
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
