use alloc::collections::BTreeSet;

use crate::DirtyRange;

/// Indices whose measured height changed and whose downstream placements must be recomputed.
///
/// The set is consumed as a whole: a flush only needs its smallest and largest member.
#[derive(Clone, Debug, Default)]
pub(crate) struct DirtyQueue {
    pending: BTreeSet<usize>,
}

impl DirtyQueue {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, index: usize) {
        self.pending.insert(index);
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.pending.len()
    }

    pub(crate) fn range(&self) -> Option<DirtyRange> {
        let start = *self.pending.first()?;
        let end = *self.pending.last()?;
        Some(DirtyRange { start, end })
    }

    /// Returns `[min, max]` of the pending set and clears it.
    pub(crate) fn take(&mut self) -> Option<DirtyRange> {
        let range = self.range()?;
        self.pending.clear();
        Some(range)
    }

    /// Drops indices at or past `len`.
    pub(crate) fn truncate(&mut self, len: usize) {
        let _ = self.pending.split_off(&len);
    }

    pub(crate) fn clear(&mut self) {
        self.pending.clear();
    }
}
