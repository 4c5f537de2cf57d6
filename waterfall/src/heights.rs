use alloc::vec::Vec;

/// Last measured height of an item plus every height observed before it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct MeasuredHeight {
    value: u32,
    history: Vec<u32>, // includes `value` as the last entry
}

/// Per-index measured heights, keyed by item ordinal.
///
/// Only collaborator-reported values are stored; nothing is estimated.
#[derive(Clone, Debug, Default)]
pub(crate) struct HeightStore {
    entries: Vec<Option<MeasuredHeight>>,
}

impl HeightStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records the first measurement of `index`.
    ///
    /// Returns `true` if the index was unknown. Known indices are left untouched; later changes
    /// go through [`Self::update`].
    pub(crate) fn measure(&mut self, index: usize, height: u32) -> bool {
        if index >= self.entries.len() {
            self.entries.resize(index + 1, None);
        }
        let slot = &mut self.entries[index];
        if slot.is_some() {
            return false;
        }
        *slot = Some(MeasuredHeight {
            value: height,
            history: alloc::vec![height],
        });
        true
    }

    /// Stores a new height for an already measured index.
    ///
    /// Returns `true` only if the height differs from the last recorded one. Unknown indices are
    /// ignored.
    pub(crate) fn update(&mut self, index: usize, height: u32) -> bool {
        let Some(Some(entry)) = self.entries.get_mut(index) else {
            return false;
        };
        if entry.history.last() == Some(&height) {
            return false;
        }
        entry.value = height;
        entry.history.push(height);
        true
    }

    pub(crate) fn value(&self, index: usize) -> Option<u32> {
        self.entries.get(index)?.as_ref().map(|e| e.value)
    }

    pub(crate) fn history(&self, index: usize) -> Option<&[u32]> {
        self.entries
            .get(index)?
            .as_ref()
            .map(|e| e.history.as_slice())
    }

    pub(crate) fn is_measured(&self, index: usize) -> bool {
        self.value(index).is_some()
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.entries.truncate(len);
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}
