use alloc::vec::Vec;

/// Cumulative column heights as they stood immediately before each index was placed.
///
/// Stored as one flat arena with a stride of `columns`: entry `i` occupies
/// `heights[i * columns..(i + 1) * columns]`. Entry `0` is all zeros. Entries are only
/// overwritten during partial recomputes; [`Self::reset`] is the only way to drop them.
#[derive(Clone, Debug)]
pub(crate) struct ColumnSnapshots {
    columns: usize,
    heights: Vec<u64>,
}

impl ColumnSnapshots {
    pub(crate) fn new(columns: usize) -> Self {
        Self {
            columns,
            heights: alloc::vec![0; columns],
        }
    }

    /// Number of stored entries (always at least 1).
    pub(crate) fn len(&self) -> usize {
        self.heights.len() / self.columns.max(1)
    }

    pub(crate) fn get(&self, index: usize) -> Option<&[u64]> {
        let start = index.checked_mul(self.columns)?;
        self.heights.get(start..start + self.columns)
    }

    /// Copies entry `index` into `out`. Returns `false` if the entry does not exist.
    pub(crate) fn copy_into(&self, index: usize, out: &mut Vec<u64>) -> bool {
        let Some(entry) = self.get(index) else {
            return false;
        };
        out.clear();
        out.extend_from_slice(entry);
        true
    }

    /// Writes entry `index`, overwriting it or appending it right after the last entry.
    pub(crate) fn write(&mut self, index: usize, heights: &[u64]) {
        debug_assert_eq!(heights.len(), self.columns);
        let len = self.len();
        if index < len {
            let start = index * self.columns;
            self.heights[start..start + self.columns].copy_from_slice(heights);
        } else if index == len {
            self.heights.extend_from_slice(heights);
        } else {
            debug_assert!(
                index <= len,
                "snapshot written past the end (index={index}, len={len})"
            );
        }
    }

    /// Drops every entry except the all-zero origin, re-striding to `columns`.
    pub(crate) fn reset(&mut self, columns: usize) {
        self.columns = columns;
        self.heights.clear();
        self.heights.resize(columns, 0);
    }
}
