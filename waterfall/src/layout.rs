use alloc::vec::Vec;

use crate::{ColumnAnchor, Rect};

/// Column width and cached left offsets for a given container width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ColumnGeometry {
    column_width: u32,
    lefts: Vec<u32>,
}

impl ColumnGeometry {
    /// `column_width = round((container_width - (columns - 1) * gap_x) / columns)`.
    ///
    /// The last column is pinned to the right edge: its left offset is
    /// `container_width - column_width`.
    pub(crate) fn new(container_width: u32, columns: usize, gap_x: u32) -> Self {
        let columns = columns.max(1);
        let n = columns as u64;
        let gaps = (gap_x as u64).saturating_mul(n - 1);
        let usable = (container_width as u64).saturating_sub(gaps);
        let column_width = ((usable + n / 2) / n).min(u32::MAX as u64) as u32;

        let step = gap_x as u64 + column_width as u64;
        let mut lefts = Vec::with_capacity(columns);
        for c in 0..columns {
            let left = if c + 1 == columns {
                container_width.saturating_sub(column_width) as u64
            } else {
                step.saturating_mul(c as u64)
            };
            lefts.push(left.min(u32::MAX as u64) as u32);
        }

        Self {
            column_width,
            lefts,
        }
    }

    pub(crate) fn column_width(&self) -> u32 {
        self.column_width
    }

    pub(crate) fn left(&self, column: usize) -> Option<u32> {
        self.lefts.get(column).copied()
    }

    pub(crate) fn anchor(&self, column: usize) -> ColumnAnchor {
        if column + 1 == self.lefts.len() {
            ColumnAnchor::Right
        } else {
            ColumnAnchor::Left
        }
    }

    pub(crate) fn rect(&self, placement: Placement, height: u32) -> Rect {
        Rect {
            column: placement.column,
            top: placement.top,
            left: self.left(placement.column).unwrap_or(0),
            anchor: self.anchor(placement.column),
            width: self.column_width,
            height,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Placement {
    pub(crate) column: usize,
    pub(crate) top: u64,
}

/// Places one item into the shortest column and extends that column in place.
///
/// Ties go to the lowest column index. An empty column (height `0`) takes the item at the very
/// top, otherwise the item sits `gap_y` below the column's current end.
pub(crate) fn place(columns: &mut [u64], height: u32, gap_y: u32) -> Option<Placement> {
    let mut column = 0usize;
    let mut shortest = *columns.first()?;
    for (c, &h) in columns.iter().enumerate().skip(1) {
        if h < shortest {
            shortest = h;
            column = c;
        }
    }

    let top = if shortest == 0 {
        0
    } else {
        shortest.saturating_add(gap_y as u64)
    };
    columns[column] = top.saturating_add(height as u64);
    Some(Placement { column, top })
}
