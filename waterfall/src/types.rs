/// Which container edge a column is pinned to.
///
/// The last column is pinned to the right edge so rounding of the column width never leaves a
/// ragged gap on the right side of the container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColumnAnchor {
    #[default]
    Left,
    Right,
}

/// Computed placement of a single item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Column the item was packed into.
    pub column: usize,
    /// Offset from the top of the content.
    pub top: u64,
    /// Offset from the left edge of the container.
    ///
    /// For [`ColumnAnchor::Right`] this equals `container_width - width`.
    pub left: u32,
    pub anchor: ColumnAnchor,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn bottom(&self) -> u64 {
        self.top.saturating_add(self.height as u64)
    }
}

/// Size of the scroll container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerSize {
    pub width: u32,
    pub height: u32,
}

impl ContainerSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Intrinsic size of an item as reported by the collaborator on first mount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasuredSize {
    pub width: u32,
    pub height: u32,
}

impl MeasuredSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// What the collaborator should do with an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemSlot {
    /// Positioned and inside the window: render at `Rect`.
    Placed(Rect),
    /// Not positioned yet: render off-window so the first measurement can be taken.
    Measure,
    /// Positioned but outside the window: do not mount. The rect is kept for later.
    Culled(Rect),
    /// Beyond the revealed page (or the item count): do not mount.
    Unrevealed,
}

impl ItemSlot {
    /// Returns `true` when the collaborator must mount the item.
    pub fn is_mounted(&self) -> bool {
        matches!(self, Self::Placed(_) | Self::Measure)
    }

    pub fn rect(&self) -> Option<Rect> {
        match self {
            Self::Placed(rect) | Self::Culled(rect) => Some(*rect),
            Self::Measure | Self::Unrevealed => None,
        }
    }
}

/// The `[start, end]` span of a consumed dirty set (both inclusive).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirtyRange {
    pub start: usize,
    pub end: usize,
}

/// Where a packing walk stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WalkOutcome {
    /// Waiting for a measurement of `index` (or `index` is past the item count).
    Suspended { index: usize, placed: usize },
    /// The per-invocation step budget ran out; `index` was queued for the next tick.
    Chunked { index: usize, placed: usize },
}

impl WalkOutcome {
    /// The index the next walk will start from.
    pub fn index(&self) -> usize {
        match *self {
            Self::Suspended { index, .. } | Self::Chunked { index, .. } => index,
        }
    }

    /// Number of rects written by the walk.
    pub fn placed(&self) -> usize {
        match *self {
            Self::Suspended { placed, .. } | Self::Chunked { placed, .. } => placed,
        }
    }

    pub fn is_chunked(&self) -> bool {
        matches!(self, Self::Chunked { .. })
    }
}
