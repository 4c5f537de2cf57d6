use alloc::sync::Arc;

use crate::engine::Waterfall;
use crate::{ContainerSize, WaterfallError};

/// A callback fired after new rects are published or the revealed page advances.
pub type OnChangeCallback = Arc<dyn Fn(&Waterfall) + Send + Sync>;

/// Configuration for [`crate::Waterfall`].
///
/// Cheap to clone: the only heavy field is stored in an `Arc`, so adapters can tweak a few
/// fields and call `Waterfall::set_options` without reallocating closures.
pub struct WaterfallOptions {
    /// Number of items in the collection.
    pub count: usize,
    /// Number of columns. Must be at least 1.
    pub columns: usize,
    /// Horizontal space between columns.
    pub gap_x: u32,
    /// Vertical space between items stacked in the same column.
    pub gap_y: u32,

    /// Items revealed per page. `None` disables pagination (everything is revealed).
    pub page_size: Option<usize>,
    /// Size of the first revealed batch. `None` means one page.
    pub initial_reveal: Option<usize>,
    /// How far below the window the last revealed item may end before the next page is revealed.
    pub threshold: u64,

    /// Extra margin added above and below the viewport before culling.
    pub buffer_height: u64,

    /// Trailing-edge coalescing window for size-change flushes.
    pub throttle_ms: u64,
    /// Maximum number of items placed by a single packing walk.
    pub chunk_threshold: usize,

    /// When set, [`crate::Waterfall::measure_intrinsic`] scales the reported height by the ratio
    /// of the column width to the reported width (e.g. images rendered at column width).
    pub scale_to_column_width: bool,

    /// Container size applied by `Waterfall::new`.
    pub initial_container: Option<ContainerSize>,

    pub on_change: Option<OnChangeCallback>,
}

impl Clone for WaterfallOptions {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            columns: self.columns,
            gap_x: self.gap_x,
            gap_y: self.gap_y,
            page_size: self.page_size,
            initial_reveal: self.initial_reveal,
            threshold: self.threshold,
            buffer_height: self.buffer_height,
            throttle_ms: self.throttle_ms,
            chunk_threshold: self.chunk_threshold,
            scale_to_column_width: self.scale_to_column_width,
            initial_container: self.initial_container,
            on_change: self.on_change.clone(),
        }
    }
}

impl Default for WaterfallOptions {
    fn default() -> Self {
        Self::new(0, 2)
    }
}

impl WaterfallOptions {
    /// Creates options for `count` items in `columns` columns with the default gaps, paging and
    /// throttling.
    pub fn new(count: usize, columns: usize) -> Self {
        Self {
            count,
            columns,
            gap_x: 0,
            gap_y: 0,
            page_size: Some(20),
            initial_reveal: None,
            threshold: 250,
            buffer_height: 500,
            throttle_ms: 300,
            chunk_threshold: 256,
            scale_to_column_width: false,
            initial_container: None,
            on_change: None,
        }
    }

    /// Checks the invariants the engine relies on.
    pub fn validate(&self) -> Result<(), WaterfallError> {
        if self.columns == 0 {
            return Err(WaterfallError::ZeroColumns);
        }
        if self.page_size == Some(0) {
            return Err(WaterfallError::ZeroPageSize);
        }
        if self.chunk_threshold == 0 {
            return Err(WaterfallError::ZeroChunkThreshold);
        }
        Ok(())
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_gap(mut self, gap_x: u32, gap_y: u32) -> Self {
        self.gap_x = gap_x;
        self.gap_y = gap_y;
        self
    }

    pub fn with_page_size(mut self, page_size: Option<usize>) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_initial_reveal(mut self, initial_reveal: Option<usize>) -> Self {
        self.initial_reveal = initial_reveal;
        self
    }

    pub fn with_threshold(mut self, threshold: u64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_buffer_height(mut self, buffer_height: u64) -> Self {
        self.buffer_height = buffer_height;
        self
    }

    pub fn with_throttle_ms(mut self, throttle_ms: u64) -> Self {
        self.throttle_ms = throttle_ms;
        self
    }

    pub fn with_chunk_threshold(mut self, chunk_threshold: usize) -> Self {
        self.chunk_threshold = chunk_threshold;
        self
    }

    pub fn with_scale_to_column_width(mut self, scale: bool) -> Self {
        self.scale_to_column_width = scale;
        self
    }

    pub fn with_initial_container(mut self, container: Option<ContainerSize>) -> Self {
        self.initial_container = container;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Waterfall) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for WaterfallOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WaterfallOptions")
            .field("count", &self.count)
            .field("columns", &self.columns)
            .field("gap_x", &self.gap_x)
            .field("gap_y", &self.gap_y)
            .field("page_size", &self.page_size)
            .field("initial_reveal", &self.initial_reveal)
            .field("threshold", &self.threshold)
            .field("buffer_height", &self.buffer_height)
            .field("throttle_ms", &self.throttle_ms)
            .field("chunk_threshold", &self.chunk_threshold)
            .field("scale_to_column_width", &self.scale_to_column_width)
            .field("initial_container", &self.initial_container)
            .finish_non_exhaustive()
    }
}
