use alloc::vec::Vec;

use crate::dirty::DirtyQueue;
use crate::heights::HeightStore;
use crate::layout::{self, ColumnGeometry};
use crate::pagination::Pagination;
use crate::scheduler::FlushScheduler;
use crate::snapshot::ColumnSnapshots;
use crate::{
    ContainerSize, DirtyRange, ItemSlot, MeasuredSize, Rect, WalkOutcome, WaterfallError,
    WaterfallOptions, Window,
};

/// A headless masonry layout engine.
///
/// The engine holds no UI objects and never measures anything itself:
/// - the collaborator reports each item's height once on mount (`measure`) and again whenever it
///   changes (`update`);
/// - the host forwards container size and scroll offset (`set_container`, `on_scroll`);
/// - the host calls `tick(now_ms)` from its event loop so coalesced size changes get flushed.
///
/// Rendering decisions are exposed per index through [`Waterfall::slot`] and
/// [`Waterfall::for_each_mounted`].
///
/// All state is owned by the instance and mutated through `&mut self`, so a flush can never be
/// re-entered by a size change arriving mid-walk: such changes land in the dirty queue and are
/// picked up by the next flush.
#[derive(Clone, Debug)]
pub struct Waterfall {
    options: WaterfallOptions,
    container: ContainerSize,
    geometry: ColumnGeometry,
    scroll_offset: u64,
    window: Window,

    heights: HeightStore,
    snapshots: ColumnSnapshots,
    rects: Vec<Option<Rect>>,
    // Next index to place. Rects before it form the published layout; rects at or past it are
    // leftovers of an earlier walk.
    cursor: usize,
    scratch: Vec<u64>,

    dirty: DirtyQueue,
    scheduler: FlushScheduler,
    last_flush: Option<DirtyRange>,

    pagination: Pagination,
}

impl Waterfall {
    /// Creates an engine from options.
    ///
    /// Fails if the options are invalid (e.g. zero columns); the engine must not be used then.
    pub fn new(options: WaterfallOptions) -> Result<Self, WaterfallError> {
        options.validate()?;
        let container = options.initial_container.unwrap_or_default();
        wdebug!(
            count = options.count,
            columns = options.columns,
            container_width = container.width,
            container_height = container.height,
            "Waterfall::new"
        );
        Ok(Self {
            container,
            geometry: ColumnGeometry::new(container.width, options.columns, options.gap_x),
            scroll_offset: 0,
            window: Window::new(0, container.height, options.buffer_height),
            heights: HeightStore::new(),
            snapshots: ColumnSnapshots::new(options.columns),
            rects: Vec::new(),
            cursor: 0,
            scratch: Vec::with_capacity(options.columns),
            dirty: DirtyQueue::new(),
            scheduler: FlushScheduler::new(options.throttle_ms),
            last_flush: None,
            pagination: Pagination::new(options.page_size, options.initial_reveal),
            options,
        })
    }

    pub fn options(&self) -> &WaterfallOptions {
        &self.options
    }

    /// Replaces the options, keeping as much of the computed layout as the change allows.
    ///
    /// A column count change drops the snapshot table and the published layout; any change to
    /// columns or gaps schedules a recompute from index 0 on the next tick.
    pub fn set_options(&mut self, options: WaterfallOptions) -> Result<(), WaterfallError> {
        options.validate()?;
        let prev = core::mem::replace(&mut self.options, options);
        wdebug!(
            count = self.options.count,
            columns = self.options.columns,
            "Waterfall::set_options"
        );

        if prev.count != self.options.count {
            let count = self.options.count;
            self.options.count = prev.count;
            self.apply_count(count);
        }

        let columns_changed = prev.columns != self.options.columns;
        if columns_changed {
            self.snapshots.reset(self.options.columns);
            self.cursor = 0;
        }
        if columns_changed || prev.gap_x != self.options.gap_x {
            self.rebuild_geometry();
        }
        if columns_changed
            || prev.gap_x != self.options.gap_x
            || prev.gap_y != self.options.gap_y
        {
            self.invalidate_all();
        }

        self.scheduler.set_wait_ms(self.options.throttle_ms);
        self.pagination
            .configure(self.options.page_size, self.options.initial_reveal);
        self.update_window();
        self.notify();
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    /// Grows or shrinks the item sequence while keeping its identity.
    ///
    /// Layout for the surviving prefix is kept. Use [`Self::reset`] when the collection itself
    /// is replaced.
    pub fn set_count(&mut self, count: usize) {
        if self.options.count == count {
            return;
        }
        self.apply_count(count);
        self.notify();
    }

    /// Discards all heights, snapshots, rects and pagination progress for a new collection.
    pub fn reset(&mut self, count: usize) {
        wdebug!(prev = self.options.count, count, "reset");
        self.options.count = count;
        self.heights.clear();
        self.snapshots.reset(self.options.columns);
        self.rects.clear();
        self.cursor = 0;
        self.dirty.clear();
        self.scheduler.cancel();
        self.last_flush = None;
        self.pagination.reset();
        self.notify();
    }

    pub fn container(&self) -> ContainerSize {
        self.container
    }

    /// Applies a container resize.
    ///
    /// A width change recomputes the column geometry and relayouts everything on the next tick;
    /// a height change only moves the window.
    pub fn set_container(&mut self, container: ContainerSize) {
        if self.container == container {
            return;
        }
        let width_changed = self.container.width != container.width;
        self.container = container;
        if width_changed {
            self.rebuild_geometry();
            self.invalidate_all();
        }
        self.update_window();
        self.notify();
    }

    /// Records the first measurement of `index` and extends the layout as far as possible.
    ///
    /// Returns `true` if this was the first measurement. Later reports for the same index are
    /// ignored here; use [`Self::update`] for size changes.
    pub fn measure(&mut self, index: usize, height: u32) -> bool {
        if index >= self.options.count {
            wwarn!(index, count = self.options.count, "measure: out-of-range index");
            return false;
        }
        if !self.heights.measure(index, height) {
            return false;
        }
        wtrace!(index, height, "measure");
        self.compute_from(self.cursor);
        true
    }

    /// Like [`Self::measure`], but takes the intrinsic size of the item.
    ///
    /// With `scale_to_column_width`, the stored height is
    /// `height * column_width / width` (rounded), or `0` for a zero width.
    pub fn measure_intrinsic(&mut self, index: usize, size: MeasuredSize) -> bool {
        let height = if self.options.scale_to_column_width {
            self.scale_to_column(size)
        } else {
            size.height
        };
        self.measure(index, height)
    }

    /// Reports a new height for an already measured item.
    ///
    /// A height equal to the last recorded one is a no-op. Otherwise the index is queued and the
    /// flush timer is (re)started at `now_ms`. Returns `true` if the height changed.
    pub fn update(&mut self, index: usize, height: u32, now_ms: u64) -> bool {
        if index >= self.options.count {
            wwarn!(index, count = self.options.count, "update: out-of-range index");
            return false;
        }
        if !self.heights.update(index, height) {
            return false;
        }
        wtrace!(index, height, now_ms, "update");
        self.dirty.insert(index);
        self.scheduler.schedule(now_ms);
        true
    }

    /// Manual re-measure trigger for content changes the host cannot observe.
    ///
    /// Indices that are not mounted (unrevealed, culled, unmeasured or out of range) are ignored.
    pub fn remeasure(&mut self, index: usize, height: u32, now_ms: u64) -> bool {
        if !self.slot(index).is_mounted() || !self.heights.is_measured(index) {
            wtrace!(index, "remeasure: not mounted");
            return false;
        }
        self.update(index, height, now_ms)
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn window(&self) -> Window {
        self.window
    }

    /// Applies a scroll notification: moves the window and reveals the next page when the
    /// revealed tail comes within `threshold` of the window bottom.
    ///
    /// Returns `true` if a new page was revealed.
    pub fn on_scroll(&mut self, scroll_offset: u64) -> bool {
        self.scroll_offset = scroll_offset;
        self.update_window();
        let advanced = self.maybe_advance_page();
        if advanced {
            self.notify();
        }
        advanced
    }

    /// Resumes a chunked walk if one is pending, then flushes the dirty queue if its coalescing
    /// window has elapsed at `now_ms`. Returns `true` if any rect was recomputed.
    ///
    /// The continuation never consumes the dirty queue: size changes still inside their window
    /// wait for their own deadline.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let mut changed = false;
        if let Some(start) = self.scheduler.take_continuation() {
            wtrace!(start, now_ms, "tick: continuation");
            changed |= self.compute_from(start).placed() > 0;
        }
        if self.scheduler.take_due(now_ms) {
            changed |= self.flush_pending();
        }
        changed
    }

    /// Flushes the dirty queue and any pending continuation immediately, ignoring the coalescing
    /// window. A walk longer than `chunk_threshold` still continues on the next tick.
    pub fn flush(&mut self) -> bool {
        let resume = self.scheduler.take_continuation();
        self.scheduler.cancel();
        let mut changed = false;
        if let Some(start) = resume {
            changed |= self.compute_from(start).placed() > 0;
        }
        changed |= self.flush_pending();
        changed
    }

    pub fn is_flush_pending(&self) -> bool {
        self.scheduler.continuation().is_some()
            || (self.scheduler.has_deadline() && !self.dirty.is_empty())
    }

    /// Time at which the next `tick` has work to do, if any is scheduled.
    pub fn next_flush_at(&self) -> Option<u64> {
        let deadline = self
            .scheduler
            .next_deadline()
            .filter(|_| !self.dirty.is_empty());
        match (self.scheduler.next_continuation(), deadline) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Index the pending chunk continuation resumes from.
    pub fn continuation(&self) -> Option<usize> {
        self.scheduler.continuation()
    }

    pub fn pending_range(&self) -> Option<DirtyRange> {
        self.dirty.range()
    }

    pub fn pending_len(&self) -> usize {
        self.dirty.len()
    }

    /// The range consumed by the most recent flush.
    pub fn last_flush(&self) -> Option<DirtyRange> {
        self.last_flush
    }

    /// Runs the packing walk starting at `start`.
    ///
    /// The walk places items in strictly ascending order, each into the shortest column of the
    /// preceding snapshot. It stops when the next item has no measurement yet (a normal
    /// suspension, resumed by the next `measure`) or when `chunk_threshold` items were placed in
    /// this call, in which case the walk resumes from the stop index on the next tick.
    ///
    /// `start` is clamped to the layout frontier, since snapshots past it may be stale.
    pub fn compute_from(&mut self, start: usize) -> WalkOutcome {
        let count = self.options.count;
        let gap_y = self.options.gap_y;
        let budget = self.options.chunk_threshold;

        let mut index = start.min(self.cursor);
        self.scheduler.cover_continuation(index);
        let mut placed = 0usize;
        let outcome = loop {
            let Some(height) = self.heights.value(index).filter(|_| index < count) else {
                break WalkOutcome::Suspended { index, placed };
            };
            if !self.snapshots.copy_into(index, &mut self.scratch) {
                break WalkOutcome::Suspended { index, placed };
            }
            if placed >= budget {
                self.scheduler.resume_at(index);
                break WalkOutcome::Chunked { index, placed };
            }
            let Some(placement) = layout::place(&mut self.scratch, height, gap_y) else {
                break WalkOutcome::Suspended { index, placed };
            };
            let rect = self.geometry.rect(placement, height);
            self.set_rect(index, rect);
            self.snapshots.write(index + 1, &self.scratch);
            index += 1;
            placed += 1;
        };

        self.cursor = index;
        wdebug!(
            start,
            stop = index,
            placed,
            chunked = outcome.is_chunked(),
            "compute_from"
        );
        if placed > 0 {
            self.notify();
        }
        outcome
    }

    /// The next index the layout will place.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Published rect of `index`.
    ///
    /// Only indices before [`Self::cursor`] have one: after a suspended or chunked walk, rects
    /// further down belong to the previous layout and are withheld until the walk reaches them.
    pub fn rect(&self, index: usize) -> Option<Rect> {
        if index >= self.cursor.min(self.options.count) {
            return None;
        }
        self.rects.get(index).copied().flatten()
    }

    pub fn height(&self, index: usize) -> Option<u32> {
        self.heights.value(index)
    }

    /// Every height observed for `index`, oldest first.
    pub fn height_history(&self, index: usize) -> Option<&[u32]> {
        self.heights.history(index)
    }

    pub fn is_measured(&self, index: usize) -> bool {
        self.heights.is_measured(index)
    }

    /// Decides how the collaborator should treat `index`.
    ///
    /// Revealed items without a published rect (see [`Self::rect`]) stay mounted off-window as
    /// [`ItemSlot::Measure`], even if they were measured before.
    pub fn slot(&self, index: usize) -> ItemSlot {
        if index >= self.revealed_count() {
            return ItemSlot::Unrevealed;
        }
        match self.rect(index) {
            None => ItemSlot::Measure,
            Some(rect) if self.window.intersects(&rect) => ItemSlot::Placed(rect),
            Some(rect) => ItemSlot::Culled(rect),
        }
    }

    /// Calls `f` for every index the collaborator must mount, in ascending order.
    pub fn for_each_mounted(&self, mut f: impl FnMut(usize, ItemSlot)) {
        for index in 0..self.revealed_count() {
            let slot = self.slot(index);
            if slot.is_mounted() {
                f(index, slot);
            }
        }
    }

    /// Collects mounted indices into `out` (clears `out` first).
    pub fn collect_mounted(&self, out: &mut Vec<(usize, ItemSlot)>) {
        out.clear();
        self.for_each_mounted(|index, slot| out.push((index, slot)));
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page()
    }

    /// Number of items currently allowed to mount.
    pub fn revealed_count(&self) -> usize {
        self.pagination.revealed().min(self.options.count)
    }

    /// Cumulative column heights at the layout frontier.
    pub fn column_heights(&self) -> &[u64] {
        self.snapshots.get(self.cursor).unwrap_or(&[])
    }

    /// Height of the tallest column, i.e. the scrollable content height.
    pub fn content_height(&self) -> u64 {
        self.column_heights().iter().copied().max().unwrap_or(0)
    }

    pub fn column_width(&self) -> u32 {
        self.geometry.column_width()
    }

    pub fn column_left(&self, column: usize) -> Option<u32> {
        self.geometry.left(column)
    }

    fn flush_pending(&mut self) -> bool {
        let Some(range) = self.dirty.take() else {
            return false;
        };
        wdebug!(start = range.start, end = range.end, "flush");
        self.last_flush = Some(range);
        self.compute_from(range.start).placed() > 0
    }

    fn apply_count(&mut self, count: usize) {
        wdebug!(prev = self.options.count, count, "set_count");
        if count < self.options.count {
            self.heights.truncate(count);
            self.rects.truncate(count);
            self.dirty.truncate(count);
            self.cursor = self.cursor.min(count);
        }
        self.options.count = count;
    }

    fn maybe_advance_page(&mut self) -> bool {
        if !self.pagination.is_enabled() {
            return false;
        }
        let revealed = self.pagination.revealed();
        if revealed >= self.options.count {
            return false;
        }
        let reach = self.window.bottom.saturating_add(self.options.threshold);
        let advance = match revealed.checked_sub(1) {
            None => true,
            Some(last) => self.rect(last).is_some_and(|rect| rect.bottom() < reach),
        };
        if advance {
            self.pagination.advance();
            wdebug!(
                page = self.pagination.current_page(),
                revealed = self.revealed_count(),
                "page advanced"
            );
        }
        advance
    }

    fn scale_to_column(&self, size: MeasuredSize) -> u32 {
        if size.width == 0 {
            return 0;
        }
        let width = size.width as u64;
        let scaled = (size.height as u64 * self.geometry.column_width() as u64 + width / 2) / width;
        scaled.min(u32::MAX as u64) as u32
    }

    fn set_rect(&mut self, index: usize, rect: Rect) {
        if index >= self.rects.len() {
            self.rects.resize(index + 1, None);
        }
        self.rects[index] = Some(rect);
    }

    fn rebuild_geometry(&mut self) {
        self.geometry = ColumnGeometry::new(
            self.container.width,
            self.options.columns,
            self.options.gap_x,
        );
        wdebug!(
            container_width = self.container.width,
            column_width = self.geometry.column_width(),
            "rebuild_geometry"
        );
    }

    // Every rect depends on geometry or gaps: recompute from the origin on the next tick.
    fn invalidate_all(&mut self) {
        self.scheduler.resume_at(0);
    }

    fn update_window(&mut self) {
        self.window = Window::new(
            self.scroll_offset,
            self.container.height,
            self.options.buffer_height,
        );
    }

    fn notify(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }
}
