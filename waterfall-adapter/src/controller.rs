use alloc::vec::Vec;

use waterfall::{ContainerSize, MeasuredSize, Rect, Waterfall, WaterfallError, WaterfallOptions};

use crate::ResizeDebouncer;

/// One entry of a render plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderItem {
    pub index: usize,
    /// `None` means "mount off-window so the first measurement can be taken".
    pub rect: Option<Rect>,
}

impl RenderItem {
    pub fn is_measuring(&self) -> bool {
        self.rect.is_none()
    }
}

/// A framework-neutral controller that wraps a [`Waterfall`] and turns host events into engine
/// calls.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_container_resize` / `on_scroll` when the scroll container changes
/// - `on_item_mounted` once per item with its intrinsic size, and `on_item_resized` from a size
///   observer afterwards
/// - `tick(now_ms)` each frame/timer tick (debounced resizes and coalesced layout flushes)
///
/// `render_plan` then lists the items to mount and where to put them.
#[derive(Clone, Debug)]
pub struct Controller {
    w: Waterfall,
    resizes: ResizeDebouncer,
}

impl Controller {
    pub fn new(options: WaterfallOptions) -> Result<Self, WaterfallError> {
        Ok(Self::from_waterfall(Waterfall::new(options)?))
    }

    pub fn from_waterfall(w: Waterfall) -> Self {
        Self {
            w,
            resizes: ResizeDebouncer::default(),
        }
    }

    /// Replaces the per-item resize delay (16 ms by default). Pending reports are dropped.
    pub fn with_resize_delay_ms(mut self, delay_ms: u64) -> Self {
        self.resizes = ResizeDebouncer::new(delay_ms);
        self
    }

    pub fn waterfall(&self) -> &Waterfall {
        &self.w
    }

    pub fn waterfall_mut(&mut self) -> &mut Waterfall {
        &mut self.w
    }

    pub fn into_waterfall(self) -> Waterfall {
        self.w
    }

    pub fn resizes(&self) -> &ResizeDebouncer {
        &self.resizes
    }

    pub fn on_container_resize(&mut self, width: u32, height: u32) {
        self.w.set_container(ContainerSize::new(width, height));
    }

    /// Call this when the UI reports a scroll offset change. Returns `true` if a new page was
    /// revealed.
    pub fn on_scroll(&mut self, scroll_offset: u64) -> bool {
        self.w.on_scroll(scroll_offset)
    }

    /// Call this once when an item has been mounted and its intrinsic size is known.
    pub fn on_item_mounted(&mut self, index: usize, size: MeasuredSize) -> bool {
        self.w.measure_intrinsic(index, size)
    }

    /// Call this from a size observer. Reports for items that have not been measured yet are
    /// ignored, since `on_item_mounted` covers the first size.
    ///
    /// Returns `true` if the report was queued.
    pub fn on_item_resized(&mut self, index: usize, height: u32, now_ms: u64) -> bool {
        if !self.w.is_measured(index) {
            atrace!(index, "on_item_resized: not measured yet");
            return false;
        }
        self.resizes.push(index, height, now_ms);
        true
    }

    /// Forwards a manual re-measure straight to the engine, bypassing the resize delay.
    pub fn remeasure(&mut self, index: usize, height: u32, now_ms: u64) -> bool {
        self.w.remeasure(index, height, now_ms)
    }

    /// Advances the controller: forwards due resize reports, then lets the engine flush.
    ///
    /// Returns `true` if any rect was recomputed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let w = &mut self.w;
        let forwarded = self.resizes.drain_due(now_ms, |index, height| {
            w.update(index, height, now_ms);
        });
        if forwarded > 0 {
            atrace!(forwarded, now_ms, "tick: forwarded resizes");
        }
        self.w.tick(now_ms)
    }

    /// Earliest time at which `tick` has work to do.
    pub fn next_wakeup(&self) -> Option<u64> {
        match (self.resizes.next_deadline(), self.w.next_flush_at()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Grows or shrinks the item sequence. Pending resize reports for removed items are dropped.
    pub fn set_count(&mut self, count: usize) {
        self.resizes.truncate(count);
        self.w.set_count(count);
    }

    /// Replaces the item collection.
    pub fn reset(&mut self, count: usize) {
        self.resizes.clear();
        self.w.reset(count);
    }

    /// Collects the items to mount into `out` (clears `out` first), in ascending index order.
    pub fn render_plan(&self, out: &mut Vec<RenderItem>) {
        out.clear();
        self.w.for_each_mounted(|index, slot| {
            out.push(RenderItem {
                index,
                rect: slot.rect(),
            });
        });
    }
}
