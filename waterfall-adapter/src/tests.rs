use crate::*;

use alloc::vec::Vec;
use waterfall::{ContainerSize, MeasuredSize, WaterfallOptions};

fn controller(count: usize) -> Controller {
    let opts = WaterfallOptions::new(count, 2)
        .with_throttle_ms(100)
        .with_initial_container(Some(ContainerSize::new(200, 400)));
    Controller::new(opts).unwrap()
}

#[test]
fn resize_burst_reaches_engine_as_one_change() {
    let mut c = controller(2);
    assert!(c.on_item_mounted(0, MeasuredSize::new(100, 50)));
    assert!(c.on_item_mounted(1, MeasuredSize::new(100, 50)));

    assert!(c.on_item_resized(0, 60, 0));
    assert!(c.on_item_resized(0, 70, 5));
    assert!(c.on_item_resized(0, 80, 10));
    assert_eq!(
        c.resizes().get(0),
        Some(PendingResize {
            height: 80,
            due_ms: 26
        })
    );

    assert!(!c.tick(20));
    assert_eq!(c.waterfall().height(0), Some(50));

    // Forwarded at 26; the engine then waits for its own coalescing window.
    assert!(!c.tick(26));
    assert!(c.resizes().is_empty());
    assert_eq!(c.waterfall().height_history(0), Some(&[50u32, 80][..]));
    assert_eq!(c.next_wakeup(), Some(126));

    assert!(c.tick(126));
    assert_eq!(c.waterfall().rect(0).unwrap().height, 80);
    assert_eq!(c.next_wakeup(), None);
}

#[test]
fn resize_reports_before_mount_are_ignored() {
    let mut c = controller(2);
    assert!(!c.on_item_resized(0, 60, 0));
    assert!(c.resizes().is_empty());
}

#[test]
fn render_plan_lists_measuring_and_placed_items() {
    let mut c = controller(3);
    let mut plan = Vec::new();
    c.render_plan(&mut plan);
    assert_eq!(plan.len(), 3);
    assert!(plan.iter().all(RenderItem::is_measuring));

    c.on_item_mounted(0, MeasuredSize::new(100, 40));
    c.render_plan(&mut plan);
    assert_eq!(plan[0].index, 0);
    assert_eq!(plan[0].rect, c.waterfall().rect(0));
    assert!(!plan[0].is_measuring());
    assert!(plan[1].is_measuring());
}

#[test]
fn remeasure_bypasses_resize_delay() {
    let mut c = controller(2);
    c.on_item_mounted(0, MeasuredSize::new(100, 50));
    assert!(c.remeasure(0, 90, 0));
    assert!(c.resizes().is_empty());
    assert_eq!(c.waterfall().height(0), Some(90));
    assert_eq!(c.next_wakeup(), Some(100));
}

#[test]
fn debouncer_drains_due_reports_in_index_order() {
    let mut d = ResizeDebouncer::new(10);
    d.push(3, 30, 0);
    d.push(1, 10, 0);
    d.push(2, 20, 5);
    assert_eq!(d.len(), 3);
    assert_eq!(d.next_deadline(), Some(10));

    let mut out = Vec::new();
    assert_eq!(d.drain_due(10, |i, h| out.push((i, h))), 2);
    assert_eq!(out, [(1, 10), (3, 30)]);
    assert_eq!(d.next_deadline(), Some(15));

    d.clear();
    assert!(d.is_empty());
    assert_eq!(d.next_deadline(), None);
}

#[test]
fn reset_drops_pending_resizes() {
    let mut c = controller(2);
    c.on_item_mounted(0, MeasuredSize::new(100, 50));
    c.on_item_resized(0, 60, 0);
    c.reset(4);
    assert!(c.resizes().is_empty());
    assert_eq!(c.waterfall().count(), 4);
    assert_eq!(c.waterfall().height(0), None);
}

#[test]
fn set_count_drops_resizes_for_removed_items() {
    let mut c = controller(4);
    for i in 0..4 {
        c.on_item_mounted(i, MeasuredSize::new(100, 50));
    }
    c.on_item_resized(1, 60, 0);
    c.on_item_resized(3, 60, 0);

    c.set_count(2);
    assert_eq!(c.waterfall().count(), 2);
    assert_eq!(c.resizes().len(), 1);
    assert_eq!(c.resizes().get(3), None);

    c.tick(16);
    assert_eq!(
        c.waterfall().pending_range(),
        Some(waterfall::DirtyRange { start: 1, end: 1 })
    );
}
