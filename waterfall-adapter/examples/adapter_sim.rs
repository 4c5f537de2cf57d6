use waterfall::{ContainerSize, MeasuredSize, WaterfallOptions};
use waterfall_adapter::Controller;

fn main() {
    // Example: an adapter simulating image cards whose height settles after the image loads.
    //
    // An adapter would:
    // - mount every item in the render plan, measuring the ones without a rect off-window
    // - forward raw size observer reports to on_item_resized
    // - sleep until next_wakeup() and call tick(now_ms)
    let opts = WaterfallOptions::new(60, 3)
        .with_gap(8, 8)
        .with_page_size(Some(24))
        .with_throttle_ms(120)
        .with_scale_to_column_width(true)
        .with_initial_container(Some(ContainerSize::new(616, 800)));
    let mut c = Controller::new(opts).expect("valid options");

    let mut plan = Vec::new();
    c.render_plan(&mut plan);
    for item in plan.iter().filter(|item| item.is_measuring()) {
        // Intrinsic image size; the engine scales it to the column width.
        let width = 400 + (item.index as u32 * 53) % 400;
        c.on_item_mounted(item.index, MeasuredSize::new(width, 300));
    }
    println!(
        "mounted: cursor={} content_height={}",
        c.waterfall().cursor(),
        c.waterfall().content_height()
    );

    // Captions wrap once fonts load: a burst of observer reports per item.
    let mut now_ms = 0u64;
    for index in (0..24).step_by(5) {
        let base = c.waterfall().height(index).unwrap_or(0);
        for step in 1..=3 {
            c.on_item_resized(index, base + step * 12, now_ms);
            now_ms += 4;
        }
    }

    while let Some(at) = c.next_wakeup() {
        now_ms = now_ms.max(at);
        let changed = c.tick(now_ms);
        println!(
            "t={now_ms} changed={changed} last_flush={:?} content_height={}",
            c.waterfall().last_flush(),
            c.waterfall().content_height()
        );
    }
}
