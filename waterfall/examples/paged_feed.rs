// Example: paged reveal plus viewport culling while scrolling a feed.
use waterfall::{ContainerSize, ItemSlot, Waterfall, WaterfallOptions};

fn main() {
    let opts = WaterfallOptions::new(200, 3)
        .with_gap(12, 12)
        .with_page_size(Some(30))
        .with_buffer_height(200)
        .with_initial_container(Some(ContainerSize::new(936, 600)));
    let mut w = Waterfall::new(opts).expect("valid options");

    let mut mounted = Vec::new();
    for scroll in (0..6_000u64).step_by(600) {
        // Measure whatever the engine asks to mount off-window.
        w.collect_mounted(&mut mounted);
        for &(index, slot) in &mounted {
            if slot == ItemSlot::Measure {
                w.measure(index, 80 + (index as u32 * 37) % 160);
            }
        }

        let advanced = w.on_scroll(scroll);
        w.collect_mounted(&mut mounted);
        println!(
            "scroll={scroll} page={} revealed={} mounted={} advanced={advanced}",
            w.current_page(),
            w.revealed_count(),
            mounted.len()
        );
    }
}
