// Example: an image finishes loading and grows; only the suffix is recomputed.
use waterfall::{ContainerSize, Waterfall, WaterfallOptions};

fn main() {
    let opts = WaterfallOptions::new(1_000, 4)
        .with_gap(8, 8)
        .with_page_size(None)
        .with_throttle_ms(50)
        .with_chunk_threshold(128)
        .with_initial_container(Some(ContainerSize::new(1_000, 700)));
    let mut w = Waterfall::new(opts).expect("valid options");

    // Placeholders are 40 units tall until their images load.
    for i in 0..w.count() {
        w.measure(i, 40);
    }
    println!("cursor={} content_height={}", w.cursor(), w.content_height());

    // Several images load in a burst; the changes coalesce into one flush.
    let mut now_ms = 0u64;
    for (i, h) in [(500usize, 310u32), (120, 260), (740, 180)] {
        w.update(i, h, now_ms);
        now_ms += 10;
    }
    println!(
        "pending={:?} next_flush_at={:?}",
        w.pending_range(),
        w.next_flush_at()
    );

    // Drive the scheduler like an event loop would; chunk continuations run on later ticks.
    while w.is_flush_pending() {
        now_ms += 16;
        if w.tick(now_ms) {
            println!("t={now_ms}ms flushed {:?}, cursor={}", w.last_flush(), w.cursor());
        }
    }
    println!("content_height={}", w.content_height());
}
