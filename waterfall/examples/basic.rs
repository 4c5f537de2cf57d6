// Example: pack a handful of items into two columns.
use waterfall::{ContainerSize, Waterfall, WaterfallOptions};

fn main() {
    let opts = WaterfallOptions::new(6, 2)
        .with_gap(10, 10)
        .with_initial_container(Some(ContainerSize::new(410, 800)));
    let mut w = Waterfall::new(opts).expect("valid options");

    for (i, h) in [120u32, 80, 200, 60, 90, 150].into_iter().enumerate() {
        w.measure(i, h);
    }

    for i in 0..w.count() {
        println!("{i}: {:?}", w.rect(i));
    }
    println!(
        "columns={:?} content_height={}",
        w.column_heights(),
        w.content_height()
    );
}
