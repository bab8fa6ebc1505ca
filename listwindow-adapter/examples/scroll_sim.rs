// Example: drive a Controller with timestamped scroll events and a load-more watch.
use core::num::NonZeroU32;
use listwindow::WindowConfig;
use listwindow_adapter::{Controller, LoadMoreWatch};

fn main() {
    let config = WindowConfig::new(NonZeroU32::new(40).unwrap())
        .with_container_height(400)
        .with_buffer_size(4);
    let mut controller = Controller::new(config);
    let mut watch = LoadMoreWatch::new(200);

    controller.set_items((0..200u32).collect());

    // A burst of scroll events inside one throttle interval coalesces into one recompute.
    let mut now_ms = 0u64;
    for offset in (0..=7600u64).step_by(400) {
        controller.on_scroll(offset, now_ms);
        now_ms += 1;
    }
    now_ms += 16;
    if let Some(frame) = controller.tick(now_ms) {
        println!(
            "rendered {:?} of {} items (top={} bottom={})",
            frame.range(),
            controller.len(),
            frame.top_padding,
            frame.bottom_padding
        );
    }

    if watch.check(controller.window_list()) {
        let mut items = controller.items().to_vec();
        items.extend(200..300u32);
        controller.set_items(items);
        watch.rearm();
        println!("near the bottom: appended a page, now {} items", controller.len());
    }
}
