// Example: minimal usage and frames for a large list at a few scroll positions.
use core::num::NonZeroU32;
use listwindow::{WindowConfig, WindowList};

fn main() {
    let config = WindowConfig::new(NonZeroU32::new(100).unwrap())
        .with_container_height(600)
        .with_buffer_size(5);
    let mut list = WindowList::new(config);
    list.set_count(1_000_000);

    for offset in [0u64, 2_000, 50_000_000, u64::MAX] {
        list.set_scroll_offset_clamped(offset);
        let frame = list.frame();
        println!(
            "offset={:>9} -> items {:?} top={} bottom={}",
            list.scroll_offset(),
            frame.range(),
            frame.top_padding,
            frame.bottom_padding
        );
    }
}
