use crate::*;

use alloc::vec::Vec;
use core::num::NonZeroU32;

use listwindow::{ConfigUpdate, WindowConfig};

fn config(item: u32, container: u32, buffer: usize) -> WindowConfig {
    WindowConfig::new(NonZeroU32::new(item).unwrap())
        .with_container_height(container)
        .with_buffer_size(buffer)
}

#[test]
fn controller_throttles_scroll_and_applies_the_last_offset() {
    let mut c = Controller::new(config(100, 600, 5));
    let frame = c.set_items((0..1000u32).collect());
    assert_eq!(frame.start_index, 0);
    assert_eq!(frame.end_index, 17);

    c.on_scroll(100, 0);
    c.on_scroll(1200, 4);
    c.on_scroll(2000, 9);

    assert_eq!(c.tick(15), None);
    let frame = c.tick(16).expect("deadline passed");
    assert_eq!(frame.start_index, 15);
    assert_eq!(frame.end_index, 32);
    assert_eq!(c.window_list().scroll_offset(), 2000);

    let expected: Vec<u32> = (15..32).collect();
    assert_eq!(c.visible(), expected.as_slice());

    // Fired exactly once.
    assert_eq!(c.tick(17), None);
}

#[test]
fn set_items_cancels_a_pending_recompute() {
    let mut c = Controller::new(config(100, 600, 5));
    c.set_items((0..1000u32).collect());
    c.on_scroll(2000, 0);

    c.set_items((0..10u32).collect());
    assert!(!c.is_empty());
    assert_eq!(c.tick(1000), None);
    assert_eq!(c.window_list().scroll_offset(), 0);
}

#[test]
fn stale_offset_clamps_against_a_shorter_list() {
    let mut c = Controller::new(config(100, 600, 5));
    c.set_items((0..1000u32).collect());
    c.on_scroll(90_000, 0);
    assert!(c.tick(16).is_some());

    // The old offset survives the replacement, but the frame clamps to the new count.
    let frame = c.set_items((0..3u32).collect());
    assert_eq!(frame.start_index, 0);
    assert_eq!(frame.end_index, 3);
    assert_eq!(frame.bottom_padding, 0);
    assert_eq!(c.visible(), &[0, 1, 2]);
}

#[test]
fn flush_recomputes_immediately() {
    let mut c = Controller::new(config(100, 600, 5));
    c.set_items((0..1000u32).collect());

    c.on_scroll(2000, 0);
    let frame = c.flush().expect("pending report");
    assert_eq!(frame.start_index, 15);
    assert_eq!(c.flush(), None);
}

#[test]
fn set_config_merges_and_recomputes() {
    let mut c = Controller::new(config(100, 600, 5));
    c.set_items((0..100u32).collect());

    let frame = c.set_config(ConfigUpdate::new().with_buffer_size(0));
    assert_eq!(frame.start_index, 0);
    assert_eq!(frame.end_index, 7);
    // Untouched fields are retained.
    assert_eq!(c.window_list().config().container_height, 600);
    assert_eq!(c.window_list().config().item_height.get(), 100);

    let frame = c.set_config(ConfigUpdate::new().with_container_height(300));
    assert_eq!(frame.end_index, 4);
    assert_eq!(c.window_list().config().buffer_size, 0);
}

#[test]
fn disabled_controller_returns_every_item() {
    let mut c = Controller::new(config(100, 600, 5));
    c.set_items((0..50u32).collect());

    let frame = c.set_enabled(false);
    assert_eq!(frame.len(), 50);
    assert_eq!(frame.top_padding, 0);
    assert_eq!(frame.bottom_padding, 0);
    assert_eq!(c.visible().len(), 50);

    let frame = c.set_enabled(true);
    assert!(frame.len() < 50);

    let items = c.into_items();
    assert_eq!(items.len(), 50);
}

#[test]
fn with_throttle_interval_overrides_the_default() {
    let mut c: Controller<u8> = Controller::new(config(10, 50, 2)).with_throttle_interval(50);
    c.on_scroll(10, 0);
    assert_eq!(c.tick(49), None);
    assert!(c.tick(50).is_some());
}

#[test]
fn load_more_fires_once_per_zone_entry() {
    let mut c = Controller::new(config(10, 50, 2));
    c.set_items((0..100u32).collect()); // extent 1000, zone at bottom >= 900

    let mut watch = LoadMoreWatch::new(100);
    assert_eq!(watch.threshold_px(), 100);

    c.window_list_mut().set_scroll_offset(800);
    assert!(!watch.check(c.window_list()));

    c.window_list_mut().set_scroll_offset(860);
    assert!(watch.check(c.window_list()));
    assert!(!watch.check(c.window_list()));

    c.window_list_mut().set_scroll_offset(870);
    assert!(!watch.check(c.window_list()));

    // Leaving the zone re-arms.
    c.window_list_mut().set_scroll_offset(700);
    assert!(!watch.check(c.window_list()));
    c.window_list_mut().set_scroll_offset(900);
    assert!(watch.check(c.window_list()));

    // Manual rearm, e.g. after appending a page.
    watch.rearm();
    assert!(watch.check(c.window_list()));
}

#[test]
fn load_more_ignores_empty_and_disabled_lists() {
    let mut c: Controller<u32> = Controller::new(config(10, 50, 2));
    let mut watch = LoadMoreWatch::new(100);
    assert!(!watch.check(c.window_list()));

    c.set_items((0..100u32).collect());
    c.window_list_mut().set_scroll_offset(950);
    c.set_enabled(false);
    assert!(!watch.check(c.window_list()));

    c.set_enabled(true);
    assert!(watch.check(c.window_list()));
}
