use alloc::vec::Vec;

use listwindow::{ConfigUpdate, ScrollThrottler, WindowConfig, WindowFrame, WindowList};

/// A framework-neutral controller that owns the full item list and wraps a
/// `listwindow::WindowList` plus a `ScrollThrottler`.
///
/// This type does not hold any UI objects. Hosts drive it by calling:
/// - `set_items` / `set_config` / `set_enabled` when data or geometry changes
/// - `on_scroll(offset, now_ms)` for every raw scroll event (returns immediately)
/// - `tick(now_ms)` each frame/timer tick to fire the throttled recompute
///
/// Rendering contract: draw only [`Self::visible`], reserve a leading spacer of
/// `frame.top_padding` pixels and a trailing spacer of `frame.bottom_padding` pixels, so the
/// scrollbar keeps the full extent.
#[derive(Clone, Debug)]
pub struct Controller<T> {
    list: WindowList,
    throttler: ScrollThrottler,
    items: Vec<T>,
}

impl<T> Controller<T> {
    pub fn new(config: WindowConfig) -> Self {
        Self {
            list: WindowList::new(config),
            throttler: ScrollThrottler::default(),
            items: Vec::new(),
        }
    }

    pub fn with_throttle_interval(mut self, interval_ms: u64) -> Self {
        self.throttler.set_interval_ms(interval_ms);
        self
    }

    pub fn window_list(&self) -> &WindowList {
        &self.list
    }

    pub fn window_list_mut(&mut self) -> &mut WindowList {
        &mut self.list
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Replaces the full dataset and recomputes synchronously.
    ///
    /// Any pending throttled fire is cancelled first, so a scroll burst reported against the
    /// old data can never recompute against the new data with a stale deadline.
    pub fn set_items(&mut self, items: Vec<T>) -> WindowFrame {
        self.throttler.cancel();
        self.items = items;
        self.list.set_count(self.items.len());
        self.list.frame()
    }

    /// Records a raw scroll position for the next throttled recompute. Never recomputes
    /// itself; call [`Self::tick`] from the host's frame loop.
    pub fn on_scroll(&mut self, offset: u64, now_ms: u64) {
        self.throttler.report(offset, now_ms);
    }

    /// Fires the throttled recompute once its deadline has passed.
    ///
    /// The frame is computed against the item count at fire-time, so a fire that outlives a
    /// shrink or clear degrades to a clamped (possibly empty) window.
    pub fn tick(&mut self, now_ms: u64) -> Option<WindowFrame> {
        let offset = self.throttler.poll(now_ms)?;
        self.list.set_scroll_offset(offset);
        Some(self.list.frame())
    }

    /// Recomputes immediately with the latest reported offset, bypassing the throttle
    /// deadline. Returns `None` when no scroll report is outstanding.
    pub fn flush(&mut self) -> Option<WindowFrame> {
        let offset = self.throttler.flush()?;
        self.list.set_scroll_offset(offset);
        Some(self.list.frame())
    }

    /// Merges a partial geometry update and recomputes synchronously.
    pub fn set_config(&mut self, update: ConfigUpdate) -> WindowFrame {
        self.list.update_config(update);
        self.list.frame()
    }

    pub fn set_enabled(&mut self, enabled: bool) -> WindowFrame {
        self.list.set_enabled(enabled);
        self.list.frame()
    }

    pub fn frame(&self) -> WindowFrame {
        self.list.frame()
    }

    /// The visible slice for the current frame.
    pub fn visible(&self) -> &[T] {
        self.frame().slice(&self.items)
    }
}
