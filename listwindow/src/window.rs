use alloc::sync::Arc;
use core::cell::Cell;

use crate::{ConfigUpdate, WindowConfig, WindowFrame};

/// A callback fired when a window list state update occurs.
pub type OnChangeCallback = Arc<dyn Fn(&WindowList) + Send + Sync>;

/// The windowing engine: maps `(count, scroll_offset, WindowConfig)` to a [`WindowFrame`].
///
/// This type is intentionally UI-agnostic and never holds the item data itself: the caller
/// owns the full item sequence and reports only its length. Frames are derived on demand via
/// [`Self::frame`] / [`Self::frame_for`]; nothing is cached, so redundant calls are safe.
///
/// State mutation goes through explicit setters, each of which fires the optional `on_change`
/// callback. Use [`Self::batch_update`] to coalesce several setters into one notification.
#[derive(Clone)]
pub struct WindowList {
    config: WindowConfig,
    count: usize,
    scroll_offset: u64,

    on_change: Option<OnChangeCallback>,
    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl WindowList {
    pub fn new(config: WindowConfig) -> Self {
        wdebug!(
            item_height = config.item_height.get(),
            container_height = config.container_height,
            buffer_size = config.buffer_size,
            enabled = config.enabled,
            "WindowList::new"
        );
        Self {
            config,
            count: 0,
            scroll_offset: 0,
            on_change: None,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn new_with_count(config: WindowConfig, count: usize) -> Self {
        let mut list = Self::new(config);
        list.count = count;
        list
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: WindowConfig) {
        wdebug!(
            item_height = config.item_height.get(),
            container_height = config.container_height,
            buffer_size = config.buffer_size,
            enabled = config.enabled,
            "WindowList::set_config"
        );
        self.config = config;
        self.notify();
    }

    /// Merges a partial config update; unspecified fields retain their prior values.
    pub fn update_config(&mut self, update: ConfigUpdate) {
        self.config.apply(update);
        self.notify();
    }

    pub fn enabled(&self) -> bool {
        self.config.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.config.enabled == enabled {
            return;
        }
        self.config.enabled = enabled;
        self.notify();
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn set_count(&mut self, count: usize) {
        if self.count == count {
            return;
        }
        wtrace!(count, "WindowList::set_count");
        self.count = count;
        self.notify();
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn set_scroll_offset(&mut self, offset: u64) {
        if self.scroll_offset == offset {
            return;
        }
        wtrace!(offset, "WindowList::set_scroll_offset");
        self.scroll_offset = offset;
        self.notify();
    }

    pub fn set_scroll_offset_clamped(&mut self, offset: u64) {
        let clamped = self.clamp_scroll_offset(offset);
        self.set_scroll_offset(clamped);
    }

    /// Full scrollable extent in pixels: `count * item_height`.
    pub fn total_height(&self) -> u64 {
        self.count as u64 * self.config.item_height.get() as u64
    }

    pub fn max_scroll_offset(&self) -> u64 {
        self.total_height()
            .saturating_sub(self.config.container_height as u64)
    }

    pub fn clamp_scroll_offset(&self, offset: u64) -> u64 {
        offset.min(self.max_scroll_offset())
    }

    /// Whole items that fit the viewport, rounding up so an item partially cut off at the
    /// bottom edge is still covered.
    pub fn visible_count(&self) -> usize {
        self.config
            .container_height
            .div_ceil(self.config.item_height.get()) as usize
    }

    /// Computes the frame for the current scroll offset.
    pub fn frame(&self) -> WindowFrame {
        self.frame_for(self.scroll_offset)
    }

    /// Computes the frame for an arbitrary scroll offset, without touching state.
    ///
    /// When windowing is disabled the frame spans the full list with zero padding. An empty
    /// list yields the empty frame. Otherwise the window covers the viewport plus
    /// `buffer_size` extra items on each side; the anchor index is clamped to the last item,
    /// so offsets past the end of the list still produce a valid trailing window.
    pub fn frame_for(&self, scroll_offset: u64) -> WindowFrame {
        let count = self.count;
        if !self.config.enabled {
            return WindowFrame {
                start_index: 0,
                end_index: count,
                top_padding: 0,
                bottom_padding: 0,
            };
        }
        if count == 0 {
            return WindowFrame::empty();
        }

        let item = self.config.item_height.get() as u64;
        let buffer = self.config.buffer_size;

        let anchor = (scroll_offset / item).min(count as u64 - 1) as usize;
        let start = anchor.saturating_sub(buffer);
        // The trailing edge reserves the viewport plus both buffers relative to the
        // already-buffered start, which leaves the window biased slightly downward.
        let end = start
            .saturating_add(self.visible_count())
            .saturating_add(buffer.saturating_mul(2))
            .saturating_add(1)
            .min(count);

        WindowFrame {
            start_index: start,
            end_index: end,
            top_padding: start as u64 * item,
            bottom_padding: (count - end) as u64 * item,
        }
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&WindowList) + Send + Sync + 'static>,
    ) {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// On a typical frame a host may update the viewport height, the count, and the scroll
    /// offset together; without batching each setter would fire the callback.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }
}

impl core::fmt::Debug for WindowList {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowList")
            .field("config", &self.config)
            .field("count", &self.count)
            .field("scroll_offset", &self.scroll_offset)
            .finish_non_exhaustive()
    }
}
