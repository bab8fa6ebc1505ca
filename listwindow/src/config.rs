use core::num::NonZeroU32;

/// Extra items materialized beyond each visible edge when not configured otherwise.
pub const DEFAULT_BUFFER_SIZE: usize = 5;

/// Viewport and item geometry for a [`crate::WindowList`].
///
/// All sizes are in pixels along the scroll axis. Item height is fixed for the whole list;
/// variable-height items are not supported. A zero item height is unrepresentable
/// (`NonZeroU32`), so a config that exists is always valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowConfig {
    /// Pixels per item.
    pub item_height: NonZeroU32,
    /// Visible viewport pixels.
    pub container_height: u32,
    /// Extra items rendered beyond the visible edge on each side, to mask pop-in while
    /// scrolling.
    pub buffer_size: usize,
    /// When `false`, windowing is bypassed and the full list is considered visible.
    pub enabled: bool,
}

impl WindowConfig {
    pub fn new(item_height: NonZeroU32) -> Self {
        Self {
            item_height,
            container_height: 0,
            buffer_size: DEFAULT_BUFFER_SIZE,
            enabled: true,
        }
    }

    pub fn with_item_height(mut self, item_height: NonZeroU32) -> Self {
        self.item_height = item_height;
        self
    }

    pub fn with_container_height(mut self, container_height: u32) -> Self {
        self.container_height = container_height;
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Merges a partial update into this config. Fields the update leaves unset retain their
    /// current values.
    pub fn apply(&mut self, update: ConfigUpdate) {
        if let Some(item_height) = update.item_height {
            self.item_height = item_height;
        }
        if let Some(container_height) = update.container_height {
            self.container_height = container_height;
        }
        if let Some(buffer_size) = update.buffer_size {
            self.buffer_size = buffer_size;
        }
        if let Some(enabled) = update.enabled {
            self.enabled = enabled;
        }
    }
}

/// A partial [`WindowConfig`]: only the supplied fields are applied on merge.
///
/// Built with the `with_*` setters, typically passed to `WindowList::update_config` or an
/// adapter's `set_config`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfigUpdate {
    pub item_height: Option<NonZeroU32>,
    pub container_height: Option<u32>,
    pub buffer_size: Option<usize>,
    pub enabled: Option<bool>,
}

impl ConfigUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item_height(mut self, item_height: NonZeroU32) -> Self {
        self.item_height = Some(item_height);
        self
    }

    pub fn with_container_height(mut self, container_height: u32) -> Self {
        self.container_height = Some(container_height);
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = Some(buffer_size);
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }
}
