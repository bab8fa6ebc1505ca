use listwindow::WindowList;

/// Edge-triggered near-bottom detection for append-on-scroll paging.
///
/// `check` returns `true` exactly once when the viewport bottom enters the trailing
/// `threshold_px` zone of the scrollable extent, then stays quiet until the position leaves
/// the zone again or [`Self::rearm`] is called (typically after the host appended a page).
/// Empty or disabled lists never fire.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadMoreWatch {
    threshold_px: u64,
    armed: bool,
}

impl LoadMoreWatch {
    pub fn new(threshold_px: u64) -> Self {
        Self {
            threshold_px,
            armed: true,
        }
    }

    pub fn threshold_px(&self) -> u64 {
        self.threshold_px
    }

    pub fn rearm(&mut self) {
        self.armed = true;
    }

    pub fn check(&mut self, list: &WindowList) -> bool {
        if list.count() == 0 || !list.enabled() {
            return false;
        }

        let bottom = list
            .scroll_offset()
            .saturating_add(list.config().container_height as u64);
        let in_zone = bottom >= list.total_height().saturating_sub(self.threshold_px);

        if !in_zone {
            self.armed = true;
            return false;
        }
        if !self.armed {
            return false;
        }
        self.armed = false;
        true
    }
}
