use crate::ScrollBroadcaster;
use crate::ScrollSubscription;
use crate::ScrollSurface;
use crate::SectionBounds;
use std::collections::HashMap;

/// In-memory [`ScrollSurface`] holding canned offsets and bounds.
///
/// `smooth_scroll_into_view` only records the request; callers move the page
/// themselves with [`MemorySurface::scroll_to`].
#[derive(Debug, Default)]
pub struct MemorySurface {
    offset_y: f32,
    bounds: HashMap<String, SectionBounds>,
    broadcaster: ScrollBroadcaster,
    scroll_requests: Vec<String>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_bounds(&mut self, anchor_id: &str, top: f32, bottom: f32) {
        self.bounds
            .insert(anchor_id.to_owned(), SectionBounds::new(top, bottom));
    }

    pub fn unmount_element(&mut self, anchor_id: &str) {
        self.bounds.remove(anchor_id);
    }

    /// Moves the offset without notifying subscribers.
    pub fn set_offset(&mut self, offset_y: f32) {
        self.offset_y = offset_y;
    }

    /// Moves the offset and notifies subscribers, returning how many were
    /// reached.
    pub fn scroll_to(&mut self, offset_y: f32) -> usize {
        self.offset_y = offset_y;
        self.broadcaster.publish(offset_y)
    }

    pub fn scroll_requests(&self) -> &[String] {
        &self.scroll_requests
    }

    pub fn listener_count(&self) -> usize {
        self.broadcaster.listener_count()
    }
}

impl ScrollSurface for MemorySurface {
    fn scroll_offset_y(&self) -> f32 {
        self.offset_y
    }

    fn bounds_for(&self, anchor_id: &str) -> Option<SectionBounds> {
        self.bounds.get(anchor_id).copied()
    }

    fn subscribe_to_scroll(&mut self) -> ScrollSubscription {
        self.broadcaster.subscribe()
    }

    fn smooth_scroll_into_view(&mut self, anchor_id: &str) -> bool {
        if !self.bounds.contains_key(anchor_id) {
            return false;
        }
        self.scroll_requests.push(anchor_id.to_owned());
        true
    }
}
