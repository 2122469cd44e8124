use super::SCROLL_EPSILON;
use eframe::egui;
use pf_tracker::ScrollBroadcaster;
use pf_tracker::ScrollSubscription;
use pf_tracker::ScrollSurface;
use pf_tracker::SectionBounds;
use std::collections::HashMap;

/// egui-backed scroll surface for the home page scroll area.
///
/// Section extents are recorded while the page is drawn and stay valid until
/// the next frame overwrites them. Scroll requests are parked until the target
/// section is drawn again, where egui performs the animated scroll.
///
/// Subscribers are notified when the offset moved or when a section was laid
/// out somewhere else, so the tracker always sees bounds and offset from the
/// same frame.
#[derive(Debug, Default)]
pub(super) struct EguiSurface {
    offset_y: f32,
    bounds: HashMap<String, SectionBounds>,
    pending_scroll: Option<String>,
    broadcaster: ScrollBroadcaster,
    last_published: Option<f32>,
    layout_changed: bool,
}

impl EguiSurface {
    pub(super) fn has_layout(&self) -> bool {
        !self.bounds.is_empty()
    }

    /// Forgets every laid out section, e.g. when another screen replaces the
    /// home page.
    pub(super) fn clear_layout(&mut self) {
        self.bounds.clear();
        self.pending_scroll = None;
        self.last_published = None;
        self.layout_changed = false;
    }

    pub(super) fn record_section(&mut self, anchor_id: &str, rect: egui::Rect, viewport_top: f32) {
        let bounds = SectionBounds::new(rect.top() - viewport_top, rect.bottom() - viewport_top);
        match self.bounds.get_mut(anchor_id) {
            Some(existing) if *existing == bounds => {}
            Some(existing) => {
                *existing = bounds;
                self.layout_changed = true;
            }
            None => {
                self.bounds.insert(anchor_id.to_owned(), bounds);
                self.layout_changed = true;
            }
        }
    }

    /// True once for the section a scroll was requested to.
    pub(super) fn take_scroll_request(&mut self, anchor_id: &str) -> bool {
        if self.pending_scroll.as_deref() != Some(anchor_id) {
            return false;
        }
        self.pending_scroll = None;
        true
    }

    /// Stores the offset the frame's sections were laid out at and notifies
    /// subscribers when it moved or the layout changed.
    pub(super) fn finish_frame(&mut self, offset_y: f32) -> bool {
        self.offset_y = offset_y;
        let moved = self
            .last_published
            .is_none_or(|last| (last - offset_y).abs() >= SCROLL_EPSILON);
        if !moved && !self.layout_changed {
            return false;
        }

        self.last_published = Some(offset_y);
        self.layout_changed = false;
        let delivered = self.broadcaster.publish(offset_y);
        tracing::trace!(offset_y, delivered, "published scroll offset");
        true
    }
}

impl ScrollSurface for EguiSurface {
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
        // A newer request replaces one still waiting to be drawn.
        self.pending_scroll = Some(anchor_id.to_owned());
        true
    }
}
