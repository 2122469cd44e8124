use crate::SectionBounds;
use std::sync::mpsc;

/// Capabilities the tracker needs from whatever renders the page.
pub trait ScrollSurface {
    /// Current vertical scroll offset of the page.
    fn scroll_offset_y(&self) -> f32;

    /// Bounds of the element carrying `anchor_id`, relative to the viewport
    /// top, or `None` while that element is not mounted.
    fn bounds_for(&self, anchor_id: &str) -> Option<SectionBounds>;

    /// Registers interest in scroll movement. Dropping the returned handle
    /// unsubscribes.
    fn subscribe_to_scroll(&mut self) -> ScrollSubscription;

    /// Starts a smooth scroll that brings the element's top edge into view.
    /// Returns `false`, and does nothing, when no element carries `anchor_id`.
    fn smooth_scroll_into_view(&mut self, anchor_id: &str) -> bool;
}

/// One scroll movement observed by the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollNotification {
    pub offset_y: f32,
}

/// Receiving end of a scroll subscription.
#[derive(Debug)]
pub struct ScrollSubscription {
    rx: mpsc::Receiver<ScrollNotification>,
}

impl ScrollSubscription {
    pub fn try_next(&self) -> Option<ScrollNotification> {
        self.rx.try_recv().ok()
    }

    /// Releases the subscription. Equivalent to dropping the handle.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

/// Fan-out of scroll notifications for surface implementations.
///
/// Subscribers whose handle was dropped are pruned on the next publish.
#[derive(Debug, Default)]
pub struct ScrollBroadcaster {
    listeners: Vec<mpsc::Sender<ScrollNotification>>,
}

impl ScrollBroadcaster {
    pub fn subscribe(&mut self) -> ScrollSubscription {
        let (tx, rx) = mpsc::channel();
        self.listeners.push(tx);
        ScrollSubscription { rx }
    }

    /// Delivers a notification to every live subscriber and returns how many
    /// received it.
    pub fn publish(&mut self, offset_y: f32) -> usize {
        let notification = ScrollNotification { offset_y };
        self.listeners
            .retain(|listener| listener.send(notification).is_ok());
        self.listeners.len()
    }

    /// Listeners known to be alive as of the last publish.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
