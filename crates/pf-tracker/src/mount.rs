use crate::ScrollSubscription;
use crate::ScrollSurface;
use crate::SectionTracker;

/// A tracker bound to a surface's scroll notifications.
///
/// The subscription lives exactly as long as this value: dropping it, or
/// calling [`MountedTracker::unmount`], releases the listener on every path.
#[derive(Debug)]
pub struct MountedTracker {
    tracker: SectionTracker,
    subscription: ScrollSubscription,
}

impl MountedTracker {
    /// Subscribes to `surface` and runs the eager initial evaluation.
    pub fn mount<S: ScrollSurface + ?Sized>(mut tracker: SectionTracker, surface: &mut S) -> Self {
        let subscription = surface.subscribe_to_scroll();
        tracker.initialize(&*surface);
        tracing::debug!(
            sections = tracker.sections().len(),
            active = tracker.active_section_id(),
            "section tracker mounted"
        );

        Self {
            tracker,
            subscription,
        }
    }

    pub fn tracker(&self) -> &SectionTracker {
        &self.tracker
    }

    /// Handles every queued scroll notification and returns how many there
    /// were.
    pub fn pump<S: ScrollSurface + ?Sized>(&mut self, surface: &S) -> usize {
        let mut handled = 0;
        while let Some(notification) = self.subscription.try_next() {
            tracing::trace!(offset_y = notification.offset_y, "scroll notification");
            self.tracker.on_scroll_notification(surface);
            handled += 1;
        }
        handled
    }

    pub fn navigate_to<S: ScrollSurface + ?Sized>(&self, surface: &mut S, anchor_id: &str) -> bool {
        self.tracker.navigate_to(surface, anchor_id)
    }

    /// Releases the scroll subscription and hands the tracker back.
    pub fn unmount(self) -> SectionTracker {
        let Self {
            tracker,
            subscription,
        } = self;
        subscription.unsubscribe();
        tracing::debug!(active = tracker.active_section_id(), "section tracker unmounted");
        tracker
    }
}
