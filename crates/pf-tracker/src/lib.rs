//! Scroll-driven active-section tracking for single-page layouts.
//!
//! A [`SectionTracker`] owns a fixed, ordered list of [`Section`]s and decides
//! which one is "in view" from samples taken through a [`ScrollSurface`]. The
//! surface is whatever actually renders the page; the tracker only ever sees it
//! through that trait, so the tracking policy runs the same against a real UI
//! and against [`MemorySurface`].
//!
//! [`MountedTracker`] ties a tracker to a scroll subscription for the lifetime
//! of a mounted view.

mod config;
mod memory;
mod mount;
mod section;
mod surface;
mod tracker;

pub use config::DEFAULT_REFERENCE_LINE;
pub use config::DEFAULT_SCROLLED_THRESHOLD;
pub use config::TrackerConfig;
pub use memory::MemorySurface;
pub use mount::MountedTracker;
pub use section::Section;
pub use section::SectionBounds;
pub use surface::ScrollBroadcaster;
pub use surface::ScrollNotification;
pub use surface::ScrollSubscription;
pub use surface::ScrollSurface;
pub use tracker::ScrollSample;
pub use tracker::SectionTracker;
