//! Navigation bar state: the section tracker plus the mobile menu flag.

use pf_content::Catalog;
use pf_core::SiteResult;
use pf_tracker::MountedTracker;
use pf_tracker::ScrollSurface;
use pf_tracker::Section;
use pf_tracker::SectionTracker;
use pf_tracker::TrackerConfig;

/// Tracker sections for the catalog's navigation links, in navigation order.
pub fn nav_sections(catalog: &Catalog) -> Vec<Section> {
    catalog
        .nav_links()
        .iter()
        .map(|link| Section::new(link.label, link.anchor_id))
        .collect()
}

#[derive(Debug)]
pub struct NavbarState {
    tracker: MountedTracker,
    mobile_menu_open: bool,
}

impl NavbarState {
    /// Builds the tracker for `catalog` and mounts it on `surface`.
    pub fn mount<S: ScrollSurface + ?Sized>(
        catalog: &Catalog,
        config: TrackerConfig,
        surface: &mut S,
    ) -> SiteResult<Self> {
        let tracker = SectionTracker::new(nav_sections(catalog), config)?;
        Ok(Self {
            tracker: MountedTracker::mount(tracker, surface),
            mobile_menu_open: false,
        })
    }

    pub fn sections(&self) -> &[Section] {
        self.tracker.tracker().sections()
    }

    pub fn active_section_id(&self) -> &str {
        self.tracker.tracker().active_section_id()
    }

    pub fn is_active(&self, anchor_id: &str) -> bool {
        self.tracker.tracker().is_active(anchor_id)
    }

    pub fn is_scrolled(&self) -> bool {
        self.tracker.tracker().is_scrolled()
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    /// Scrolls to `anchor_id` and closes the mobile menu. When the surface has
    /// no such element nothing happens, menu included.
    pub fn navigate_to<S: ScrollSurface + ?Sized>(&mut self, surface: &mut S, anchor_id: &str) -> bool {
        if !self.tracker.navigate_to(surface, anchor_id) {
            return false;
        }
        self.mobile_menu_open = false;
        true
    }

    pub fn pump<S: ScrollSurface + ?Sized>(&mut self, surface: &S) -> usize {
        self.tracker.pump(surface)
    }

    pub fn unmount(self) -> SectionTracker {
        self.tracker.unmount()
    }
}
