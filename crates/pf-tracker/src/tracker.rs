use crate::ScrollSurface;
use crate::Section;
use crate::SectionBounds;
use crate::TrackerConfig;
use pf_core::SiteError;
use pf_core::SiteResult;
use std::collections::HashSet;

/// Snapshot of the surface taken for one evaluation.
///
/// `bounds` runs parallel to the tracker's sections; `None` marks an element
/// that is not mounted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollSample {
    pub offset_y: f32,
    pub bounds: Vec<Option<SectionBounds>>,
}

impl ScrollSample {
    pub fn capture<S: ScrollSurface + ?Sized>(sections: &[Section], surface: &S) -> Self {
        Self {
            offset_y: surface.scroll_offset_y(),
            bounds: sections
                .iter()
                .map(|section| surface.bounds_for(&section.anchor_id))
                .collect(),
        }
    }
}

/// Tracks which configured section is currently in view.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    sections: Vec<Section>,
    config: TrackerConfig,
    active: usize,
    is_scrolled: bool,
}

impl SectionTracker {
    /// Builds a tracker over `sections`, in tracking priority order.
    ///
    /// Fails when the list is empty, when two sections share an anchor id, or
    /// when `config` does not validate.
    pub fn new(
        sections: impl IntoIterator<Item = Section>,
        config: TrackerConfig,
    ) -> SiteResult<Self> {
        config.validate()?;

        let sections: Vec<Section> = sections.into_iter().collect();
        if sections.is_empty() {
            return Err(SiteError::new(
                "tracker.config.empty_sections",
                "section tracker needs at least one section",
            ));
        }

        let mut seen = HashSet::with_capacity(sections.len());
        for section in &sections {
            if !seen.insert(section.anchor_id.as_str()) {
                return Err(SiteError::new(
                    "tracker.config.duplicate_anchor",
                    format!("anchor id `{}` is configured twice", section.anchor_id),
                ));
            }
        }

        Ok(Self {
            sections,
            config,
            active: 0,
            is_scrolled: false,
        })
    }

    pub fn with_defaults(sections: impl IntoIterator<Item = Section>) -> SiteResult<Self> {
        Self::new(sections, TrackerConfig::default())
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn active_section(&self) -> &Section {
        &self.sections[self.active]
    }

    pub fn active_section_id(&self) -> &str {
        &self.active_section().anchor_id
    }

    pub fn is_active(&self, anchor_id: &str) -> bool {
        self.active_section_id() == anchor_id
    }

    pub fn is_scrolled(&self) -> bool {
        self.is_scrolled
    }

    /// Eager evaluation at mount time, so the active section reflects the real
    /// initial scroll position instead of the constructor default.
    pub fn initialize<S: ScrollSurface + ?Sized>(&mut self, surface: &S) {
        self.on_scroll_notification(surface);
    }

    pub fn on_scroll_notification<S: ScrollSurface + ?Sized>(&mut self, surface: &S) {
        let sample = ScrollSample::capture(&self.sections, surface);
        self.apply_sample(&sample);
    }

    /// Applies one sample. Returns true when the active section changed.
    pub fn apply_sample(&mut self, sample: &ScrollSample) -> bool {
        self.is_scrolled = sample.offset_y > self.config.scrolled_threshold;

        // Sticky: nothing on the reference line keeps the previous section.
        let Some(next) = self.straddling_section(sample) else {
            return false;
        };
        if next == self.active {
            return false;
        }

        tracing::debug!(
            from = %self.sections[self.active].anchor_id,
            to = %self.sections[next].anchor_id,
            offset_y = sample.offset_y,
            "active section changed"
        );
        self.active = next;
        true
    }

    /// Last section in configured order whose extent contains the reference
    /// line.
    fn straddling_section(&self, sample: &ScrollSample) -> Option<usize> {
        let line = self.config.reference_line;
        sample
            .bounds
            .iter()
            .take(self.sections.len())
            .enumerate()
            .filter_map(|(index, bounds)| bounds.map(|bounds| (index, bounds)))
            .filter(|(_, bounds)| bounds.straddles(line))
            .map(|(index, _)| index)
            .last()
    }

    /// Requests a smooth scroll to `anchor_id`. The active section is left
    /// alone; it follows once the surface reports actual movement.
    ///
    /// Returns false when the surface has no such element; that is a silent
    /// no-op, not an error.
    pub fn navigate_to<S: ScrollSurface + ?Sized>(&self, surface: &mut S, anchor_id: &str) -> bool {
        if surface.smooth_scroll_into_view(anchor_id) {
            return true;
        }

        tracing::debug!(anchor_id, "navigation target not mounted, ignoring");
        false
    }
}
