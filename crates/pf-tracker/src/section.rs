/// A page section: the label shown in navigation and the anchor id used both
/// as scroll target and as tracker key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub label: String,
    pub anchor_id: String,
}

impl Section {
    pub fn new(label: impl Into<String>, anchor_id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            anchor_id: anchor_id.into(),
        }
    }
}

/// Vertical extent of a rendered section, measured from the viewport top.
///
/// Negative values mean the edge has scrolled above the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f32,
    pub bottom: f32,
}

impl SectionBounds {
    pub fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }

    pub fn height(&self) -> f32 {
        (self.bottom - self.top).max(0.0)
    }

    /// True when `line` falls inside the extent, edges included.
    pub fn straddles(&self, line: f32) -> bool {
        self.top <= line && self.bottom >= line
    }
}

#[cfg(test)]
mod tests {
    use super::SectionBounds;

    #[test]
    fn straddles_includes_both_edges() {
        let bounds = SectionBounds::new(150.0, 400.0);
        assert!(bounds.straddles(150.0));
        assert!(bounds.straddles(400.0));
        assert!(!bounds.straddles(149.5));
        assert!(!bounds.straddles(400.5));
    }

    #[test]
    fn inverted_bounds_have_zero_height() {
        assert_eq!(SectionBounds::new(10.0, 5.0).height(), 0.0);
    }
}
