//! "Section viewed" detection for scroll tracking.
//!
//! A section counts as viewed the first time at least `threshold` of its
//! height is inside the viewport shrunk by `margin_pct` at top and bottom.
//! After that it never fires again for the page's lifetime.

pub const DEFAULT_THRESHOLD: f64 = 0.5;
pub const DEFAULT_MARGIN_PCT: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityOptions {
    /// Fraction of the section that must be visible, `0.0..=1.0`.
    pub threshold: f64,
    /// Inset applied to the top and bottom of the viewport, in percent.
    pub margin_pct: f64,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            margin_pct: DEFAULT_MARGIN_PCT,
        }
    }
}

impl VisibilityOptions {
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            ..Self::default()
        }
    }

    /// `rootMargin` for an `IntersectionObserver`.
    pub fn root_margin(&self) -> String {
        let pct = self.margin_pct;
        format!("-{pct}% 0px -{pct}% 0px")
    }
}

/// One observation of a section relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    /// Visible fraction of the section, `0.0..=1.0`.
    pub ratio: f64,
    /// Section top relative to the viewport top, pixels.
    pub top: f64,
    pub viewport_height: f64,
}

impl IntersectionSample {
    /// Sample computed from section geometry, applying the same viewport inset
    /// the observer's root margin does.
    #[cfg(test)]
    pub fn from_layout(top: f64, height: f64, viewport_height: f64, options: &VisibilityOptions) -> Self {
        let inset = viewport_height * options.margin_pct / 100.0;
        let visible_top = top.max(inset);
        let visible_bottom = (top + height).min(viewport_height - inset);
        let visible = (visible_bottom - visible_top).max(0.0);
        let ratio = if height > 0.0 { (visible / height).min(1.0) } else { 0.0 };
        Self {
            is_intersecting: visible > 0.0,
            ratio,
            top,
            viewport_height,
        }
    }

    /// Distance of the section top from the viewport top as a whole percentage.
    pub fn scroll_depth(&self) -> u32 {
        if self.viewport_height <= 0.0 {
            return 0;
        }
        (self.top / self.viewport_height * 100.0).round().abs() as u32
    }
}

/// Fire-once state for a single section.
#[derive(Debug, Clone)]
pub struct SectionWatch {
    name: String,
    options: VisibilityOptions,
    fired: bool,
}

impl SectionWatch {
    pub fn new(name: impl Into<String>, options: VisibilityOptions) -> Self {
        Self {
            name: name.into(),
            options,
            fired: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> VisibilityOptions {
        self.options
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Scroll depth to report if this sample is the first qualifying one.
    pub fn observe(&mut self, sample: IntersectionSample) -> Option<u32> {
        if self.fired || !sample.is_intersecting {
            return None;
        }
        // observer ratios land a hair under the threshold they were fired for
        if sample.ratio + 1e-6 < self.options.threshold {
            return None;
        }
        self.fired = true;
        Some(sample.scroll_depth())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::testing::recording_tracker;

    const VH: f64 = 800.0;

    #[test]
    fn default_options_match_observer_settings() {
        let opts = VisibilityOptions::default();
        assert_eq!(opts.threshold, 0.5);
        assert_eq!(opts.root_margin(), "-10% 0px -10% 0px");
        assert_eq!(VisibilityOptions::with_threshold(4.0).threshold, 1.0);
    }

    #[test]
    fn layout_ratio_respects_inset_margins() {
        let opts = VisibilityOptions::default();
        // Section fully inside the inset viewport (80..720).
        let inside = IntersectionSample::from_layout(100.0, 400.0, VH, &opts);
        assert_eq!(inside.ratio, 1.0);
        // Section occupying only the top margin band.
        let edge = IntersectionSample::from_layout(0.0, 80.0, VH, &opts);
        assert!(!edge.is_intersecting);
        // Half of a 400px section below the inset bottom.
        let half = IntersectionSample::from_layout(520.0, 400.0, VH, &opts);
        assert!((half.ratio - 0.5).abs() < 1e-9);
    }

    #[test]
    fn scroll_depth_is_absolute_percentage() {
        let opts = VisibilityOptions::default();
        assert_eq!(IntersectionSample::from_layout(400.0, 10.0, VH, &opts).scroll_depth(), 50);
        assert_eq!(IntersectionSample::from_layout(-200.0, 10.0, VH, &opts).scroll_depth(), 25);
        assert_eq!(IntersectionSample::from_layout(10.0, 10.0, 0.0, &opts).scroll_depth(), 0);
    }

    #[test]
    fn below_threshold_does_not_fire() {
        let opts = VisibilityOptions::default();
        let mut watch = SectionWatch::new("skills", opts);
        let peek = IntersectionSample::from_layout(620.0, 400.0, VH, &opts);
        assert!(peek.is_intersecting);
        assert_eq!(watch.observe(peek), None);
        assert!(!watch.has_fired());
    }

    #[test]
    fn fires_once_across_scroll_away_and_back() {
        let opts = VisibilityOptions::default();
        let (tracker, reporter) = recording_tracker();
        let mut watch = SectionWatch::new("projects", opts);

        // in view, scrolled past, back in view
        for top in [900.0, 300.0, -900.0, 300.0, 200.0] {
            let sample = IntersectionSample::from_layout(top, 400.0, VH, &opts);
            if let Some(depth) = watch.observe(sample) {
                tracker.section_view(watch.name(), depth);
            }
        }

        let events = reporter.events.borrow();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].action, "section_view");
        assert_eq!(events[0].label.as_deref(), Some("projects"));
        assert_eq!(events[0].value, Some(38));
        assert!(watch.has_fired());
    }

    #[test]
    fn ratio_just_under_threshold_still_counts() {
        let mut watch = SectionWatch::new("about", VisibilityOptions::default());
        let sample = IntersectionSample {
            is_intersecting: true,
            ratio: 0.4999999,
            top: 0.0,
            viewport_height: VH,
        };
        assert_eq!(watch.observe(sample), Some(0));
    }
}
