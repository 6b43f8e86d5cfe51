//! Passive page performance reporting.
//!
//! The browser does the measuring; this module only decides what is worth
//! reporting and in which unit.

/// Core Web Vitals reported to analytics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebVital {
    /// Largest Contentful Paint, milliseconds.
    Lcp,
    /// First Input Delay, milliseconds.
    Fid,
    /// Cumulative Layout Shift, unitless score.
    Cls,
}

impl WebVital {
    pub fn name(self) -> &'static str {
        match self {
            WebVital::Lcp => "LCP",
            WebVital::Fid => "FID",
            WebVital::Cls => "CLS",
        }
    }

    /// Integer sent as the event value. CLS is scaled by 1000 to keep precision.
    pub fn report_value(self, raw: f64) -> i64 {
        match self {
            WebVital::Lcp | WebVital::Fid => raw.round() as i64,
            WebVital::Cls => (raw * 1000.0).round() as i64,
        }
    }
}

pub fn is_slow_resource(duration_ms: f64, threshold_ms: f64) -> bool {
    duration_ms > threshold_ms
}

/// Running CLS total. Shifts caused by recent user input do not count.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct LayoutShiftTotal {
    total: f64,
}

impl LayoutShiftTotal {
    pub fn add(&mut self, value: f64, had_recent_input: bool) -> f64 {
        if !had_recent_input && value.is_finite() && value > 0.0 {
            self.total += value;
        }
        self.total
    }

    pub fn total(&self) -> f64 {
        self.total
    }
}

/// Quiet time after the last scroll event that ends a scroll burst, milliseconds.
pub const SCROLL_SETTLE_MS: i32 = 150;

/// One continuous scroll, from its first event until scrolling settles.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ScrollBurst {
    started_at: Option<f64>,
}

impl ScrollBurst {
    /// Only the first event of a burst sets its start.
    pub fn scrolled(&mut self, now: f64) {
        self.started_at.get_or_insert(now);
    }

    /// Close the burst and return its duration, or `None` if none was open.
    pub fn settle(&mut self, now: f64) -> Option<f64> {
        self.started_at.take().map(|start| (now - start).max(0.0))
    }
}
