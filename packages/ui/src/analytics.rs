//! Event tracking facade.
//!
//! Application code calls the named methods on [`Tracker`]; the tracker shapes
//! a [`TrackedEvent`] and hands it to whatever [`Reporter`] is installed. All
//! calls are fire-and-forget: nothing is returned and nothing can fail.

use std::rc::Rc;

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::config::AnalyticsConfig;
use crate::i18n::Lang;
use crate::performance::WebVital;

pub const ENGAGEMENT: &str = "engagement";
pub const CONVERSION: &str = "conversion";
pub const PERFORMANCE: &str = "Performance";

/// One user action, described for the analytics backend. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackedEvent {
    pub action: String,
    pub category: String,
    pub label: Option<String>,
    pub value: Option<i64>,
    pub params: Map<String, Value>,
}

impl TrackedEvent {
    pub fn new(action: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            category: category.into(),
            label: None,
            value: None,
            params: Map::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_value(mut self, value: i64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Parameter object for `gtag('event', action, params)`.
    pub fn gtag_params(&self) -> Value {
        let mut params = Map::new();
        params.insert("event_category".into(), Value::from(self.category.as_str()));
        if let Some(label) = &self.label {
            params.insert("event_label".into(), Value::from(label.as_str()));
        }
        if let Some(value) = self.value {
            params.insert("value".into(), Value::from(value));
        }
        for (key, value) in &self.params {
            params.entry(key.clone()).or_insert_with(|| value.clone());
        }
        Value::Object(params)
    }
}

/// Analytics backend seam.
///
/// `send` maps to the global `gtag` entry point and `push` to the tag
/// manager's `dataLayer` queue. Implementations swallow their own failures.
pub trait Reporter {
    /// Whether the backend script is loaded. Checked before every call.
    fn is_available(&self) -> bool;

    fn send(&self, event: &TrackedEvent);

    fn push(&self, record: Value);
}

/// Backend used when analytics is switched off.
pub struct NoopReporter;

impl Reporter for NoopReporter {
    fn is_available(&self) -> bool {
        false
    }

    fn send(&self, _event: &TrackedEvent) {}

    fn push(&self, _record: Value) {}
}

/// Backend for native builds (server rendering, desktop): logs instead of sending.
pub struct LogReporter;

impl Reporter for LogReporter {
    fn is_available(&self) -> bool {
        true
    }

    fn send(&self, event: &TrackedEvent) {
        tracing::debug!(
            "analytics.event: action={} category={} label={:?} value={:?}",
            event.action,
            event.category,
            event.label,
            event.value
        );
    }

    fn push(&self, record: Value) {
        tracing::debug!("analytics.data_layer: {record}");
    }
}

#[derive(Clone)]
pub struct Tracker {
    reporter: Rc<dyn Reporter>,
    currency: String,
}

impl Tracker {
    pub fn new(reporter: Rc<dyn Reporter>, config: &AnalyticsConfig) -> Self {
        Self {
            reporter,
            currency: config.conversion_currency.clone(),
        }
    }

    pub fn disabled() -> Self {
        Self::new(Rc::new(NoopReporter), &AnalyticsConfig::default())
    }

    pub fn is_enabled(&self) -> bool {
        self.reporter.is_available()
    }

    pub fn send_event(&self, event: TrackedEvent) {
        if !self.reporter.is_available() {
            tracing::trace!("analytics: backend unavailable, dropping {}", event.action);
            return;
        }
        self.reporter.send(&event);
    }

    pub fn push_record(&self, record: Value) {
        if !self.reporter.is_available() {
            return;
        }
        self.reporter.push(record);
    }

    fn conversion(&self, name: &str, value: Option<i64>) {
        self.push_record(json!({
            "event": "conversion",
            "conversion_name": name,
            "conversion_value": value,
            "conversion_currency": self.currency,
        }));
    }

    pub fn page_view(&self, page_name: &str, page_path: &str, page_title: &str) {
        self.push_record(json!({
            "event": "page_view",
            "page_name": page_name,
            "page_path": page_path,
            "page_title": page_title,
        }));
    }

    pub fn language_switch(&self, lang: Lang) {
        self.send_event(TrackedEvent::new("language_switch", ENGAGEMENT).with_label(lang.code()));
    }

    pub fn resume_download(&self) {
        self.send_event(
            TrackedEvent::new("resume_download", CONVERSION)
                .with_label("CV Download")
                .with_value(1),
        );
        self.conversion("resume_download", Some(1));
    }

    pub fn email_click(&self, which: &str) {
        self.send_event(
            TrackedEvent::new("email_click", CONVERSION)
                .with_label(which)
                .with_value(1),
        );
        self.conversion("email_click", Some(1));
    }

    pub fn project_view(&self, project: &str) {
        self.send_event(TrackedEvent::new("project_view", ENGAGEMENT).with_label(project));
    }

    pub fn external_link_click(&self, link_type: &str, url: &str) {
        self.send_event(
            TrackedEvent::new("external_link_click", ENGAGEMENT)
                .with_label(format!("{link_type}: {url}"))
                .with_param("link_url", url),
        );
    }

    pub fn contact_interaction(&self, action: &str) {
        self.send_event(TrackedEvent::new("contact_interaction", ENGAGEMENT).with_label(action));
    }

    pub fn section_view(&self, section: &str, scroll_depth: u32) {
        self.send_event(
            TrackedEvent::new("section_view", ENGAGEMENT)
                .with_label(section)
                .with_value(i64::from(scroll_depth)),
        );
    }

    pub fn time_on_page(&self, seconds: u64, page: &str) {
        self.send_event(
            TrackedEvent::new("time_on_page", ENGAGEMENT)
                .with_label(page)
                .with_value(i64::try_from(seconds).unwrap_or(i64::MAX)),
        );
    }

    pub fn slow_resource(&self, resource: &str, duration_ms: f64) {
        self.send_event(
            TrackedEvent::new("slow_resource", PERFORMANCE)
                .with_label(resource)
                .with_value(duration_ms.round() as i64),
        );
    }

    pub fn web_vital(&self, vital: WebVital, raw: f64) {
        self.send_event(
            TrackedEvent::new("web_vitals", PERFORMANCE)
                .with_label(vital.name())
                .with_value(vital.report_value(raw)),
        );
    }

    pub fn scroll_performance(&self, duration_ms: f64) {
        self.send_event(
            TrackedEvent::new("scroll_performance", PERFORMANCE)
                .with_label("Scroll Duration")
                .with_value(duration_ms.round() as i64),
        );
    }

    pub fn page_load_time(&self, millis: f64) {
        self.send_event(
            TrackedEvent::new("page_load_time", PERFORMANCE)
                .with_label("Load Time")
                .with_value(millis.round() as i64),
        );
    }
}

impl std::fmt::Debug for Tracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tracker")
            .field("enabled", &self.is_enabled())
            .field("currency", &self.currency)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// Captures everything the tracker hands over.
    #[derive(Default)]
    pub struct RecordingReporter {
        pub offline: Cell<bool>,
        pub events: RefCell<Vec<TrackedEvent>>,
        pub records: RefCell<Vec<Value>>,
    }

    impl RecordingReporter {
        pub fn actions(&self) -> Vec<String> {
            self.events.borrow().iter().map(|e| e.action.clone()).collect()
        }
    }

    impl Reporter for RecordingReporter {
        fn is_available(&self) -> bool {
            !self.offline.get()
        }

        fn send(&self, event: &TrackedEvent) {
            self.events.borrow_mut().push(event.clone());
        }

        fn push(&self, record: Value) {
            self.records.borrow_mut().push(record);
        }
    }

    pub fn recording_tracker() -> (Tracker, Rc<RecordingReporter>) {
        let reporter = Rc::new(RecordingReporter::default());
        let tracker = Tracker::new(reporter.clone(), &AnalyticsConfig::default());
        (tracker, reporter)
    }
}
