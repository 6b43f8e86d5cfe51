use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use crate::analytics::Tracker;
use crate::config::AnalyticsConfig;
use crate::platform;
use crate::visibility::{SectionWatch, VisibilityOptions};

/// Page name used for page views and time-on-page.
pub const PAGE_NAME: &str = "portfolio";

/// Script that loads gtag.js / GTM for the configured ids.
///
/// `None` when no id is configured; the backend then stays unavailable and
/// every tracking call is a no-op.
pub fn bootstrap_js(config: &AnalyticsConfig) -> Option<String> {
    if !config.is_enabled() {
        return None;
    }

    let mut js = String::from("(function(){ try {\n  window.dataLayer = window.dataLayer || [];\n");
    if let Some(id) = &config.gtm_id {
        js.push_str(&format!(
            r#"  window.dataLayer.push({{ "gtm.start": Date.now(), event: "gtm.js" }});
  var gtm = document.createElement("script");
  gtm.async = true;
  gtm.src = "https://www.googletagmanager.com/gtm.js?id={id}";
  document.head.appendChild(gtm);
"#
        ));
    }
    if let Some(id) = &config.measurement_id {
        js.push_str(&format!(
            r#"  var ga = document.createElement("script");
  ga.async = true;
  ga.src = "https://www.googletagmanager.com/gtag/js?id={id}";
  document.head.appendChild(ga);
  window.gtag = window.gtag || function(){{ window.dataLayer.push(arguments); }};
  window.gtag("js", new Date());
  window.gtag("config", "{id}", {{ page_title: document.title, page_location: window.location.href }});
"#
        ));
    }
    js.push_str("} catch(e) {} return \"\"; })()");
    Some(js)
}

/// Provide a [`Tracker`] to the tree and start the page-level instrumentation.
///
/// Wrap `I18nProvider` with this so language switches are reported.
#[component]
pub fn AnalyticsProvider(children: Element) -> Element {
    let config = use_hook(AnalyticsConfig::from_build_env);
    let tracker = use_hook(|| Tracker::new(platform::reporter(), &config));
    use_context_provider(|| tracker.clone());

    use_effect(move || {
        let tracker = tracker.clone();
        let config = config.clone();
        spawn(async move {
            if let Some(js) = bootstrap_js(&config) {
                if let Err(e) = document::eval(&js).await {
                    tracing::warn!("analytics: bootstrap failed: {e}");
                }
            } else {
                tracing::info!("analytics: no ids configured, tracking disabled");
            }
            tracker.page_view(PAGE_NAME, &platform::current_path(), &platform::document_title());
            platform::monitor_performance(&tracker, config.slow_resource_ms);
        });
    });

    use_time_on_page(PAGE_NAME);

    rsx! { {children} }
}

pub fn use_tracker() -> Tracker {
    try_use_context::<Tracker>().unwrap_or_else(Tracker::disabled)
}

/// Wall-clock start of the page session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageClock {
    started: DateTime<Utc>,
}

impl PageClock {
    pub fn start() -> Self {
        Self::started_at(Utc::now())
    }

    pub fn started_at(started: DateTime<Utc>) -> Self {
        Self { started }
    }

    /// Whole seconds since start; clock skew backwards reads as zero.
    pub fn elapsed_secs(&self, now: DateTime<Utc>) -> u64 {
        u64::try_from((now - self.started).num_seconds()).unwrap_or(0)
    }
}

/// Report time spent on the page when it unloads.
pub fn use_time_on_page(page: &'static str) {
    let tracker = use_tracker();
    use_hook(move || {
        let clock = PageClock::start();
        Rc::new(platform::on_before_unload(move || {
            tracker.time_on_page(clock.elapsed_secs(Utc::now()), page);
        }))
    });
}

/// A `<section>` that reports `section_view` the first time it is seen.
#[component]
pub fn TrackedSection(
    id: String,
    name: String,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let tracker = use_tracker();
    let watch = use_hook(|| {
        Rc::new(RefCell::new(SectionWatch::new(
            name.clone(),
            VisibilityOptions::default(),
        )))
    });
    // Released on unmount together with the hook.
    let observer = use_hook(|| Rc::new(RefCell::new(None::<platform::SectionObserver>)));

    rsx! {
        section {
            id: "{id}",
            class: "{class}",
            onmounted: move |evt: MountedEvent| {
                if watch.borrow().has_fired() || observer.borrow().is_some() {
                    return;
                }
                let options = watch.borrow().options();
                let tracker = tracker.clone();
                let watch = watch.clone();
                let handle = platform::observe_section(&evt.data(), options, move |sample| {
                    let mut watch = watch.borrow_mut();
                    match watch.observe(sample) {
                        Some(depth) => {
                            tracker.section_view(watch.name(), depth);
                            true
                        }
                        None => watch.has_fired(),
                    }
                });
                *observer.borrow_mut() = handle;
            },
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn config(ga: Option<&str>, gtm: Option<&str>) -> AnalyticsConfig {
        AnalyticsConfig::from_values(ga, gtm, None, None)
    }

    #[test]
    fn no_ids_means_no_bootstrap() {
        assert_eq!(bootstrap_js(&config(None, None)), None);
    }

    #[test]
    fn bootstrap_loads_configured_scripts_only() {
        let js = bootstrap_js(&config(Some("G-TEST123"), None)).unwrap();
        assert!(js.contains("gtag/js?id=G-TEST123"));
        assert!(js.contains(r#"window.gtag("config", "G-TEST123""#));
        assert!(!js.contains("gtm.js"));

        let js = bootstrap_js(&config(None, Some("GTM-ABC"))).unwrap();
        assert!(js.contains("gtm.js?id=GTM-ABC"));
        assert!(!js.contains("window.gtag"));
    }

    #[test]
    fn bootstrap_is_a_guarded_expression() {
        let js = bootstrap_js(&config(Some("G-1"), Some("GTM-1"))).unwrap();
        assert!(js.starts_with("(function(){ try {"));
        assert!(js.ends_with("})()"));
        assert!(js.contains("window.dataLayer = window.dataLayer || [];"));
    }

    #[test]
    fn page_clock_counts_whole_seconds() {
        let start = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let clock = PageClock::started_at(start);
        assert_eq!(clock.elapsed_secs(start + chrono::Duration::milliseconds(95_900)), 95);
        assert_eq!(clock.elapsed_secs(start - chrono::Duration::seconds(5)), 0);
    }
}
