//! Browser adapters built on `web-sys`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::{Array, Function, Object, Reflect, JSON};
use serde_json::Value;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    PerformanceEntry, PerformanceObserver, PerformanceObserverEntryList, Window,
};

use crate::analytics::{Reporter, TrackedEvent, Tracker};
use crate::error::{PlatformError, PlatformResult};
use crate::i18n::PageMeta;
use crate::performance::{
    is_slow_resource, LayoutShiftTotal, ScrollBurst, WebVital, SCROLL_SETTLE_MS,
};
use crate::store::{MetadataSink, PreferenceStore, UrlLocation};
use crate::visibility::{IntersectionSample, VisibilityOptions};

fn window() -> PlatformResult<Window> {
    web_sys::window().ok_or(PlatformError::NoWindow)
}

fn document() -> PlatformResult<Document> {
    window()?.document().ok_or(PlatformError::NoDocument)
}

fn js_message(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

fn js_err(err: JsValue) -> PlatformError {
    PlatformError::Js(js_message(err))
}

fn to_js(value: &Value) -> PlatformResult<JsValue> {
    let text = serde_json::to_string(value)?;
    JSON::parse(&text).map_err(js_err)
}

fn options(pairs: &[(&str, JsValue)]) -> PlatformResult<Object> {
    let object = Object::new();
    for (key, value) in pairs {
        Reflect::set(&object, &JsValue::from_str(key), value).map_err(js_err)?;
    }
    Ok(object)
}

pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> PlatformResult<web_sys::Storage> {
        window()?
            .local_storage()
            .map_err(|e| PlatformError::StorageUnavailable(js_message(e)))?
            .ok_or_else(|| PlatformError::StorageUnavailable("disabled".into()))
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> PlatformResult<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| PlatformError::StorageUnavailable(js_message(e)))
    }

    fn save(&self, key: &str, value: &str) -> PlatformResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| PlatformError::StorageUnavailable(js_message(e)))
    }
}

pub struct BrowserLocation;

impl UrlLocation for BrowserLocation {
    fn href(&self) -> PlatformResult<String> {
        window()?.location().href().map_err(js_err)
    }

    fn replace(&self, href: &str) -> PlatformResult<()> {
        window()?
            .history()
            .map_err(|e| PlatformError::History(js_message(e)))?
            .replace_state_with_url(&JsValue::NULL, "", Some(href))
            .map_err(|e| PlatformError::History(js_message(e)))
    }
}

/// Writes `<html lang>`, the title, and description/social preview tags.
pub struct DocumentHead;

impl DocumentHead {
    fn set_meta(doc: &Document, attr: &str, name: &str, content: &str) -> PlatformResult<()> {
        let selector = format!("meta[{attr}=\"{name}\"]");
        let tag = match doc.query_selector(&selector).map_err(js_err)? {
            Some(tag) => tag,
            None => {
                let tag = doc.create_element("meta").map_err(js_err)?;
                tag.set_attribute(attr, name).map_err(js_err)?;
                if let Some(head) = doc.head() {
                    head.append_child(&tag).map_err(js_err)?;
                }
                tag
            }
        };
        tag.set_attribute("content", content).map_err(js_err)
    }

    fn write(meta: &PageMeta) -> PlatformResult<()> {
        let doc = document()?;
        doc.set_title(&meta.title);
        Self::set_meta(&doc, "name", "description", &meta.description)?;
        Self::set_meta(&doc, "property", "og:title", &meta.title)?;
        Self::set_meta(&doc, "property", "og:description", &meta.description)?;
        Self::set_meta(&doc, "name", "twitter:title", &meta.title)?;
        Self::set_meta(&doc, "name", "twitter:description", &meta.description)?;
        Ok(())
    }
}

impl MetadataSink for DocumentHead {
    fn set_document_lang(&self, code: &str) {
        let root = document().ok().and_then(|doc| doc.document_element());
        match root {
            Some(root) => {
                if let Err(e) = root.set_attribute("lang", code) {
                    tracing::warn!("metadata: lang attribute not set: {}", js_message(e));
                }
            }
            None => tracing::debug!("metadata: no document element"),
        }
    }

    fn apply(&self, meta: &PageMeta) {
        if let Err(e) = Self::write(meta) {
            tracing::warn!("metadata: head not updated: {e}");
        }
    }
}

/// Forwards to `window.gtag` and `window.dataLayer` when the scripts are present.
pub struct GtagReporter;

impl GtagReporter {
    fn global(name: &str) -> Option<JsValue> {
        let window = web_sys::window()?;
        Reflect::get(&window, &JsValue::from_str(name))
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
    }

    fn gtag() -> Option<Function> {
        Self::global("gtag")?.dyn_into::<Function>().ok()
    }

    fn data_layer() -> Option<Array> {
        Self::global("dataLayer")?.dyn_into::<Array>().ok()
    }
}

impl Reporter for GtagReporter {
    fn is_available(&self) -> bool {
        Self::gtag().is_some() || Self::data_layer().is_some()
    }

    fn send(&self, event: &TrackedEvent) {
        let Some(gtag) = Self::gtag() else {
            tracing::trace!("analytics: gtag not loaded, dropping {}", event.action);
            return;
        };
        let params = match to_js(&event.gtag_params()) {
            Ok(params) => params,
            Err(e) => {
                tracing::warn!("analytics: {e}");
                return;
            }
        };
        let sent = gtag.call3(
            &JsValue::NULL,
            &JsValue::from_str("event"),
            &JsValue::from_str(&event.action),
            &params,
        );
        if let Err(e) = sent {
            tracing::debug!("analytics: gtag call failed: {}", js_message(e));
        }
    }

    fn push(&self, record: Value) {
        let Some(data_layer) = Self::data_layer() else {
            return;
        };
        match to_js(&record) {
            Ok(record) => {
                data_layer.push(&record);
            }
            Err(e) => tracing::warn!("analytics: {e}"),
        }
    }
}

/// Live intersection observation of one section; disconnects on drop.
pub struct SectionObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// Observe `element`; `handler` returns `true` once it no longer needs samples.
pub fn observe_section(
    element: &Element,
    options: VisibilityOptions,
    mut handler: impl FnMut(IntersectionSample) -> bool + 'static,
) -> PlatformResult<SectionObserver> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let viewport_height = viewport_height();
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let sample = IntersectionSample {
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                    top: entry.bounding_client_rect().top(),
                    viewport_height,
                };
                if handler(sample) {
                    observer.disconnect();
                    break;
                }
            }
        },
    );

    let init: IntersectionObserverInit = options_object(&[
        ("threshold", JsValue::from_f64(options.threshold)),
        ("rootMargin", JsValue::from_str(&options.root_margin())),
    ])?;
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(js_err)?;
    observer.observe(element);

    Ok(SectionObserver {
        observer,
        _callback: callback,
    })
}

fn options_object<T: JsCast>(pairs: &[(&str, JsValue)]) -> PlatformResult<T> {
    Ok(options(pairs)?.unchecked_into::<T>())
}

/// `beforeunload` subscription; removed on drop.
pub struct UnloadListener {
    callback: Closure<dyn FnMut()>,
}

impl Drop for UnloadListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "beforeunload",
                self.callback.as_ref().unchecked_ref(),
            );
        }
    }
}

pub fn on_before_unload(handler: impl FnMut() + 'static) -> PlatformResult<UnloadListener> {
    let callback = Closure::<dyn FnMut()>::new(handler);
    window()?
        .add_event_listener_with_callback("beforeunload", callback.as_ref().unchecked_ref())
        .map_err(js_err)?;
    Ok(UnloadListener { callback })
}

pub fn current_path() -> Option<String> {
    web_sys::window()?.location().pathname().ok()
}

fn number_field(entry: &PerformanceEntry, field: &str) -> Option<f64> {
    Reflect::get(entry, &JsValue::from_str(field)).ok()?.as_f64()
}

fn bool_field(entry: &PerformanceEntry, field: &str) -> bool {
    Reflect::get(entry, &JsValue::from_str(field))
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

/// Register a performance observer for `entry_type`. It lives for the page session.
fn observe_entries(
    entry_type: &str,
    mut handler: impl FnMut(Vec<PerformanceEntry>) + 'static,
) -> PlatformResult<()> {
    let callback = Closure::<dyn FnMut(PerformanceObserverEntryList, PerformanceObserver)>::new(
        move |list: PerformanceObserverEntryList, _observer: PerformanceObserver| {
            let entries = list
                .get_entries()
                .iter()
                .filter_map(|entry| entry.dyn_into::<PerformanceEntry>().ok())
                .collect::<Vec<_>>();
            handler(entries);
        },
    );
    let observer = PerformanceObserver::new(callback.as_ref().unchecked_ref()).map_err(js_err)?;

    let types = Array::of1(&JsValue::from_str(entry_type));
    let init = options(&[("entryTypes", types.into())])?;
    let observe = Reflect::get(&observer, &JsValue::from_str("observe"))
        .map_err(js_err)?
        .dyn_into::<Function>()
        .map_err(|_| PlatformError::Js("PerformanceObserver.observe missing".into()))?;
    observe.call1(&observer, &init).map_err(js_err)?;

    callback.forget();
    Ok(())
}

/// Report slow resources, Core Web Vitals, scroll durations and total load time.
pub fn monitor_performance(tracker: &Tracker, slow_resource_ms: f64) {
    let resources = tracker.clone();
    let observed = observe_entries("resource", move |entries| {
        for entry in entries {
            let duration = entry.duration();
            if is_slow_resource(duration, slow_resource_ms) {
                resources.slow_resource(&entry.name(), duration);
            }
        }
    });
    if let Err(e) = observed {
        tracing::debug!("performance: resource timing unavailable: {e}");
    }

    let lcp = tracker.clone();
    let observed = observe_entries("largest-contentful-paint", move |entries| {
        if let Some(last) = entries.last() {
            lcp.web_vital(WebVital::Lcp, last.start_time());
        }
    });
    if let Err(e) = observed {
        tracing::debug!("performance: LCP unavailable: {e}");
    }

    let fid = tracker.clone();
    let observed = observe_entries("first-input", move |entries| {
        for entry in entries {
            if let Some(processing_start) = number_field(&entry, "processingStart") {
                fid.web_vital(WebVital::Fid, processing_start - entry.start_time());
            }
        }
    });
    if let Err(e) = observed {
        tracing::debug!("performance: FID unavailable: {e}");
    }

    let cls = tracker.clone();
    let mut shifts = LayoutShiftTotal::default();
    let observed = observe_entries("layout-shift", move |entries| {
        for entry in &entries {
            let value = number_field(entry, "value").unwrap_or(0.0);
            shifts.add(value, bool_field(entry, "hadRecentInput"));
        }
        cls.web_vital(WebVital::Cls, shifts.total());
    });
    if let Err(e) = observed {
        tracing::debug!("performance: CLS unavailable: {e}");
    }

    if let Err(e) = report_scroll_bursts(tracker.clone()) {
        tracing::debug!("performance: scroll timing unavailable: {e}");
    }

    report_load_time(tracker.clone());
}

fn performance_now() -> Option<f64> {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
}

/// Each scroll event restarts a settle timer; when it fires the burst is reported.
fn report_scroll_bursts(tracker: Tracker) -> PlatformResult<()> {
    let window = window()?;
    let burst = Rc::new(RefCell::new(ScrollBurst::default()));
    let pending = Rc::new(Cell::new(None::<i32>));

    let settle = {
        let burst = burst.clone();
        let pending = pending.clone();
        Closure::<dyn FnMut()>::new(move || {
            pending.set(None);
            let Some(end) = performance_now() else {
                return;
            };
            if let Some(duration) = burst.borrow_mut().settle(end) {
                tracker.scroll_performance(duration);
            }
        })
    };
    let settle_fn = settle.as_ref().unchecked_ref::<Function>().clone();
    settle.forget();

    let on_scroll = Closure::<dyn FnMut()>::new(move || {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(now) = performance_now() {
            burst.borrow_mut().scrolled(now);
        }
        if let Some(handle) = pending.take() {
            window.clear_timeout_with_handle(handle);
        }
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(&settle_fn, SCROLL_SETTLE_MS) {
            Ok(handle) => pending.set(Some(handle)),
            Err(e) => tracing::debug!("performance: scroll timer not set: {}", js_message(e)),
        }
    });
    window
        .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
        .map_err(js_err)?;
    on_scroll.forget();
    Ok(())
}

fn report_load_time(tracker: Tracker) {
    let Ok(window) = window() else {
        return;
    };

    let complete = window
        .document()
        .map(|doc| doc.ready_state() == "complete")
        .unwrap_or(false);
    if complete {
        if let Some(ms) = performance_now() {
            tracker.page_load_time(ms);
        }
        return;
    }

    let on_load = Closure::once_into_js(move || {
        if let Some(ms) = performance_now() {
            tracker.page_load_time(ms);
        }
    });
    if let Err(e) = window.add_event_listener_with_callback("load", on_load.unchecked_ref()) {
        tracing::debug!("performance: load listener not installed: {}", js_message(e));
    }
}

pub fn document_title() -> Option<String> {
    Some(web_sys::window()?.document()?.title())
}
