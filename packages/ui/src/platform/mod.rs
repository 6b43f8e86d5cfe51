//! Adapters between the portable core and the environment it runs in.
//!
//! In the browser (wasm32) everything is backed by `web-sys`. Native builds
//! (server rendering, tests) get in-memory stand-ins with no side effects.

use std::rc::Rc;

use dioxus::prelude::MountedData;

use crate::analytics::{Reporter, Tracker};
use crate::store::Environment;
use crate::visibility::{IntersectionSample, VisibilityOptions};

pub mod memory;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{SectionObserver, UnloadListener};

/// Placeholder handle on targets without intersection observers.
#[cfg(not(target_arch = "wasm32"))]
pub struct SectionObserver;

/// Placeholder handle on targets without page unload events.
#[cfg(not(target_arch = "wasm32"))]
pub struct UnloadListener;

#[cfg(target_arch = "wasm32")]
pub fn environment() -> Environment {
    Environment {
        storage: Rc::new(web::LocalStorage),
        location: Rc::new(web::BrowserLocation),
        metadata: Rc::new(web::DocumentHead),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn environment() -> Environment {
    Environment {
        storage: Rc::new(memory::MemoryStorage::default()),
        location: Rc::new(memory::MemoryLocation::detached()),
        metadata: Rc::new(memory::MemoryMetadata::default()),
    }
}

#[cfg(target_arch = "wasm32")]
pub fn reporter() -> Rc<dyn Reporter> {
    Rc::new(web::GtagReporter)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn reporter() -> Rc<dyn Reporter> {
    Rc::new(crate::analytics::LogReporter)
}

/// Start observing a mounted section. `None` when observation is not possible here.
#[cfg(target_arch = "wasm32")]
pub fn observe_section(
    mounted: &MountedData,
    options: VisibilityOptions,
    handler: impl FnMut(IntersectionSample) -> bool + 'static,
) -> Option<SectionObserver> {
    let Some(element) = mounted.downcast::<web_sys::Element>() else {
        tracing::debug!("visibility: mounted node is not a DOM element");
        return None;
    };
    match web::observe_section(element, options, handler) {
        Ok(observer) => Some(observer),
        Err(e) => {
            tracing::warn!("visibility: observer not created: {e}");
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn observe_section(
    _mounted: &MountedData,
    _options: VisibilityOptions,
    _handler: impl FnMut(IntersectionSample) -> bool + 'static,
) -> Option<SectionObserver> {
    None
}

#[cfg(target_arch = "wasm32")]
pub fn on_before_unload(handler: impl FnMut() + 'static) -> Option<UnloadListener> {
    match web::on_before_unload(handler) {
        Ok(listener) => Some(listener),
        Err(e) => {
            tracing::warn!("engagement: unload listener not installed: {e}");
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn on_before_unload(_handler: impl FnMut() + 'static) -> Option<UnloadListener> {
    None
}

#[cfg(target_arch = "wasm32")]
pub fn monitor_performance(tracker: &Tracker, slow_resource_ms: f64) {
    web::monitor_performance(tracker, slow_resource_ms);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn monitor_performance(_tracker: &Tracker, _slow_resource_ms: f64) {}

/// Title of the current document, empty when unknown.
pub fn document_title() -> String {
    #[cfg(target_arch = "wasm32")]
    if let Some(title) = web::document_title() {
        return title;
    }
    String::new()
}

/// Path of the current page, `/` when unknown.
pub fn current_path() -> String {
    #[cfg(target_arch = "wasm32")]
    if let Some(path) = web::current_path() {
        return path;
    }
    "/".to_string()
}
