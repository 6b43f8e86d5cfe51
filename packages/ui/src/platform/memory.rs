//! In-process adapters for native builds (server rendering) and tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::error::{PlatformError, PlatformResult};
use crate::i18n::PageMeta;
use crate::store::{MetadataSink, PreferenceStore, UrlLocation};

#[derive(Default)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
    broken: Cell<bool>,
}

impl MemoryStorage {
    pub fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    /// Simulate storage disabled by browser policy.
    pub fn set_broken(&self, broken: bool) {
        self.broken.set(broken);
    }
}

impl PreferenceStore for MemoryStorage {
    fn load(&self, key: &str) -> PlatformResult<Option<String>> {
        if self.broken.get() {
            return Err(PlatformError::StorageUnavailable("blocked".into()));
        }
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> PlatformResult<()> {
        if self.broken.get() {
            return Err(PlatformError::StorageUnavailable("blocked".into()));
        }
        self.insert(key, value);
        Ok(())
    }
}

/// A page address held in memory. `detached()` has no address at all.
#[derive(Default)]
pub struct MemoryLocation {
    href: RefCell<Option<String>>,
    replacements: Cell<usize>,
    broken: Cell<bool>,
}

impl MemoryLocation {
    pub fn new(href: &str) -> Self {
        Self {
            href: RefCell::new(Some(href.to_string())),
            ..Self::default()
        }
    }

    pub fn detached() -> Self {
        Self::default()
    }

    pub fn current(&self) -> String {
        self.href.borrow().clone().unwrap_or_default()
    }

    /// Navigate without counting as a replacement.
    pub fn set_href(&self, href: &str) {
        *self.href.borrow_mut() = Some(href.to_string());
    }

    pub fn replacements(&self) -> usize {
        self.replacements.get()
    }

    pub fn set_broken(&self, broken: bool) {
        self.broken.set(broken);
    }
}

impl UrlLocation for MemoryLocation {
    fn href(&self) -> PlatformResult<String> {
        if self.broken.get() {
            return Err(PlatformError::Js("location blocked".into()));
        }
        self.href.borrow().clone().ok_or(PlatformError::NoWindow)
    }

    fn replace(&self, href: &str) -> PlatformResult<()> {
        if self.broken.get() {
            return Err(PlatformError::History("replaceState blocked".into()));
        }
        self.set_href(href);
        self.replacements.set(self.replacements.get() + 1);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryMetadata {
    lang: RefCell<Option<String>>,
    applied: RefCell<Vec<PageMeta>>,
}

impl MemoryMetadata {
    pub fn document_lang(&self) -> Option<String> {
        self.lang.borrow().clone()
    }

    pub fn applied(&self) -> Vec<PageMeta> {
        self.applied.borrow().clone()
    }
}

impl MetadataSink for MemoryMetadata {
    fn set_document_lang(&self, code: &str) {
        *self.lang.borrow_mut() = Some(code.to_string());
    }

    fn apply(&self, meta: &PageMeta) {
        tracing::debug!("metadata: title={:?}", meta.title);
        self.applied.borrow_mut().push(meta.clone());
    }
}
