use std::rc::Rc;

use crate::analytics::Tracker;
use crate::error::PlatformResult;
use crate::i18n::{self, Lang, PageMeta, DEFAULT_LANG, LANG_STORAGE_KEY};
use crate::url;

/// Durable key/value storage that survives reloads (browser local storage).
pub trait PreferenceStore {
    fn load(&self, key: &str) -> PlatformResult<Option<String>>;
    fn save(&self, key: &str, value: &str) -> PlatformResult<()>;
}

/// The page address, rewritten in place without adding history entries.
pub trait UrlLocation {
    fn href(&self) -> PlatformResult<String>;
    fn replace(&self, href: &str) -> PlatformResult<()>;
}

/// Where the document language and head metadata are written.
pub trait MetadataSink {
    fn set_document_lang(&self, code: &str);
    fn apply(&self, meta: &PageMeta);
}

/// Everything the store touches outside of its own state.
#[derive(Clone)]
pub struct Environment {
    pub storage: Rc<dyn PreferenceStore>,
    pub location: Rc<dyn UrlLocation>,
    pub metadata: Rc<dyn MetadataSink>,
}

/// Where the active language came from at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LangSource {
    Url,
    Storage,
    Default,
}

/// Single source of truth for the display language.
///
/// One instance per application root; tests build as many as they like.
pub struct LanguageStore {
    active: Lang,
    initialized: bool,
    env: Environment,
    tracker: Tracker,
}

impl LanguageStore {
    pub fn new(env: Environment, tracker: Tracker) -> Self {
        Self {
            active: DEFAULT_LANG,
            initialized: false,
            env,
            tracker,
        }
    }

    pub fn lang(&self) -> Lang {
        self.active
    }

    pub fn t(&self, key: &str) -> String {
        i18n::t(self.active, key)
    }

    /// URL parameter first, then the saved preference, then [`DEFAULT_LANG`].
    pub fn resolve(env: &Environment) -> (Lang, LangSource) {
        match env.location.href() {
            Ok(href) => {
                if let Some(lang) = url::lang_from_href(&href) {
                    return (lang, LangSource::Url);
                }
            }
            Err(e) => tracing::debug!("i18n: location unavailable: {e}"),
        }

        match env.storage.load(LANG_STORAGE_KEY) {
            Ok(Some(saved)) => {
                if let Some(lang) = Lang::from_code(&saved) {
                    return (lang, LangSource::Storage);
                }
                tracing::debug!("i18n: ignoring saved language {saved:?}");
            }
            Ok(None) => {}
            Err(e) => tracing::warn!("i18n: could not read saved language: {e}"),
        }

        (DEFAULT_LANG, LangSource::Default)
    }

    /// Resolve the startup language. Runs once; later calls return the active value.
    pub fn initialize(&mut self) -> Lang {
        if self.initialized {
            return self.active;
        }
        let (lang, source) = Self::resolve(&self.env);
        tracing::info!("i18n: starting in {lang} (from {source:?})");

        self.active = lang;
        self.initialized = true;
        self.persist();
        self.reflect();
        self.active
    }

    /// Switch language: state, storage, URL, metadata, then the tracked event.
    ///
    /// Setting the language that is already active does nothing once the
    /// store is initialized. Before that the active value is only a
    /// placeholder, so storage, URL and metadata are always written.
    pub fn set_lang(&mut self, next: Lang) {
        let was_initialized = std::mem::replace(&mut self.initialized, true);
        let changed = next != self.active;
        if was_initialized && !changed {
            tracing::debug!("i18n: {next} already active");
            return;
        }

        self.active = next;
        self.persist();
        self.sync_url();
        self.reflect();
        if changed {
            self.tracker.language_switch(next);
        }
    }

    pub fn toggle(&mut self) -> Lang {
        self.set_lang(self.active.toggled());
        self.active
    }

    fn persist(&self) {
        if let Err(e) = self.env.storage.save(LANG_STORAGE_KEY, self.active.code()) {
            tracing::warn!("i18n: language not persisted: {e}");
        }
    }

    fn sync_url(&self) {
        let href = match self.env.location.href() {
            Ok(href) => href,
            Err(e) => {
                tracing::debug!("i18n: skipping url sync: {e}");
                return;
            }
        };
        let next = url::with_lang_param(&href, self.active);
        if next == href {
            return;
        }
        if let Err(e) = self.env.location.replace(&next) {
            tracing::warn!("i18n: url not updated: {e}");
        }
    }

    fn reflect(&self) {
        self.env.metadata.set_document_lang(self.active.code());
        if let Some(meta) = i18n::page_meta(self.active) {
            self.env.metadata.apply(&meta);
        }
    }
}

impl std::fmt::Debug for LanguageStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageStore")
            .field("active", &self.active)
            .field("initialized", &self.initialized)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::testing::recording_tracker;
    use crate::platform::memory::{MemoryLocation, MemoryMetadata, MemoryStorage};

    struct Fixture {
        storage: Rc<MemoryStorage>,
        location: Rc<MemoryLocation>,
        metadata: Rc<MemoryMetadata>,
    }

    impl Fixture {
        fn new(href: &str) -> Self {
            Self {
                storage: Rc::new(MemoryStorage::default()),
                location: Rc::new(MemoryLocation::new(href)),
                metadata: Rc::new(MemoryMetadata::default()),
            }
        }

        fn env(&self) -> Environment {
            Environment {
                storage: self.storage.clone(),
                location: self.location.clone(),
                metadata: self.metadata.clone(),
            }
        }
    }

    #[test]
    fn fresh_session_uses_default() {
        let fx = Fixture::new("https://emir.dev/");
        let mut store = LanguageStore::new(fx.env(), Tracker::disabled());
        assert_eq!(store.initialize(), DEFAULT_LANG);
        assert_eq!(fx.metadata.document_lang().as_deref(), Some(DEFAULT_LANG.code()));
        assert_eq!(
            fx.storage.get(LANG_STORAGE_KEY).as_deref(),
            Some(DEFAULT_LANG.code())
        );
    }

    #[test]
    fn url_param_beats_saved_preference() {
        let fx = Fixture::new("https://emir.dev/?lang=en");
        fx.storage.insert(LANG_STORAGE_KEY, "tr");
        let (lang, source) = LanguageStore::resolve(&fx.env());
        assert_eq!((lang, source), (Lang::En, LangSource::Url));
    }

    #[test]
    fn saved_preference_beats_default() {
        let fx = Fixture::new("https://emir.dev/?lang=xx");
        fx.storage.insert(LANG_STORAGE_KEY, "tr");
        let mut store = LanguageStore::new(fx.env(), Tracker::disabled());
        assert_eq!(store.initialize(), Lang::Tr);
    }

    #[test]
    fn unrecognized_saved_value_falls_through() {
        let fx = Fixture::new("https://emir.dev/");
        fx.storage.insert(LANG_STORAGE_KEY, "klingon");
        let (lang, source) = LanguageStore::resolve(&fx.env());
        assert_eq!((lang, source), (DEFAULT_LANG, LangSource::Default));
    }

    #[test]
    fn broken_storage_and_location_still_resolve() {
        let fx = Fixture::new("https://emir.dev/");
        fx.storage.set_broken(true);
        fx.location.set_broken(true);
        let mut store = LanguageStore::new(fx.env(), Tracker::disabled());
        assert_eq!(store.initialize(), DEFAULT_LANG);
    }

    #[test]
    fn initialize_runs_once() {
        let fx = Fixture::new("https://emir.dev/?lang=tr");
        let mut store = LanguageStore::new(fx.env(), Tracker::disabled());
        assert_eq!(store.initialize(), Lang::Tr);
        fx.location.set_href("https://emir.dev/?lang=en");
        assert_eq!(store.initialize(), Lang::Tr);
    }

    #[test]
    fn initialize_reflects_deep_link_metadata() {
        let fx = Fixture::new("https://emir.dev/?lang=tr");
        let mut store = LanguageStore::new(fx.env(), Tracker::disabled());
        store.initialize();
        let meta = i18n::page_meta(Lang::Tr).unwrap();
        assert_eq!(fx.metadata.applied().last(), Some(&meta));
    }

    #[test]
    fn lookup_follows_active_language() {
        let fx = Fixture::new("https://emir.dev/");
        let mut store = LanguageStore::new(fx.env(), Tracker::disabled());
        store.set_lang(Lang::En);
        assert_eq!(store.t("nav.contact"), "Contact");
        store.set_lang(Lang::Tr);
        assert_eq!(store.t("nav.contact"), "İletişim");
        assert_eq!(store.t("nope.nothing"), "nope.nothing");
    }

    #[test]
    fn switching_to_turkish_updates_everything() {
        let fx = Fixture::new("https://emir.dev/?ref=cv#projects");
        fx.storage.insert(LANG_STORAGE_KEY, "en");
        let (tracker, reporter) = recording_tracker();
        let mut store = LanguageStore::new(fx.env(), tracker);
        store.initialize();

        store.set_lang(Lang::Tr);

        assert_eq!(store.lang(), Lang::Tr);
        assert_eq!(fx.storage.get(LANG_STORAGE_KEY).as_deref(), Some("tr"));
        assert_eq!(fx.location.current(), "https://emir.dev/?ref=cv&lang=tr#projects");
        assert_eq!(fx.location.replacements(), 1);
        assert_eq!(fx.metadata.document_lang().as_deref(), Some("tr"));
        assert_eq!(
            fx.metadata.applied().last().map(|m| m.title.clone()),
            Some(i18n::t(Lang::Tr, "meta.title"))
        );

        let events = reporter.events.borrow();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].action, "language_switch");
        assert_eq!(events[0].label.as_deref(), Some("tr"));
    }

    #[test]
    fn setting_same_language_twice_is_idempotent() {
        let fx = Fixture::new("https://emir.dev/");
        let (tracker, reporter) = recording_tracker();
        let mut store = LanguageStore::new(fx.env(), tracker);
        store.initialize();

        store.set_lang(Lang::Tr);
        store.set_lang(Lang::Tr);

        assert_eq!(store.lang(), Lang::Tr);
        let labels: Vec<_> = reporter
            .events
            .borrow()
            .iter()
            .map(|e| e.label.clone())
            .collect();
        assert_eq!(labels, vec![Some("tr".to_string())]);
        assert_eq!(fx.location.replacements(), 1);
    }

    #[test]
    fn choice_survives_a_new_session() {
        let fx = Fixture::new("https://emir.dev/");
        let mut first = LanguageStore::new(fx.env(), Tracker::disabled());
        first.initialize();
        first.set_lang(Lang::Tr);

        let next_page = Fixture {
            storage: fx.storage.clone(),
            location: Rc::new(MemoryLocation::new("https://emir.dev/")),
            metadata: Rc::new(MemoryMetadata::default()),
        };
        let mut second = LanguageStore::new(next_page.env(), Tracker::disabled());
        assert_eq!(second.initialize(), Lang::Tr);
    }

    #[test]
    fn storage_failure_does_not_block_switching() {
        let fx = Fixture::new("https://emir.dev/");
        fx.storage.set_broken(true);
        let (tracker, reporter) = recording_tracker();
        let mut store = LanguageStore::new(fx.env(), tracker);

        store.set_lang(Lang::Tr);

        assert_eq!(store.lang(), Lang::Tr);
        assert_eq!(fx.location.current(), "https://emir.dev/?lang=tr");
        assert_eq!(reporter.actions(), vec!["language_switch"]);
    }

    #[test]
    fn url_failure_does_not_block_switching() {
        let fx = Fixture::new("https://emir.dev/");
        fx.location.set_broken(true);
        let mut store = LanguageStore::new(fx.env(), Tracker::disabled());
        store.set_lang(Lang::Tr);
        assert_eq!(store.lang(), Lang::Tr);
        assert_eq!(fx.storage.get(LANG_STORAGE_KEY).as_deref(), Some("tr"));
    }

    #[test]
    fn explicit_choice_is_not_clobbered_by_late_initialize() {
        let fx = Fixture::new("https://emir.dev/?lang=en");
        let mut store = LanguageStore::new(fx.env(), Tracker::disabled());
        store.set_lang(Lang::Tr);
        assert_eq!(store.initialize(), Lang::Tr);
    }

    #[test]
    fn choosing_default_before_initialize_still_syncs_everything() {
        let fx = Fixture::new("https://emir.dev/?lang=tr");
        let mut store = LanguageStore::new(fx.env(), Tracker::disabled());

        store.set_lang(Lang::En);
        assert_eq!(store.initialize(), Lang::En);

        assert_eq!(fx.location.current(), "https://emir.dev/?lang=en");
        assert_eq!(fx.storage.get(LANG_STORAGE_KEY).as_deref(), Some("en"));
        assert_eq!(fx.metadata.document_lang().as_deref(), Some("en"));
        assert_eq!(
            fx.metadata.applied().last(),
            i18n::page_meta(Lang::En).as_ref()
        );
    }

    #[test]
    fn toggle_flips_and_returns_new_language() {
        let fx = Fixture::new("https://emir.dev/");
        let mut store = LanguageStore::new(fx.env(), Tracker::disabled());
        store.initialize();
        assert_eq!(store.toggle(), DEFAULT_LANG.toggled());
        assert_eq!(store.toggle(), DEFAULT_LANG);
    }

    #[test]
    fn stores_are_isolated() {
        let a = Fixture::new("https://emir.dev/");
        let b = Fixture::new("https://emir.dev/");
        let mut first = LanguageStore::new(a.env(), Tracker::disabled());
        let mut second = LanguageStore::new(b.env(), Tracker::disabled());
        first.set_lang(Lang::Tr);
        second.initialize();
        assert_eq!(second.lang(), DEFAULT_LANG);
        assert_eq!(b.storage.get(LANG_STORAGE_KEY).as_deref(), Some(DEFAULT_LANG.code()));
    }
}
