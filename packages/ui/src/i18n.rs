use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analytics::Tracker;
use crate::platform;
use crate::store::LanguageStore;
use crate::translations;

/// Language shown to a fresh visitor with no URL override and no saved choice.
pub const DEFAULT_LANG: Lang = Lang::En;

/// Query parameter carrying the language code (`?lang=tr`).
pub const LANG_QUERY_PARAM: &str = "lang";

/// Local storage key holding the last selected language code.
pub const LANG_STORAGE_KEY: &str = "language";

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Tr,
    En,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::Tr, Lang::En];

    pub fn code(self) -> &'static str {
        match self {
            Lang::Tr => "tr",
            Lang::En => "en",
        }
    }

    /// Only the bare codes are recognized; anything else is treated as absent.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "tr" => Some(Lang::Tr),
            "en" => Some(Lang::En),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Lang::Tr => Lang::En,
            Lang::En => Lang::Tr,
        }
    }

    /// Native name of the language, e.g. "Türkçe".
    pub fn label(self) -> String {
        t(self, "lang.name")
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

fn table(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::Tr => translations::TR,
        Lang::En => translations::EN,
    }
}

/// Raw table lookup. Empty entries count as missing.
pub fn lookup(lang: Lang, key: &str) -> Option<&'static str> {
    table(lang)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .filter(|v| !v.is_empty())
}

/// Translate a key for a given language. Missing keys render as the key itself.
pub fn t(lang: Lang, key: &str) -> String {
    match lookup(lang, key) {
        Some(text) => text.to_string(),
        None => {
            tracing::debug!("i18n: missing key {key} for {lang}");
            key.to_string()
        }
    }
}

/// Every key defined for `lang`, in table order.
pub fn keys(lang: Lang) -> impl Iterator<Item = &'static str> {
    table(lang).iter().map(|(k, _)| *k)
}

/// Title and description written into the document head on language change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

/// Metadata for `lang`, if its table defines both `meta.title` and `meta.description`.
pub fn page_meta(lang: Lang) -> Option<PageMeta> {
    let title = lookup(lang, "meta.title")?;
    let description = lookup(lang, "meta.description")?;
    Some(PageMeta {
        title: title.to_string(),
        description: description.to_string(),
    })
}

/// Provide `Signal<LanguageStore>` to the component tree.
///
/// The store starts on [`DEFAULT_LANG`] and resolves the real language after
/// mount, so server-rendered markup and the first client render agree.
#[component]
pub fn I18nProvider(children: Element) -> Element {
    let tracker = try_use_context::<Tracker>().unwrap_or_else(Tracker::disabled);
    let mut store = use_signal(move || LanguageStore::new(platform::environment(), tracker));
    use_context_provider(|| store);

    use_effect(move || {
        store.write().initialize();
    });

    rsx! { {children} }
}

pub fn use_i18n() -> Signal<LanguageStore> {
    if let Some(sig) = try_use_context::<Signal<LanguageStore>>() {
        return sig;
    }

    // Fallback for SSR or mis-ordered providers to avoid panics in production.
    tracing::warn!("i18n: missing I18nProvider context, using a detached store");
    use_signal(|| LanguageStore::new(platform::environment(), Tracker::disabled()))
}

/// Active language; reading it subscribes the calling component to changes.
pub fn use_lang() -> Lang {
    use_i18n().read().lang()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn translates_per_language() {
        assert_eq!(t(Lang::Tr, "nav.about"), "Hakkında");
        assert_eq!(t(Lang::En, "nav.about"), "About");
    }

    #[test]
    fn missing_key_returns_key() {
        assert_eq!(t(Lang::En, "missing.key"), "missing.key");
        assert_eq!(t(Lang::Tr, "missing.key"), "missing.key");
        assert_eq!(t(Lang::Tr, ""), "");
    }

    #[test]
    fn tables_share_the_same_keys() {
        let tr: BTreeSet<_> = keys(Lang::Tr).collect();
        let en: BTreeSet<_> = keys(Lang::En).collect();
        let only_tr: Vec<_> = tr.difference(&en).collect();
        let only_en: Vec<_> = en.difference(&tr).collect();
        assert!(only_tr.is_empty(), "untranslated in en: {only_tr:?}");
        assert!(only_en.is_empty(), "untranslated in tr: {only_en:?}");
    }

    #[test]
    fn tables_have_no_duplicate_keys() {
        for lang in Lang::ALL {
            let all: Vec<_> = keys(lang).collect();
            let unique: BTreeSet<_> = all.iter().collect();
            assert_eq!(all.len(), unique.len(), "duplicate key in {lang}");
        }
    }

    #[test]
    fn every_key_resolves_to_real_text() {
        for lang in Lang::ALL {
            for key in keys(lang) {
                let text = t(lang, key);
                assert!(!text.is_empty(), "{lang}:{key} is empty");
                assert_ne!(text, key, "{lang}:{key} falls back to its key");
            }
        }
    }

    #[test]
    fn from_code_accepts_only_known_codes() {
        assert_eq!(Lang::from_code("tr"), Some(Lang::Tr));
        assert_eq!(Lang::from_code(" EN "), Some(Lang::En));
        assert_eq!(Lang::from_code("en-US"), None);
        assert_eq!(Lang::from_code("de"), None);
        assert_eq!(Lang::from_code(""), None);
    }

    #[test]
    fn toggled_flips_between_variants() {
        assert_eq!(Lang::Tr.toggled(), Lang::En);
        assert_eq!(Lang::En.toggled(), Lang::Tr);
        assert_eq!(Lang::En.label(), "English");
        assert_eq!(Lang::Tr.label(), "Türkçe");
    }

    #[test]
    fn page_meta_is_defined_for_both_languages() {
        let tr = page_meta(Lang::Tr).expect("tr meta");
        let en = page_meta(Lang::En).expect("en meta");
        assert_ne!(tr.title, en.title);
        assert!(!tr.description.is_empty());
    }

    #[test]
    fn lang_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Lang::Tr).unwrap(), "\"tr\"");
        let parsed: Lang = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Lang::En);
    }
}
