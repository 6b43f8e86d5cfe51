//! Shared UI and client-side logic for the portfolio site.
//!
//! The portable core (language resolution, URL handling, event building,
//! visibility and performance bookkeeping) is plain Rust and testable on the
//! host. Browser access lives behind the traits in [`store`] and
//! [`analytics::Reporter`], implemented in [`platform`].

mod error;
pub use error::{PlatformError, PlatformResult};

pub mod config;
pub use config::AnalyticsConfig;

mod translations;

mod i18n;
pub use i18n::{
    keys, lookup, page_meta, t, use_i18n, use_lang, I18nProvider, Lang, PageMeta, DEFAULT_LANG,
    LANG_QUERY_PARAM, LANG_STORAGE_KEY,
};

pub mod store;
pub use store::{Environment, LangSource, LanguageStore};

pub mod url;

pub mod analytics;
pub use analytics::{Reporter, TrackedEvent, Tracker};

pub mod performance;
pub mod visibility;

pub mod platform;

mod tracking;
pub use tracking::{bootstrap_js, use_time_on_page, use_tracker, AnalyticsProvider, PageClock, TrackedSection};

mod theme;
pub use theme::PortfolioTheme;

mod navbar;
pub use navbar::Navbar;

mod hero;
pub use hero::Hero;

mod sections;
pub use sections::{About, Contact, Education, Events, Experience, Leadership, Projects, Publications, Skills};

mod footer;
pub use footer::Footer;
