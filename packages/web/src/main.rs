use dioxus::prelude::*;
use std::env;

use views::Home;

mod views;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    install_panic_hook();
    #[cfg(feature = "server")]
    init_tracing();
    log_runtime_config();
    dioxus::launch(App);
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {info}");
    }));
}

#[cfg(feature = "server")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // dioxus sets up its logger at launch and keeps this subscriber if one is set
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn log_runtime_config() {
    let ip = env::var("IP").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    tracing::info!("startup: IP={ip} PORT={port}");

    let baked = ui::AnalyticsConfig::from_build_env();
    let runtime = ui::AnalyticsConfig::from_env();
    tracing::info!(
        "startup: analytics ga={} gtm={} currency={} slow_resource_ms={}",
        baked.measurement_id.as_deref().unwrap_or("-"),
        baked.gtm_id.as_deref().unwrap_or("-"),
        baked.conversion_currency,
        baked.slow_resource_ms,
    );
    log_missing_envs(
        "analytics",
        &[
            ("GA_MEASUREMENT_ID", baked.measurement_id.is_some()),
            ("GTM_ID", baked.gtm_id.is_some()),
        ],
    );

    if runtime.is_enabled() && runtime != baked {
        tracing::warn!("startup: analytics envs differ from the build; rebuild the client bundle to apply them");
    }
}

/// Analytics ids are compiled into the bundle, so presence is judged on the build values.
fn log_missing_envs(group: &str, keys: &[(&str, bool)]) {
    let missing = missing_keys(keys);
    if missing.is_empty() {
        return;
    }

    tracing::warn!(
        "startup: missing {group} envs: {} (tracking disabled for those)",
        missing.join(", ")
    );
}

fn missing_keys<'a>(keys: &[(&'a str, bool)]) -> Vec<&'a str> {
    keys.iter()
        .filter(|(_, present)| !present)
        .map(|(key, _)| *key)
        .collect()
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::PortfolioTheme {}
        ui::AnalyticsProvider {
            ui::I18nProvider {
                ui::Navbar {}
                Home {}
                ui::Footer {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_only_unset_keys() {
        let missing = missing_keys(&[("A", false), ("B", true), ("C", false)]);
        assert_eq!(missing, vec!["A", "C"]);
    }
}
