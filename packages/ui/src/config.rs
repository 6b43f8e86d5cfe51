/// Analytics integration settings.
///
/// The wasm bundle cannot read the process environment, so the values are
/// baked in at build time; see [`AnalyticsConfig::from_build_env`].
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsConfig {
    /// Google Analytics 4 measurement id (`G-XXXX`). `None` disables gtag.
    pub measurement_id: Option<String>,
    /// Google Tag Manager container id (`GTM-XXXX`). `None` disables the data layer loader.
    pub gtm_id: Option<String>,
    pub conversion_currency: String,
    pub slow_resource_ms: f64,
}

pub const DEFAULT_CURRENCY: &str = "TRY";
pub const DEFAULT_SLOW_RESOURCE_MS: f64 = 1000.0;

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            measurement_id: None,
            gtm_id: None,
            conversion_currency: DEFAULT_CURRENCY.to_string(),
            slow_resource_ms: DEFAULT_SLOW_RESOURCE_MS,
        }
    }
}

impl AnalyticsConfig {
    /// Values captured from `GA_MEASUREMENT_ID`, `GTM_ID`, `CONVERSION_CURRENCY`
    /// and `SLOW_RESOURCE_MS` when the crate was compiled.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("GA_MEASUREMENT_ID"),
            option_env!("GTM_ID"),
            option_env!("CONVERSION_CURRENCY"),
            option_env!("SLOW_RESOURCE_MS"),
        )
    }

    /// Same variables read from the running process (server startup logging).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let (ga, gtm, currency, slow) = (
            var("GA_MEASUREMENT_ID"),
            var("GTM_ID"),
            var("CONVERSION_CURRENCY"),
            var("SLOW_RESOURCE_MS"),
        );
        Self::from_values(ga.as_deref(), gtm.as_deref(), currency.as_deref(), slow.as_deref())
    }

    pub fn from_values(
        measurement_id: Option<&str>,
        gtm_id: Option<&str>,
        currency: Option<&str>,
        slow_resource_ms: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            measurement_id: measurement_id.and_then(tag_id),
            gtm_id: gtm_id.and_then(tag_id),
            conversion_currency: currency
                .map(str::trim)
                .filter(|c| c.len() == 3 && c.chars().all(|ch| ch.is_ascii_alphabetic()))
                .map(str::to_ascii_uppercase)
                .unwrap_or(defaults.conversion_currency),
            slow_resource_ms: slow_resource_ms
                .and_then(|v| v.trim().parse::<f64>().ok())
                .filter(|v| v.is_finite() && *v > 0.0)
                .unwrap_or(defaults.slow_resource_ms),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.measurement_id.is_some() || self.gtm_id.is_some()
    }
}

/// Tag ids end up inside an injected script, so only `[A-Za-z0-9-]` is accepted.
fn tag_id(raw: &str) -> Option<String> {
    let id = raw.trim();
    if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return None;
    }
    Some(id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_disable_analytics() {
        let cfg = AnalyticsConfig::from_values(None, None, None, None);
        assert_eq!(cfg, AnalyticsConfig::default());
        assert!(!cfg.is_enabled());
        assert_eq!(cfg.conversion_currency, "TRY");
        assert_eq!(cfg.slow_resource_ms, 1000.0);
    }

    #[test]
    fn accepts_well_formed_ids() {
        let cfg = AnalyticsConfig::from_values(Some(" G-ABC123 "), Some("GTM-54DN"), None, None);
        assert_eq!(cfg.measurement_id.as_deref(), Some("G-ABC123"));
        assert_eq!(cfg.gtm_id.as_deref(), Some("GTM-54DN"));
        assert!(cfg.is_enabled());
    }

    #[test]
    fn rejects_ids_that_could_break_the_script() {
        let cfg = AnalyticsConfig::from_values(Some("G-1');alert(1)//"), Some(""), None, None);
        assert_eq!(cfg.measurement_id, None);
        assert_eq!(cfg.gtm_id, None);
    }

    #[test]
    fn invalid_numbers_and_currencies_fall_back() {
        let cfg = AnalyticsConfig::from_values(None, None, Some("euro"), Some("-5"));
        assert_eq!(cfg.conversion_currency, "TRY");
        assert_eq!(cfg.slow_resource_ms, 1000.0);

        let cfg = AnalyticsConfig::from_values(None, None, Some("eur"), Some("2500"));
        assert_eq!(cfg.conversion_currency, "EUR");
        assert_eq!(cfg.slow_resource_ms, 2500.0);
    }

    #[test]
    fn lookup_reads_each_variable_by_name() {
        let vars: std::collections::HashMap<&str, &str> = [
            ("GA_MEASUREMENT_ID", "G-LOOKUP"),
            ("GTM_ID", "GTM-TEST1"),
            ("CONVERSION_CURRENCY", "usd"),
            ("SLOW_RESOURCE_MS", "750"),
        ]
        .into_iter()
        .collect();
        let cfg = AnalyticsConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(cfg.measurement_id.as_deref(), Some("G-LOOKUP"));
        assert_eq!(cfg.gtm_id.as_deref(), Some("GTM-TEST1"));
        assert_eq!(cfg.conversion_currency, "USD");
        assert_eq!(cfg.slow_resource_ms, 750.0);

        assert_eq!(AnalyticsConfig::from_lookup(|_| None), AnalyticsConfig::default());
    }
}
