use std::time::Duration;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use crate::i18n::Locale;

// rental front-end configuration
//
// the search thresholds live here so that the search form and the autocomplete agree on them
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct RentConfig {
    #[serde(default)]
    pub default_locale: Locale,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    // scheme and host of the rental api, without a trailing path
    pub base_url: String,

    // requests that take longer than this surface as failures
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: String::from(api::DEFAULT_API_BASE_URL),
            timeout_secs: 20,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct SearchConfig {
    // shortest location text that triggers a lookup or passes validation
    pub min_query_len: usize,

    // shortest allowed rental
    pub min_booking_minutes: i64,

    // initial pickup and drop-off, relative to today
    pub pickup_offset_days: i64,
    pub pickup_hour: u32,
    pub dropoff_offset_days: i64,
    pub dropoff_hour: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            min_query_len: 3,
            min_booking_minutes: 60,
            pickup_offset_days: 1,
            pickup_hour: 10,
            dropoff_offset_days: 2,
            dropoff_hour: 18,
        }
    }
}

impl RentConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }

    pub fn min_booking_duration(&self) -> TimeDelta {
        TimeDelta::minutes(self.search.min_booking_minutes)
    }
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    config: RentConfig,
}

#[instrument(level=Level::DEBUG, skip(doc))]
pub fn parse_config(doc: &str) -> anyhow::Result<RentConfig> {
    debug!("parsing config document");

    let data: TomlConfigFile = toml::from_str(doc)?;

    if data.config.search.min_query_len == 0 {
        return Err(anyhow::Error::msg("search.min_query_len must be positive"));
    }

    if data.config.search.min_booking_minutes <= 0 {
        return Err(anyhow::Error::msg("search.min_booking_minutes must be positive"));
    }

    Ok(data.config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_observed_thresholds() {
        let config = RentConfig::default();

        assert_eq!(config.search.min_query_len, 3);
        assert_eq!(config.min_booking_duration(), TimeDelta::hours(1));
        assert_eq!(config.request_timeout(), Duration::from_secs(20));
        assert_eq!(config.default_locale, Locale::En);
    }

    #[test]
    fn partial_documents_fill_in_defaults() {
        let config = parse_config(
            r#"
            [config]
            default_locale = "de"

            [config.search]
            min_booking_minutes = 120
            "#,
        )
        .unwrap();

        assert_eq!(config.default_locale, Locale::De);
        assert_eq!(config.search.min_booking_minutes, 120);
        assert_eq!(config.search.min_query_len, 3);
        assert_eq!(config.api, ApiConfig::default());
    }

    #[test]
    fn partial_api_table_keeps_the_default_timeout() {
        let config = parse_config(
            r#"
            [config.api]
            base_url = "https://staging.rent.example"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "https://staging.rent.example");
        assert_eq!(config.request_timeout(), Duration::from_secs(20));
    }

    #[test]
    fn zero_thresholds_are_rejected() {
        let err = parse_config(
            r#"
            [config.search]
            min_query_len = 0
            "#,
        );

        assert!(err.is_err());
    }

    #[test]
    fn missing_config_table_is_an_error() {
        assert!(parse_config("").is_err());
    }
}
