use crate::api::endpoints::{PROFILE_ENDPOINT, RANK_IMAGE_BASE};
use crate::error::AppError;
use crate::query::Language;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub ratings_url: String,
    pub rank_image_url: String,
    pub language: Language,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            ratings_url: PROFILE_ENDPOINT.to_string(),
            rank_image_url: RANK_IMAGE_BASE.to_string(),
            language: Language::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let ratings_url = non_empty(&lookup, "TANKI_RATINGS_URL")?
            .unwrap_or(defaults.ratings_url);
        let rank_image_url = non_empty(&lookup, "TANKI_RANK_IMAGE_URL")?
            .unwrap_or(defaults.rank_image_url);

        let language = match non_empty(&lookup, "TANKI_LANG")? {
            Some(code) => code.parse().map_err(|_| {
                AppError::ConfigError(format!("TANKI_LANG '{}' is not a supported language", code))
            })?,
            None => defaults.language,
        };

        Ok(Config {
            ratings_url,
            rank_image_url: rank_image_url.trim_end_matches('/').to_string(),
            language,
        })
    }
}

fn non_empty<F>(lookup: &F, key: &str) -> Result<Option<String>, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if value.trim().is_empty() => {
            Err(AppError::ConfigError(format!("{} is set but empty", key)))
        }
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn unset_keys_use_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.ratings_url, PROFILE_ENDPOINT);
        assert_eq!(config.rank_image_url, RANK_IMAGE_BASE);
        assert_eq!(config.language, Language::En);
    }

    #[test]
    fn overrides_are_applied() {
        let config = config_from(&[
            ("TANKI_RATINGS_URL", "http://localhost:8080/profile/"),
            ("TANKI_RANK_IMAGE_URL", "http://localhost:8080/ranks/"),
            ("TANKI_LANG", "DE"),
        ])
        .unwrap();
        assert_eq!(config.ratings_url, "http://localhost:8080/profile/");
        assert_eq!(config.rank_image_url, "http://localhost:8080/ranks");
        assert_eq!(config.language, Language::De);
    }

    #[test]
    fn bad_language_is_a_config_error() {
        assert!(matches!(
            config_from(&[("TANKI_LANG", "fr")]),
            Err(AppError::ConfigError(_))
        ));
    }

    #[test]
    fn empty_values_are_rejected() {
        assert!(matches!(
            config_from(&[("TANKI_RATINGS_URL", "  ")]),
            Err(AppError::ConfigError(_))
        ));
    }
}
