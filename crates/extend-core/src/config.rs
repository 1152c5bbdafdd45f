//! Controller Configuration
//!
//! Every field has a default, so an empty `{}` (or no config at all) gives
//! the stock behavior.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Deserialize;

use crate::dates::Locale;
use crate::error::{ExtendError, ExtendResult};
use crate::validation::MAX_EXTENSION_DAYS;

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtendConfig {
    pub locale: Locale,
    /// Prefix of the to-do endpoints
    pub base_path: String,
    pub max_extension_days: u32,
    /// Extend control hides once the due date is further away than this
    pub eligibility_threshold_days: u32,
    pub notice_duration_ms: u32,
    /// Delay before the full-page reload fallback
    pub reload_delay_ms: u32,
    pub highlight_duration_ms: u32,
}

impl Default for ExtendConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            base_path: "/todos".to_string(),
            max_extension_days: MAX_EXTENSION_DAYS,
            eligibility_threshold_days: 3,
            notice_duration_ms: 3000,
            reload_delay_ms: 1000,
            highlight_duration_ms: 1000,
        }
    }
}

impl ExtendConfig {
    pub fn from_json(raw: &str) -> ExtendResult<Self> {
        let config: Self =
            serde_json::from_str(raw).map_err(|e| ExtendError::Config(e.to_string()))?;
        if config.max_extension_days == 0 {
            return Err(ExtendError::Config("maxExtensionDays must be at least 1".to_string()));
        }
        Ok(config)
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn preview_url(&self, item_id: &str, days: u32) -> String {
        format!("{}/extend/preview?days={}", self.item_path(item_id), days)
    }

    pub fn extend_url(&self, item_id: &str) -> String {
        format!("{}/extend", self.item_path(item_id))
    }

    fn item_path(&self, item_id: &str) -> String {
        format!(
            "{}/{}",
            self.base_path.trim_end_matches('/'),
            utf8_percent_encode(item_id, PATH_SEGMENT)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_from_empty_object() {
        assert_eq!(ExtendConfig::from_json("{}").unwrap(), ExtendConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = ExtendConfig::from_json(
            r#"{"locale":"en-GB","basePath":"/app/todos/","noticeDurationMs":5000}"#,
        )
        .unwrap();
        assert_eq!(config.locale, Locale::EnGb);
        assert_eq!(config.notice_duration_ms, 5000);
        assert_eq!(config.max_extension_days, 365);
        assert_eq!(config.extend_url("7"), "/app/todos/7/extend");
    }

    #[test]
    fn test_rejects_bad_config() {
        assert!(matches!(ExtendConfig::from_json("not json"), Err(ExtendError::Config(_))));
        assert!(matches!(
            ExtendConfig::from_json(r#"{"maxExtensionDays":0}"#),
            Err(ExtendError::Config(_))
        ));
    }

    #[test]
    fn test_urls() {
        let config = ExtendConfig::default();
        assert_eq!(config.preview_url("7", 5), "/todos/7/extend/preview?days=5");
        assert_eq!(config.extend_url("7"), "/todos/7/extend");
        assert_eq!(config.extend_url("a/b c"), "/todos/a%2Fb%20c/extend");
    }
}
