//! Date Display Rules
//!
//! Locale-aware formatting plus the two display-only policies applied to a
//! card after its due date moves: the extension eligibility threshold and
//! the overdue / due-today status.

use chrono::{Days, NaiveDate};
use serde::Deserialize;

/// Locales with a known numeric date order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum Locale {
    /// Traditional Chinese, the page's own language
    #[default]
    ZhTw,
    ZhCn,
    Ja,
    EnUs,
    EnGb,
    De,
    Fr,
    /// Plain `YYYY-MM-DD`
    Iso,
}

impl Locale {
    /// Resolve a BCP 47 tag; unknown languages fall back to ISO order
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim().replace('_', "-").to_ascii_lowercase();
        let mut parts = tag.split('-');
        let lang = parts.next().unwrap_or_default();
        let region = parts.next().unwrap_or_default();
        match (lang, region) {
            ("zh", "cn" | "sg" | "hans") => Locale::ZhCn,
            ("zh", _) => Locale::ZhTw,
            ("ja", _) => Locale::Ja,
            ("en", "us" | "") => Locale::EnUs,
            ("en", _) => Locale::EnGb,
            ("de", _) => Locale::De,
            ("fr", _) => Locale::Fr,
            _ => Locale::Iso,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Locale::ZhTw => "zh-TW",
            Locale::ZhCn => "zh-CN",
            Locale::Ja => "ja",
            Locale::EnUs => "en-US",
            Locale::EnGb => "en-GB",
            Locale::De => "de",
            Locale::Fr => "fr",
            Locale::Iso => "iso",
        }
    }

    fn pattern(&self) -> &'static str {
        match self {
            Locale::ZhTw | Locale::ZhCn | Locale::Ja => "%Y/%m/%d",
            Locale::EnUs => "%m/%d/%Y",
            Locale::EnGb | Locale::Fr => "%d/%m/%Y",
            Locale::De => "%d.%m.%Y",
            Locale::Iso => "%Y-%m-%d",
        }
    }
}

impl From<String> for Locale {
    fn from(tag: String) -> Self {
        Locale::from_tag(&tag)
    }
}

/// Parse the server's date-only ISO form (`2025-01-15`)
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Zero-padded date in the locale's order; unparseable input comes back as-is
pub fn format_for_display(value: &str, locale: Locale) -> String {
    match parse_iso_date(value) {
        Some(date) => date.format(locale.pattern()).to_string(),
        None => value.to_string(),
    }
}

/// Whether the extend control should stay visible for a due date.
///
/// Items due more than `threshold_days` after today are not extendable here.
pub fn is_extendable(due: NaiveDate, today: NaiveDate, threshold_days: u32) -> bool {
    match today.checked_add_days(Days::new(u64::from(threshold_days))) {
        Some(limit) => due <= limit,
        None => true,
    }
}

/// Status badge shown on a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    Overdue,
    DueToday,
    /// No badge
    Upcoming,
}

impl DueStatus {
    pub fn of(due: NaiveDate, today: NaiveDate) -> Self {
        if due < today {
            DueStatus::Overdue
        } else if due == today {
            DueStatus::DueToday
        } else {
            DueStatus::Upcoming
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_per_locale() {
        assert_eq!(format_for_display("2025-01-10", Locale::ZhTw), "2025/01/10");
        assert_eq!(format_for_display("2025-01-10", Locale::EnUs), "01/10/2025");
        assert_eq!(format_for_display("2025-01-10", Locale::EnGb), "10/01/2025");
        assert_eq!(format_for_display("2025-01-10", Locale::De), "10.01.2025");
        assert_eq!(format_for_display("2025-01-10", Locale::Iso), "2025-01-10");
    }

    #[test]
    fn test_format_passes_through_garbage() {
        assert_eq!(format_for_display("soon", Locale::ZhTw), "soon");
        assert_eq!(format_for_display("", Locale::ZhTw), "");
        assert_eq!(format_for_display("2025-02-30", Locale::ZhTw), "2025-02-30");
    }

    #[test]
    fn test_locale_tags() {
        assert_eq!(Locale::from_tag("zh-TW"), Locale::ZhTw);
        assert_eq!(Locale::from_tag("zh_Hant"), Locale::ZhTw);
        assert_eq!(Locale::from_tag("zh-CN"), Locale::ZhCn);
        assert_eq!(Locale::from_tag("en"), Locale::EnUs);
        assert_eq!(Locale::from_tag("en-AU"), Locale::EnGb);
        assert_eq!(Locale::from_tag("de-AT"), Locale::De);
        assert_eq!(Locale::from_tag("pt-BR"), Locale::Iso);
    }

    #[test]
    fn test_eligibility_threshold() {
        let today = date(2025, 1, 8);
        assert!(is_extendable(date(2025, 1, 5), today, 3));
        assert!(is_extendable(date(2025, 1, 11), today, 3));
        assert!(!is_extendable(date(2025, 1, 12), today, 3));
        assert!(!is_extendable(date(2025, 1, 15), today, 3));
    }

    #[test]
    fn test_due_status() {
        let today = date(2025, 1, 8);
        assert_eq!(DueStatus::of(date(2025, 1, 7), today), DueStatus::Overdue);
        assert_eq!(DueStatus::of(today, today), DueStatus::DueToday);
        assert_eq!(DueStatus::of(date(2025, 1, 9), today), DueStatus::Upcoming);
    }
}
