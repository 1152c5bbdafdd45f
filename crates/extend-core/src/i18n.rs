//! User-facing Text

use crate::dates::Locale;
use crate::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub invalid_day_count: &'static str,
    pub not_positive: &'static str,
    /// `{max}` is substituted
    pub exceeds_maximum: &'static str,
    pub preview_failed: &'static str,
    /// Server answered but refused the extension
    pub extend_failed: &'static str,
    /// Request did not go through
    pub extend_unavailable: &'static str,
    /// The card's id cannot be sent to the server
    pub invalid_item: &'static str,
    pub extend_succeeded: &'static str,
    pub processing: &'static str,
    pub overdue_badge: &'static str,
    pub due_today_badge: &'static str,
}

pub const ZH_TW: Messages = Messages {
    invalid_day_count: "請輸入有效的延期天數",
    not_positive: "延期天數必須為正數",
    exceeds_maximum: "延期天數不能超過{max}天",
    preview_failed: "預覽失敗，請檢查輸入的天數",
    extend_failed: "延期失敗",
    extend_unavailable: "延期失敗，請稍後再試",
    invalid_item: "無法識別此待辦事項，請重新整理頁面",
    extend_succeeded: "延期成功！到期日已更新",
    processing: "處理中...",
    overdue_badge: "已逾期",
    due_today_badge: "今日到期",
};

pub const EN: Messages = Messages {
    invalid_day_count: "Please enter a valid number of days",
    not_positive: "The number of days must be positive",
    exceeds_maximum: "The number of days cannot exceed {max}",
    preview_failed: "Preview failed, please check the number of days",
    extend_failed: "Extension failed",
    extend_unavailable: "Extension failed, please try again later",
    invalid_item: "This item could not be identified, please reload the page",
    extend_succeeded: "Extended! The due date has been updated",
    processing: "Processing...",
    overdue_badge: "Overdue",
    due_today_badge: "Due today",
};

/// Every table, for matching text the server may have rendered in any of them
pub const ALL: [&Messages; 2] = [&ZH_TW, &EN];

impl Messages {
    pub fn for_locale(locale: Locale) -> &'static Messages {
        match locale {
            Locale::ZhTw | Locale::ZhCn => &ZH_TW,
            _ => &EN,
        }
    }

    pub fn validation(&self, err: &ValidationError) -> String {
        match err {
            ValidationError::InvalidDayCount => self.invalid_day_count.to_string(),
            ValidationError::NotPositive => self.not_positive.to_string(),
            ValidationError::ExceedsMaximum { max } => {
                self.exceeds_maximum.replace("{max}", &max.to_string())
            }
        }
    }

    /// Whether `text` is an overdue or due-today badge in any language.
    ///
    /// Cards are rendered by the server, whose language need not match the
    /// page's `lang`.
    pub fn is_status_badge(text: &str) -> bool {
        ALL.iter()
            .flat_map(|m| [m.overdue_badge, m.due_today_badge])
            .any(|label| text.contains(label))
    }
}
