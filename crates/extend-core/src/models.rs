//! Wire Models
//!
//! Data structures exchanged with the server and read from the page.

use serde::{Deserialize, Serialize};

use crate::validation::MAX_EXTENSION_DAYS;

/// POST body for `/todos/{id}/extend`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendRequest {
    pub todo_id: i64,
    pub extension_days: u32,
}

impl ExtendRequest {
    pub fn new(todo_id: i64, extension_days: u32) -> Self {
        Self {
            todo_id,
            extension_days,
        }
    }

    /// Within the bounds the server accepts
    pub fn is_valid(&self) -> bool {
        (1..=MAX_EXTENSION_DAYS).contains(&self.extension_days)
    }
}

/// Reply to an extend request
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub new_due_date: Option<String>,
    #[serde(default)]
    pub original_due_date: Option<String>,
    #[serde(default)]
    pub total_extension_days: Option<i64>,
    #[serde(default)]
    pub todo_id: Option<i64>,
}

/// Reply to a preview query (nothing is persisted)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewResponse {
    pub new_due_date: String,
    #[serde(default)]
    pub current_due_date: Option<String>,
    #[serde(default)]
    pub extension_days: Option<i64>,
}

/// JSON payload of a non-2xx response.
///
/// The preview endpoint fills `error`, the extend endpoint fills `message`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn error_text(&self) -> Option<&str> {
        non_empty(self.error.as_deref())
    }

    pub fn message_text(&self) -> Option<&str> {
        non_empty(self.message.as_deref())
    }
}

/// Context carried by an extend button's `data-*` attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtendTrigger {
    pub item_id: String,
    pub title: String,
    pub current_due_date: String,
}

impl ExtendTrigger {
    /// Returns `None` when the button has no usable `data-todo-id`
    pub fn from_attributes(
        item_id: Option<String>,
        title: Option<String>,
        current_due_date: Option<String>,
    ) -> Option<Self> {
        let item_id = item_id.map(|id| id.trim().to_string()).filter(|id| !id.is_empty())?;
        Some(Self {
            item_id,
            title: title.unwrap_or_default(),
            current_due_date: current_due_date.unwrap_or_default(),
        })
    }
}

/// Header name and token published in the page's `_csrf` meta tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrfToken {
    pub header: String,
    pub token: String,
}

impl CsrfToken {
    /// Both tags must be present and non-empty
    pub fn from_meta(header: Option<String>, token: Option<String>) -> Option<Self> {
        let header = header.filter(|h| !h.trim().is_empty())?;
        let token = token.filter(|t| !t.is_empty())?;
        Some(Self { header, token })
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_camel_case() {
        let json = serde_json::to_string(&ExtendRequest::new(7, 5)).unwrap();
        assert_eq!(json, r#"{"todoId":7,"extensionDays":5}"#);
    }

    #[test]
    fn test_request_bounds() {
        assert!(ExtendRequest::new(1, 1).is_valid());
        assert!(ExtendRequest::new(1, 365).is_valid());
        assert!(!ExtendRequest::new(1, 0).is_valid());
        assert!(!ExtendRequest::new(1, 366).is_valid());
    }

    #[test]
    fn test_response_tolerates_missing_fields() {
        let resp: ExtendResponse =
            serde_json::from_str(r#"{"success":true,"newDueDate":"2025-01-15"}"#).unwrap();
        assert!(resp.success);
        assert_eq!(resp.new_due_date.as_deref(), Some("2025-01-15"));
        assert_eq!(resp.message, None);

        let full: ExtendResponse = serde_json::from_str(
            r#"{
                "success": true,
                "message": "ok",
                "newDueDate": "2025-01-15",
                "originalDueDate": "2025-01-10",
                "totalExtensionDays": 5,
                "todoId": 7
            }"#,
        )
        .unwrap();
        assert_eq!(full.total_extension_days, Some(5));
        assert_eq!(full.todo_id, Some(7));
    }

    #[test]
    fn test_error_body_ignores_blank_text() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"error":"  ","message":"nope","status":400}"#).unwrap();
        assert_eq!(body.error_text(), None);
        assert_eq!(body.message_text(), Some("nope"));
    }

    #[test]
    fn test_trigger_requires_id() {
        assert!(ExtendTrigger::from_attributes(None, Some("A".into()), None).is_none());
        assert!(ExtendTrigger::from_attributes(Some(" ".into()), None, None).is_none());

        let trigger = ExtendTrigger::from_attributes(
            Some("7".into()),
            Some("Task A".into()),
            Some("2025-01-10".into()),
        )
        .unwrap();
        assert_eq!(trigger.item_id, "7");
        assert_eq!(trigger.current_due_date, "2025-01-10");
    }

    #[test]
    fn test_csrf_needs_both_tags() {
        assert!(CsrfToken::from_meta(Some("X-CSRF-TOKEN".into()), None).is_none());
        assert!(CsrfToken::from_meta(None, Some("abc".into())).is_none());
        assert!(CsrfToken::from_meta(Some("".into()), Some("abc".into())).is_none());
        assert_eq!(
            CsrfToken::from_meta(Some("X-CSRF-TOKEN".into()), Some("abc".into())),
            Some(CsrfToken {
                header: "X-CSRF-TOKEN".into(),
                token: "abc".into(),
            })
        );
    }
}
