//! View Adapter
//!
//! Everything the controller does to the page goes through this trait.
//! The browser implementation lives in the frontend crate; tests use an
//! in-memory recorder.

use crate::dates::DueStatus;
use crate::models::CsrfToken;

pub trait ExtensionView {
    // ---- modal ----

    fn set_title(&self, title: &str);
    fn set_current_due_date(&self, text: &str);
    /// Returns false when the modal element is missing
    fn show_modal(&self) -> bool;
    fn hide_modal(&self);

    // ---- day-count input ----

    fn day_input(&self) -> Option<String>;
    fn set_day_input(&self, value: &str);
    fn set_day_input_invalid(&self, invalid: bool);
    /// Highlight the quick-select button for `days`; `None` clears all
    fn set_quick_select(&self, days: Option<&str>);

    // ---- preview / error ----

    /// `Some` shows the date and its helper text, `None` clears both
    fn set_preview(&self, text: Option<&str>);
    /// Returns false when the error elements are missing
    fn show_error(&self, message: &str) -> bool;
    fn clear_error(&self);

    // ---- confirm ----

    /// Busy disables the control and shows `label`; idle restores it
    fn set_confirm_busy(&self, busy: bool, label: &str);
    fn csrf_token(&self) -> Option<CsrfToken>;

    // ---- item cards ----

    fn has_card(&self, item_id: &str) -> bool;
    fn set_card_due_date(&self, item_id: &str, display: &str, iso: &str);
    fn set_extend_visible(&self, item_id: &str, visible: bool);
    /// Replaces any overdue / due-today badge; `Upcoming` just removes it
    fn set_status_badge(&self, item_id: &str, status: DueStatus);
    fn highlight_card(&self, item_id: &str, duration_ms: u32);

    // ---- page ----

    fn show_notice(&self, message: &str, dismiss_after_ms: u32);
    fn schedule_reload(&self, delay_ms: u32);
    fn alert(&self, message: &str);
}
