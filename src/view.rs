//! DOM View
//!
//! `ExtensionView` over the server-rendered page and its Bootstrap modal.

use std::cell::RefCell;

use extend_core::{CsrfToken, DueStatus, ExtensionView, Messages};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement, NodeList, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::components::show_success_notice;
use crate::modal;

pub mod ids {
    pub const MODAL: &str = "extendModal";
    pub const TITLE: &str = "todoTitle";
    pub const CURRENT_DUE_DATE: &str = "currentDueDate";
    pub const DAYS_INPUT: &str = "extensionDays";
    pub const NEW_DUE_DATE: &str = "newDueDate";
    pub const PREVIEW_HELP: &str = "datePreviewHelp";
    pub const ERROR_BOX: &str = "errorMessage";
    pub const ERROR_TEXT: &str = "errorText";
    pub const CONFIRM: &str = "confirmExtend";
}

pub mod classes {
    pub const EXTEND_BUTTON: &str = ".extend-btn";
    pub const QUICK_SELECT: &str = "quick-select";
    pub const TODO_CARD: &str = ".todo-item";
    pub const DUE_DATE_DISPLAY: &str = ".due-date-display";
    pub const BADGE: &str = ".badge";
    pub const TIME_INFO: &str = ".d-flex.flex-wrap.gap-3";
    pub const INVALID: &str = "is-invalid";
    pub const ACTIVE: &str = "active";
}

pub mod attrs {
    pub const TODO_ID: &str = "data-todo-id";
    pub const TODO_TITLE: &str = "data-todo-title";
    pub const CURRENT_DUE_DATE: &str = "data-current-due-date";
    pub const DAYS: &str = "data-days";
}

fn elements(list: Result<NodeList, wasm_bindgen::JsValue>) -> Vec<Element> {
    let Ok(list) = list else { return Vec::new() };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn set_display(element: &Element, display: &str) {
    if let Some(el) = element.dyn_ref::<HtmlElement>() {
        let _ = el.style().set_property("display", display);
    }
}

pub struct DomView {
    document: Document,
    modal: Element,
    messages: &'static Messages,
    /// Confirm button content saved while busy
    confirm_html: RefCell<Option<String>>,
}

impl DomView {
    pub fn new(document: Document, modal: Element, messages: &'static Messages) -> Self {
        Self {
            document,
            modal,
            messages,
            confirm_html: RefCell::new(None),
        }
    }

    fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn set_text(&self, id: &str, text: &str) {
        match self.by_id(id) {
            Some(el) => el.set_text_content(Some(text)),
            None => tracing::warn!(id, "element not found"),
        }
    }

    fn days_input(&self) -> Option<HtmlInputElement> {
        self.by_id(ids::DAYS_INPUT)?.dyn_into().ok()
    }

    /// The `.todo-item` card holding an element tagged with this id
    fn card(&self, item_id: &str) -> Option<Element> {
        let selector = format!("[{}]", attrs::TODO_ID);
        elements(self.document.query_selector_all(&selector))
            .into_iter()
            .filter(|el| el.get_attribute(attrs::TODO_ID).as_deref() == Some(item_id))
            .find_map(|el| el.closest(classes::TODO_CARD).ok().flatten())
    }

    fn card_part(&self, item_id: &str, selector: &str) -> Option<Element> {
        self.card(item_id)?.query_selector(selector).ok().flatten()
    }

    fn badge_html(&self, status: DueStatus) -> Option<String> {
        let (class, icon, label) = match status {
            DueStatus::Overdue => (
                "bg-danger",
                "bi-exclamation-triangle",
                self.messages.overdue_badge,
            ),
            DueStatus::DueToday => (
                "bg-warning text-dark",
                "bi-clock",
                self.messages.due_today_badge,
            ),
            DueStatus::Upcoming => return None,
        };
        Some(format!(
            r#"<span class="badge {class}"><i class="bi {icon} me-1"></i>{label}</span>"#
        ))
    }
}

impl ExtensionView for DomView {
    fn set_title(&self, title: &str) {
        self.set_text(ids::TITLE, title);
    }

    fn set_current_due_date(&self, text: &str) {
        self.set_text(ids::CURRENT_DUE_DATE, text);
    }

    fn show_modal(&self) -> bool {
        modal::show(&self.modal)
    }

    fn hide_modal(&self) {
        modal::hide(&self.modal);
    }

    fn day_input(&self) -> Option<String> {
        self.days_input().map(|input| input.value())
    }

    fn set_day_input(&self, value: &str) {
        if let Some(input) = self.days_input() {
            input.set_value(value);
        }
    }

    fn set_day_input_invalid(&self, invalid: bool) {
        if let Some(input) = self.by_id(ids::DAYS_INPUT) {
            let list = input.class_list();
            let _ = if invalid {
                list.add_1(classes::INVALID)
            } else {
                list.remove_1(classes::INVALID)
            };
        }
    }

    fn set_quick_select(&self, days: Option<&str>) {
        let selector = format!(".{}", classes::QUICK_SELECT);
        for button in elements(self.document.query_selector_all(&selector)) {
            let active = days.is_some() && button.get_attribute(attrs::DAYS).as_deref() == days;
            let _ = if active {
                button.class_list().add_1(classes::ACTIVE)
            } else {
                button.class_list().remove_1(classes::ACTIVE)
            };
        }
    }

    fn set_preview(&self, text: Option<&str>) {
        if let Some(span) = self.by_id(ids::NEW_DUE_DATE) {
            span.set_text_content(Some(text.unwrap_or_default()));
        }
        if let Some(help) = self.by_id(ids::PREVIEW_HELP) {
            set_display(&help, if text.is_some() { "block" } else { "none" });
        }
    }

    fn show_error(&self, message: &str) -> bool {
        let (Some(error_box), Some(error_text)) =
            (self.by_id(ids::ERROR_BOX), self.by_id(ids::ERROR_TEXT))
        else {
            return false;
        };
        error_text.set_text_content(Some(message));
        set_display(&error_box, "block");

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Nearest);
        error_box.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn clear_error(&self) {
        if let Some(error_box) = self.by_id(ids::ERROR_BOX) {
            set_display(&error_box, "none");
        }
    }

    fn set_confirm_busy(&self, busy: bool, label: &str) {
        let Some(button) = self
            .by_id(ids::CONFIRM)
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
        else {
            tracing::warn!("confirm button not found");
            return;
        };

        if busy {
            let mut saved = self.confirm_html.borrow_mut();
            if saved.is_none() {
                *saved = Some(button.inner_html());
            }
            button.set_disabled(true);
            button.set_inner_html(&format!(r#"<i class="bi bi-hourglass-split me-1"></i>{label}"#));
        } else {
            button.set_disabled(false);
            if let Some(html) = self.confirm_html.borrow_mut().take() {
                button.set_inner_html(&html);
            }
        }
    }

    fn csrf_token(&self) -> Option<CsrfToken> {
        let meta = |name: &str| {
            self.document
                .query_selector(&format!(r#"meta[name="{name}"]"#))
                .ok()
                .flatten()
                .and_then(|el| el.get_attribute("content"))
        };
        CsrfToken::from_meta(meta("_csrf_header"), meta("_csrf"))
    }

    fn has_card(&self, item_id: &str) -> bool {
        self.card(item_id).is_some()
    }

    fn set_card_due_date(&self, item_id: &str, display: &str, iso: &str) {
        let Some(card) = self.card(item_id) else {
            return;
        };
        if let Ok(Some(span)) = card.query_selector(classes::DUE_DATE_DISPLAY) {
            span.set_text_content(Some(display));
        }
        if let Ok(Some(button)) = card.query_selector(classes::EXTEND_BUTTON) {
            let _ = button.set_attribute(attrs::CURRENT_DUE_DATE, iso);
        }
    }

    fn set_extend_visible(&self, item_id: &str, visible: bool) {
        if let Some(button) = self.card_part(item_id, classes::EXTEND_BUTTON) {
            set_display(&button, if visible { "" } else { "none" });
        }
    }

    fn set_status_badge(&self, item_id: &str, status: DueStatus) {
        let Some(card) = self.card(item_id) else {
            return;
        };

        for badge in elements(card.query_selector_all(classes::BADGE)) {
            let text = badge.text_content().unwrap_or_default();
            if Messages::is_status_badge(&text) {
                match badge.parent_element() {
                    Some(wrapper) if wrapper != card => wrapper.remove(),
                    _ => badge.remove(),
                }
            }
        }

        let Some(html) = self.badge_html(status) else {
            return;
        };
        let anchor = card
            .query_selector(classes::TIME_INFO)
            .ok()
            .flatten()
            .and_then(|info| info.parent_element())
            .unwrap_or_else(|| card.clone());
        let Ok(wrapper) = self.document.create_element("div") else {
            return;
        };
        wrapper.set_class_name("mt-2");
        wrapper.set_inner_html(&html);
        let _ = anchor.append_child(&wrapper);
    }

    fn highlight_card(&self, item_id: &str, duration_ms: u32) {
        let Some(card) = self
            .card(item_id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };
        let style = card.style();
        let _ = style.set_property("transition", "all 0.3s ease");
        let _ = style.set_property("background-color", "#e8f5e8");
        let _ = style.set_property("transform", "scale(1.02)");

        spawn_local(async move {
            TimeoutFuture::new(duration_ms).await;
            let style = card.style();
            let _ = style.remove_property("background-color");
            let _ = style.remove_property("transform");
            TimeoutFuture::new(300).await;
            let _ = style.remove_property("transition");
        });
    }

    fn show_notice(&self, message: &str, dismiss_after_ms: u32) {
        show_success_notice(message, dismiss_after_ms);
    }

    fn schedule_reload(&self, delay_ms: u32) {
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            if let Some(window) = web_sys::window() {
                if let Err(err) = window.location().reload() {
                    tracing::error!(error = ?err, "page reload failed");
                }
            }
        });
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}
