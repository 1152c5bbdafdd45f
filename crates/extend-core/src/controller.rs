//! Extension Modal Controller
//!
//! Mediates between page events, the extension service and the view.
//! Session state is passed in explicitly; the async operations take it as a
//! `RefCell` and never hold a borrow across an await or a view call, so
//! event handlers firing in between can still reach it.

use std::cell::RefCell;

use crate::api::ExtensionApi;
use crate::clock::Clock;
use crate::config::ExtendConfig;
use crate::dates::{self, DueStatus};
use crate::error::{ExtendError, ValidationError};
use crate::i18n::Messages;
use crate::models::{ExtendRequest, ExtendResponse, ExtendTrigger};
use crate::state::{ModalPhase, Session};
use crate::validation;
use crate::view::ExtensionView;

/// What a preview attempt ended in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewOutcome {
    /// Input not a positive count or no modal open; preview cleared
    Skipped,
    /// Raw ISO date from the server
    Shown(String),
    /// Message shown to the user
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// A submission is already in flight
    Busy,
    /// No modal is open, so there is nothing to extend
    NotOpen,
    Invalid(ValidationError),
    Extended(ExtendResponse),
    /// Message shown to the user
    Failed(String),
}

/// Result of patching the card after a successful extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPatch {
    Patched { extendable: bool, status: DueStatus },
    ReloadScheduled,
}

pub struct ExtensionController<V, A, C> {
    view: V,
    api: A,
    clock: C,
    config: ExtendConfig,
    messages: &'static Messages,
}

impl<V, A, C> ExtensionController<V, A, C>
where
    V: ExtensionView,
    A: ExtensionApi,
    C: Clock,
{
    pub fn new(view: V, api: A, clock: C, config: ExtendConfig) -> Self {
        let messages = Messages::for_locale(config.locale);
        Self {
            view,
            api,
            clock,
            config,
            messages,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn format_for_display(&self, value: &str) -> String {
        dates::format_for_display(value, self.config.locale)
    }

    /// Populate and show the modal for `trigger`.
    ///
    /// Returns false (after logging) when the modal is not on the page.
    pub fn open_modal(&self, session: &mut Session, trigger: &ExtendTrigger) -> bool {
        session.begin_open(trigger.item_id.as_str(), trigger.current_due_date.as_str());

        self.view.set_title(&trigger.title);
        self.view.set_current_due_date(&self.format_for_display(&trigger.current_due_date));
        self.reset_modal_state();

        if !self.view.show_modal() {
            tracing::error!(item_id = %trigger.item_id, "extend modal not found");
            session.clear();
            return false;
        }
        session.mark_idle();
        tracing::debug!(item_id = %trigger.item_id, "extend modal opened");
        true
    }

    /// Clear input, invalid marker, preview, quick-select and error
    pub fn reset_modal_state(&self) {
        self.view.set_day_input("");
        self.view.set_day_input_invalid(false);
        self.view.set_preview(None);
        self.view.set_quick_select(None);
        self.view.clear_error();
    }

    /// The modal was hidden, by us or by the user
    pub fn close_modal(&self, session: &mut Session) {
        self.reset_modal_state();
        session.clear();
    }

    /// A quick-select button was picked; returns the new input value
    pub fn quick_select(&self, days: &str) -> String {
        self.view.set_day_input(days);
        self.view.set_quick_select(Some(days));
        days.to_string()
    }

    /// The user typed into the day-count input
    pub fn days_edited(&self) {
        self.view.set_quick_select(None);
    }

    pub async fn request_preview(&self, session: &RefCell<Session>, input: &str) -> PreviewOutcome {
        let Some(days) = validation::preview_days(input) else {
            self.view.set_preview(None);
            return PreviewOutcome::Skipped;
        };
        let Some(item_id) = session.borrow_mut().begin_preview() else {
            self.view.set_preview(None);
            return PreviewOutcome::Skipped;
        };

        let result = self.api.preview(&item_id, days).await;
        session.borrow_mut().finish_preview();

        match result {
            Ok(preview) => {
                self.view.set_preview(Some(&self.format_for_display(&preview.new_due_date)));
                self.view.clear_error();
                PreviewOutcome::Shown(preview.new_due_date)
            }
            Err(err) => {
                tracing::warn!(item_id = %item_id, days, error = %err, "extension preview failed");
                let message = err
                    .server_error()
                    .unwrap_or(self.messages.preview_failed)
                    .to_string();
                self.show_error(&message);
                self.view.set_preview(None);
                PreviewOutcome::Failed(message)
            }
        }
    }

    /// Validate the day-count input, marking the input and showing the
    /// message on failure
    pub fn validate_input(&self, input: &str) -> Result<u32, ValidationError> {
        self.view.set_day_input_invalid(false);
        self.view.clear_error();

        validation::validate_days(input, self.config.max_extension_days).inspect_err(|err| {
            self.show_error(&self.messages.validation(err));
            self.view.set_day_input_invalid(true);
        })
    }

    pub async fn confirm_extension(
        &self,
        session: &RefCell<Session>,
        input: &str,
    ) -> ConfirmOutcome {
        if session.borrow().phase() == ModalPhase::Submitting {
            tracing::debug!("extension already submitting, ignoring confirm");
            return ConfirmOutcome::Busy;
        }

        let days = match self.validate_input(input) {
            Ok(days) => days,
            Err(err) => return ConfirmOutcome::Invalid(err),
        };

        let previous_due_date = session.borrow().due_date().map(str::to_string);
        let Some(item_id) = session.borrow_mut().begin_submit() else {
            tracing::warn!("confirm without an open extension modal");
            return ConfirmOutcome::NotOpen;
        };

        let todo_id = match item_id.parse::<i64>() {
            Ok(id) => id,
            Err(_) => {
                let err = ExtendError::InvalidItemId(item_id);
                tracing::error!(error = %err, "cannot submit extension");
                session.borrow_mut().finish_submit(false);
                let message = self.messages.invalid_item.to_string();
                self.show_error(&message);
                return ConfirmOutcome::Failed(message);
            }
        };

        // The server refuses anything outside its own bounds, whatever the
        // configured maximum says
        let request = ExtendRequest::new(todo_id, days);
        if !request.is_valid() {
            let err = ValidationError::ExceedsMaximum {
                max: validation::MAX_EXTENSION_DAYS,
            };
            tracing::warn!(item_id = %item_id, days, "day count outside server bounds");
            session.borrow_mut().finish_submit(false);
            self.show_error(&self.messages.validation(&err));
            self.view.set_day_input_invalid(true);
            return ConfirmOutcome::Invalid(err);
        }

        self.view.set_confirm_busy(true, self.messages.processing);
        let csrf = self.view.csrf_token();

        let outcome = match self.api.extend(&item_id, &request, csrf.as_ref()).await {
            Ok(response) if response.success => {
                tracing::info!(
                    item_id = %item_id,
                    days,
                    previous_due_date = ?previous_due_date,
                    new_due_date = ?response.new_due_date,
                    "due date extended"
                );
                self.view.hide_modal();
                self.patch_item_card(&item_id, response.new_due_date.as_deref());
                self.show_transient_notice(self.messages.extend_succeeded);
                ConfirmOutcome::Extended(response)
            }
            Ok(response) => {
                let message = response
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| self.messages.extend_failed.to_string());
                tracing::warn!(item_id = %item_id, %message, "extension refused");
                self.show_error(&message);
                ConfirmOutcome::Failed(message)
            }
            Err(err) => {
                tracing::warn!(item_id = %item_id, error = %err, "extension request failed");
                let message = err
                    .server_message()
                    .unwrap_or(self.messages.extend_unavailable)
                    .to_string();
                self.show_error(&message);
                ConfirmOutcome::Failed(message)
            }
        };

        session
            .borrow_mut()
            .finish_submit(matches!(outcome, ConfirmOutcome::Extended(_)));
        self.view.set_confirm_busy(false, self.messages.processing);
        outcome
    }

    /// Bring the item's card in line with its new due date.
    ///
    /// Without a card (or a date) the page is stale, so a reload is
    /// scheduled instead.
    pub fn patch_item_card(&self, item_id: &str, new_due_date: Option<&str>) -> CardPatch {
        let new_due_date = match new_due_date {
            Some(date) if self.view.has_card(item_id) => date,
            _ => {
                tracing::warn!(item_id = %item_id, "todo card not found, reloading page");
                self.view.schedule_reload(self.config.reload_delay_ms);
                return CardPatch::ReloadScheduled;
            }
        };

        self.view
            .set_card_due_date(item_id, &self.format_for_display(new_due_date), new_due_date);

        let today = self.clock.today();
        let (extendable, status) = match dates::parse_iso_date(new_due_date) {
            Some(due) => (
                dates::is_extendable(due, today, self.config.eligibility_threshold_days),
                DueStatus::of(due, today),
            ),
            None => (true, DueStatus::Upcoming),
        };

        if !extendable {
            self.view.set_extend_visible(item_id, false);
        }
        self.view.set_status_badge(item_id, status);
        self.view.highlight_card(item_id, self.config.highlight_duration_ms);

        CardPatch::Patched { extendable, status }
    }

    pub fn show_transient_notice(&self, message: &str) {
        self.view.show_notice(message, self.config.notice_duration_ms);
    }

    fn show_error(&self, message: &str) {
        if !self.view.show_error(message) {
            tracing::error!(%message, "error elements not found, falling back to alert");
            self.view.alert(message);
        }
    }
}
