//! Extension Modal Wiring
//!
//! Owns the controller and the session, and binds page events to them.

use std::cell::RefCell;
use std::rc::Rc;

use extend_core::{
    ExtendConfig, ExtendTrigger, ExtensionController, ExtensionView, Locale, Messages, Session,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, EventTarget};

use crate::api::FetchApi;
use crate::clock::BrowserClock;
use crate::modal;
use crate::view::{attrs, classes, ids, DomView};

/// Attribute on the modal holding a JSON `ExtendConfig`
const CONFIG_ATTR: &str = "data-extend-config";

type Controller = ExtensionController<DomView, FetchApi, BrowserClock>;

pub struct ExtendApp {
    controller: Controller,
    session: RefCell<Session>,
}

/// Config from the modal's attribute, else defaults in the page language
fn load_config(document: &Document, modal: &Element) -> ExtendConfig {
    if let Some(raw) = modal.get_attribute(CONFIG_ATTR) {
        match ExtendConfig::from_json(&raw) {
            Ok(config) => return config,
            Err(err) => tracing::warn!(error = %err, "ignoring extend config"),
        }
    }

    let lang = document
        .document_element()
        .and_then(|html| html.get_attribute("lang"))
        .filter(|lang| !lang.trim().is_empty());
    match lang {
        Some(lang) => ExtendConfig::default().with_locale(Locale::from_tag(&lang)),
        None => ExtendConfig::default(),
    }
}

impl ExtendApp {
    pub fn new(document: Document, modal: Element) -> Self {
        let config = load_config(&document, &modal);
        tracing::info!(
            locale = config.locale.tag(),
            base_path = %config.base_path,
            "extend modal config loaded"
        );

        let view = DomView::new(document, modal, Messages::for_locale(config.locale));
        let api = FetchApi::new(config.clone());
        Self {
            controller: ExtensionController::new(view, api, BrowserClock, config),
            session: RefCell::new(Session::new()),
        }
    }

    fn open(&self, trigger: ExtendTrigger) {
        let Ok(mut session) = self.session.try_borrow_mut() else {
            tracing::warn!("session busy, ignoring extend click");
            return;
        };
        self.controller.open_modal(&mut session, &trigger);
    }

    fn close(&self) {
        match self.session.try_borrow_mut() {
            Ok(mut session) => self.controller.close_modal(&mut session),
            Err(_) => tracing::warn!("session busy, modal reset skipped"),
        }
    }

    fn preview(self: &Rc<Self>, input: String) {
        let app = Rc::clone(self);
        spawn_local(async move {
            app.controller.request_preview(&app.session, &input).await;
        });
    }

    fn confirm(self: &Rc<Self>) {
        let input = self.controller.view().day_input().unwrap_or_default();
        let app = Rc::clone(self);
        spawn_local(async move {
            let outcome = app.controller.confirm_extension(&app.session, &input).await;
            tracing::debug!(?outcome, "confirm finished");
        });
    }

    fn on_document_click(self: &Rc<Self>, event: Event) {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };

        if let Ok(Some(button)) = target.closest(classes::EXTEND_BUTTON) {
            let trigger = ExtendTrigger::from_attributes(
                button.get_attribute(attrs::TODO_ID),
                button.get_attribute(attrs::TODO_TITLE),
                button.get_attribute(attrs::CURRENT_DUE_DATE),
            );
            match trigger {
                Some(trigger) => self.open(trigger),
                None => tracing::warn!("extend button without data-todo-id"),
            }
        }

        if target.class_list().contains(classes::QUICK_SELECT) {
            if let Some(days) = target.get_attribute(attrs::DAYS) {
                let input = self.controller.quick_select(&days);
                self.preview(input);
            }
        }
    }

    fn on_days_input(self: &Rc<Self>) {
        self.controller.days_edited();
        let input = self.controller.view().day_input().unwrap_or_default();
        self.preview(input);
    }
}

fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Bind the modal to the page. Clicks are delegated from `document` so
/// cards rendered later work too.
pub fn bind(app: Rc<ExtendApp>, document: &Document, modal_el: &Element) -> Result<(), JsValue> {
    {
        let app = Rc::clone(&app);
        listen(document, "click", move |ev: Event| app.on_document_click(ev))?;
    }

    match document.get_element_by_id(ids::DAYS_INPUT) {
        Some(input) => {
            let app = Rc::clone(&app);
            listen(&input, "input", move |_: Event| app.on_days_input())?;
        }
        None => tracing::warn!(id = ids::DAYS_INPUT, "day count input not found"),
    }

    match document.get_element_by_id(ids::CONFIRM) {
        Some(button) => {
            let app = Rc::clone(&app);
            listen(&button, "click", move |_: Event| app.confirm())?;
        }
        None => tracing::warn!(id = ids::CONFIRM, "confirm button not found"),
    }

    listen(modal_el, modal::HIDDEN_EVENT, move |_: Event| app.close())?;
    Ok(())
}
