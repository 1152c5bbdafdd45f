//! Todo Extend Frontend Entry Point
//!
//! Binds the due date extension modal on pages that render `#extendModal`.

mod api;
mod app;
mod clock;
mod components;
mod modal;
mod view;

use std::rc::Rc;

use app::ExtendApp;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    // Only the to-do list page carries the modal
    let Some(modal) = document.get_element_by_id(view::ids::MODAL) else {
        tracing::debug!("no extend modal on this page");
        return;
    };

    let app = Rc::new(ExtendApp::new(document.clone(), modal.clone()));
    match app::bind(app, &document, &modal) {
        Ok(()) => tracing::info!("extend modal ready"),
        Err(err) => tracing::error!(error = ?err, "failed to bind extend modal"),
    }
}
