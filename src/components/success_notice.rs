//! Success Notice Component
//!
//! Dismissible banner pinned to the top-right corner.

use gloo_timers::future::TimeoutFuture;
use leptos::mount::mount_to;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn SuccessNotice(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div
            class="alert alert-success alert-dismissible fade show position-fixed"
            role="alert"
            style="top: 20px; right: 20px; z-index: 9999; min-width: 300px;"
        >
            <i class="bi bi-check-circle me-2"></i>
            {message}
            <button type="button" class="btn-close" data-bs-dismiss="alert"></button>
        </div>
    }
}

/// Mount a notice on `<body>` and unmount it after `dismiss_after_ms`.
///
/// Bootstrap's close button may detach it earlier; unmounting a detached
/// node is harmless.
pub fn show_success_notice(message: &str, dismiss_after_ms: u32) {
    let Some(body) = document().body() else {
        tracing::warn!("no <body> to attach the notice to");
        return;
    };

    let message = message.to_string();
    let handle = mount_to(body, move || view! { <SuccessNotice message=message /> });
    spawn_local(async move {
        TimeoutFuture::new(dismiss_after_ms).await;
        drop(handle);
    });
}
