//! Extension Service Interface
//!
//! Futures are `!Send`: the only runtime is the browser's event loop.

use async_trait::async_trait;

use crate::error::ExtendResult;
use crate::models::{CsrfToken, ExtendRequest, ExtendResponse, PreviewResponse};

#[async_trait(?Send)]
pub trait ExtensionApi {
    /// `GET /todos/{id}/extend/preview?days={n}`; nothing is persisted
    async fn preview(&self, item_id: &str, days: u32) -> ExtendResult<PreviewResponse>;

    /// `POST /todos/{id}/extend`
    async fn extend(
        &self,
        item_id: &str,
        request: &ExtendRequest,
        csrf: Option<&CsrfToken>,
    ) -> ExtendResult<ExtendResponse>;
}
