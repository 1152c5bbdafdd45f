//! Extension Endpoints

use async_trait::async_trait;
use extend_core::{
    CsrfToken, ExtendConfig, ExtendRequest, ExtendResponse, ExtendResult, ExtensionApi,
    PreviewResponse,
};

use super::send_json;

/// `ExtensionApi` over the browser's `fetch`
pub struct FetchApi {
    config: ExtendConfig,
}

impl FetchApi {
    pub fn new(config: ExtendConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl ExtensionApi for FetchApi {
    async fn preview(&self, item_id: &str, days: u32) -> ExtendResult<PreviewResponse> {
        let url = self.config.preview_url(item_id, days);
        tracing::debug!(%url, "requesting extension preview");
        send_json("GET", &url, None, &[]).await
    }

    async fn extend(
        &self,
        item_id: &str,
        request: &ExtendRequest,
        csrf: Option<&CsrfToken>,
    ) -> ExtendResult<ExtendResponse> {
        let url = self.config.extend_url(item_id);
        let body = serde_json::to_string(request)?;
        let csrf_header = csrf.map(|t| (t.header.as_str(), t.token.as_str()));
        tracing::debug!(%url, csrf = csrf_header.is_some(), "submitting extension");
        send_json("POST", &url, Some(body), csrf_header.as_slice()).await
    }
}
