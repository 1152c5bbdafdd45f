//! Server Bindings
//!
//! Thin `fetch` wrappers over the to-do extension endpoints.

mod extend;

use extend_core::{ErrorBody, ExtendError, ExtendResult};
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

pub use extend::FetchApi;

fn js_error(err: JsValue) -> String {
    err.as_string()
        .or_else(|| js_sys::JSON::stringify(&err).ok().and_then(|s| s.as_string()))
        .unwrap_or_else(|| format!("{:?}", err))
}

/// Issue a JSON request and decode the reply.
///
/// Non-2xx replies become `ExtendError::Rejected` carrying whatever error
/// body could be decoded (an empty one if the body was not JSON).
async fn send_json<T: DeserializeOwned>(
    method: &str,
    url: &str,
    body: Option<String>,
    extra_headers: &[(&str, &str)],
) -> ExtendResult<T> {
    let headers = Headers::new().map_err(|e| ExtendError::Network(js_error(e)))?;
    let defaults = [
        ("Content-Type", "application/json"),
        ("X-Requested-With", "XMLHttpRequest"),
    ];
    for (name, value) in defaults.iter().chain(extra_headers) {
        headers
            .set(name, value)
            .map_err(|e| ExtendError::Network(js_error(e)))?;
    }

    let init = RequestInit::new();
    init.set_method(method);
    init.set_headers(&headers);
    if let Some(body) = body {
        init.set_body(&JsValue::from_str(&body));
    }

    let request = Request::new_with_str_and_init(url, &init)
        .map_err(|e| ExtendError::Network(js_error(e)))?;
    let window = web_sys::window().ok_or_else(|| ExtendError::Network("no window".to_string()))?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ExtendError::Network(js_error(e)))?
        .dyn_into()
        .map_err(|e| ExtendError::Decode(js_error(e)))?;

    let status = response.status();
    let json = match response.json() {
        Ok(promise) => JsFuture::from(promise).await.map_err(js_error),
        Err(e) => Err(js_error(e)),
    };

    if !response.ok() {
        let body = json
            .ok()
            .and_then(|value| serde_wasm_bindgen::from_value::<ErrorBody>(value).ok())
            .unwrap_or_default();
        return Err(ExtendError::Rejected { status, body });
    }

    let value = json.map_err(ExtendError::Decode)?;
    serde_wasm_bindgen::from_value(value).map_err(|e| ExtendError::Decode(e.to_string()))
}
