//! Browser adapter that loads the endpoints configuration over HTTP.
//!
//! On `wasm32` the request goes through `window.fetch`; other targets get a shim that reports
//! the fetch as unsupported so native test builds link without a browser.

use chat_nav::EndpointsSource;
use endpoint_catalog::{CatalogError, EndpointsConfig};
use futures::future::LocalBoxFuture;

#[cfg(target_arch = "wasm32")]
mod imp {
    use endpoint_catalog::CatalogError;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    pub async fn get_text(url: &str) -> Result<String, CatalogError> {
        let window = web_sys::window().ok_or(CatalogError::Unsupported("window is unavailable"))?;

        let init = RequestInit::new();
        init.set_method("GET");
        init.set_mode(RequestMode::SameOrigin);
        let request = Request::new_with_str_and_init(url, &init).map_err(js_error)?;
        request
            .headers()
            .set("Accept", "application/json")
            .map_err(js_error)?;

        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?
            .dyn_into()
            .map_err(js_error)?;
        if !response.ok() {
            return Err(CatalogError::Fetch(format!(
                "HTTP {} from {url}",
                response.status()
            )));
        }

        let body = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        body.as_string()
            .ok_or_else(|| CatalogError::Fetch("response body is not text".to_string()))
    }

    fn js_error(err: JsValue) -> CatalogError {
        if let Some(text) = err.as_string() {
            return CatalogError::Fetch(text);
        }
        if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
            if let Some(text) = message.as_string() {
                return CatalogError::Fetch(text);
            }
        }
        CatalogError::Fetch(format!("{err:?}"))
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use endpoint_catalog::CatalogError;

    pub async fn get_text(_url: &str) -> Result<String, CatalogError> {
        Err(CatalogError::Unsupported(
            "endpoints fetch requires a browser host",
        ))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Endpoints source backed by the chat server's HTTP API.
pub struct HttpEndpointsSource {
    base_url: String,
}

impl HttpEndpointsSource {
    /// Source resolving paths against `base_url`. An empty base means same-origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Same-origin source.
    pub fn same_origin() -> Self {
        Self::default()
    }

    /// Absolute or same-origin URL for `path`.
    pub fn url_for(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

impl EndpointsSource for HttpEndpointsSource {
    fn fetch_endpoints<'a>(
        &'a self,
        path: &'a str,
    ) -> LocalBoxFuture<'a, Result<EndpointsConfig, CatalogError>> {
        Box::pin(async move {
            let body = imp::get_text(&self.url_for(path)).await?;
            EndpointsConfig::from_json(&body)
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn url_for_joins_without_duplicate_slashes() {
        assert_eq!(
            HttpEndpointsSource::same_origin().url_for("/api/endpoints"),
            "/api/endpoints"
        );
        assert_eq!(
            HttpEndpointsSource::new("https://chat.example.com/").url_for("api/endpoints"),
            "https://chat.example.com/api/endpoints"
        );
        assert_eq!(
            HttpEndpointsSource::new("https://chat.example.com").url_for("/api/endpoints"),
            "https://chat.example.com/api/endpoints"
        );
    }

    #[test]
    fn native_builds_report_unsupported() {
        let err = block_on(HttpEndpointsSource::same_origin().fetch_endpoints("/api/endpoints"))
            .expect_err("no browser");
        assert!(matches!(err, CatalogError::Unsupported(_)));
    }
}
