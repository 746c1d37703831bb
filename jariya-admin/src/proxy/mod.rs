//! Proxy relay
//!
//! Same-origin endpoint that forwards GET and POST requests to the upstream
//! API and relays status and JSON body back untouched. Holds no state and
//! never retries; any failure becomes a 500 with the generic proxy envelope.

use crate::config::{PROXY_BASE_PATH, PROXY_FAILURE_MESSAGE};
use axum::{
    body::Bytes,
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

/// Shared relay state
#[derive(Clone)]
pub struct ProxyState {
    upstream: String,
    http: reqwest::Client,
}

impl ProxyState {
    pub fn new(upstream: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            upstream: upstream.into().trim_end_matches('/').to_string(),
            http,
        }
    }

    pub fn upstream(&self) -> &str {
        &self.upstream
    }

    /// Upstream URL for an inbound request URI
    fn upstream_url(&self, uri: &Uri, with_query: bool) -> String {
        let path = uri
            .path()
            .strip_prefix(PROXY_BASE_PATH)
            .unwrap_or_else(|| uri.path())
            .trim_start_matches('/');

        let mut url = format!("{}/{}", self.upstream, path);
        if with_query {
            if let Some(query) = uri.query() {
                url.push('?');
                url.push_str(query);
            }
        }
        url
    }
}

/// Relay failures, all surfaced to the caller as the same 500 envelope
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("Invalid JSON body: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::error!("Proxy error: {}", self);

        let body = Json(json!({
            "success": false,
            "message": PROXY_FAILURE_MESSAGE,
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

/// Build the relay router
pub fn router(state: ProxyState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route(
            &format!("{}/*path", PROXY_BASE_PATH),
            get(proxy_get).post(proxy_post),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

async fn proxy_get(
    State(state): State<Arc<ProxyState>>,
    uri: Uri,
) -> Result<Response, ProxyError> {
    let request_id = Uuid::new_v4();
    let url = state.upstream_url(&uri, true);
    tracing::debug!(%request_id, %url, "Proxy GET request");

    let request = state
        .http
        .get(&url)
        .header(reqwest::header::CONTENT_TYPE, "application/json");

    relay(request_id, request).await
}

async fn proxy_post(
    State(state): State<Arc<ProxyState>>,
    uri: Uri,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let request_id = Uuid::new_v4();
    let url = state.upstream_url(&uri, false);

    let payload: Value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body)?
    };
    tracing::debug!(%request_id, %url, has_body = !payload.is_null(), "Proxy POST request");

    let request = state.http.post(&url).json(&payload);

    relay(request_id, request).await
}

async fn relay(request_id: Uuid, request: reqwest::RequestBuilder) -> Result<Response, ProxyError> {
    let response = request.send().await?;
    let status = response.status().as_u16();
    let data: Value = response.json().await?;

    tracing::info!(%request_id, status, "Proxy response relayed");

    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
    Ok((status, Json(data)).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ProxyState {
        ProxyState::new("https://api.example.test/api/", reqwest::Client::new())
    }

    #[test]
    fn test_upstream_url_joins_captured_path() {
        let uri: Uri = "/api/proxy/zikr/getAll".parse().unwrap();
        assert_eq!(
            state().upstream_url(&uri, true),
            "https://api.example.test/api/zikr/getAll"
        );
    }

    #[test]
    fn test_get_keeps_query_string() {
        let uri: Uri = "/api/proxy/quran/getPage?pageNumber=3".parse().unwrap();
        assert_eq!(
            state().upstream_url(&uri, true),
            "https://api.example.test/api/quran/getPage?pageNumber=3"
        );
    }

    #[test]
    fn test_post_drops_query_string() {
        let uri: Uri = "/api/proxy/zikr/add?debug=1".parse().unwrap();
        assert_eq!(
            state().upstream_url(&uri, false),
            "https://api.example.test/api/zikr/add"
        );
    }

    #[test]
    fn test_proxy_error_renders_generic_envelope() {
        let err: ProxyError = serde_json::from_slice::<Value>(b"{not json")
            .unwrap_err()
            .into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
