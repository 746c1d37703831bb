//! Typed API client
//!
//! Thin wrapper over reqwest that talks to the proxy relay and folds every
//! outcome (transport errors included) into an `ApiResponse`.

use super::envelope::ApiResponse;
use crate::config::NETWORK_ERROR_MESSAGE;
use crate::error::Result;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Client for the proxied upstream API
#[derive(Clone)]
pub struct ApiClient {
    base: String,
    http: Client,
}

impl ApiClient {
    /// Create a client rooted at `base` (proxy origin plus base path,
    /// e.g. "http://127.0.0.1:3000/api/proxy").
    pub fn new(base: impl Into<String>) -> Result<Self> {
        let http = Client::builder().user_agent("jariya-admin").build()?;
        Ok(Self::with_http(base, http))
    }

    pub fn with_http(base: impl Into<String>, http: Client) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self { base, http }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base, endpoint)
    }

    /// Issue a GET against `endpoint` (e.g. "/zikr/getAll")
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResponse<T> {
        let url = self.url(endpoint);
        tracing::debug!(endpoint, %url, "API GET request");

        let request = self
            .http
            .get(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json");

        let result = self.execute(endpoint, request).await;
        tracing::info!(endpoint, success = result.is_success(), "API GET result");
        result
    }

    /// Issue a POST against `endpoint` with an optional JSON body
    pub async fn post<T, B>(&self, endpoint: &str, body: Option<&B>) -> ApiResponse<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(endpoint);
        tracing::debug!(endpoint, %url, has_body = body.is_some(), "API POST request");

        let mut request = self
            .http
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let result = self.execute(endpoint, request).await;
        tracing::info!(endpoint, success = result.is_success(), "API POST result");
        result
    }

    /// Issue a POST with no body
    pub async fn post_empty<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResponse<T> {
        self.post::<T, Value>(endpoint, None).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        request: reqwest::RequestBuilder,
    ) -> ApiResponse<T> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(endpoint, "API request failed: {}", e);
                return ApiResponse::failure(transport_message(&e));
            }
        };

        let status = response.status();
        tracing::debug!(endpoint, status = status.as_u16(), "API response status");

        match response.json::<Value>().await {
            Ok(body) => ApiResponse::from_body(status.is_success(), body),
            Err(e) => {
                tracing::warn!(endpoint, "API response was not JSON: {}", e);
                ApiResponse::failure(transport_message(&e))
            }
        }
    }
}

fn transport_message(e: &reqwest::Error) -> String {
    let text = e.to_string();
    if text.trim().is_empty() {
        NETWORK_ERROR_MESSAGE.to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:3000/api/proxy/").unwrap();
        assert_eq!(client.base(), "http://localhost:3000/api/proxy");
        assert_eq!(
            client.url("/zikr/getAll"),
            "http://localhost:3000/api/proxy/zikr/getAll"
        );
    }

    #[tokio::test]
    async fn test_unreachable_host_resolves_to_failure() {
        // Bind then drop a listener so the port is closed
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ApiClient::new(format!("http://{}/api/proxy", addr)).unwrap();

        let get: ApiResponse<Value> = client.get("/zikr/getAll").await;
        assert!(!get.is_success());
        assert!(!get.message().unwrap().is_empty());

        let post: ApiResponse<Value> = client
            .post("/zikr/deleteById", Some(&serde_json::json!({"id": "z1"})))
            .await;
        assert!(!post.is_success());
        assert!(!post.message().unwrap().is_empty());
    }
}
