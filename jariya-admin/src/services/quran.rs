//! Quran service
//!
//! Lines are keyed by (page, line) with no surrogate id, so this resource
//! has its own verbs: `getLastLine`, `getLine`, `getPage`, `add`, `update`, `delete`.

use crate::api::{ApiClient, ApiResponse};
use crate::config::QURAN_DELETE_PLACEHOLDER_TEXT;
use crate::models::{order_lines, QuranLine, QuranLineRequest};
use serde_json::Value;

#[derive(Clone)]
pub struct QuranService {
    client: ApiClient,
}

impl QuranService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// The last stored line (highest page, then line)
    pub async fn last_line(&self) -> ApiResponse<QuranLine> {
        let result = self
            .client
            .get::<Value>("/quran/getLastLine")
            .await
            .map(|raw| QuranLine::from_raw(&raw));
        tracing::debug!(success = result.is_success(), "Last Quran line");
        result
    }

    pub async fn get_line(&self, page_number: i64, line_number: i64) -> ApiResponse<QuranLine> {
        let endpoint = format!(
            "/quran/getLine?pageNumber={}&lineNumber={}",
            page_number, line_number
        );
        self.client
            .get::<Value>(&endpoint)
            .await
            .map(|raw| QuranLine::from_raw(&raw))
    }

    /// All lines of one page, ordered by line number
    pub async fn get_page(&self, page_number: i64) -> ApiResponse<Vec<QuranLine>> {
        let endpoint = format!("/quran/getPage?pageNumber={}", page_number);
        let result = self
            .client
            .get::<Option<Vec<Value>>>(&endpoint)
            .await
            .map(|items| {
                order_lines(
                    items
                        .unwrap_or_default()
                        .iter()
                        .map(QuranLine::from_raw)
                        .collect(),
                )
            });
        tracing::debug!(
            page_number,
            count = result.data().map(Vec::len).unwrap_or(0),
            "Quran page fetched"
        );
        result
    }

    pub async fn add(&self, req: &QuranLineRequest) -> ApiResponse<QuranLine> {
        tracing::info!(
            page_number = req.page_number,
            line_number = req.line_number,
            "Adding Quran line"
        );
        self.post_line("/quran/add", req).await
    }

    pub async fn update(&self, req: &QuranLineRequest) -> ApiResponse<QuranLine> {
        tracing::info!(
            page_number = req.page_number,
            line_number = req.line_number,
            "Updating Quran line"
        );
        self.post_line("/quran/update", req).await
    }

    pub async fn delete(&self, page_number: i64, line_number: i64) -> ApiResponse<()> {
        let req = QuranLineRequest {
            page_number,
            line_number,
            text_ar: QURAN_DELETE_PLACEHOLDER_TEXT.to_string(),
        };
        let result = self
            .client
            .post::<Value, _>("/quran/delete", Some(&req))
            .await
            .map(|_| ());
        tracing::info!(
            page_number,
            line_number,
            success = result.is_success(),
            "Delete Quran line"
        );
        result
    }

    async fn post_line(&self, endpoint: &str, req: &QuranLineRequest) -> ApiResponse<QuranLine> {
        self.client
            .post::<Value, _>(endpoint, Some(req))
            .await
            .map(|raw| match raw {
                Value::Null => QuranLine {
                    page_number: req.page_number,
                    line_number: req.line_number,
                    text_ar: req.text_ar.clone(),
                    created_at: None,
                    updated_at: None,
                },
                raw => QuranLine::from_raw(&raw),
            })
    }
}
