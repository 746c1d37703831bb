//! Quran lines, keyed by (page, line)

use super::normalize::{int, text, timestamp};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One line of a Quran page; `(page_number, line_number)` is the key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuranLine {
    pub page_number: i64,
    pub line_number: i64,
    pub text_ar: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl QuranLine {
    pub fn from_raw(raw: &Value) -> Self {
        Self {
            page_number: int(raw, &["pageNumber", "page"]),
            line_number: int(raw, &["lineNumber", "line"]),
            text_ar: text(raw, &["textAr", "textArabic"]),
            created_at: timestamp(raw, &["createdAt"]),
            updated_at: timestamp(raw, &["updatedAt"]),
        }
    }

    pub fn key(&self) -> (i64, i64) {
        (self.page_number, self.line_number)
    }
}

/// Add or update payload; the key fields identify the line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuranLineRequest {
    pub page_number: i64,
    pub line_number: i64,
    pub text_ar: String,
}

/// Sort lines by key and drop duplicate keys, keeping the first occurrence
pub fn order_lines(mut lines: Vec<QuranLine>) -> Vec<QuranLine> {
    lines.sort_by_key(QuranLine::key);
    lines.dedup_by_key(|line| line.key());
    lines
}
