//! Collections and their zikr mappings

use super::normalize::{flag, int, opt_text, text, timestamp};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A named, ordered group of zikrs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,
    pub text: String,
    pub description: String,
    pub is_featured: bool,
    /// Display order, never negative
    pub order_index: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub is_deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Collection {
    pub fn from_raw(raw: &Value) -> Self {
        Self {
            id: text(raw, &["id"]),
            text: text(raw, &["text"]),
            description: text(raw, &["description"]),
            is_featured: flag(raw, &["isFeatured", "featured"]),
            order_index: int(raw, &["orderIndex", "order"]).max(0),
            created_at: timestamp(raw, &["createdAt"]),
            updated_at: timestamp(raw, &["updatedAt"]),
            is_deleted: flag(raw, &["isDeleted"]),
            deleted_at: timestamp(raw, &["deletedAt"]),
        }
    }
}

/// Create collection request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCollectionRequest {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_featured: bool,
    pub order_index: i64,
}

/// Update collection request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCollectionRequest {
    pub id: String,
    #[serde(flatten)]
    pub fields: CreateCollectionRequest,
}

/// Direction a mapped zikr is counted in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountType {
    #[default]
    Up,
    Down,
}

impl CountType {
    /// Parse either casing ("up", "Up", "DOWN"); anything unknown counts up
    pub fn parse_lenient(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("down") {
            CountType::Down
        } else {
            CountType::Up
        }
    }
}

impl fmt::Display for CountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountType::Up => write!(f, "up"),
            CountType::Down => write!(f, "down"),
        }
    }
}

/// Join row placing a zikr inside a collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionMap {
    pub id: String,
    pub collection_id: String,
    pub zikr_id: String,
    pub count_type: CountType,
    /// Repetitions, at least 1
    pub count_value: i64,
    pub order_index: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub is_deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl CollectionMap {
    pub fn from_raw(raw: &Value) -> Self {
        Self {
            id: text(raw, &["id"]),
            collection_id: text(raw, &["collectionId"]),
            zikr_id: text(raw, &["zikrId"]),
            count_type: opt_text(raw, &["countType"])
                .map(|t| CountType::parse_lenient(&t))
                .unwrap_or_default(),
            count_value: int(raw, &["countValue"]).max(1),
            order_index: int(raw, &["orderIndex", "order"]).max(0),
            created_at: timestamp(raw, &["createdAt"]),
            updated_at: timestamp(raw, &["updatedAt"]),
            is_deleted: flag(raw, &["isDeleted"]),
            deleted_at: timestamp(raw, &["deletedAt"]),
        }
    }
}

/// Create collection map request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCollectionMapRequest {
    pub collection_id: String,
    pub zikr_id: String,
    pub count_type: CountType,
    pub count_value: i64,
    pub order_index: i64,
}

/// Update collection map request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCollectionMapRequest {
    pub id: String,
    #[serde(flatten)]
    pub fields: CreateCollectionMapRequest,
}
