//! Tags and tag-to-zikr mappings

use super::normalize::{text, timestamp};
use super::zikr::ZikrRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: String,
    pub text: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Tag {
    pub fn from_raw(raw: &Value) -> Self {
        Self {
            id: text(raw, &["id"]),
            text: text(raw, &["text", "name"]),
            created_at: timestamp(raw, &["createdAt"]),
            updated_at: timestamp(raw, &["updatedAt"]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTagRequest {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTagRequest {
    pub id: String,
    pub text: String,
}

/// Join row attaching a tag to a zikr
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagMap {
    pub id: String,
    pub tag_id: String,
    pub zikr_id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub tag: Option<Tag>,
    pub zikr: Option<ZikrRef>,
}

impl TagMap {
    pub fn from_raw(raw: &Value) -> Self {
        Self {
            id: text(raw, &["id"]),
            tag_id: text(raw, &["tagId"]),
            zikr_id: text(raw, &["zikrId"]),
            created_at: timestamp(raw, &["createdAt"]),
            tag: raw.get("tag").filter(|t| t.is_object()).map(Tag::from_raw),
            zikr: raw
                .get("zikr")
                .filter(|z| z.is_object())
                .map(ZikrRef::from_raw),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTagMapRequest {
    pub tag_id: String,
    pub zikr_id: String,
}
