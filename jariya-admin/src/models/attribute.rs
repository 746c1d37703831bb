//! Zikr qualities and rewards
//!
//! Both are free-text notes attached to a zikr and share one shape.

use super::normalize::{flag, opt_text, text, timestamp};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Zikr summary embedded in quality/reward rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeZikr {
    pub text_ar: String,
    pub title_en: Option<String>,
    pub title_ur: Option<String>,
}

/// A quality or reward text attached to a zikr
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZikrAttribute {
    pub id: String,
    pub zikr_id: String,
    pub text: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub is_deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub zikr: Option<AttributeZikr>,
}

pub type ZikrQuality = ZikrAttribute;
pub type ZikrReward = ZikrAttribute;

impl ZikrAttribute {
    pub fn from_raw(raw: &Value) -> Self {
        Self {
            id: text(raw, &["id"]),
            zikr_id: text(raw, &["zikrId"]),
            text: text(raw, &["text", "description"]),
            created_at: timestamp(raw, &["createdAt"]),
            updated_at: timestamp(raw, &["updatedAt"]),
            is_deleted: flag(raw, &["isDeleted"]),
            deleted_at: timestamp(raw, &["deletedAt"]),
            zikr: raw
                .get("zikr")
                .filter(|z| z.is_object())
                .map(|z| AttributeZikr {
                    text_ar: text(z, &["textAr", "textArabic"]),
                    title_en: opt_text(z, &["titleEn"]),
                    title_ur: opt_text(z, &["titleUr"]),
                }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAttributeRequest {
    pub zikr_id: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAttributeRequest {
    pub id: String,
    #[serde(flatten)]
    pub fields: CreateAttributeRequest,
}
