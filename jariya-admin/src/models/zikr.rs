//! Zikr and Hadith records

use super::normalize::{flag, int, opt_text, text, timestamp};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A devotional text record, the primary content entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zikr {
    pub id: String,
    pub text_ar: String,
    pub title_en: String,
    pub title_ur: String,
    pub transliteration: String,
    pub quantity_notes: String,
    pub source_notes: String,
    pub is_quran: bool,
    pub is_hadith: bool,
    pub is_verified: bool,
    pub char_count: i64,
    pub verified_by_name: String,
    pub verified_date: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub is_deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Zikr {
    /// Normalize an upstream record, accepting both known revisions
    pub fn from_raw(raw: &Value) -> Self {
        Self {
            id: text(raw, &["id"]),
            text_ar: text(raw, &["textAr", "textArabic", "arabic_text"]),
            title_en: text(raw, &["titleEn"]),
            title_ur: text(raw, &["titleUr"]),
            transliteration: text(raw, &["transliteration"]),
            quantity_notes: text(raw, &["quantityNotes"]),
            source_notes: text(raw, &["sourceNotes"]),
            is_quran: flag(raw, &["isQuran"]),
            is_hadith: flag(raw, &["isHadith"]),
            is_verified: flag(raw, &["isVerified", "verified"]),
            char_count: int(raw, &["charCount"]),
            verified_by_name: text(raw, &["verifiedByName"]),
            verified_date: opt_text(raw, &["verifiedDate"]),
            created_at: timestamp(raw, &["createdAt", "created_at"]),
            updated_at: timestamp(raw, &["updatedAt", "updated_at"]),
            is_deleted: flag(raw, &["isDeleted"]),
            deleted_at: timestamp(raw, &["deletedAt"]),
        }
    }
}

/// Create zikr request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateZikrRequest {
    pub text_ar: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_ur: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transliteration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_notes: Option<String>,
    pub is_quran: bool,
    pub is_hadith: bool,
    pub is_verified: bool,
    pub char_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_by_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_date: Option<String>,
}

impl CreateZikrRequest {
    /// Request with only the Arabic text set; the character count follows the text
    pub fn new(text_ar: impl Into<String>) -> Self {
        let text_ar = text_ar.into();
        Self {
            char_count: text_ar.chars().count() as i64,
            text_ar,
            title_en: None,
            title_ur: None,
            transliteration: None,
            quantity_notes: None,
            source_notes: None,
            is_quran: false,
            is_hadith: false,
            is_verified: false,
            verified_by_name: None,
            verified_date: None,
        }
    }
}

impl From<&Zikr> for CreateZikrRequest {
    fn from(zikr: &Zikr) -> Self {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Self {
            text_ar: zikr.text_ar.clone(),
            title_en: non_empty(&zikr.title_en),
            title_ur: non_empty(&zikr.title_ur),
            transliteration: non_empty(&zikr.transliteration),
            quantity_notes: non_empty(&zikr.quantity_notes),
            source_notes: non_empty(&zikr.source_notes),
            is_quran: zikr.is_quran,
            is_hadith: zikr.is_hadith,
            is_verified: zikr.is_verified,
            char_count: zikr.char_count,
            verified_by_name: non_empty(&zikr.verified_by_name),
            verified_date: zikr.verified_date.clone(),
        }
    }
}

/// Update zikr request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateZikrRequest {
    pub id: String,
    #[serde(flatten)]
    pub fields: CreateZikrRequest,
}

/// Summary of the zikr a row refers to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZikrRef {
    pub text_ar: String,
    pub title_en: Option<String>,
}

impl ZikrRef {
    pub fn from_raw(raw: &Value) -> Self {
        Self {
            text_ar: text(raw, &["textAr", "textArabic"]),
            title_en: opt_text(raw, &["titleEn"]),
        }
    }
}

impl From<&Zikr> for ZikrRef {
    fn from(zikr: &Zikr) -> Self {
        Self {
            text_ar: zikr.text_ar.clone(),
            title_en: (!zikr.title_en.is_empty()).then(|| zikr.title_en.clone()),
        }
    }
}

/// A hadith, optionally attached to a zikr
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hadith {
    pub id: String,
    pub zikr_id: Option<String>,
    pub text_ar: String,
    pub reference: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub is_deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    /// Embedded zikr summary when upstream includes one
    pub zikr: Option<ZikrRef>,
}

impl Hadith {
    pub fn from_raw(raw: &Value) -> Self {
        Self {
            id: text(raw, &["id"]),
            zikr_id: opt_text(raw, &["zikrId"]),
            text_ar: text(raw, &["textAr", "textArabic"]),
            reference: text(raw, &["reference"]),
            created_at: timestamp(raw, &["createdAt"]),
            updated_at: timestamp(raw, &["updatedAt"]),
            is_deleted: flag(raw, &["isDeleted"]),
            deleted_at: timestamp(raw, &["deletedAt"]),
            zikr: raw
                .get("zikr")
                .filter(|z| z.is_object())
                .map(ZikrRef::from_raw),
        }
    }
}

/// Create hadith request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHadithRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zikr_id: Option<String>,
    pub text_ar: String,
    pub reference: String,
}

/// Update hadith request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHadithRequest {
    pub id: String,
    #[serde(flatten)]
    pub fields: CreateHadithRequest,
}
