//! Zikr and Hadith translations

use super::normalize::{flag, opt_text, text, timestamp};
use super::zikr::ZikrRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Summary of the hadith a translation refers to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HadithRef {
    pub text_ar: String,
    pub reference: Option<String>,
}

impl HadithRef {
    pub fn from_raw(raw: &Value) -> Self {
        Self {
            text_ar: text(raw, &["textAr", "textArabic"]),
            reference: opt_text(raw, &["reference"]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZikrTranslation {
    pub id: String,
    pub zikr_id: String,
    /// One of `config::LANGUAGES`
    pub language_code: String,
    pub translation: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub is_deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub zikr: Option<ZikrRef>,
}

impl ZikrTranslation {
    pub fn from_raw(raw: &Value) -> Self {
        Self {
            id: text(raw, &["id"]),
            zikr_id: text(raw, &["zikrId"]),
            language_code: text(raw, &["languageCode", "language"]).to_lowercase(),
            translation: text(raw, &["translation"]),
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateZikrTranslationRequest {
    pub zikr_id: String,
    pub language_code: String,
    pub translation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateZikrTranslationRequest {
    pub id: String,
    #[serde(flatten)]
    pub fields: CreateZikrTranslationRequest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HadithTranslation {
    pub id: String,
    pub hadith_id: String,
    pub language_code: String,
    pub translation: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub is_deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub hadith: Option<HadithRef>,
}

impl HadithTranslation {
    pub fn from_raw(raw: &Value) -> Self {
        Self {
            id: text(raw, &["id"]),
            hadith_id: text(raw, &["hadithId"]),
            language_code: text(raw, &["languageCode", "language"]).to_lowercase(),
            translation: text(raw, &["translation"]),
            created_at: timestamp(raw, &["createdAt"]),
            updated_at: timestamp(raw, &["updatedAt"]),
            is_deleted: flag(raw, &["isDeleted"]),
            deleted_at: timestamp(raw, &["deletedAt"]),
            hadith: raw
                .get("hadith")
                .filter(|h| h.is_object())
                .map(HadithRef::from_raw),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHadithTranslationRequest {
    pub hadith_id: String,
    pub language_code: String,
    pub translation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHadithTranslationRequest {
    pub id: String,
    #[serde(flatten)]
    pub fields: CreateHadithTranslationRequest,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_zikr_translation_both_revisions() {
        let current = ZikrTranslation::from_raw(&json!({
            "id": "tr1", "zikrId": "z1", "languageCode": "en", "translation": "Glory be to Allah"
        }));
        let legacy = ZikrTranslation::from_raw(&json!({
            "id": "tr1", "zikrId": "z1", "language": "EN", "translation": "Glory be to Allah"
        }));
        assert_eq!(current.language_code, "en");
        assert_eq!(legacy.language_code, "en");
        assert_eq!(current.translation, legacy.translation);
    }

    #[test]
    fn test_hadith_translation_embedded_hadith() {
        let t = HadithTranslation::from_raw(&json!({
            "id": "ht1",
            "hadithId": "h1",
            "languageCode": "ur",
            "translation": "...",
            "hadith": {"textArabic": "إنما الأعمال بالنيات", "reference": "Bukhari 1"}
        }));
        let hadith = t.hadith.unwrap();
        assert_eq!(hadith.text_ar, "إنما الأعمال بالنيات");
        assert_eq!(hadith.reference.as_deref(), Some("Bukhari 1"));
    }

    #[test]
    fn test_create_translation_wire_shape() {
        let req = CreateHadithTranslationRequest {
            hadith_id: "h1".to_string(),
            language_code: "tr".to_string(),
            translation: "Ameller niyetlere göredir".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["hadithId"], "h1");
        assert_eq!(json["languageCode"], "tr");
    }
}
