//! Create/edit forms
//!
//! A form edits a local draft (the create payload of its entity). Submit is
//! enabled only when the draft passes its local checks; the result either
//! navigates back to the entity's list or keeps the form open with the
//! upstream message.

use super::routes::Route;
use crate::api::ApiResponse;
use crate::config::is_supported_language;
use crate::models::{
    Collection, CollectionMap, CreateAttributeRequest, CreateCollectionMapRequest,
    CreateCollectionRequest, CreateHadithRequest, CreateHadithTranslationRequest,
    CreateTagMapRequest, CreateTagRequest, CreateZikrRequest, CreateZikrTranslationRequest,
    Hadith, HadithTranslation, QuranLine, QuranLineRequest, Tag, UpdateAttributeRequest,
    UpdateCollectionMapRequest, UpdateCollectionRequest, UpdateHadithRequest,
    UpdateHadithTranslationRequest, UpdateTagRequest, UpdateZikrRequest,
    UpdateZikrTranslationRequest, ZikrAttribute, ZikrTranslation,
};
use crate::services::{
    AttributeKind, AttributeService, CollectionMapService, CollectionService, HadithService,
    HadithTranslationService, QuranService, TagMapService, TagService, ZikrService,
    ZikrTranslationService,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    /// Editing the record with this id
    Edit(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    Navigate(Route),
    /// Stay on the form and show the message inline
    Error(String),
}

/// Local checks deciding whether the submit button is enabled.
/// Upstream still validates every payload.
pub trait FormDraft {
    /// Why the draft cannot be submitted yet, if anything
    fn invalid_reason(&self) -> Option<&'static str>;

    fn can_submit(&self) -> bool {
        self.invalid_reason().is_none()
    }

    fn list_route(&self) -> Route;
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn finish<T>(result: ApiResponse<T>, route: Route) -> FormOutcome {
    match result {
        ApiResponse::Success { .. } => FormOutcome::Navigate(route),
        ApiResponse::Failure { message } => FormOutcome::Error(message),
    }
}

fn rejected(draft: &impl FormDraft) -> Option<FormOutcome> {
    draft
        .invalid_reason()
        .map(|reason| FormOutcome::Error(reason.to_string()))
}

impl FormDraft for CreateZikrRequest {
    fn invalid_reason(&self) -> Option<&'static str> {
        blank(&self.text_ar).then_some("Arabic text is required")
    }

    fn list_route(&self) -> Route {
        Route::Zikrs
    }
}

impl FormDraft for CreateHadithRequest {
    fn invalid_reason(&self) -> Option<&'static str> {
        if blank(&self.text_ar) {
            Some("Arabic text is required")
        } else if blank(&self.reference) {
            Some("Reference is required")
        } else {
            None
        }
    }

    fn list_route(&self) -> Route {
        Route::Hadiths
    }
}

impl FormDraft for CreateCollectionRequest {
    fn invalid_reason(&self) -> Option<&'static str> {
        if blank(&self.text) {
            Some("Collection text is required")
        } else if self.order_index < 0 {
            Some("Order index cannot be negative")
        } else {
            None
        }
    }

    fn list_route(&self) -> Route {
        Route::Collections
    }
}

impl FormDraft for CreateCollectionMapRequest {
    fn invalid_reason(&self) -> Option<&'static str> {
        if blank(&self.collection_id) || blank(&self.zikr_id) {
            Some("Please select both collection and zikr")
        } else if self.count_value < 1 {
            Some("Count value must be at least 1")
        } else if self.order_index < 0 {
            Some("Order index cannot be negative")
        } else {
            None
        }
    }

    fn list_route(&self) -> Route {
        Route::CollectionMaps
    }
}

impl FormDraft for CreateTagRequest {
    fn invalid_reason(&self) -> Option<&'static str> {
        blank(&self.text).then_some("Tag text is required")
    }

    fn list_route(&self) -> Route {
        Route::Tags
    }
}

impl FormDraft for CreateTagMapRequest {
    fn invalid_reason(&self) -> Option<&'static str> {
        (blank(&self.tag_id) || blank(&self.zikr_id)).then_some("Please select both tag and zikr")
    }

    fn list_route(&self) -> Route {
        Route::TagMaps
    }
}

fn translation_reason(parent_id: &str, language: &str, text: &str) -> Option<&'static str> {
    if blank(parent_id) {
        Some("Please select a record to translate")
    } else if !is_supported_language(language) {
        Some("Please select a language")
    } else if blank(text) {
        Some("Translation is required")
    } else {
        None
    }
}

impl FormDraft for CreateZikrTranslationRequest {
    fn invalid_reason(&self) -> Option<&'static str> {
        translation_reason(&self.zikr_id, &self.language_code, &self.translation)
    }

    fn list_route(&self) -> Route {
        Route::ZikrTranslations
    }
}

impl FormDraft for CreateHadithTranslationRequest {
    fn invalid_reason(&self) -> Option<&'static str> {
        translation_reason(&self.hadith_id, &self.language_code, &self.translation)
    }

    fn list_route(&self) -> Route {
        Route::HadithTranslations
    }
}

impl FormDraft for CreateAttributeRequest {
    fn invalid_reason(&self) -> Option<&'static str> {
        if blank(&self.zikr_id) {
            Some("Please select a zikr")
        } else if blank(&self.text) {
            Some("Text is required")
        } else {
            None
        }
    }

    fn list_route(&self) -> Route {
        Route::RewardsQualities
    }
}

impl FormDraft for QuranLineRequest {
    fn invalid_reason(&self) -> Option<&'static str> {
        if self.page_number < 1 || self.line_number < 1 {
            Some("Page and line numbers must be positive")
        } else if blank(&self.text_ar) {
            Some("Arabic text is required")
        } else {
            None
        }
    }

    fn list_route(&self) -> Route {
        Route::Quran
    }
}

// Edit-mode drafts start from the loaded record

impl From<&Hadith> for CreateHadithRequest {
    fn from(hadith: &Hadith) -> Self {
        Self {
            zikr_id: hadith.zikr_id.clone(),
            text_ar: hadith.text_ar.clone(),
            reference: hadith.reference.clone(),
        }
    }
}

impl From<&Collection> for CreateCollectionRequest {
    fn from(collection: &Collection) -> Self {
        Self {
            text: collection.text.clone(),
            description: (!collection.description.is_empty())
                .then(|| collection.description.clone()),
            is_featured: collection.is_featured,
            order_index: collection.order_index,
        }
    }
}

impl From<&CollectionMap> for CreateCollectionMapRequest {
    fn from(map: &CollectionMap) -> Self {
        Self {
            collection_id: map.collection_id.clone(),
            zikr_id: map.zikr_id.clone(),
            count_type: map.count_type,
            count_value: map.count_value,
            order_index: map.order_index,
        }
    }
}

impl From<&Tag> for CreateTagRequest {
    fn from(tag: &Tag) -> Self {
        Self {
            text: tag.text.clone(),
        }
    }
}

impl From<&ZikrTranslation> for CreateZikrTranslationRequest {
    fn from(t: &ZikrTranslation) -> Self {
        Self {
            zikr_id: t.zikr_id.clone(),
            language_code: t.language_code.clone(),
            translation: t.translation.clone(),
        }
    }
}

impl From<&HadithTranslation> for CreateHadithTranslationRequest {
    fn from(t: &HadithTranslation) -> Self {
        Self {
            hadith_id: t.hadith_id.clone(),
            language_code: t.language_code.clone(),
            translation: t.translation.clone(),
        }
    }
}

impl From<&ZikrAttribute> for CreateAttributeRequest {
    fn from(a: &ZikrAttribute) -> Self {
        Self {
            zikr_id: a.zikr_id.clone(),
            text: a.text.clone(),
        }
    }
}

impl From<&QuranLine> for QuranLineRequest {
    fn from(line: &QuranLine) -> Self {
        Self {
            page_number: line.page_number,
            line_number: line.line_number,
            text_ar: line.text_ar.clone(),
        }
    }
}

pub async fn submit_zikr(
    service: &ZikrService,
    mode: &FormMode,
    draft: &CreateZikrRequest,
) -> FormOutcome {
    if let Some(outcome) = rejected(draft) {
        return outcome;
    }
    let mut draft = draft.clone();
    draft.char_count = draft.text_ar.chars().count() as i64;

    let result = match mode {
        FormMode::Create => service.create(&draft).await.map(|_| ()),
        FormMode::Edit(id) => service
            .update(&UpdateZikrRequest {
                id: id.clone(),
                fields: draft.clone(),
            })
            .await
            .map(|_| ()),
    };
    finish(result, draft.list_route())
}

pub async fn submit_hadith(
    service: &HadithService,
    mode: &FormMode,
    draft: &CreateHadithRequest,
) -> FormOutcome {
    if let Some(outcome) = rejected(draft) {
        return outcome;
    }
    let result = match mode {
        FormMode::Create => service.create(draft).await.map(|_| ()),
        FormMode::Edit(id) => service
            .update(&UpdateHadithRequest {
                id: id.clone(),
                fields: draft.clone(),
            })
            .await
            .map(|_| ()),
    };
    finish(result, draft.list_route())
}

pub async fn submit_collection(
    service: &CollectionService,
    mode: &FormMode,
    draft: &CreateCollectionRequest,
) -> FormOutcome {
    if let Some(outcome) = rejected(draft) {
        return outcome;
    }
    let result = match mode {
        FormMode::Create => service.create(draft).await.map(|_| ()),
        FormMode::Edit(id) => service
            .update(&UpdateCollectionRequest {
                id: id.clone(),
                fields: draft.clone(),
            })
            .await
            .map(|_| ()),
    };
    finish(result, draft.list_route())
}

pub async fn submit_collection_map(
    service: &CollectionMapService,
    mode: &FormMode,
    draft: &CreateCollectionMapRequest,
) -> FormOutcome {
    if let Some(outcome) = rejected(draft) {
        return outcome;
    }
    let result = match mode {
        FormMode::Create => service.create(draft).await.map(|_| ()),
        FormMode::Edit(id) => service
            .update(&UpdateCollectionMapRequest {
                id: id.clone(),
                fields: draft.clone(),
            })
            .await
            .map(|_| ()),
    };
    finish(result, draft.list_route())
}

pub async fn submit_tag(
    service: &TagService,
    mode: &FormMode,
    draft: &CreateTagRequest,
) -> FormOutcome {
    if let Some(outcome) = rejected(draft) {
        return outcome;
    }
    let result = match mode {
        FormMode::Create => service.create(draft).await.map(|_| ()),
        FormMode::Edit(id) => service
            .update(&UpdateTagRequest {
                id: id.clone(),
                text: draft.text.clone(),
            })
            .await
            .map(|_| ()),
    };
    finish(result, draft.list_route())
}

/// Tag mappings are created or deleted, never edited
pub async fn submit_tag_map(service: &TagMapService, draft: &CreateTagMapRequest) -> FormOutcome {
    if let Some(outcome) = rejected(draft) {
        return outcome;
    }
    finish(service.create(draft).await, draft.list_route())
}

pub async fn submit_zikr_translation(
    service: &ZikrTranslationService,
    mode: &FormMode,
    draft: &CreateZikrTranslationRequest,
) -> FormOutcome {
    if let Some(outcome) = rejected(draft) {
        return outcome;
    }
    let result = match mode {
        FormMode::Create => service.create(draft).await.map(|_| ()),
        FormMode::Edit(id) => service
            .update(&UpdateZikrTranslationRequest {
                id: id.clone(),
                fields: draft.clone(),
            })
            .await
            .map(|_| ()),
    };
    finish(result, draft.list_route())
}

pub async fn submit_hadith_translation(
    service: &HadithTranslationService,
    mode: &FormMode,
    draft: &CreateHadithTranslationRequest,
) -> FormOutcome {
    if let Some(outcome) = rejected(draft) {
        return outcome;
    }
    let result = match mode {
        FormMode::Create => service.create(draft).await.map(|_| ()),
        FormMode::Edit(id) => service
            .update(&UpdateHadithTranslationRequest {
                id: id.clone(),
                fields: draft.clone(),
            })
            .await
            .map(|_| ()),
    };
    finish(result, draft.list_route())
}

/// Quality and reward forms return to their own list
pub async fn submit_attribute(
    service: &AttributeService,
    mode: &FormMode,
    draft: &CreateAttributeRequest,
) -> FormOutcome {
    if let Some(outcome) = rejected(draft) {
        return outcome;
    }
    let result = match mode {
        FormMode::Create => service.create(draft).await.map(|_| ()),
        FormMode::Edit(id) => service
            .update(&UpdateAttributeRequest {
                id: id.clone(),
                fields: draft.clone(),
            })
            .await
            .map(|_| ()),
    };
    let route = match service.kind() {
        AttributeKind::Quality => Route::Qualities,
        AttributeKind::Reward => Route::Rewards,
    };
    finish(result, route)
}

/// Quran lines are keyed by page and line, so edit mode ignores the id
pub async fn submit_quran_line(
    service: &QuranService,
    mode: &FormMode,
    draft: &QuranLineRequest,
) -> FormOutcome {
    if let Some(outcome) = rejected(draft) {
        return outcome;
    }
    let result = match mode {
        FormMode::Create => service.add(draft).await,
        FormMode::Edit(_) => service.update(draft).await,
    };
    finish(result, draft.list_route())
}
