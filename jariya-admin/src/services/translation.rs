//! Translation services
//!
//! Zikr translations (`/zikrTranslation/*`) and hadith translations
//! (`/hadithTranslation/*`).

use super::resource::Resource;
use crate::api::{ApiClient, ApiResponse};
use crate::models::{
    CreateHadithTranslationRequest, CreateZikrTranslationRequest, HadithTranslation,
    UpdateHadithTranslationRequest, UpdateZikrTranslationRequest, ZikrTranslation,
};

#[derive(Clone)]
pub struct ZikrTranslationService {
    resource: Resource,
}

impl ZikrTranslationService {
    pub fn new(client: ApiClient) -> Self {
        Self {
            resource: Resource::new(client, "zikrTranslation"),
        }
    }

    pub async fn get_all(&self) -> ApiResponse<Vec<ZikrTranslation>> {
        self.resource.get_all(ZikrTranslation::from_raw).await
    }

    pub async fn get_by_id(&self, id: &str) -> ApiResponse<ZikrTranslation> {
        self.resource.get_by_id(id, ZikrTranslation::from_raw).await
    }

    pub async fn create(&self, req: &CreateZikrTranslationRequest) -> ApiResponse<ZikrTranslation> {
        tracing::info!(zikr_id = %req.zikr_id, language = %req.language_code, "Creating zikr translation");
        self.resource.create(req, ZikrTranslation::from_raw).await
    }

    pub async fn update(&self, req: &UpdateZikrTranslationRequest) -> ApiResponse<ZikrTranslation> {
        self.resource.update(req, ZikrTranslation::from_raw).await
    }

    pub async fn delete(&self, id: &str) -> ApiResponse<()> {
        self.resource.delete(id).await
    }
}

#[derive(Clone)]
pub struct HadithTranslationService {
    resource: Resource,
}

impl HadithTranslationService {
    pub fn new(client: ApiClient) -> Self {
        Self {
            resource: Resource::new(client, "hadithTranslation"),
        }
    }

    pub async fn get_all(&self) -> ApiResponse<Vec<HadithTranslation>> {
        self.resource.get_all(HadithTranslation::from_raw).await
    }

    pub async fn get_by_id(&self, id: &str) -> ApiResponse<HadithTranslation> {
        self.resource.get_by_id(id, HadithTranslation::from_raw).await
    }

    pub async fn create(
        &self,
        req: &CreateHadithTranslationRequest,
    ) -> ApiResponse<HadithTranslation> {
        tracing::info!(hadith_id = %req.hadith_id, language = %req.language_code, "Creating hadith translation");
        self.resource.create(req, HadithTranslation::from_raw).await
    }

    pub async fn update(
        &self,
        req: &UpdateHadithTranslationRequest,
    ) -> ApiResponse<HadithTranslation> {
        self.resource.update(req, HadithTranslation::from_raw).await
    }

    pub async fn delete(&self, id: &str) -> ApiResponse<()> {
        self.resource.delete(id).await
    }
}
