//! Hadith service
//!
//! CRUD for hadiths against `/zikrHadith/*`.

use super::resource::Resource;
use crate::api::{ApiClient, ApiResponse};
use crate::models::{CreateHadithRequest, Hadith, UpdateHadithRequest};

#[derive(Clone)]
pub struct HadithService {
    resource: Resource,
}

impl HadithService {
    pub fn new(client: ApiClient) -> Self {
        Self {
            resource: Resource::new(client, "zikrHadith"),
        }
    }

    pub async fn get_all(&self) -> ApiResponse<Vec<Hadith>> {
        self.resource.get_all(Hadith::from_raw).await
    }

    pub async fn get_by_id(&self, id: &str) -> ApiResponse<Hadith> {
        self.resource.get_by_id(id, Hadith::from_raw).await
    }

    pub async fn create(&self, req: &CreateHadithRequest) -> ApiResponse<Hadith> {
        tracing::info!("Creating hadith: {}", req.reference);
        self.resource.create(req, Hadith::from_raw).await
    }

    pub async fn update(&self, req: &UpdateHadithRequest) -> ApiResponse<Hadith> {
        tracing::info!("Updating hadith: {}", req.id);
        self.resource.update(req, Hadith::from_raw).await
    }

    pub async fn delete(&self, id: &str) -> ApiResponse<()> {
        self.resource.delete(id).await
    }
}
