//! Zikr service
//!
//! CRUD for zikrs against `/zikr/*`.

use super::resource::Resource;
use crate::api::{ApiClient, ApiResponse};
use crate::models::{CreateZikrRequest, UpdateZikrRequest, Zikr};

/// Service for managing zikrs
#[derive(Clone)]
pub struct ZikrService {
    resource: Resource,
}

impl ZikrService {
    pub fn new(client: ApiClient) -> Self {
        Self {
            resource: Resource::new(client, "zikr"),
        }
    }

    /// List all zikrs
    pub async fn get_all(&self) -> ApiResponse<Vec<Zikr>> {
        self.resource.get_all(Zikr::from_raw).await
    }

    /// Get a zikr by ID
    pub async fn get_by_id(&self, id: &str) -> ApiResponse<Zikr> {
        self.resource.get_by_id(id, Zikr::from_raw).await
    }

    /// Create a new zikr
    pub async fn create(&self, req: &CreateZikrRequest) -> ApiResponse<Zikr> {
        tracing::info!(
            is_quran = req.is_quran,
            is_hadith = req.is_hadith,
            verified = req.is_verified,
            "Creating zikr"
        );
        self.resource.create(req, Zikr::from_raw).await
    }

    /// Update a zikr
    pub async fn update(&self, req: &UpdateZikrRequest) -> ApiResponse<Zikr> {
        tracing::info!("Updating zikr: {}", req.id);
        self.resource.update(req, Zikr::from_raw).await
    }

    /// Delete a zikr (soft delete upstream)
    pub async fn delete(&self, id: &str) -> ApiResponse<()> {
        self.resource.delete(id).await
    }
}
