//! Collection services
//!
//! Collections (`/collection/*`) and the collection-to-zikr mappings
//! (`/collectionMap/*`).

use super::resource::Resource;
use crate::api::{ApiClient, ApiResponse};
use crate::models::{
    Collection, CollectionMap, CreateCollectionMapRequest, CreateCollectionRequest,
    UpdateCollectionMapRequest, UpdateCollectionRequest,
};

/// Service for managing collections
#[derive(Clone)]
pub struct CollectionService {
    resource: Resource,
}

impl CollectionService {
    pub fn new(client: ApiClient) -> Self {
        Self {
            resource: Resource::new(client, "collection"),
        }
    }

    /// List all collections, in display order
    pub async fn get_all(&self) -> ApiResponse<Vec<Collection>> {
        self.resource
            .get_all(Collection::from_raw)
            .await
            .map(|mut collections| {
                collections.sort_by_key(|c| c.order_index);
                collections
            })
    }

    pub async fn get_by_id(&self, id: &str) -> ApiResponse<Collection> {
        self.resource.get_by_id(id, Collection::from_raw).await
    }

    pub async fn create(&self, req: &CreateCollectionRequest) -> ApiResponse<Collection> {
        tracing::info!("Creating collection: {}", req.text);
        self.resource.create(req, Collection::from_raw).await
    }

    pub async fn update(&self, req: &UpdateCollectionRequest) -> ApiResponse<Collection> {
        tracing::info!("Updating collection: {}", req.id);
        self.resource.update(req, Collection::from_raw).await
    }

    pub async fn delete(&self, id: &str) -> ApiResponse<()> {
        self.resource.delete(id).await
    }
}

/// Service for managing collection mappings
#[derive(Clone)]
pub struct CollectionMapService {
    resource: Resource,
}

impl CollectionMapService {
    pub fn new(client: ApiClient) -> Self {
        Self {
            resource: Resource::new(client, "collectionMap"),
        }
    }

    pub async fn get_all(&self) -> ApiResponse<Vec<CollectionMap>> {
        self.resource.get_all(CollectionMap::from_raw).await
    }

    pub async fn get_by_id(&self, id: &str) -> ApiResponse<CollectionMap> {
        self.resource.get_by_id(id, CollectionMap::from_raw).await
    }

    pub async fn create(&self, req: &CreateCollectionMapRequest) -> ApiResponse<CollectionMap> {
        tracing::info!(
            collection_id = %req.collection_id,
            zikr_id = %req.zikr_id,
            "Creating collection map"
        );
        self.resource.create(req, CollectionMap::from_raw).await
    }

    pub async fn update(&self, req: &UpdateCollectionMapRequest) -> ApiResponse<CollectionMap> {
        tracing::info!("Updating collection map: {}", req.id);
        self.resource.update(req, CollectionMap::from_raw).await
    }

    pub async fn delete(&self, id: &str) -> ApiResponse<()> {
        self.resource.delete(id).await
    }
}
