//! Tag services
//!
//! Tags (`/tag/*`) and tag-to-zikr mappings (`/tagMap/*`).
//! Upstream has no update operation for tag maps.

use super::resource::Resource;
use crate::api::{ApiClient, ApiResponse};
use crate::models::{CreateTagMapRequest, CreateTagRequest, Tag, TagMap, UpdateTagRequest};

#[derive(Clone)]
pub struct TagService {
    resource: Resource,
}

impl TagService {
    pub fn new(client: ApiClient) -> Self {
        Self {
            resource: Resource::new(client, "tag"),
        }
    }

    pub async fn get_all(&self) -> ApiResponse<Vec<Tag>> {
        self.resource.get_all(Tag::from_raw).await
    }

    pub async fn get_by_id(&self, id: &str) -> ApiResponse<Tag> {
        self.resource.get_by_id(id, Tag::from_raw).await
    }

    pub async fn create(&self, req: &CreateTagRequest) -> ApiResponse<Tag> {
        tracing::info!("Creating tag: {}", req.text);
        self.resource.create(req, Tag::from_raw).await
    }

    pub async fn update(&self, req: &UpdateTagRequest) -> ApiResponse<Tag> {
        self.resource.update(req, Tag::from_raw).await
    }

    pub async fn delete(&self, id: &str) -> ApiResponse<()> {
        self.resource.delete(id).await
    }
}

#[derive(Clone)]
pub struct TagMapService {
    resource: Resource,
}

impl TagMapService {
    pub fn new(client: ApiClient) -> Self {
        Self {
            resource: Resource::new(client, "tagMap"),
        }
    }

    pub async fn get_all(&self) -> ApiResponse<Vec<TagMap>> {
        self.resource.get_all(TagMap::from_raw).await
    }

    pub async fn get_by_id(&self, id: &str) -> ApiResponse<TagMap> {
        self.resource.get_by_id(id, TagMap::from_raw).await
    }

    pub async fn create(&self, req: &CreateTagMapRequest) -> ApiResponse<TagMap> {
        tracing::info!(tag_id = %req.tag_id, zikr_id = %req.zikr_id, "Creating tag map");
        self.resource.create(req, TagMap::from_raw).await
    }

    pub async fn delete(&self, id: &str) -> ApiResponse<()> {
        self.resource.delete(id).await
    }
}
