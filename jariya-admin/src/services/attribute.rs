//! Zikr quality and reward services
//!
//! Qualities (`/zikrQuality/*`) and rewards (`/zikrReward/*`) share one
//! record shape, so one service type covers both.

use super::resource::Resource;
use crate::api::{ApiClient, ApiResponse};
use crate::models::{CreateAttributeRequest, UpdateAttributeRequest, ZikrAttribute};

/// Which attribute family a service talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    Quality,
    Reward,
}

impl AttributeKind {
    pub fn resource_name(self) -> &'static str {
        match self {
            AttributeKind::Quality => "zikrQuality",
            AttributeKind::Reward => "zikrReward",
        }
    }
}

#[derive(Clone)]
pub struct AttributeService {
    kind: AttributeKind,
    resource: Resource,
}

impl AttributeService {
    pub fn new(client: ApiClient, kind: AttributeKind) -> Self {
        Self {
            kind,
            resource: Resource::new(client, kind.resource_name()),
        }
    }

    pub fn qualities(client: ApiClient) -> Self {
        Self::new(client, AttributeKind::Quality)
    }

    pub fn rewards(client: ApiClient) -> Self {
        Self::new(client, AttributeKind::Reward)
    }

    pub fn kind(&self) -> AttributeKind {
        self.kind
    }

    pub async fn get_all(&self) -> ApiResponse<Vec<ZikrAttribute>> {
        self.resource.get_all(ZikrAttribute::from_raw).await
    }

    pub async fn get_by_id(&self, id: &str) -> ApiResponse<ZikrAttribute> {
        self.resource.get_by_id(id, ZikrAttribute::from_raw).await
    }

    pub async fn create(&self, req: &CreateAttributeRequest) -> ApiResponse<ZikrAttribute> {
        tracing::info!(kind = ?self.kind, zikr_id = %req.zikr_id, "Creating zikr attribute");
        self.resource.create(req, ZikrAttribute::from_raw).await
    }

    pub async fn update(&self, req: &UpdateAttributeRequest) -> ApiResponse<ZikrAttribute> {
        self.resource.update(req, ZikrAttribute::from_raw).await
    }

    pub async fn delete(&self, id: &str) -> ApiResponse<()> {
        self.resource.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_names() {
        assert_eq!(AttributeKind::Quality.resource_name(), "zikrQuality");
        assert_eq!(AttributeKind::Reward.resource_name(), "zikrReward");
    }
}
