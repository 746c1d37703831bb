//! Dashboard service
//!
//! Statistics and the recent-zikr panel, both derived from the zikr list.

use super::zikr::ZikrService;
use crate::api::ApiResponse;
use crate::config::RECENT_ZIKR_LIMIT;
use crate::models::{recent_zikrs, DashboardStats, RecentZikr};

#[derive(Clone)]
pub struct DashboardService {
    zikrs: ZikrService,
}

impl DashboardService {
    pub fn new(zikrs: ZikrService) -> Self {
        Self { zikrs }
    }

    pub async fn stats(&self) -> ApiResponse<DashboardStats> {
        let result = self
            .zikrs
            .get_all()
            .await
            .map(|zikrs| DashboardStats::from_zikrs(&zikrs));
        if let ApiResponse::Success { data, .. } = &result {
            tracing::info!(
                total = data.total_zikrs,
                verified = data.verified_zikrs,
                "Dashboard stats computed"
            );
        }
        result
    }

    pub async fn recent_zikrs(&self) -> ApiResponse<Vec<RecentZikr>> {
        match self.zikrs.get_all().await {
            ApiResponse::Success { data, .. } => {
                ApiResponse::success(recent_zikrs(&data, RECENT_ZIKR_LIMIT))
            }
            ApiResponse::Failure { message } => {
                tracing::error!("Failed to fetch recent zikrs: {}", message);
                ApiResponse::failure(message)
            }
        }
    }
}
