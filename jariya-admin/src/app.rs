//! Application state and initialization
//!
//! This module wires the API client, session and every entity service
//! into one `AppState` that screens borrow from.

use crate::api::ApiClient;
use crate::config::{Config, PROXY_BASE_PATH};
use crate::error::Result;
use crate::services::{
    AttributeService, AuthService, CollectionMapService, CollectionService, DashboardService,
    HadithService, HadithTranslationService, QuranService, TagMapService, TagService,
    ZikrService, ZikrTranslationService,
};
use crate::session::{FileSessionStore, SessionService};
use std::sync::Arc;

/// Central application state holding all services
#[derive(Clone)]
pub struct AppState {
    pub client: ApiClient,
    pub session: SessionService,
    pub auth: AuthService,
    pub zikrs: ZikrService,
    pub hadiths: HadithService,
    pub collections: CollectionService,
    pub collection_maps: CollectionMapService,
    pub tags: TagService,
    pub tag_maps: TagMapService,
    pub zikr_translations: ZikrTranslationService,
    pub hadith_translations: HadithTranslationService,
    pub qualities: AttributeService,
    pub rewards: AttributeService,
    pub quran: QuranService,
    pub dashboard: DashboardService,
}

impl AppState {
    pub fn new(client: ApiClient, session: SessionService) -> Self {
        let zikrs = ZikrService::new(client.clone());
        Self {
            auth: AuthService::new(client.clone(), session.clone()),
            hadiths: HadithService::new(client.clone()),
            collections: CollectionService::new(client.clone()),
            collection_maps: CollectionMapService::new(client.clone()),
            tags: TagService::new(client.clone()),
            tag_maps: TagMapService::new(client.clone()),
            zikr_translations: ZikrTranslationService::new(client.clone()),
            hadith_translations: HadithTranslationService::new(client.clone()),
            qualities: AttributeService::qualities(client.clone()),
            rewards: AttributeService::rewards(client.clone()),
            quran: QuranService::new(client.clone()),
            dashboard: DashboardService::new(zikrs.clone()),
            zikrs,
            session,
            client,
        }
    }
}

/// Build state for a panel talking to the relay at `origin`
/// (e.g. "http://127.0.0.1:3000"), with the session kept in the data directory.
pub fn setup(config: &Config, origin: &str) -> Result<AppState> {
    tracing::info!("Initializing application");

    std::fs::create_dir_all(&config.data_dir)?;
    tracing::info!("App data directory: {:?}", config.data_dir);

    let client = ApiClient::new(format!(
        "{}{}",
        origin.trim_end_matches('/'),
        PROXY_BASE_PATH
    ))?;
    let session = SessionService::new(Arc::new(FileSessionStore::new(&config.data_dir)));

    tracing::info!("Application initialized successfully");
    Ok(AppState::new(client, session))
}
