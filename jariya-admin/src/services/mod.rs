//! Services module
//!
//! One service per upstream entity, each a thin typed layer over the API
//! client with per-entity normalization of what comes back.

pub mod attribute;
pub mod auth;
pub mod collection;
pub mod dashboard;
pub mod hadith;
pub mod quran;
pub mod resource;
pub mod tag;
pub mod translation;
pub mod zikr;

pub use attribute::{AttributeKind, AttributeService};
pub use auth::AuthService;
pub use collection::{CollectionMapService, CollectionService};
pub use dashboard::DashboardService;
pub use hadith::HadithService;
pub use quran::QuranService;
pub use resource::Resource;
pub use tag::{TagMapService, TagService};
pub use translation::{HadithTranslationService, ZikrTranslationService};
pub use zikr::ZikrService;
