//! Entity models
//!
//! Rust shapes for the records owned by the upstream API.
//! Every entity has a `from_raw` mapping that normalizes the known upstream
//! variants (renamed fields, stringly numbers, missing values) into one shape.

pub mod admin;
pub mod attribute;
pub mod collection;
pub mod dashboard;
pub mod normalize;
pub mod quran;
pub mod tag;
pub mod translation;
pub mod zikr;

pub use admin::{Admin, LoginRequest};
pub use attribute::{
    AttributeZikr, CreateAttributeRequest, UpdateAttributeRequest, ZikrAttribute, ZikrQuality,
    ZikrReward,
};
pub use collection::{
    Collection, CollectionMap, CountType, CreateCollectionMapRequest, CreateCollectionRequest,
    UpdateCollectionMapRequest, UpdateCollectionRequest,
};
pub use dashboard::{recent_zikrs, DashboardStats, RecentZikr};
pub use quran::{order_lines, QuranLine, QuranLineRequest};
pub use tag::{CreateTagMapRequest, CreateTagRequest, Tag, TagMap, UpdateTagRequest};
pub use translation::{
    CreateHadithTranslationRequest, CreateZikrTranslationRequest, HadithRef, HadithTranslation,
    UpdateHadithTranslationRequest, UpdateZikrTranslationRequest, ZikrTranslation,
};
pub use zikr::{
    CreateHadithRequest, CreateZikrRequest, Hadith, UpdateHadithRequest, UpdateZikrRequest, Zikr,
    ZikrRef,
};
