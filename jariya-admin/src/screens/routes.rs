//! Screen routes
//!
//! Every screen of the panel, with the URL path it is served under.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,

    Zikrs,
    ZikrAdd,
    ZikrEdit(String),
    ZikrView(String),

    Hadiths,
    HadithAdd,
    HadithEdit(String),

    Collections,
    CollectionAdd,
    CollectionView(String),
    CollectionMaps,
    CollectionMapAdd,
    CollectionMapEdit(String),
    CollectionMapView(String),

    Tags,
    TagMaps,

    ZikrTranslations,
    ZikrTranslationAdd,
    ZikrTranslationEdit(String),
    HadithTranslations,
    HadithTranslationAdd,
    HadithTranslationView(String),

    RewardsQualities,
    Qualities,
    QualityAdd,
    QualityEdit(String),
    QualityView(String),
    Rewards,
    RewardAdd,
    RewardEdit(String),
    RewardView(String),

    Quran,
    QuranAdd,
    QuranEdit { page: i64, line: i64 },
    QuranView { page: i64, line: i64 },
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Dashboard => "/admin".to_string(),

            Route::Zikrs => "/admin/zikrs".to_string(),
            Route::ZikrAdd => "/admin/zikrs/add".to_string(),
            Route::ZikrEdit(id) => format!("/admin/zikrs/edit/{}", id),
            Route::ZikrView(id) => format!("/admin/zikrs/view/{}", id),

            Route::Hadiths => "/admin/hadiths".to_string(),
            Route::HadithAdd => "/admin/hadiths/add".to_string(),
            Route::HadithEdit(id) => format!("/admin/hadiths/edit/{}", id),

            Route::Collections => "/admin/collections".to_string(),
            Route::CollectionAdd => "/admin/collections/add".to_string(),
            Route::CollectionView(id) => format!("/admin/collections/view/{}", id),
            Route::CollectionMaps => "/admin/collections/mapping".to_string(),
            Route::CollectionMapAdd => "/admin/collections/mapping/add".to_string(),
            Route::CollectionMapEdit(id) => format!("/admin/collections/mapping/edit/{}", id),
            Route::CollectionMapView(id) => format!("/admin/collections/mapping/view/{}", id),

            Route::Tags => "/admin/tags".to_string(),
            Route::TagMaps => "/admin/tags/mapping".to_string(),

            Route::ZikrTranslations => "/admin/translations/zikr".to_string(),
            Route::ZikrTranslationAdd => "/admin/translations/zikr/add".to_string(),
            Route::ZikrTranslationEdit(id) => format!("/admin/translations/zikr/edit/{}", id),
            Route::HadithTranslations => "/admin/translations/hadith".to_string(),
            Route::HadithTranslationAdd => "/admin/translations/hadith/add".to_string(),
            Route::HadithTranslationView(id) => format!("/admin/translations/hadith/view/{}", id),

            Route::RewardsQualities => "/admin/rewards-qualities".to_string(),
            Route::Qualities => "/admin/rewards-qualities/qualities".to_string(),
            Route::QualityAdd => "/admin/rewards-qualities/qualities/add".to_string(),
            Route::QualityEdit(id) => format!("/admin/rewards-qualities/qualities/edit/{}", id),
            Route::QualityView(id) => format!("/admin/rewards-qualities/qualities/view/{}", id),
            Route::Rewards => "/admin/rewards-qualities/rewards".to_string(),
            Route::RewardAdd => "/admin/rewards-qualities/rewards/add".to_string(),
            Route::RewardEdit(id) => format!("/admin/rewards-qualities/rewards/edit/{}", id),
            Route::RewardView(id) => format!("/admin/rewards-qualities/rewards/view/{}", id),

            Route::Quran => "/admin/quran".to_string(),
            Route::QuranAdd => "/admin/quran/add".to_string(),
            Route::QuranEdit { page, line } => format!("/admin/quran/edit/{}/{}", page, line),
            Route::QuranView { page, line } => format!("/admin/quran/view/{}/{}", page, line),
        }
    }

    /// Resolve a URL path back to its screen
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.split('?').next().unwrap_or_default();
        let segments: Vec<&str> = path
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        let route = match segments.as_slice() {
            ["login"] => Route::Login,
            ["admin"] => Route::Dashboard,

            ["admin", "zikrs"] => Route::Zikrs,
            ["admin", "zikrs", "add"] => Route::ZikrAdd,
            ["admin", "zikrs", "edit", i] => Route::ZikrEdit(i.to_string()),
            ["admin", "zikrs", "view", i] => Route::ZikrView(i.to_string()),

            ["admin", "hadiths"] => Route::Hadiths,
            ["admin", "hadiths", "add"] => Route::HadithAdd,
            ["admin", "hadiths", "edit", i] => Route::HadithEdit(i.to_string()),

            ["admin", "collections"] => Route::Collections,
            ["admin", "collections", "add"] => Route::CollectionAdd,
            ["admin", "collections", "view", i] => Route::CollectionView(i.to_string()),
            ["admin", "collections", "mapping"] => Route::CollectionMaps,
            ["admin", "collections", "mapping", "add"] => Route::CollectionMapAdd,
            ["admin", "collections", "mapping", "edit", i] => Route::CollectionMapEdit(i.to_string()),
            ["admin", "collections", "mapping", "view", i] => Route::CollectionMapView(i.to_string()),

            ["admin", "tags"] => Route::Tags,
            ["admin", "tags", "mapping"] => Route::TagMaps,

            ["admin", "translations", "zikr"] => Route::ZikrTranslations,
            ["admin", "translations", "zikr", "add"] => Route::ZikrTranslationAdd,
            ["admin", "translations", "zikr", "edit", i] => Route::ZikrTranslationEdit(i.to_string()),
            ["admin", "translations", "hadith"] => Route::HadithTranslations,
            ["admin", "translations", "hadith", "add"] => Route::HadithTranslationAdd,
            ["admin", "translations", "hadith", "view", i] => {
                Route::HadithTranslationView(i.to_string())
            }

            ["admin", "rewards-qualities"] => Route::RewardsQualities,
            ["admin", "rewards-qualities", "qualities"] => Route::Qualities,
            ["admin", "rewards-qualities", "qualities", "add"] => Route::QualityAdd,
            ["admin", "rewards-qualities", "qualities", "edit", i] => Route::QualityEdit(i.to_string()),
            ["admin", "rewards-qualities", "qualities", "view", i] => Route::QualityView(i.to_string()),
            ["admin", "rewards-qualities", "rewards"] => Route::Rewards,
            ["admin", "rewards-qualities", "rewards", "add"] => Route::RewardAdd,
            ["admin", "rewards-qualities", "rewards", "edit", i] => Route::RewardEdit(i.to_string()),
            ["admin", "rewards-qualities", "rewards", "view", i] => Route::RewardView(i.to_string()),

            ["admin", "quran"] => Route::Quran,
            ["admin", "quran", "add"] => Route::QuranAdd,
            ["admin", "quran", "edit", p, l] => Route::QuranEdit {
                page: p.parse().ok()?,
                line: l.parse().ok()?,
            },
            ["admin", "quran", "view", p, l] => Route::QuranView {
                page: p.parse().ok()?,
                line: l.parse().ok()?,
            },

            _ => return None,
        };
        Some(route)
    }

    /// Every screen except login needs a signed-in admin
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Login)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
