//! List screen loaders
//!
//! Each loader fetches what its screen needs (concurrently when it joins
//! several resources) and returns a ready `TableView`. A joined screen
//! renders only when every fetch succeeded.

use super::join::{
    join_attributes, join_collection_maps, join_hadith_translations, join_hadiths, join_tag_maps,
    join_zikr_translations, AttributeRow, CollectionMapRow, Enriched, HadithRow,
    HadithTranslationRow, Joined, TagMapRow, ZikrTranslationRow,
};
use super::table::{LoadState, Searchable, TableView};
use crate::api::ApiResponse;
use crate::app::AppState;
use crate::config::language_name;
use crate::models::{Collection, DashboardStats, QuranLine, RecentZikr, Tag, Zikr};
use crate::services::AttributeService;

impl Searchable for Zikr {
    fn row_id(&self) -> String {
        self.id.clone()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.text_ar.as_str(),
            self.title_en.as_str(),
            self.title_ur.as_str(),
            self.transliteration.as_str(),
        ]
    }
}

impl Searchable for Collection {
    fn row_id(&self) -> String {
        self.id.clone()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.text.as_str(), self.description.as_str()]
    }
}

impl Searchable for Tag {
    fn row_id(&self) -> String {
        self.id.clone()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.text.as_str()]
    }
}

impl Searchable for QuranLine {
    fn row_id(&self) -> String {
        format!("{}:{}", self.page_number, self.line_number)
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.text_ar.as_str()]
    }
}

impl Searchable for HadithRow {
    fn row_id(&self) -> String {
        self.row.id.clone()
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.row.text_ar.as_str(), self.row.reference.as_str()];
        if let Some(zikr) = &self.related {
            fields.push(zikr.text_ar.as_str());
        }
        fields
    }
}

impl Searchable for CollectionMapRow {
    fn row_id(&self) -> String {
        self.row.id.clone()
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.row.id.as_str()];
        if let Some(collection) = &self.left {
            fields.push(collection.text.as_str());
        }
        if let Some(zikr) = &self.right {
            fields.push(zikr.text_ar.as_str());
            fields.push(zikr.title_en.as_str());
        }
        fields
    }
}

impl Searchable for TagMapRow {
    fn row_id(&self) -> String {
        self.row.id.clone()
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = Vec::new();
        if let Some(tag) = &self.left {
            fields.push(tag.text.as_str());
        }
        if let Some(zikr) = &self.right {
            fields.push(zikr.text_ar.as_str());
        }
        fields
    }
}

impl Searchable for ZikrTranslationRow {
    fn row_id(&self) -> String {
        self.row.id.clone()
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.row.translation.as_str(),
            language_name(&self.row.language_code),
        ];
        if let Some(zikr) = &self.related {
            fields.push(zikr.text_ar.as_str());
        }
        fields
    }
}

impl Searchable for HadithTranslationRow {
    fn row_id(&self) -> String {
        self.row.id.clone()
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.row.translation.as_str(),
            language_name(&self.row.language_code),
        ];
        if let Some(hadith) = &self.related {
            fields.push(hadith.text_ar.as_str());
        }
        fields
    }
}

impl Searchable for AttributeRow {
    fn row_id(&self) -> String {
        self.row.id.clone()
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.row.text.as_str()];
        if let Some(zikr) = &self.related {
            fields.push(zikr.text_ar.as_str());
        }
        fields
    }
}

/// First failure among the fetches of a joined screen
fn first_failure(messages: &[Option<&str>]) -> Option<String> {
    messages.iter().flatten().next().map(|m| m.to_string())
}

fn failure_of<T>(response: &ApiResponse<T>) -> Option<&str> {
    match response {
        ApiResponse::Failure { message } => Some(message.as_str()),
        ApiResponse::Success { .. } => None,
    }
}

pub async fn load_zikrs(state: &AppState) -> TableView<Zikr> {
    TableView::from_response(state.zikrs.get_all().await)
}

pub async fn load_collections(state: &AppState) -> TableView<Collection> {
    TableView::from_response(state.collections.get_all().await)
}

pub async fn load_tags(state: &AppState) -> TableView<Tag> {
    TableView::from_response(state.tags.get_all().await)
}

pub async fn load_hadiths(state: &AppState) -> TableView<HadithRow> {
    let (hadiths, zikrs) = tokio::join!(state.hadiths.get_all(), state.zikrs.get_all());

    if let Some(message) = first_failure(&[failure_of(&hadiths), failure_of(&zikrs)]) {
        return TableView::failed(message);
    }
    match (hadiths.into_data(), zikrs.into_data()) {
        (Some(hadiths), Some(zikrs)) => TableView::loaded(join_hadiths(hadiths, &zikrs)),
        _ => TableView::failed("Failed to load hadiths"),
    }
}

pub async fn load_collection_maps(state: &AppState) -> TableView<CollectionMapRow> {
    let (maps, collections, zikrs) = tokio::join!(
        state.collection_maps.get_all(),
        state.collections.get_all(),
        state.zikrs.get_all()
    );

    if let Some(message) = first_failure(&[
        failure_of(&maps),
        failure_of(&collections),
        failure_of(&zikrs),
    ]) {
        tracing::warn!("Collection mapping screen failed to load: {}", message);
        return TableView::failed(message);
    }
    match (maps.into_data(), collections.into_data(), zikrs.into_data()) {
        (Some(maps), Some(collections), Some(zikrs)) => {
            TableView::loaded(join_collection_maps(maps, &collections, &zikrs))
        }
        _ => TableView::failed("Failed to load collection mappings"),
    }
}

pub async fn load_tag_maps(state: &AppState) -> TableView<TagMapRow> {
    let (maps, tags, zikrs) = tokio::join!(
        state.tag_maps.get_all(),
        state.tags.get_all(),
        state.zikrs.get_all()
    );

    if let Some(message) =
        first_failure(&[failure_of(&maps), failure_of(&tags), failure_of(&zikrs)])
    {
        return TableView::failed(message);
    }
    match (maps.into_data(), tags.into_data(), zikrs.into_data()) {
        (Some(maps), Some(tags), Some(zikrs)) => {
            TableView::loaded(join_tag_maps(maps, &tags, &zikrs))
        }
        _ => TableView::failed("Failed to load tag mappings"),
    }
}

pub async fn load_zikr_translations(state: &AppState) -> TableView<ZikrTranslationRow> {
    let (translations, zikrs) =
        tokio::join!(state.zikr_translations.get_all(), state.zikrs.get_all());

    if let Some(message) = first_failure(&[failure_of(&translations), failure_of(&zikrs)]) {
        return TableView::failed(message);
    }
    match (translations.into_data(), zikrs.into_data()) {
        (Some(translations), Some(zikrs)) => {
            TableView::loaded(join_zikr_translations(translations, &zikrs))
        }
        _ => TableView::failed("Failed to load translations"),
    }
}

pub async fn load_hadith_translations(state: &AppState) -> TableView<HadithTranslationRow> {
    let (translations, hadiths) =
        tokio::join!(state.hadith_translations.get_all(), state.hadiths.get_all());

    if let Some(message) = first_failure(&[failure_of(&translations), failure_of(&hadiths)]) {
        return TableView::failed(message);
    }
    match (translations.into_data(), hadiths.into_data()) {
        (Some(translations), Some(hadiths)) => {
            TableView::loaded(join_hadith_translations(translations, &hadiths))
        }
        _ => TableView::failed("Failed to load translations"),
    }
}

/// Load qualities or rewards, depending on the service passed in
pub async fn load_attributes(
    state: &AppState,
    attributes: &AttributeService,
) -> TableView<AttributeRow> {
    let (rows, zikrs) = tokio::join!(attributes.get_all(), state.zikrs.get_all());

    if let Some(message) = first_failure(&[failure_of(&rows), failure_of(&zikrs)]) {
        return TableView::failed(message);
    }
    match (rows.into_data(), zikrs.into_data()) {
        (Some(rows), Some(zikrs)) => TableView::loaded(join_attributes(rows, &zikrs)),
        _ => TableView::failed("Failed to load records"),
    }
}

/// Dashboard panels load independently; one failing does not blank the other
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub stats: LoadState<DashboardStats>,
    pub recent: LoadState<Vec<RecentZikr>>,
}

pub async fn load_dashboard(state: &AppState) -> DashboardView {
    let (stats, recent) = tokio::join!(
        state.dashboard.stats(),
        state.dashboard.recent_zikrs()
    );
    DashboardView {
        stats: stats.into(),
        recent: recent.into(),
    }
}

/// Detail screens (view/edit) load one record by id
pub async fn load_detail<T, F, Fut>(id: &str, fetch: F) -> LoadState<T>
where
    F: FnOnce(String) -> Fut,
    Fut: std::future::Future<Output = ApiResponse<T>>,
{
    if id.trim().is_empty() {
        return LoadState::Failed("Missing record id".to_string());
    }
    fetch(id.to_string()).await.into()
}

/// Mapping view/edit screen: the mapping first, then its collection and
/// zikr together. Any failed fetch fails the whole screen.
pub async fn load_collection_map_detail(
    state: &AppState,
    id: &str,
) -> LoadState<CollectionMapRow> {
    if id.trim().is_empty() {
        return LoadState::Failed("Missing record id".to_string());
    }
    let map = match state.collection_maps.get_by_id(id).await.into_result() {
        Ok(map) => map,
        Err(message) => return LoadState::Failed(message),
    };

    let (collection, zikr) = tokio::join!(
        state.collections.get_by_id(&map.collection_id),
        state.zikrs.get_by_id(&map.zikr_id)
    );
    if let Some(message) = first_failure(&[failure_of(&collection), failure_of(&zikr)]) {
        tracing::warn!(id, "Collection mapping detail failed to load: {}", message);
        return LoadState::Failed(message);
    }

    LoadState::Loaded(Joined {
        row: map,
        left: collection.into_data(),
        right: zikr.into_data(),
    })
}

/// Quality or reward view/edit screen: the record, then the zikr it belongs to
pub async fn load_attribute_detail(
    state: &AppState,
    attributes: &AttributeService,
    id: &str,
) -> LoadState<AttributeRow> {
    if id.trim().is_empty() {
        return LoadState::Failed("Missing record id".to_string());
    }
    let row = match attributes.get_by_id(id).await.into_result() {
        Ok(row) => row,
        Err(message) => return LoadState::Failed(message),
    };

    match state.zikrs.get_by_id(&row.zikr_id).await.into_result() {
        Ok(zikr) => LoadState::Loaded(Enriched {
            row,
            related: Some(zikr),
        }),
        Err(message) => LoadState::Failed(message),
    }
}
