//! Client-side joins
//!
//! List screens fetch a child resource plus the parents it references and
//! stitch them together here. Parents are indexed once by id, so each row
//! resolves its references with a map lookup. A dangling reference leaves
//! the related side as `None`.

use crate::models::{
    Collection, CollectionMap, Hadith, HadithTranslation, Tag, TagMap, Zikr, ZikrAttribute,
    ZikrTranslation,
};
use std::collections::HashMap;
use std::hash::Hash;

/// A row with one resolved reference
#[derive(Debug, Clone, PartialEq)]
pub struct Enriched<R, A> {
    pub row: R,
    pub related: Option<A>,
}

/// A row with two resolved references
#[derive(Debug, Clone, PartialEq)]
pub struct Joined<R, A, B> {
    pub row: R,
    pub left: Option<A>,
    pub right: Option<B>,
}

/// Index items by a key. On duplicate keys the last item wins.
pub fn index_by_key<'a, T, K, F>(items: &'a [T], key: F) -> HashMap<K, &'a T>
where
    K: Eq + Hash,
    F: Fn(&'a T) -> K,
{
    items.iter().map(|item| (key(item), item)).collect()
}

pub fn join_one<R, A, KA, KR>(
    rows: Vec<R>,
    related: &[A],
    related_key: KA,
    foreign_key: KR,
) -> Vec<Enriched<R, A>>
where
    A: Clone,
    KA: Fn(&A) -> &str,
    KR: Fn(&R) -> &str,
{
    let index = index_by_key(related, |a| related_key(a));

    rows.into_iter()
        .map(|row| {
            let related = index.get(foreign_key(&row)).map(|a| (*a).clone());
            Enriched { row, related }
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
pub fn join_two<R, A, B, KA, KB, RA, RB>(
    rows: Vec<R>,
    left: &[A],
    left_key: KA,
    left_fk: RA,
    right: &[B],
    right_key: KB,
    right_fk: RB,
) -> Vec<Joined<R, A, B>>
where
    A: Clone,
    B: Clone,
    KA: Fn(&A) -> &str,
    KB: Fn(&B) -> &str,
    RA: Fn(&R) -> &str,
    RB: Fn(&R) -> &str,
{
    let left_index = index_by_key(left, |a| left_key(a));
    let right_index = index_by_key(right, |b| right_key(b));

    rows.into_iter()
        .map(|row| {
            let left = left_index.get(left_fk(&row)).map(|a| (*a).clone());
            let right = right_index.get(right_fk(&row)).map(|b| (*b).clone());
            Joined { row, left, right }
        })
        .collect()
}

pub type CollectionMapRow = Joined<CollectionMap, Collection, Zikr>;
pub type TagMapRow = Joined<TagMap, Tag, Zikr>;
pub type ZikrTranslationRow = Enriched<ZikrTranslation, Zikr>;
pub type HadithTranslationRow = Enriched<HadithTranslation, Hadith>;
pub type HadithRow = Enriched<Hadith, Zikr>;
pub type AttributeRow = Enriched<ZikrAttribute, Zikr>;

pub fn join_collection_maps(
    maps: Vec<CollectionMap>,
    collections: &[Collection],
    zikrs: &[Zikr],
) -> Vec<CollectionMapRow> {
    join_two(
        maps,
        collections,
        |c| c.id.as_str(),
        |m| m.collection_id.as_str(),
        zikrs,
        |z| z.id.as_str(),
        |m| m.zikr_id.as_str(),
    )
}

pub fn join_tag_maps(maps: Vec<TagMap>, tags: &[Tag], zikrs: &[Zikr]) -> Vec<TagMapRow> {
    join_two(
        maps,
        tags,
        |t| t.id.as_str(),
        |m| m.tag_id.as_str(),
        zikrs,
        |z| z.id.as_str(),
        |m| m.zikr_id.as_str(),
    )
}

pub fn join_zikr_translations(
    translations: Vec<ZikrTranslation>,
    zikrs: &[Zikr],
) -> Vec<ZikrTranslationRow> {
    join_one(translations, zikrs, |z| z.id.as_str(), |t| t.zikr_id.as_str())
}

pub fn join_hadith_translations(
    translations: Vec<HadithTranslation>,
    hadiths: &[Hadith],
) -> Vec<HadithTranslationRow> {
    join_one(
        translations,
        hadiths,
        |h| h.id.as_str(),
        |t| t.hadith_id.as_str(),
    )
}

pub fn join_hadiths(hadiths: Vec<Hadith>, zikrs: &[Zikr]) -> Vec<HadithRow> {
    join_one(
        hadiths,
        zikrs,
        |z| z.id.as_str(),
        |h| h.zikr_id.as_deref().unwrap_or_default(),
    )
}

pub fn join_attributes(attributes: Vec<ZikrAttribute>, zikrs: &[Zikr]) -> Vec<AttributeRow> {
    join_one(attributes, zikrs, |z| z.id.as_str(), |a| a.zikr_id.as_str())
}
