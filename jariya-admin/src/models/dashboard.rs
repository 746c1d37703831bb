//! Dashboard aggregates derived from the zikr list

use super::zikr::Zikr;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_zikrs: usize,
    pub verified_zikrs: usize,
    pub pending_zikrs: usize,
    pub quran_zikrs: usize,
    pub hadith_zikrs: usize,
    /// Percentage of verified zikrs, 0 when there are none
    pub verification_rate: f64,
}

impl DashboardStats {
    pub fn from_zikrs(zikrs: &[Zikr]) -> Self {
        // Every record the list returns counts, soft-deleted ones included
        let total = zikrs.len();
        let verified = zikrs.iter().filter(|z| z.is_verified).count();

        let verification_rate = if total > 0 {
            verified as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        Self {
            total_zikrs: total,
            verified_zikrs: verified,
            pending_zikrs: total - verified,
            quran_zikrs: zikrs.iter().filter(|z| z.is_quran).count(),
            hadith_zikrs: zikrs.iter().filter(|z| z.is_hadith).count(),
            verification_rate,
        }
    }
}

/// Compact row for the "recently added" panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentZikr {
    pub id: String,
    pub text_ar: String,
    pub transliteration: String,
    pub verified: bool,
    pub created_at: Option<DateTime<Utc>>,
}

/// The `limit` most recently created zikrs, newest first.
/// Records without a creation time sort last.
pub fn recent_zikrs(zikrs: &[Zikr], limit: usize) -> Vec<RecentZikr> {
    let mut sorted: Vec<&Zikr> = zikrs.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    sorted
        .into_iter()
        .take(limit)
        .map(|z| RecentZikr {
            id: z.id.clone(),
            text_ar: z.text_ar.replace('"', ""),
            transliteration: z.transliteration.clone(),
            verified: z.is_verified,
            created_at: z.created_at,
        })
        .collect()
}
