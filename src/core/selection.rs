use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

use super::api::{AwardsResponse, ProfileResponse, RankResponse};

// ── Selection Generations ────────────────────────────────────────────────────
//
// Selecting a profile fires three independent fetches with no cancellation.
// Each selection gets a generation token; a region result is applied only if
// its token is still the current one, so a slow response for a previous
// selection can never overwrite a newer one.

#[derive(Default)]
pub struct SelectionTracker {
    current: AtomicU64,
}

impl SelectionTracker {
    /// Start a new selection and return its token.
    pub fn begin(&self) -> u64 {
        self.current.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.current.load(Ordering::SeqCst) == token
    }

    /// Wrap a fetched value: fresh if `token` still matches, stale otherwise.
    pub fn gate<T>(&self, token: u64, value: T) -> RegionUpdate<T> {
        if self.is_current(token) {
            RegionUpdate::Fresh(value)
        } else {
            RegionUpdate::Stale
        }
    }
}

/// Outcome of one region fetch, as seen by the page.  Stale results carry
/// no payload — the page drops them without touching the region.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "status", content = "data", rename_all = "lowercase")]
pub enum RegionUpdate<T> {
    Fresh(T),
    Stale,
}

// ── Region View-Models ───────────────────────────────────────────────────────

/// Bio card for the profile region.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProfileCard {
    pub photo_url: String,
    pub full_name: String,
    /// "role at company".
    pub tagline: String,
    /// Free-text bio, empty when the profile has none.
    pub about: String,
}

impl ProfileCard {
    pub fn from_response(response: &ProfileResponse) -> Self {
        let user = &response.profile_user;
        Self {
            photo_url: response.profile_photo_url.clone(),
            full_name: format!("{} {}", user.first_name, user.last_name),
            tagline: format!("{} at {}", user.role, user.company),
            about: user.about.clone().unwrap_or_default(),
        }
    }
}

/// Four-statistic strip for the rank region.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RankCard {
    pub rank_image_url: String,
    pub completed_trails: u64,
    pub badges: u64,
    pub points: u64,
}

impl RankCard {
    pub fn from_response(response: &RankResponse) -> Self {
        Self {
            rank_image_url: response.rank_image_url.clone(),
            completed_trails: response.completed_trail_total,
            badges: response.earned_badge_total,
            points: response.earned_point_total,
        }
    }
}

/// One row of the awards region.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AwardItem {
    pub label: String,
    pub image_url: String,
    pub learning_url: String,
    pub award_type: String,
}

pub fn award_items(response: &AwardsResponse) -> Vec<AwardItem> {
    response
        .awards
        .iter()
        .map(|entry| AwardItem {
            label: entry.award.label.clone(),
            image_url: entry.award.image_url.clone(),
            learning_url: entry.award.learning_url.clone(),
            award_type: entry.award_type.clone(),
        })
        .collect()
}
