use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::api::{ApiClient, ProfileResponse};
use super::storage::KeyValueStore;

// ── Profile Store ("profiles" key) ───────────────────────────────────────────
//
// The full set of tracked usernames, persisted as one JSON object keyed by
// username.  Every read re-parses the stored value and every write
// re-serializes the whole set.  Rank and award data are never persisted.

pub const PROFILES_KEY: &str = "profiles";

/// Cached display metadata for one tracked username.  Created when a
/// username is first added and never mutated in place afterwards.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrackedProfile {
    pub photo_url: String,
    pub first_name: String,
    pub last_name: String,
    pub id: String,
}

/// Username → profile.  Usernames are unique, case-sensitive keys.
pub type ProfileSet = HashMap<String, TrackedProfile>;

/// Read the persisted set.  An absent key is an empty set; a malformed
/// stored document is an error the caller sees.
pub fn read_profiles(store: &dyn KeyValueStore) -> Result<ProfileSet, String> {
    match store.read(PROFILES_KEY)? {
        Some(raw) => {
            serde_json::from_str(&raw).map_err(|e| format!("Invalid profile data: {}", e))
        }
        None => Ok(ProfileSet::new()),
    }
}

pub fn write_profiles(store: &dyn KeyValueStore, profiles: &ProfileSet) -> Result<(), String> {
    let raw = serde_json::to_string(profiles).map_err(|e| e.to_string())?;
    store.write(PROFILES_KEY, &raw)
}

// ── Add / Remove ─────────────────────────────────────────────────────────────

/// What happened on an add attempt.  Transport and parse failures are a
/// separate `Err` — these three are the handled outcomes.
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    Added(TrackedProfile),
    /// The username is already tracked; nothing was fetched or written.
    AlreadyExists,
    /// The API answered with an `error` field; nothing was written.
    RemoteError(String),
}

/// Add `username` to the tracked set.
///
/// Duplicates short-circuit before any network traffic.  Otherwise the
/// profile endpoint is fetched once to validate the username and capture
/// its display fields, and the full set is re-persisted with the new entry.
pub async fn add_profile(
    store: &dyn KeyValueStore,
    client: &ApiClient,
    username: &str,
) -> Result<AddOutcome, String> {
    let mut profiles = read_profiles(store)?;

    if profiles.contains_key(username) {
        return Ok(AddOutcome::AlreadyExists);
    }

    let response = client.fetch_profile(username).await?;

    if let Some(message) = response.error {
        return Ok(AddOutcome::RemoteError(message));
    }

    let profile = tracked_profile_from(&response);
    profiles.insert(username.to_string(), profile.clone());
    write_profiles(store, &profiles)?;

    Ok(AddOutcome::Added(profile))
}

/// Remove `username` if present.  Absent usernames are a silent no-op and
/// nothing is rewritten.
pub fn remove_profile(store: &dyn KeyValueStore, username: &str) -> Result<(), String> {
    let mut profiles = read_profiles(store)?;

    if profiles.remove(username).is_some() {
        write_profiles(store, &profiles)?;
    }

    Ok(())
}

fn tracked_profile_from(response: &ProfileResponse) -> TrackedProfile {
    TrackedProfile {
        photo_url: response.profile_photo_url.clone(),
        first_name: response.profile_user.first_name.clone(),
        last_name: response.profile_user.last_name.clone(),
        id: response.profile_user.id.clone(),
    }
}

// ── Selector Options ─────────────────────────────────────────────────────────

/// Dropdown option for one tracked profile.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProfileOption {
    /// Display label, "first last".
    pub name: String,
    /// The username, passed back on selection.
    pub value: String,
}

/// Build the dropdown options from the set.  Stored order carries no
/// meaning (the set is a map), so label order is imposed here to keep the
/// dropdown stable across rebuilds.
pub fn profile_options(profiles: &ProfileSet) -> Vec<ProfileOption> {
    let mut options: Vec<ProfileOption> = profiles
        .iter()
        .map(|(username, p)| ProfileOption {
            name: format!("{} {}", p.first_name, p.last_name),
            value: username.clone(),
        })
        .collect();

    options.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.value.cmp(&b.value)));
    options
}

// ── Notices ──────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Green,
    Yellow,
    Red,
}

/// Toast payload shown by the page after an add attempt.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub display_secs: u64,
    pub level: NoticeLevel,
}

impl AddOutcome {
    pub fn notice(&self) -> Notice {
        match self {
            AddOutcome::Added(_) => Notice {
                title: "Profile Added".to_string(),
                message: "The Trailhead profile associated with the provided username has been added"
                    .to_string(),
                display_secs: 8,
                level: NoticeLevel::Green,
            },
            AddOutcome::AlreadyExists => Notice {
                title: "Profile already exists".to_string(),
                message:
                    "The Trailhead profile associated with the provided username already exists"
                        .to_string(),
                display_secs: 8,
                level: NoticeLevel::Yellow,
            },
            AddOutcome::RemoteError(message) => Notice {
                title: "An unexpected error occurred".to_string(),
                message: message.clone(),
                display_secs: 10,
                level: NoticeLevel::Red,
            },
        }
    }
}
