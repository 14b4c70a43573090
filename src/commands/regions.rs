use tauri::State;

use crate::core;

// ── Display Regions ──────────────────────────────────────────────────────────
//
// Selecting a profile works in two steps: the page calls `begin_selection`
// for a generation token, then fires the three region fetches concurrently.
// Each fetch resolves on its own; results from a superseded selection come
// back `stale` and are dropped by the page.

#[tauri::command]
pub fn begin_selection(tracker: State<'_, core::SelectionTracker>) -> u64 {
    tracker.begin()
}

#[tauri::command]
pub async fn fetch_profile_card(
    username: String,
    token: u64,
    tracker: State<'_, core::SelectionTracker>,
) -> Result<core::RegionUpdate<core::ProfileCard>, String> {
    let client = core::ApiClient::from_settings()?;
    let response = client.fetch_profile(&username).await?;
    Ok(tracker.gate(token, core::ProfileCard::from_response(&response)))
}

#[tauri::command]
pub async fn fetch_rank_card(
    username: String,
    token: u64,
    tracker: State<'_, core::SelectionTracker>,
) -> Result<core::RegionUpdate<core::RankCard>, String> {
    let client = core::ApiClient::from_settings()?;
    let response = client.fetch_rank(&username).await?;
    Ok(tracker.gate(token, core::RankCard::from_response(&response)))
}

#[tauri::command]
pub async fn fetch_award_list(
    username: String,
    token: u64,
    tracker: State<'_, core::SelectionTracker>,
) -> Result<core::RegionUpdate<Vec<core::AwardItem>>, String> {
    let client = core::ApiClient::from_settings()?;
    let response = client.fetch_awards(&username).await?;
    Ok(tracker.gate(token, core::award_items(&response)))
}
