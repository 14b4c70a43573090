use crate::core;

// ── Profile Store ────────────────────────────────────────────────────────────

#[tauri::command]
pub fn get_profiles() -> Result<core::ProfileSet, String> {
    let store = core::FileStore::default_location()?;
    core::read_profiles(&store)
}

/// Dropdown options for the tracked set (label "first last", value username).
#[tauri::command]
pub fn get_profile_options() -> Result<Vec<core::ProfileOption>, String> {
    let store = core::FileStore::default_location()?;
    let profiles = core::read_profiles(&store)?;
    Ok(core::profile_options(&profiles))
}

/// Add a username: fetches the profile once to validate and capture display
/// fields, then persists.  The returned notice is toasted by the page.
#[tauri::command]
pub async fn add_profile(username: String) -> Result<core::Notice, String> {
    let store = core::FileStore::default_location()?;
    let client = core::ApiClient::from_settings()?;
    let outcome = core::add_profile(&store, &client, &username).await?;
    Ok(outcome.notice())
}

#[tauri::command]
pub fn remove_profile(username: String) -> Result<(), String> {
    let store = core::FileStore::default_location()?;
    core::remove_profile(&store, &username)
}
