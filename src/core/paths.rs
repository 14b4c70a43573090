use std::path::PathBuf;

// ── Path Helpers ─────────────────────────────────────────────────────────────

/// App data directory — holds the persisted profile set and settings.
pub fn get_trailtrack_dir() -> Result<PathBuf, String> {
    let home = dirs::home_dir().ok_or("Could not find home directory")?;
    Ok(home.join(".trailtrack"))
}
