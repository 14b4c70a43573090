pub mod core;

mod commands;

// ── App Entry ────────────────────────────────────────────────────────────────

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use commands::*;

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .manage(core::SelectionTracker::default())
        .setup(|_app| {
            // Report how many profiles are already tracked; a malformed
            // store shows up here instead of failing silently later.
            match core::FileStore::default_location()
                .and_then(|store| core::read_profiles(&store))
            {
                Ok(profiles) => {
                    eprintln!("[trailtrack] tracking {} profile(s)", profiles.len())
                }
                Err(e) => eprintln!("[trailtrack] profile store error: {}", e),
            }
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            get_profiles,
            get_profile_options,
            add_profile,
            remove_profile,
            begin_selection,
            fetch_profile_card,
            fetch_rank_card,
            fetch_award_list,
            read_settings,
            write_settings,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
