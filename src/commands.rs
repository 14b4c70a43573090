// ── Commands ─────────────────────────────────────────────────────────────────
//
// Thin `#[tauri::command]` wrappers over `crate::core`.  No behavior lives
// here beyond wiring the on-disk store and managed state into core calls.

mod profiles;
mod regions;
mod settings;

pub use profiles::*;
pub use regions::*;
pub use settings::*;
