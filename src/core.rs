// ── Core ─────────────────────────────────────────────────────────────────────
//
// Everything the webview page needs lives behind the thin command layer in
// `crate::commands`; the modules here hold the actual behavior.

pub mod api;
pub mod paths;
pub mod profiles;
pub mod selection;
pub mod settings;
pub mod storage;

pub use api::*;
pub use paths::*;
pub use profiles::*;
pub use selection::*;
pub use settings::*;
pub use storage::*;
