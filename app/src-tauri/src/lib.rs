//! FILENAME: app/src-tauri/src/lib.rs
// PURPOSE: Main library entry point (Tauri Bridge).
// CONTEXT: Wires the catalog, form session, and Masterfile persistence into
// the kiosk window. All mutable state lives in AppState; nothing is ambient.

use catalog::CourseCatalog;
use session::FormSession;
use std::path::PathBuf;
use std::sync::Mutex;

pub mod logging;

pub mod api_types;
pub mod assets;
pub mod commands;

pub use logging::{init_log_file, next_seq, write_log};

#[cfg(test)]
mod tests;

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Fixed relative name of the sign-in log. The kiosk opens it in place and
/// never creates it.
pub const MASTERFILE_NAME: &str = "Masterfile.xlsx";

pub struct AppState {
    /// The one interactive form session (single window, single student at
    /// a time).
    pub session: Mutex<FormSession>,
    /// Resolved location of the Masterfile, fixed for the process lifetime.
    pub masterfile: PathBuf,
}

pub fn create_app_state(masterfile: PathBuf) -> AppState {
    log_info!("SYS", "Creating AppState, masterfile={}", masterfile.display());
    let mut session = FormSession::new(CourseCatalog::shared());
    // Audit trail for the one cross-field rule the form has.
    session.on_prefix_change(Box::new(|prefix, courses| {
        log_info!("FORM", "prefix -> {} ({} courses)", prefix, courses.len());
    }));
    AppState {
        session: Mutex::new(session),
        masterfile,
    }
}

/// The Masterfile sits next to the executable on the kiosk machine; during
/// development it is picked up from the working directory.
pub fn masterfile_path() -> PathBuf {
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            let beside_exe = dir.join(MASTERFILE_NAME);
            if beside_exe.exists() {
                return beside_exe;
            }
        }
    }
    PathBuf::from(MASTERFILE_NAME)
}

// ============================================================================
// TAURI APP ENTRY
// ============================================================================

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    match init_log_file() {
        Ok(path) => {
            log_info!("SYS", "Kiosk backend starting, log={}", path.display());
        }
        Err(e) => {
            eprintln!("[LOG_INIT] FAILED: {}", e);
            eprintln!("[LOG_INIT] Continuing with console-only logging");
        }
    }

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_log::Builder::new().build())
        .manage(create_app_state(masterfile_path()))
        .setup(|app| {
            assets::verify_startup_assets(app.handle())?;

            let state: tauri::State<AppState> = app.state();
            if !state.masterfile.exists() {
                log_error!(
                    "SYS",
                    "Masterfile missing at {}",
                    state.masterfile.display()
                );
                return Err(format!(
                    "sign-in log not found: {} (create it from the Tutor Center template first)",
                    state.masterfile.display()
                )
                .into());
            }
            log_info!("SYS", "Masterfile ok: {}", state.masterfile.display());
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Form commands
            commands::get_form_options,
            commands::select_prefix,
            commands::select_major,
            commands::select_class_rank,
            commands::select_course,
            commands::sign_in,
            // Logging commands
            logging::log_frontend,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
