//! FILENAME: app/src-tauri/src/assets.rs
// PURPOSE: Startup checks for the fixed image assets.
// CONTEXT: The kiosk is not designed to run degraded; a missing banner or
// icon aborts startup before the window shows. The checks cover the exact
// files the window uses: the icon listed under bundle.icon and the banner
// the form page loads from the frontend dist.

use std::path::PathBuf;
use tauri::{AppHandle, Manager, Runtime};

/// Window icon. Also listed under `bundle.icon` in tauri.conf.json, which
/// is where the window picks it up; a test keeps the two in sync.
pub const WINDOW_ICON: &str = "assets/icon.png";

/// Banner image the form renders, relative to the frontend dist directory
/// (it must live there for the page to load it).
pub const WELCOME_BANNER: &str = "welcome.png";

/// Frontend dist directory, relative to this crate. Matches
/// `build.frontendDist` in tauri.conf.json; a test keeps the two in sync.
pub const FRONTEND_DIST: &str = "../../ui";

/// Verifies every fixed asset exists. Called from the Tauri setup hook;
/// an error here aborts the launch.
pub fn verify_startup_assets<R: Runtime>(app: &AppHandle<R>) -> Result<(), String> {
    let checks = [
        (WINDOW_ICON, resolve_resource(app, WINDOW_ICON)),
        (WELCOME_BANNER, resolve_frontend_asset(WELCOME_BANNER)),
    ];
    for (rel, resolved) in checks {
        match resolved {
            Some(path) => {
                log_info!("SYS", "asset ok: {}", path.display());
            }
            None => {
                log_error!("SYS", "required asset missing: {}", rel);
                return Err(format!("required asset missing: {}", rel));
            }
        }
    }
    Ok(())
}

/// Looks for a bundled resource in the resource directory first, then in
/// the crate directory for `tauri dev` runs. Returns None when absent.
pub fn resolve_resource<R: Runtime>(app: &AppHandle<R>, rel: &str) -> Option<PathBuf> {
    if let Ok(dir) = app.path().resource_dir() {
        let bundled = dir.join(rel);
        if bundled.exists() {
            return Some(bundled);
        }
    }
    let dev = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(rel);
    dev.exists().then_some(dev)
}

/// Locates a file in the frontend dist, the same tree the window serves
/// the page from. Returns None when absent.
pub fn resolve_frontend_asset(rel: &str) -> Option<PathBuf> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join(FRONTEND_DIST)
        .join(rel);
    path.exists().then_some(path)
}
