//! FILENAME: app/src-tauri/src/commands.rs
// PURPOSE: Form commands (The Tauri Bridge for the sign-in form).
// CONTEXT: The frontend renders whatever these commands return; all form
// rules live in the session crate, not in JavaScript.

use crate::api_types::{FormOptions, FormSelection, SignInAck};
use crate::AppState;
use tauri::State;

/// Menus and current selections for the initial render. The catalog is
/// read once here and again on every prefix change.
#[tauri::command]
pub fn get_form_options(state: State<AppState>) -> Result<FormOptions, String> {
    let session = state.session.lock().map_err(|e| e.to_string())?;
    let catalog = session.catalog();
    Ok(FormOptions {
        majors: catalog.majors().iter().map(|m| m.to_string()).collect(),
        class_ranks: catalog.class_ranks().iter().map(|r| r.to_string()).collect(),
        prefixes: catalog.prefixes().iter().map(|p| p.to_string()).collect(),
        courses: session.course_options().to_vec(),
        selection: FormSelection::from(session.state()),
    })
}

/// Prefix changed: repopulate the course menu. The first entry of the
/// returned list is the new course selection.
#[tauri::command]
pub fn select_prefix(state: State<AppState>, prefix: String) -> Result<Vec<String>, String> {
    let mut session = state.session.lock().map_err(|e| e.to_string())?;
    Ok(session.set_prefix(&prefix).to_vec())
}

#[tauri::command]
pub fn select_major(state: State<AppState>, major: String) -> Result<(), String> {
    let mut session = state.session.lock().map_err(|e| e.to_string())?;
    session.set_major(&major);
    Ok(())
}

#[tauri::command]
pub fn select_class_rank(state: State<AppState>, class_rank: String) -> Result<(), String> {
    let mut session = state.session.lock().map_err(|e| e.to_string())?;
    session.set_class_rank(&class_rank);
    Ok(())
}

#[tauri::command]
pub fn select_course(state: State<AppState>, course: String) -> Result<(), String> {
    let mut session = state.session.lock().map_err(|e| e.to_string())?;
    session.set_course(&course);
    Ok(())
}

/// Sign-in pressed. Validates the A-number, captures a timestamped record,
/// appends it to the Masterfile in one open/append/save cycle, and only
/// then clears the A-number field. A validation or append failure comes
/// back as the user-facing error string with all state and the log
/// untouched, so the student can retry without retyping.
#[tauri::command]
pub fn sign_in(
    state: State<AppState>,
    anumber: String,
    major: String,
    class_rank: String,
    prefix: String,
    course_name: String,
) -> Result<SignInAck, String> {
    let mut session = state.session.lock().map_err(|e| e.to_string())?;

    session.set_major(&major);
    session.set_class_rank(&class_rank);
    if session.state().prefix != prefix {
        // A stale prefix here means the frontend drifted; resync through the
        // normal repopulation path before trusting the course name.
        session.set_prefix(&prefix);
    }
    session.set_course(&course_name);
    session.set_anumber(&anumber);

    let record = session.submit().map_err(|e| {
        log_warn!("CMD", "sign_in rejected: {}", e);
        e.to_string()
    })?;

    let row = persistence::append_sign_in(&state.masterfile, &record).map_err(|e| {
        log_error!("LOG", "append failed: {}", e);
        e.to_string()
    })?;

    // The record is on disk; now the entry can go.
    session.clear_anumber();

    log_info!(
        "CMD",
        "sign_in recorded row={} prefix={} course={:?}",
        row,
        record.course_prefix,
        record.course_name
    );

    Ok(SignInAck {
        message: "Thank you!".to_string(),
        row,
        record,
    })
}
