#[cfg(test)]
use super::*;
use crate::api_types::{FormOptions, FormSelection, SignInAck};
use persistence::{append_sign_in, PersistenceError, LOG_COLUMNS, LOG_SHEET_NAME};
use session::{validate_anumber, SignInRecord};
use tempfile::TempDir;

#[test]
fn test_app_state_seeds_form_defaults() {
    let state = create_app_state(PathBuf::from(MASTERFILE_NAME));
    let session = state.session.lock().unwrap();
    let catalog = CourseCatalog::shared();
    assert_eq!(session.state().major, catalog.majors()[0]);
    assert_eq!(session.state().prefix, catalog.prefixes()[0]);
    assert!(session.state().anumber.is_empty());
    assert_eq!(state.masterfile, PathBuf::from(MASTERFILE_NAME));
}

#[test]
fn test_masterfile_path_has_fixed_name() {
    let path = masterfile_path();
    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some(MASTERFILE_NAME)
    );
}

#[test]
fn test_form_options_serialize_camel_case() {
    let options = FormOptions {
        majors: vec!["COSC".to_string()],
        class_ranks: vec!["Junior".to_string()],
        prefixes: vec!["CS".to_string()],
        courses: vec!["CS 1400: Computer Science 1".to_string()],
        selection: FormSelection {
            anumber: String::new(),
            major: "COSC".to_string(),
            class_rank: "Junior".to_string(),
            prefix: "CS".to_string(),
            course: "CS 1400: Computer Science 1".to_string(),
        },
    };
    let json = serde_json::to_value(&options).unwrap();
    assert!(json.get("classRanks").is_some());
    assert!(json["selection"].get("classRank").is_some());
}

#[test]
fn test_sign_in_ack_serializes_camel_case_throughout() {
    let ack = SignInAck {
        message: "Thank you!".to_string(),
        row: 1,
        record: SignInRecord {
            anumber: "A01112223".to_string(),
            class_rank: "Junior".to_string(),
            major: "COSC".to_string(),
            course_prefix: "CS".to_string(),
            course_name: "CS 1400: Computer Science 1".to_string(),
            date: "Wednesday,August 26,2026".to_string(),
            day: "Wednesday".to_string(),
            time_in: "09:30 AM".to_string(),
        },
    };
    let json = serde_json::to_value(&ack).unwrap();
    assert!(json["record"].get("classRank").is_some());
    assert!(json["record"].get("timeIn").is_some());
    assert!(json["record"].get("coursePrefix").is_some());
    assert!(json["record"].get("class_rank").is_none());
}

#[test]
fn test_rejection_message_matches_dialog_text() {
    let err = validate_anumber("B01234567").unwrap_err();
    assert_eq!(err.to_string(), "Please check your A-Number and try again.");
}

/// The startup checks must cover the files the window actually uses: the
/// icon wired into bundle.icon and the banner the page loads from the
/// frontend dist.
#[test]
fn test_startup_checks_cover_the_served_assets() {
    let conf: serde_json::Value =
        serde_json::from_str(include_str!("../tauri.conf.json")).unwrap();

    let icons = conf["bundle"]["icon"].as_array().unwrap();
    assert!(icons.iter().any(|i| i.as_str() == Some(assets::WINDOW_ICON)));
    assert_eq!(conf["build"]["frontendDist"], assets::FRONTEND_DIST);

    let banner = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join(assets::FRONTEND_DIST)
        .join(assets::WELCOME_BANNER);
    assert!(banner.exists(), "banner missing from frontend dist");

    let page = include_str!("../../../ui/index.html");
    assert!(
        page.contains(&format!("src=\"{}\"", assets::WELCOME_BANNER)),
        "form page does not reference the checked banner"
    );
}

/// Full submission path: session submit feeding the Masterfile append, the
/// same composition `commands::sign_in` performs.
#[test]
fn test_end_to_end_submission() {
    let dir = TempDir::new().unwrap();
    let masterfile = dir.path().join(MASTERFILE_NAME);
    {
        let mut xlsx = rust_xlsxwriter::Workbook::new();
        let ws = xlsx.add_worksheet();
        ws.set_name(LOG_SHEET_NAME).unwrap();
        for (col, header) in LOG_COLUMNS.iter().enumerate() {
            ws.write_string(0, col as u16, *header).unwrap();
        }
        xlsx.save(&masterfile).unwrap();
    }

    let state = create_app_state(masterfile.clone());
    let mut session = state.session.lock().unwrap();
    session.set_major("COSC");
    session.set_class_rank("Junior");
    session.set_prefix("CS");
    session.set_anumber("A01112223");

    let record = session.submit().unwrap();
    let row = append_sign_in(&state.masterfile, &record).unwrap();
    session.clear_anumber();
    assert_eq!(row, 1);
    assert!(session.state().anumber.is_empty());

    let mut workbook: calamine::Xlsx<_> = calamine::open_workbook(&masterfile).unwrap();
    let range = calamine::Reader::worksheet_range(&mut workbook, LOG_SHEET_NAME).unwrap();
    let rows: Vec<Vec<String>> = range
        .rows()
        .map(|r| r.iter().map(|c| c.to_string()).collect())
        .collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][0], "A01112223");
    assert_eq!(rows[1][3], "CS");
    assert_eq!(rows[1][4], "CS 1400: Computer Science 1");
}

/// A failed append must leave the A-number entry in place: nothing was
/// persisted, so the student retries instead of retyping.
#[test]
fn test_failed_append_keeps_anumber_for_retry() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join(MASTERFILE_NAME);

    let state = create_app_state(missing);
    let mut session = state.session.lock().unwrap();
    session.set_anumber("A01112223");

    let record = session.submit().unwrap();
    let err = append_sign_in(&state.masterfile, &record).unwrap_err();
    assert!(matches!(err, PersistenceError::LogMissing(_)));

    assert_eq!(session.state().anumber, "A01112223");
    assert!(!state.masterfile.exists());
}
