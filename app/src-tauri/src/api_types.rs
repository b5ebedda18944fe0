//! FILENAME: app/src-tauri/src/api_types.rs
// PURPOSE: Shared type definitions for Tauri API communication.
// CONTEXT: All structs use camelCase serialization for JavaScript interoperability.

use serde::Serialize;
use session::{FormState, SignInRecord};

/// Current selection of every form field, mirrored to the frontend.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSelection {
    pub anumber: String,
    pub major: String,
    pub class_rank: String,
    pub prefix: String,
    pub course: String,
}

impl From<&FormState> for FormSelection {
    fn from(state: &FormState) -> Self {
        FormSelection {
            anumber: state.anumber.clone(),
            major: state.major.clone(),
            class_rank: state.class_rank.clone(),
            prefix: state.prefix.clone(),
            course: state.course.clone(),
        }
    }
}

/// Everything the form needs to render: the fixed menus, the course list
/// for the selected prefix, and the current selections.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormOptions {
    pub majors: Vec<String>,
    pub class_ranks: Vec<String>,
    pub prefixes: Vec<String>,
    pub courses: Vec<String>,
    pub selection: FormSelection,
}

/// Confirmation payload for a recorded sign-in.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInAck {
    pub message: String,
    /// 0-based row the record landed on in the log sheet.
    pub row: u32,
    pub record: SignInRecord,
}
