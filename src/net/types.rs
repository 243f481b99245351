//! Wire DTOs for the peer-review API.
//!
//! DESIGN
//! ======
//! The server serializes its models with Go field names (`ID`, `Name`,
//! `MinMark`), so structs rename to `PascalCase` and spell out the `ID`
//! suffixes. Optional fields default so partial payloads still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

pub type ModuleId = i64;
pub type PairingId = i64;
pub type QuestionId = i64;
pub type RubricId = i64;
pub type StudentId = i64;

/// One page of list rows as returned by list endpoints.
///
/// Unpaginated requests return every row; `total_pages` is then meaningless.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default)]
    pub rows: Vec<T>,
    #[serde(default, rename = "totalPages")]
    pub total_pages: Option<u32>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self { rows: Vec::new(), total_pages: None }
    }
}

/// A staff member.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Staff {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// A staff member supervising a module.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Supervision {
    pub staff: Staff,
    #[serde(default, rename = "ModuleID")]
    pub module_id: Option<ModuleId>,
}

/// The student whose submission a pairing points at.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StudentRef {
    #[serde(rename = "ID")]
    pub id: StudentId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Assignment of a marking student to another student's submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Pairing {
    #[serde(rename = "ID")]
    pub id: PairingId,
    pub student: StudentRef,
    #[serde(default, rename = "MarkerID")]
    pub marker_id: Option<i64>,
}

/// One gradeable criterion of a question.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Rubric {
    #[serde(rename = "ID")]
    pub id: RubricId,
    #[serde(default, rename = "QuestionID")]
    pub question_id: Option<QuestionId>,
    #[serde(default)]
    pub criteria: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub min_mark: f64,
    #[serde(default)]
    pub max_mark: f64,
}

/// A grade already stored on the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Grade {
    #[serde(rename = "RubricID")]
    pub rubric_id: RubricId,
    #[serde(default, rename = "PairingID")]
    pub pairing_id: Option<PairingId>,
    #[serde(default)]
    pub grade: Option<f64>,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Body of a single "post grade" request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GradePost {
    #[serde(rename = "RubricID")]
    pub rubric_id: RubricId,
    #[serde(rename = "PairingID")]
    pub pairing_id: PairingId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Credentials for the login endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Raw file returned by the submission download endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}
