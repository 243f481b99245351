//! Peer-review grading workspace state.
//!
//! DESIGN
//! ======
//! The draft is keyed by rubric id and only exists once the marker's existing
//! grades for the selected pairing have loaded; `None` hides the grade columns.
//! Selecting a pairing always drops the draft so edits for one student can
//! never be posted against another.

#[cfg(test)]
#[path = "grading_test.rs"]
mod grading_test;

use std::collections::BTreeMap;
use std::future::Future;

use futures::future::join_all;

use crate::error::{ApiError, DownloadError};
use crate::net::types::{
    Grade, GradePost, Pairing, PairingId, QuestionId, Rubric, RubricId, StudentId, SubmissionFile,
};
use crate::state::listing::{Filters, ListState};

/// Unsaved grade/comment for one rubric.
#[derive(Clone, Debug, PartialEq)]
pub struct DraftEntry {
    pub rubric_id: RubricId,
    pub grade: Option<f64>,
    pub comment: Option<String>,
}

/// Editable cell of a rubric row.
#[derive(Clone, Debug, PartialEq)]
pub enum CellEdit {
    Grade(f64),
    Comment(String),
}

/// Client-held edits per rubric, merged field by field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GradeDraft {
    entries: BTreeMap<RubricId, DraftEntry>,
}

impl GradeDraft {
    /// Seed a draft from grades already stored on the server.
    #[must_use]
    pub fn from_existing(grades: Vec<Grade>) -> Self {
        let entries = grades
            .into_iter()
            .map(|g| {
                let entry = DraftEntry { rubric_id: g.rubric_id, grade: g.grade, comment: g.comment };
                (g.rubric_id, entry)
            })
            .collect();
        Self { entries }
    }

    /// Merge one field into the entry for `rubric_id`, keeping its sibling.
    pub fn edit(&mut self, rubric_id: RubricId, edit: CellEdit) {
        let entry = self
            .entries
            .entry(rubric_id)
            .or_insert(DraftEntry { rubric_id, grade: None, comment: None });
        match edit {
            CellEdit::Grade(value) => entry.grade = Some(value),
            CellEdit::Comment(text) => entry.comment = Some(text),
        }
    }

    #[must_use]
    pub fn get(&self, rubric_id: RubricId) -> Option<&DraftEntry> {
        self.entries.get(&rubric_id)
    }

    pub fn entries(&self) -> impl Iterator<Item = &DraftEntry> {
        self.entries.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse a grade cell. Non-numeric input is not a grade.
#[must_use]
pub fn parse_grade(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Result of one grade post in a batch.
#[derive(Clone, Debug, PartialEq)]
pub struct PostOutcome {
    pub rubric_id: RubricId,
    pub result: Result<(), ApiError>,
}

/// Per-item outcome of a batch submit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BatchOutcome {
    pub items: Vec<PostOutcome>,
}

impl BatchOutcome {
    #[must_use]
    pub fn saved(&self) -> usize {
        self.items.iter().filter(|i| i.result.is_ok()).count()
    }

    #[must_use]
    pub fn failed(&self) -> Vec<RubricId> {
        self.items.iter().filter(|i| i.result.is_err()).map(|i| i.rubric_id).collect()
    }

    /// One-line summary for the workspace footer.
    #[must_use]
    pub fn summary(&self) -> String {
        let total = self.items.len();
        let failed = self.failed();
        if failed.is_empty() {
            return format!("Saved {total} of {total} grades.");
        }
        let ids = failed.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
        format!("Saved {} of {total} grades. Failed rubrics: {ids}.", self.saved())
    }
}

/// Pairings, rubrics, selection, and draft for one marker and question.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GradingState {
    pub pairings: ListState<Pairing>,
    pub rubrics: ListState<Rubric>,
    pub selected: Option<PairingId>,
    pub draft: Option<GradeDraft>,
    pub last_submit: Option<BatchOutcome>,
    pub submitting: bool,
    pub error: Option<String>,
}

impl GradingState {
    /// Scope both lists to `marker_id`'s pairings and `question_id`'s rubrics.
    ///
    /// Returns whether the scope changed; a change also drops the selection.
    pub fn set_scope(&mut self, marker_id: i64, question_id: QuestionId) -> bool {
        let pairings_changed = self.pairings.set_filters(Filters::new().with("MarkerID", marker_id));
        let rubrics_changed = self.rubrics.set_filters(Filters::new().with("QuestionID", question_id));
        if pairings_changed || rubrics_changed {
            self.selected = None;
            self.draft = None;
            self.last_submit = None;
            self.error = None;
        }
        pairings_changed || rubrics_changed
    }

    /// Make `pairing_id` active and discard any in-progress draft along with
    /// the previous pairing's outcome and error.
    pub fn select_pairing(&mut self, pairing_id: PairingId) {
        self.selected = Some(pairing_id);
        self.draft = None;
        self.last_submit = None;
        self.error = None;
    }

    /// Apply the marker's existing grades if `pairing_id` is still selected.
    pub fn apply_grades(&mut self, pairing_id: PairingId, result: Result<Vec<Grade>, ApiError>) -> bool {
        if self.selected != Some(pairing_id) {
            log::debug!("dropping grades for deselected pairing {pairing_id}");
            return false;
        }
        match result {
            Ok(grades) => self.draft = Some(GradeDraft::from_existing(grades)),
            Err(e) => {
                log::warn!("grade fetch for pairing {pairing_id} failed: {e}");
                self.error = Some(e.message());
            }
        }
        true
    }

    /// Merge an edit into the draft. No-op until grades have loaded.
    pub fn edit_cell(&mut self, rubric_id: RubricId, edit: CellEdit) -> bool {
        let Some(draft) = self.draft.as_mut() else {
            return false;
        };
        draft.edit(rubric_id, edit);
        true
    }

    /// One post body per draft entry for the selected pairing.
    #[must_use]
    pub fn submission_batch(&self) -> Vec<GradePost> {
        let (Some(pairing_id), Some(draft)) = (self.selected, self.draft.as_ref()) else {
            return Vec::new();
        };
        draft
            .entries()
            .map(|entry| GradePost {
                rubric_id: entry.rubric_id,
                pairing_id,
                grade: entry.grade,
                comment: entry.comment.clone(),
            })
            .collect()
    }

    /// Student whose submission `pairing_id` points at.
    #[must_use]
    pub fn student_for(&self, pairing_id: PairingId) -> Option<StudentId> {
        self.pairings.rows.iter().find(|p| p.id == pairing_id).map(|p| p.student.id)
    }

    /// Selector labels, numbered in list order.
    #[must_use]
    pub fn pairing_options(&self) -> Vec<(PairingId, String)> {
        self.pairings
            .rows
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id, format!("Student {}", i + 1)))
            .collect()
    }
}

/// Issue every post concurrently and collect each outcome.
pub async fn submit_batch<F, Fut>(posts: Vec<GradePost>, post: F) -> BatchOutcome
where
    F: Fn(GradePost) -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    let requests = posts.into_iter().map(|body| {
        let rubric_id = body.rubric_id;
        let request = post(body);
        async move { PostOutcome { rubric_id, result: request.await } }
    });
    BatchOutcome { items: join_all(requests).await }
}

/// Resolve `pairing_id` to its student and fetch the submission.
///
/// # Errors
///
/// Returns [`DownloadError::UnknownPairing`] when the pairing is not loaded and
/// [`DownloadError::Api`] when the server has no submission for the student.
pub async fn fetch_submission<F, Fut>(
    state: &GradingState,
    pairing_id: PairingId,
    fetch: F,
) -> Result<SubmissionFile, DownloadError>
where
    F: FnOnce(StudentId) -> Fut,
    Fut: Future<Output = Result<SubmissionFile, ApiError>>,
{
    let student_id = state
        .student_for(pairing_id)
        .ok_or(DownloadError::UnknownPairing(pairing_id))?;
    Ok(fetch(student_id).await?)
}
