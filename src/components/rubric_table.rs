//! Rubric table with editable grade and comment cells.

use leptos::prelude::*;

use crate::net::types::{Rubric, RubricId};
use crate::state::grading::{CellEdit, GradeDraft, parse_grade};

/// Rubric rows for the selected question.
///
/// Grade and Comment columns appear only once a draft exists. Inputs are
/// seeded from the draft when the columns mount and report edits through
/// `on_edit`; they are not re-rendered on every keystroke.
#[component]
pub fn RubricTable(
    #[prop(into)] rows: Signal<Vec<Rubric>>,
    #[prop(into)] draft: Signal<Option<GradeDraft>>,
    on_edit: Callback<(RubricId, CellEdit)>,
) -> impl IntoView {
    let has_draft = Memo::new(move |_| draft.with(Option::is_some));

    view! {
        <table class="rubric-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Criteria"</th>
                    <th>"Description"</th>
                    <th>"Min"</th>
                    <th>"Max"</th>
                    <Show when=move || has_draft.get()>
                        <th>"Grade"</th>
                        <th>"Comment"</th>
                    </Show>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let editable = has_draft.get();
                    rows.get()
                        .into_iter()
                        .map(|rubric| {
                            let id = rubric.id;
                            view! {
                                <tr>
                                    <td>{id}</td>
                                    <td>{rubric.criteria}</td>
                                    <td>{rubric.description}</td>
                                    <td>{rubric.min_mark}</td>
                                    <td>{rubric.max_mark}</td>
                                    {editable.then(|| grade_cells(id, draft, on_edit))}
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </tbody>
        </table>
    }
}

fn grade_cells(
    rubric_id: RubricId,
    draft: Signal<Option<GradeDraft>>,
    on_edit: Callback<(RubricId, CellEdit)>,
) -> impl IntoView {
    let entry = draft.with_untracked(|d| d.as_ref().and_then(|d| d.get(rubric_id)).cloned());
    let grade = entry.as_ref().and_then(|e| e.grade).map(|g| g.to_string()).unwrap_or_default();
    let comment = entry.and_then(|e| e.comment).unwrap_or_default();

    view! {
        <td>
            <input
                class="rubric-table__grade"
                type="number"
                prop:value=grade
                on:input=move |ev| {
                    if let Some(value) = parse_grade(&event_target_value(&ev)) {
                        on_edit.run((rubric_id, CellEdit::Grade(value)));
                    }
                }
            />
        </td>
        <td>
            <input
                class="rubric-table__comment"
                type="text"
                prop:value=comment
                on:input=move |ev| on_edit.run((rubric_id, CellEdit::Comment(event_target_value(&ev))))
            />
        </td>
    }
}
