//! Peer-review grading workspace for one question of an assignment.
//!
//! SYSTEM CONTEXT
//! ==============
//! The signed-in student is the marker. Pairings are filtered by their id and
//! rubrics by the route's question. Choosing a pairing loads the marker's
//! existing grades, which seeds the draft and reveals the Grade and Comment
//! columns. Post submits one grade per draft entry and reports each outcome.

#[cfg(test)]
#[path = "peer_review_test.rs"]
mod peer_review_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::rubric_table::RubricTable;
use crate::config::ClientConfig;
use crate::net::api;
use crate::net::types::{ModuleId, PairingId, QuestionId, RubricId};
use crate::pages::parse_route_id;
use crate::state::auth::AuthState;
use crate::state::grading::{CellEdit, GradingState, fetch_submission, submit_batch};
use crate::util::auth::{install_role_guard, install_unauth_redirect};
use crate::util::download::save_file;
use crate::util::notice;
use crate::util::token::Role;

/// Route and marker identity a workspace is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReviewScope {
    pub module_id: ModuleId,
    pub question_id: QuestionId,
    pub marker_id: i64,
}

/// Build a scope once every part is known.
#[must_use]
pub fn review_scope(module_id: Option<ModuleId>, question_id: Option<QuestionId>, marker_id: Option<i64>) -> Option<ReviewScope> {
    Some(ReviewScope { module_id: module_id?, question_id: question_id?, marker_id: marker_id? })
}

#[component]
pub fn PeerReviewPage() -> impl IntoView {
    let auth = expect_context::<ReadSignal<AuthState>>();
    let config = StoredValue::new(expect_context::<ClientConfig>());
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());
    install_role_guard(auth, Role::Student, navigate);

    let params = use_params_map();
    let scope = Memo::new(move |_| {
        let (module_id, question_id) = params.with(|p| {
            let id = |key: &str| p.get(key).and_then(|raw| parse_route_id(&raw));
            (id("module_id"), id("question_id"))
        });
        review_scope(module_id, question_id, auth.with(AuthState::user_id))
    });
    let is_student = Memo::new(move |_| auth.with(|a| a.role() == Some(Role::Student)));

    let grading = RwSignal::new(GradingState::default());

    Effect::new(move || {
        let Some(scope) = scope.get() else {
            return;
        };
        if !is_student.get() {
            return;
        }
        let Some((pairings, rubrics)) = grading.try_update(|g| {
            g.set_scope(scope.marker_id, scope.question_id);
            ((g.pairings.begin_fetch(), g.pairings.query()), (g.rubrics.begin_fetch(), g.rubrics.query()))
        }) else {
            return;
        };

        let cfg = config.get_value();
        leptos::task::spawn_local(async move {
            let (ticket, query) = pairings;
            let result = api::fetch_pairings(&cfg, scope.module_id, &query).await;
            grading.update(|g| {
                g.pairings.apply(ticket, result);
            });
        });
        let cfg = config.get_value();
        leptos::task::spawn_local(async move {
            let (ticket, query) = rubrics;
            let result = api::fetch_rubrics(&cfg, &query).await;
            grading.update(|g| {
                g.rubrics.apply(ticket, result);
            });
        });
    });

    let on_pairing = move |ev: leptos::ev::Event| {
        let Some(scope) = scope.get_untracked() else {
            return;
        };
        let Some(pairing_id) = parse_route_id(&event_target_value(&ev)) else {
            return;
        };
        grading.update(|g| g.select_pairing(pairing_id));
        let cfg = config.get_value();
        leptos::task::spawn_local(async move {
            let result = api::fetch_grades(&cfg, scope.module_id, pairing_id).await;
            grading.update(|g| {
                g.apply_grades(pairing_id, result);
            });
        });
    };

    let on_edit = Callback::new(move |(rubric_id, edit): (RubricId, CellEdit)| {
        grading.update(|g| {
            g.edit_cell(rubric_id, edit);
        });
    });

    let on_post = move |_| {
        let Some(scope) = scope.get_untracked() else {
            return;
        };
        let posts = grading.with_untracked(GradingState::submission_batch);
        if posts.is_empty() {
            return;
        }
        grading.update(|g| g.submitting = true);
        let cfg = config.get_value();
        leptos::task::spawn_local(async move {
            let outcome = submit_batch(posts, |body| {
                let cfg = cfg.clone();
                async move { api::post_grade(&cfg, scope.module_id, body).await }
            })
            .await;
            log::info!("{}", outcome.summary());
            grading.update(|g| {
                g.submitting = false;
                g.last_submit = Some(outcome);
            });
        });
    };

    let on_download = move |_| {
        let Some(scope) = scope.get_untracked() else {
            return;
        };
        let Some(pairing_id) = grading.with_untracked(|g| g.selected) else {
            return;
        };
        let snapshot = grading.get_untracked();
        let cfg = config.get_value();
        leptos::task::spawn_local(async move {
            let result = fetch_submission(&snapshot, pairing_id, |student_id| async move {
                api::download_submission(&cfg, scope.module_id, scope.question_id, student_id).await
            })
            .await;
            match result {
                Ok(file) => {
                    if let Err(e) = save_file(&file) {
                        log::warn!("saving {} failed: {e}", file.file_name);
                    }
                }
                Err(e) => {
                    log::warn!("download for pairing {pairing_id} failed: {e}");
                    notice::alert(e.notice());
                }
            }
        });
    };

    let has_selection = move || grading.with(|g| g.selected.is_some());
    // Draft edits must not re-render the selector or the table rows.
    let pairing_options = Memo::new(move |_| grading.with(GradingState::pairing_options));
    let rubric_rows = Memo::new(move |_| grading.with(|g| g.rubrics.rows.clone()));
    let draft = Signal::derive(move || grading.with(|g| g.draft.clone()));
    let errors = move || {
        grading.with(|g| {
            [g.pairings.error.clone(), g.rubrics.error.clone(), g.error.clone()]
                .into_iter()
                .flatten()
                .map(|e| view! { <p class="review-page__error">{e}</p> })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="review-page">
            <Show when=move || is_student.get()>
                <h1>"Peer review"</h1>
                <Show when=move || scope.get().is_none()>
                    <p class="review-page__error">"Unknown assignment."</p>
                </Show>
                {errors}
                <div class="review-page__controls">
                    <select class="review-page__pairing" on:change=on_pairing>
                        <option value="" selected=true disabled=true>
                            "Select a student"
                        </option>
                        {move || {
                            pairing_options
                                .get()
                                .into_iter()
                                .map(|(id, label): (PairingId, String)| view! { <option value=id.to_string()>{label}</option> })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                    <button class="btn" disabled=move || !has_selection() on:click=on_download>
                        "Download"
                    </button>
                </div>
                <Show when=move || grading.with(|g| g.rubrics.loading)>
                    <p>"Loading rubrics..."</p>
                </Show>
                <RubricTable rows=rubric_rows draft=draft on_edit=on_edit/>
                <button
                    class="btn btn--primary"
                    disabled=move || !has_selection() || grading.with(|g| g.submitting)
                    on:click=on_post
                >
                    "Post"
                </button>
                {move || {
                    grading
                        .with(|g| g.last_submit.as_ref().map(|o| o.summary()))
                        .map(|summary| view! { <p class="review-page__outcome">{summary}</p> })
                }}
            </Show>
        </div>
    }
}
