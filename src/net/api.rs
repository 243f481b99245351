//! REST API helpers for the peer-review server.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, authorized with the
//! stored bearer token. Native builds: stubs returning
//! [`ApiError::Unavailable`] so state logic stays testable off-browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; views decide whether a failure is
//! rendered inline, alerted, or reported per item.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Deserialize;

use super::types::{
    Grade, GradePost, LoginRequest, ModuleId, Page, Pairing, PairingId, QuestionId, Rubric, StudentId,
    SubmissionFile, Supervision,
};
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::state::listing::ListQuery;
use crate::util::token::Role;

fn supervisions_endpoint(base: &str) -> String {
    format!("{base}/module/supervise")
}

fn pairings_endpoint(base: &str, module_id: ModuleId) -> String {
    format!("{base}/student/module/{module_id}/pairing")
}

fn rubrics_endpoint(base: &str) -> String {
    format!("{base}/student/rubric")
}

fn grades_endpoint(base: &str, module_id: ModuleId) -> String {
    format!("{base}/student/module/{module_id}/grade")
}

#[cfg(any(test, feature = "csr"))]
fn submission_endpoint(base: &str, module_id: ModuleId, question_id: QuestionId, student_id: StudentId) -> String {
    format!("{base}/student/module/{module_id}/question/{question_id}/submission/{student_id}")
}

fn login_endpoint(base: &str, role: Role) -> Option<String> {
    role.route_prefix().map(|prefix| format!("{base}/{prefix}/login"))
}

#[cfg(any(test, feature = "csr"))]
fn bearer(token: &str) -> String {
    format!("Bearer {}", token.trim())
}

/// Grades come back either paged or as a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GradesBody {
    Paged(Page<Grade>),
    Bare(Vec<Grade>),
}

impl GradesBody {
    fn into_grades(self) -> Vec<Grade> {
        match self {
            Self::Paged(page) => page.rows,
            Self::Bare(grades) => grades,
        }
    }
}

/// Login answers with `{ "token": ... }` or the token as a JSON string.
#[cfg(any(test, feature = "csr"))]
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LoginBody {
    Wrapped { token: String },
    Bare(String),
}

#[cfg(any(test, feature = "csr"))]
impl LoginBody {
    fn into_token(self) -> String {
        match self {
            Self::Wrapped { token } | Self::Bare(token) => token,
        }
    }
}

#[cfg(feature = "csr")]
fn authorized(builder: gloo_net::http::RequestBuilder, config: &ClientConfig) -> gloo_net::http::RequestBuilder {
    match crate::util::storage::read_item(&config.token_storage_key) {
        Some(token) => builder.header("Authorization", &bearer(&token)),
        None => builder,
    }
}

#[cfg(feature = "csr")]
async fn get_json<T: serde::de::DeserializeOwned>(
    config: &ClientConfig,
    url: &str,
    query: &ListQuery,
) -> Result<T, ApiError> {
    let pairs = query.pairs();
    let resp = authorized(gloo_net::http::Request::get(url), config)
        .query(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(not(feature = "csr"))]
async fn get_json<T>(config: &ClientConfig, url: &str, query: &ListQuery) -> Result<T, ApiError> {
    let _ = (config, url, query);
    Err(ApiError::Unavailable)
}

/// Fetch a page of module supervisions (`moduleId`, optional `page`/`limit`).
///
/// # Errors
///
/// Returns [`ApiError`] on transport, status, or decode failure.
pub async fn fetch_supervisions(config: &ClientConfig, query: &ListQuery) -> Result<Page<Supervision>, ApiError> {
    get_json(config, &supervisions_endpoint(&config.api_base), query).await
}

/// Fetch the pairings of a module, usually filtered by `MarkerID`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport, status, or decode failure.
pub async fn fetch_pairings(
    config: &ClientConfig,
    module_id: ModuleId,
    query: &ListQuery,
) -> Result<Page<Pairing>, ApiError> {
    get_json(config, &pairings_endpoint(&config.api_base, module_id), query).await
}

/// Fetch rubrics, usually filtered by `QuestionID`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport, status, or decode failure.
pub async fn fetch_rubrics(config: &ClientConfig, query: &ListQuery) -> Result<Page<Rubric>, ApiError> {
    get_json(config, &rubrics_endpoint(&config.api_base), query).await
}

/// Fetch the current marker's grades for one pairing.
///
/// # Errors
///
/// Returns [`ApiError`] on transport, status, or decode failure.
pub async fn fetch_grades(
    config: &ClientConfig,
    module_id: ModuleId,
    pairing_id: PairingId,
) -> Result<Vec<Grade>, ApiError> {
    let query = ListQuery::unpaginated(crate::state::listing::Filters::new().with("PairingID", pairing_id));
    let body: GradesBody = get_json(config, &grades_endpoint(&config.api_base, module_id), &query).await?;
    Ok(body.into_grades())
}

/// Store one grade.
///
/// # Errors
///
/// Returns [`ApiError`] on transport or status failure.
pub async fn post_grade(config: &ClientConfig, module_id: ModuleId, body: GradePost) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = grades_endpoint(&config.api_base, module_id);
        let resp = authorized(gloo_net::http::Request::post(&url), config)
            .json(&body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, module_id, body);
        Err(ApiError::Unavailable)
    }
}

/// Download a student's submission for a question.
///
/// # Errors
///
/// Returns [`ApiError::Status`] when the server has no submission, or another
/// [`ApiError`] on transport failure.
pub async fn download_submission(
    config: &ClientConfig,
    module_id: ModuleId,
    question_id: QuestionId,
    student_id: StudentId,
) -> Result<SubmissionFile, ApiError> {
    #[cfg(feature = "csr")]
    {
        use crate::util::download::{fallback_file_name, file_name_from_disposition};

        let url = submission_endpoint(&config.api_base, module_id, question_id, student_id);
        let resp = authorized(gloo_net::http::Request::get(&url), config)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let headers = resp.headers();
        let file_name = headers
            .get("content-disposition")
            .and_then(|h| file_name_from_disposition(&h))
            .unwrap_or_else(|| fallback_file_name(student_id));
        let content_type = headers.get("content-type");
        let bytes = resp.binary().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(SubmissionFile { file_name, content_type, bytes })
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, module_id, question_id, student_id);
        Err(ApiError::Unavailable)
    }
}

/// Exchange credentials for a bearer token via `POST /{role}/login`.
///
/// # Errors
///
/// Returns [`ApiError::Status`] for rejected credentials (or a role with no
/// login route), or another [`ApiError`] on transport/decode failure.
pub async fn login(config: &ClientConfig, role: Role, request: &LoginRequest) -> Result<String, ApiError> {
    let Some(url) = login_endpoint(&config.api_base, role) else {
        return Err(ApiError::Status(400));
    };
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&url)
            .json(request)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let body: LoginBody = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.into_token())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (url, request);
        Err(ApiError::Unavailable)
    }
}
