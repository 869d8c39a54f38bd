use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Form, State},
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::connector::api::Container;
use crate::domain::{workflow_file_name, DomainError, ProjectRequest};

use super::error::ApiError;
use super::form::{DownloadForm, GenerateForm, GenerateResponse};
use super::view::Views;

#[derive(Clone)]
pub struct AppState {
    pub container: Arc<Container>,
    pub views: Arc<Views>,
}

impl AppState {
    pub fn new(container: Arc<Container>) -> Result<Self, DomainError> {
        Ok(Self {
            container,
            views: Arc::new(Views::new()?),
        })
    }
}

const YAML_CONTENT_TYPE: &str = "text/yaml; charset=utf-8";

/// GET / - empty project form
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let html = state.views.render_form(&ProjectRequest::default(), None)?;
    Ok(Html(html))
}

/// POST /generate - form submission
pub async fn generate_form(
    State(state): State<AppState>,
    Form(form): Form<GenerateForm>,
) -> Result<Response, ApiError> {
    let (request, api_key) = form.into_parts();
    let use_case = state.container.generate_use_case();

    let response = match use_case.execute(&request, &api_key).await {
        Ok(pipeline) => (StatusCode::OK, Html(state.views.render_result(&pipeline)?)),
        Err(e) => {
            let message = form_error_message(&e);
            (
                status_for(&e),
                Html(state.views.render_form(&request, Some(message.as_str()))?),
            )
        }
    };

    Ok(response.into_response())
}

/// POST /download - echo the generated YAML back as an attachment.
///
/// Browsers submit textarea and hidden-field newlines as CRLF, so content
/// posted by the result page (`from_result_page=true`) is normalised back to
/// LF. Content from any other client is returned byte for byte.
pub async fn download(Form(form): Form<DownloadForm>) -> Result<Response, ApiError> {
    if form.project_name.is_empty() {
        return Err(ApiError::missing_fields(vec!["project_name"]));
    }

    let disposition = format!(
        "attachment; filename=\"{}\"",
        workflow_file_name(&form.project_name)
    );
    let disposition = HeaderValue::from_bytes(disposition.as_bytes()).map_err(|e| {
        ApiError::Internal {
            message: format!("invalid Content-Disposition header: {e}"),
        }
    })?;

    let content = if form.from_result_page {
        form.content.replace("\r\n", "\n")
    } else {
        form.content
    };

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(YAML_CONTENT_TYPE)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        content,
    )
        .into_response())
}

/// POST /api/generate - JSON variant of the form flow
pub async fn api_generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateForm>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Json(form) = payload?;
    let (request, api_key) = form.into_parts();
    let pipeline = state
        .container
        .generate_use_case()
        .execute(&request, &api_key)
        .await?;

    Ok(Json(pipeline.into()))
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "model": state.container.model(),
        "mock_llm": state.container.mock_llm(),
    }))
}

fn status_for(e: &DomainError) -> StatusCode {
    if e.is_validation() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else if e.is_generation_failure() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

fn form_error_message(e: &DomainError) -> String {
    match e {
        DomainError::Validation { fields } => format!(
            "Please fill all required fields. Missing: {}",
            fields.join(", ")
        ),
        other => other.to_legacy_string(),
    }
}
