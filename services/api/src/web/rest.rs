//! services/api/src/web/rest.rs
//!
//! Contains the Axum handlers for the REST API endpoints and the master
//! definition for the OpenAPI specification.

use crate::web::state::AppState;
use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use resume_core::domain::{Resume, SectionKind, SectionValue};
use resume_core::export;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{error, info};
use utoipa::{OpenApi, ToSchema};

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        enhance_handler,
        save_resume_handler,
        list_resumes_handler,
        export_resume_handler,
        import_handler,
        health_handler,
    ),
    components(
        schemas(
            AIEnhanceRequest,
            AIEnhanceResponse,
            SaveResumeRequest,
            SaveResumeResponse,
            ResumeListResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "Resume Editor API", description = "API endpoints for the resume editor.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// API Request and Response Structs
//=========================================================================================

/// A request to enhance one section's content.
#[derive(serde::Deserialize, ToSchema)]
pub struct AIEnhanceRequest {
    /// One of the five section names (`personalInfo`, `summary`,
    /// `experience`, `education`, `skills`).
    pub section: String,
    /// The section's current value, in the document wire shape.
    #[schema(value_type = Object)]
    pub content: serde_json::Value,
}

/// The enhanced replacement value for the requested section.
#[derive(serde::Serialize, ToSchema)]
pub struct AIEnhanceResponse {
    #[schema(value_type = Object)]
    pub enhanced_content: SectionValue,
}

/// A request to save a whole resume document.
#[derive(serde::Deserialize, ToSchema)]
pub struct SaveResumeRequest {
    #[schema(value_type = Object)]
    pub resume: Resume,
}

/// The response payload sent after successfully saving a resume.
#[derive(serde::Serialize, ToSchema)]
pub struct SaveResumeResponse {
    pub status: String,
    pub message: String,
}

/// All stored resumes, keyed by their storage id.
#[derive(serde::Serialize, ToSchema)]
pub struct ResumeListResponse {
    #[schema(value_type = Object)]
    pub resumes: HashMap<String, Resume>,
}

/// Service liveness payload.
#[derive(serde::Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// Enhance one section's content with the configured AI enhancer.
///
/// The content must match the named section's shape; a mismatch is a 400
/// before the enhancer is ever invoked. When the enhancer itself fails the
/// stored documents are untouched and the caller keeps its current value.
#[utoipa::path(
    post,
    path = "/ai-enhance",
    request_body = AIEnhanceRequest,
    responses(
        (status = 200, description = "Section enhanced successfully", body = AIEnhanceResponse),
        (status = 400, description = "Unknown section name or content of the wrong shape"),
        (status = 502, description = "The enhancement service failed")
    )
)]
pub async fn enhance_handler(
    State(app_state): State<Arc<AppState>>,
    Json(request): Json<AIEnhanceRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let kind: SectionKind = request
        .section
        .parse()
        .map_err(|e: resume_core::domain::UnknownSection| {
            (StatusCode::BAD_REQUEST, e.to_string())
        })?;

    let content = SectionValue::from_json(kind, request.content).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            format!("Content does not match the shape of section '{}': {}", kind, e),
        )
    })?;

    match app_state.enhancer.enhance_section(kind, content).await {
        Ok(enhanced_content) => Ok(Json(AIEnhanceResponse { enhanced_content })),
        Err(e) => {
            error!(section = %kind, "Enhancement failed: {:?}", e);
            Err((
                StatusCode::BAD_GATEWAY,
                format!("Error enhancing content for section '{}'", kind),
            ))
        }
    }
}

/// Save a whole resume document.
///
/// The document is stored under a key derived from the personal name and
/// the store is persisted to disk before the response is sent.
#[utoipa::path(
    post,
    path = "/save-resume",
    request_body = SaveResumeRequest,
    responses(
        (status = 200, description = "Resume saved successfully", body = SaveResumeResponse),
        (status = 500, description = "The store could not persist the document")
    )
)]
pub async fn save_resume_handler(
    State(app_state): State<Arc<AppState>>,
    Json(request): Json<SaveResumeRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    match app_state.store.save(&request.resume).await {
        Ok(key) => {
            info!(key = %key, "Resume saved");
            Ok(Json(SaveResumeResponse {
                status: "success".to_string(),
                message: format!("Resume saved successfully with ID: {}", key),
            }))
        }
        Err(e) => {
            error!("Failed to save resume: {:?}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error saving resume".to_string(),
            ))
        }
    }
}

/// Get all saved resumes.
#[utoipa::path(
    get,
    path = "/resumes",
    responses(
        (status = 200, description = "All stored resumes", body = ResumeListResponse)
    )
)]
pub async fn list_resumes_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let resumes = app_state.store.list().await.map_err(|e| {
        error!("Failed to list resumes: {:?}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Error listing resumes".to_string(),
        )
    })?;
    Ok(Json(ResumeListResponse { resumes }))
}

/// Download one stored resume as a pretty-printed JSON attachment.
#[utoipa::path(
    get,
    path = "/resumes/{key}/export",
    params(
        ("key" = String, Path, description = "The storage key of the resume.")
    ),
    responses(
        (status = 200, description = "The document in its export format"),
        (status = 404, description = "No resume stored under that key")
    )
)]
pub async fn export_resume_handler(
    State(app_state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let resume = app_state
        .store
        .get(&key)
        .await
        .map_err(|e| (StatusCode::NOT_FOUND, e.to_string()))?;

    let body = export::to_json(&resume).map_err(|e| {
        error!(key = %key, "Failed to serialize resume: {:?}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Error exporting resume".to_string(),
        )
    })?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}.json\"", key),
            ),
        ],
        body,
    ))
}

/// Import a resume from an uploaded file.
///
/// Accepts a multipart/form-data request with a single file part. A `.json`
/// file must be a complete document in the export format; anything malformed
/// is rejected outright and nothing is stored. Other file types (PDF, DOCX)
/// return the canned sample document, as real parsing of those formats is
/// out of scope.
#[utoipa::path(
    post,
    path = "/import",
    request_body(content_type = "multipart/form-data", description = "The resume file to import."),
    responses(
        (status = 200, description = "The imported document"),
        (status = 400, description = "Missing file or malformed document")
    )
)]
pub async fn import_handler(
    mut multipart: Multipart,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let field = multipart
        .next_field()
        .await
        .map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                format!("Failed to read multipart data: {}", e),
            )
        })?
        .ok_or_else(|| {
            (
                StatusCode::BAD_REQUEST,
                "Multipart form must include a file".to_string(),
            )
        })?;

    let file_name = field.file_name().unwrap_or("untitled").to_string();
    let data = field.bytes().await.map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            format!("Failed to read file bytes: {}", e),
        )
    })?;

    let resume = if file_name.to_lowercase().ends_with(".json") {
        let text = String::from_utf8(data.to_vec()).map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                format!("Uploaded file is not valid UTF-8 text: {}", e),
            )
        })?;
        export::from_json(&text).map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?
    } else {
        // PDF/DOCX parsing is stubbed with the sample document.
        info!(file = %file_name, "Non-JSON upload, returning the sample document");
        Resume::sample()
    };

    Ok(Json(resume))
}

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "The service is running", body = HealthResponse)
    )
)]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: "Resume Editor API is running".to_string(),
    })
}
