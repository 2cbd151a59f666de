//! Route handlers: landing page, health, and the analyze pipeline.

use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::response::Html;
use axum::Json;
use log::debug;
use serde::Serialize;
use tagger_serve::{classify, top_tag, Tagging, LABELS};

use crate::error::ApiError;
use crate::AppState;

const LANDING_PAGE: &str = include_str!("../static/index.html");

pub async fn homepage() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    model_loaded: bool,
}

pub async fn health() -> Json<HealthResponse> {
    // Serving at all implies bootstrap finished, so the model is loaded.
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        model_loaded: true,
    })
}

/// Decode the uploaded image, score it, and answer with every tag whose
/// probability clears the threshold. Failures stay confined to this
/// request.
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<Tagging>, ApiError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("malformed multipart body: {}", e)))?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("could not read upload: {}", e)))?;
            upload = Some(bytes);
            break;
        }
    }

    let upload = upload.ok_or_else(|| ApiError::BadRequest("missing `file` field".to_owned()))?;
    if upload.is_empty() {
        return Err(ApiError::BadRequest("empty upload".to_owned()));
    }

    debug!("analyzing {} byte upload", upload.len());

    let probabilities = state.predictor.predict(&upload)?;
    let mut result = classify(&probabilities, &LABELS, state.threshold);
    if result.is_empty() && state.fallback_top_tag {
        result.extend(top_tag(&probabilities, &LABELS));
    }

    Ok(Json(Tagging { result }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_page_posts_an_upload_to_analyze() {
        assert!(LANDING_PAGE.contains("action=\"/analyze\""));
        assert!(LANDING_PAGE.contains("multipart/form-data"));
        assert!(LANDING_PAGE.contains("name=\"file\""));
    }
}
