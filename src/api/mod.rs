use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::task;

use crate::{
    TravelPlanError, VERSION,
    document::{self, DOCX_MIME_TYPE},
    models::{Itinerary, TripForm},
    planner::{PlanOutcome, Planner},
};

#[derive(Clone)]
pub struct AppState {
    pub planner: Planner,
}

#[derive(Serialize, Deserialize)]
pub struct ApiItinerary {
    pub itinerary: Itinerary,
    pub departure: String,
    pub destination: String,
    pub file_name: String,
}

#[derive(Serialize, Deserialize)]
pub struct ApiWarning {
    pub warning: String,
    pub missing: Vec<String>,
}

#[derive(Serialize, Deserialize)]
pub struct DocumentRequest {
    pub itinerary: Itinerary,
    pub departure: String,
    pub destination: String,
}

impl IntoResponse for TravelPlanError {
    fn into_response(self) -> Response {
        let status = match &self {
            TravelPlanError::Config { .. } => StatusCode::SERVICE_UNAVAILABLE,
            TravelPlanError::Generation { .. } => StatusCode::BAD_GATEWAY,
            TravelPlanError::Validation { .. } => StatusCode::BAD_REQUEST,
            TravelPlanError::Document { .. } | TravelPlanError::Io { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        tracing::error!("Request failed with {}: {}", status, self);
        (status, Json(json!({ "error": self.user_message() }))).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/itinerary", post(create_itinerary))
        .route("/itinerary/document", post(download_document))
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "version": VERSION }))
}

/// Malformed bodies get the same JSON error shape as every other failure,
/// keeping 422 exclusive to the incomplete-form warning.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, TravelPlanError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| TravelPlanError::validation(rejection.body_text()))
}

async fn create_itinerary(
    State(state): State<AppState>,
    payload: Result<Json<TripForm>, JsonRejection>,
) -> Result<Response, TravelPlanError> {
    let form = json_body(payload)?;
    let response = match state.planner.plan(&form).await? {
        PlanOutcome::Incomplete { warning, missing } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ApiWarning {
                warning,
                missing: missing.into_iter().map(str::to_string).collect(),
            }),
        )
            .into_response(),
        PlanOutcome::Generated { request, itinerary } => Json(ApiItinerary {
            file_name: document::download_file_name(&request.departure, &request.destination),
            itinerary,
            departure: request.departure,
            destination: request.destination,
        })
        .into_response(),
    };
    Ok(response)
}

async fn download_document(
    payload: Result<Json<DocumentRequest>, JsonRejection>,
) -> Result<Response, TravelPlanError> {
    let payload = json_body(payload)?;
    let exported = task::spawn_blocking(move || {
        document::export(&payload.itinerary, &payload.departure, &payload.destination)
    })
    .await
    .map_err(|e| TravelPlanError::document(format!("Export task failed: {e}")))??;

    let bytes = tokio::fs::read(&exported.path).await?;

    Ok((
        [
            (header::CONTENT_TYPE, DOCX_MIME_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                document::content_disposition(&exported.file_name),
            ),
        ],
        bytes,
    )
        .into_response())
}
