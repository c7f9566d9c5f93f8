//! Axum Router Configuration
//!
//! This module defines the complete HTTP routing for the application,
//! including the two POST endpoints and the OpenAPI documentation.

use crate::{
    handlers,
    models::{ErrorResponse, TranscribeRequest, TranscribeResponse, TurnRequest, TurnResponse},
    state::AppState,
};

use axum::{Router, routing::post};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::transcribe, handlers::turn),
    components(
        schemas(TranscribeRequest, TranscribeResponse, TurnRequest, TurnResponse, ErrorResponse)
    ),
    tags(
        (name = "Tinytutor API", description = "Speech-to-text and dialogue turns for the English micro-tutor")
    )
)]
pub struct ApiDoc;

/// Creates the main Axum router for the application.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    // Group all routes that require AppState into their own router.
    let api_router = Router::new()
        .route("/api/stt", post(handlers::transcribe))
        .route("/api/tutor", post(handlers::turn))
        .with_state(app_state);

    // Merge the stateful routes with the stateless Swagger UI routes.
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api_router)
}
