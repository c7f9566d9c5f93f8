//! Axum Handlers for the REST API
//!
//! This module contains the logic for the two POST endpoints: speech-to-text
//! and the tutoring dialogue turn. It uses `utoipa` doc comments to generate
//! OpenAPI documentation.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tinytutor_core::speech::SPEECH_AUDIO_MIME;
use tracing::error;

use crate::{
    audio,
    models::{ErrorResponse, TranscribeRequest, TranscribeResponse, TurnRequest, TurnResponse},
    state::AppState,
};

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    /// A collaborator or internal failure. `message` is the only detail that
    /// crosses the endpoint boundary; `source` is logged server-side.
    Internal {
        message: &'static str,
        source: anyhow::Error,
    },
}

impl ApiError {
    fn internal(message: &'static str, source: impl Into<anyhow::Error>) -> Self {
        ApiError::Internal {
            message,
            source: source.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { message })).into_response()
            }
            ApiError::Internal { message, source } => {
                error!("{}: {:?}", message, source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        message: message.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// Transcribe an audio clip to text.
#[utoipa::path(
    post,
    path = "/api/stt",
    request_body = TranscribeRequest,
    responses(
        (status = 200, description = "Transcription result", body = TranscribeResponse),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 500, description = "Transcription failed", body = ErrorResponse)
    )
)]
pub async fn transcribe(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<TranscribeRequest>,
) -> Result<Json<TranscribeResponse>, ApiError> {
    let audio_base64 = payload.audio_base64.as_deref().filter(|s| !s.is_empty());
    let mime_type = payload.mime_type.as_deref().filter(|s| !s.is_empty());
    let (Some(audio_base64), Some(mime_type)) = (audio_base64, mime_type) else {
        return Err(ApiError::BadRequest(
            "audioBase64 and mimeType required".to_string(),
        ));
    };

    let audio_bytes = audio::decode_audio(audio_base64)
        .map_err(|e| ApiError::BadRequest(format!("audioBase64 is not valid base64: {e}")))?;
    let file_name = format!("audio.{}", audio::container_label(mime_type));

    let text = state
        .transcriber
        .transcribe(audio_bytes, &file_name)
        .await
        .map_err(|e| ApiError::internal("transcription failed", e))?;

    Ok(Json(TranscribeResponse { text }))
}

/// Run one tutoring dialogue turn.
#[utoipa::path(
    post,
    path = "/api/tutor",
    request_body = TurnRequest,
    responses(
        (status = 200, description = "The tutor's next question with synthesized speech", body = TurnResponse),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 500, description = "Turn failed", body = ErrorResponse)
    )
)]
pub async fn turn(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<TurnRequest>,
) -> Result<Json<TurnResponse>, ApiError> {
    let session_id = payload
        .session_id
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::BadRequest("sessionId required".to_string()))?;

    let output = state
        .engine
        .take_turn(&state.sessions, session_id, &payload.child_text)
        .await
        .map_err(|e| ApiError::internal("tutor turn failed", e))?;

    Ok(Json(TurnResponse {
        tutor_text: output.tutor_text,
        tts_audio_base64: audio::encode_audio(&output.audio),
        audio_mime_type: SPEECH_AUDIO_MIME.to_string(),
        session_id: session_id.to_string(),
    }))
}
