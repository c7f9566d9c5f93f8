//! API Models
//!
//! Request and response bodies for the two endpoints. Field names are
//! camelCase on the wire to match the browser client.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /api/stt`.
#[derive(Deserialize, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TranscribeRequest {
    /// Base64-encoded audio bytes.
    pub audio_base64: Option<String>,
    /// Declared MIME type of the audio (e.g. `audio/webm;codecs=opus`).
    pub mime_type: Option<String>,
}

/// Body of a successful `POST /api/stt` response.
#[derive(Serialize, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TranscribeResponse {
    /// Best-effort transcript; may be empty.
    pub text: String,
}

/// Body of `POST /api/tutor`.
#[derive(Deserialize, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TurnRequest {
    /// What the child said, if anything. Empty on the opening turn.
    #[serde(default)]
    pub child_text: String,
    /// Opaque caller-supplied session identifier.
    pub session_id: Option<String>,
}

/// Body of a successful `POST /api/tutor` response.
#[derive(Serialize, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TurnResponse {
    /// The tutor's question, at most five words.
    pub tutor_text: String,
    /// Base64-encoded synthesized speech for `tutor_text`.
    pub tts_audio_base64: String,
    /// Container format of the synthesized audio.
    pub audio_mime_type: String,
    /// The session identifier, echoed back.
    pub session_id: String,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcribe_request_deserialization() {
        let json = r#"{"audioBase64": "AAAA", "mimeType": "audio/webm"}"#;
        let payload: TranscribeRequest = serde_json::from_str(json).unwrap();

        assert_eq!(payload.audio_base64.as_deref(), Some("AAAA"));
        assert_eq!(payload.mime_type.as_deref(), Some("audio/webm"));
    }

    #[test]
    fn test_transcribe_request_tolerates_missing_fields() {
        // Field presence is validated by the handler, not by serde.
        let payload: TranscribeRequest = serde_json::from_str("{}").unwrap();

        assert!(payload.audio_base64.is_none());
        assert!(payload.mime_type.is_none());
    }

    #[test]
    fn test_turn_request_deserialization() {
        let json = r#"{"childText": "yes", "sessionId": "s1"}"#;
        let payload: TurnRequest = serde_json::from_str(json).unwrap();

        assert_eq!(payload.child_text, "yes");
        assert_eq!(payload.session_id.as_deref(), Some("s1"));
    }

    #[test]
    fn test_turn_request_child_text_defaults_to_empty() {
        let json = r#"{"sessionId": "s1"}"#;
        let payload: TurnRequest = serde_json::from_str(json).unwrap();

        assert_eq!(payload.child_text, "");
        assert_eq!(payload.session_id.as_deref(), Some("s1"));
    }

    #[test]
    fn test_turn_request_tolerates_missing_session_id() {
        let payload: TurnRequest = serde_json::from_str("{}").unwrap();

        assert!(payload.session_id.is_none());
    }

    #[test]
    fn test_transcribe_response_serialization() {
        let response = TranscribeResponse {
            text: "hello".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"text":"hello"}"#);
    }

    #[test]
    fn test_turn_response_uses_camel_case_field_names() {
        let response = TurnResponse {
            tutor_text: "Hi! Your name?".to_string(),
            tts_audio_base64: "bXAz".to_string(),
            audio_mime_type: "audio/mpeg".to_string(),
            session_id: "s1".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"tutorText\":\"Hi! Your name?\""));
        assert!(json.contains("\"ttsAudioBase64\":\"bXAz\""));
        assert!(json.contains("\"audioMimeType\":\"audio/mpeg\""));
        assert!(json.contains("\"sessionId\":\"s1\""));
    }

    #[test]
    fn test_error_response_serialization() {
        let error = ErrorResponse {
            message: "sessionId required".to_string(),
        };

        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, r#"{"message":"sessionId required"}"#);
    }
}
