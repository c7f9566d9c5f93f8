use base64::Engine;

/// Maps a declared MIME type to the container label forwarded to the
/// transcription provider. No validation of the actual bytes is performed;
/// anything unrecognized is labeled `mp3`.
pub fn container_label(mime_type: &str) -> &'static str {
    if mime_type.contains("webm") {
        "webm"
    } else if mime_type.contains("ogg") {
        "ogg"
    } else {
        "mp3"
    }
}

/// Decodes a base64 payload into raw audio bytes.
pub fn decode_audio(audio_base64: &str) -> Result<Vec<u8>, base64::DecodeError> {
    base64::engine::general_purpose::STANDARD.decode(audio_base64)
}

/// Encodes raw audio bytes for the JSON response.
pub fn encode_audio(audio: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(audio)
}
