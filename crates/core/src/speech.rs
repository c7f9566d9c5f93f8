//! Speech collaborators: text-to-speech and speech-to-text.

use anyhow::Result;
use async_openai::{
    Client,
    config::OpenAIConfig,
    types::{AudioInput, CreateSpeechRequestArgs, CreateTranscriptionRequestArgs, SpeechModel, Voice},
};
use async_trait::async_trait;
use bytes::Bytes;

/// Container format of the synthesized audio returned by the speech endpoint.
pub const SPEECH_AUDIO_MIME: &str = "audio/mpeg";

/// A generic client for the speech-synthesis collaborator.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Renders `text` as spoken audio (MP3 container).
    async fn synthesize(&self, text: &str) -> Result<Bytes>;
}

/// A generic client for the transcription collaborator.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribes `audio` to best-effort text. `file_name` carries the
    /// container label (e.g. `audio.webm`) through to the provider; the
    /// bytes themselves are not validated.
    async fn transcribe(&self, audio: Vec<u8>, file_name: &str) -> Result<String>;
}

/// `SpeechSynthesizer` backed by an OpenAI-compatible speech endpoint.
pub struct OpenAISpeechSynthesizer {
    client: Client<OpenAIConfig>,
    model: SpeechModel,
    voice: Voice,
}

impl OpenAISpeechSynthesizer {
    pub fn new(config: OpenAIConfig, model: &str, voice: &str) -> Self {
        Self {
            client: Client::with_config(config),
            model: speech_model_from_name(model),
            voice: voice_from_name(voice),
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for OpenAISpeechSynthesizer {
    async fn synthesize(&self, text: &str) -> Result<Bytes> {
        let request = CreateSpeechRequestArgs::default()
            .model(self.model.clone())
            .voice(self.voice.clone())
            .input(text)
            .build()?;
        let response = self.client.audio().speech(request).await?;
        Ok(response.bytes)
    }
}

/// `Transcriber` backed by an OpenAI-compatible transcription endpoint.
pub struct OpenAITranscriber {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAITranscriber {
    pub fn new(config: OpenAIConfig, model: String) -> Self {
        Self {
            client: Client::with_config(config),
            model,
        }
    }
}

#[async_trait]
impl Transcriber for OpenAITranscriber {
    async fn transcribe(&self, audio: Vec<u8>, file_name: &str) -> Result<String> {
        let request = CreateTranscriptionRequestArgs::default()
            .file(AudioInput::from_vec_u8(file_name.to_string(), audio))
            .model(&self.model)
            .build()?;
        let response = self.client.audio().transcribe(request).await?;
        Ok(response.text)
    }
}

fn speech_model_from_name(name: &str) -> SpeechModel {
    match name {
        "tts-1" => SpeechModel::Tts1,
        "tts-1-hd" => SpeechModel::Tts1Hd,
        other => SpeechModel::Other(other.to_string()),
    }
}

fn voice_from_name(name: &str) -> Voice {
    match name.to_lowercase().as_str() {
        "echo" => Voice::Echo,
        "fable" => Voice::Fable,
        "nova" => Voice::Nova,
        "onyx" => Voice::Onyx,
        "shimmer" => Voice::Shimmer,
        _ => Voice::Alloy,
    }
}
