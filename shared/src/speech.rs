use crate::error::{ActionError, CapabilityError};
use crate::handler::Action;
use crate::request::TEXT_REQUIRED;
use async_trait::async_trait;
use aws_sdk_polly::{
    types::{Engine, OutputFormat, VoiceId},
    Client as PollyClient,
};
use base64::{engine::general_purpose, Engine as _};
use lambda_http::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

pub const DEFAULT_VOICE_ID: &str = "Joanna";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Mp3,
}

impl AudioFormat {
    pub fn content_type(self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "audio/mpeg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineTier {
    Neural,
}

#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Returns the whole audio stream, fully read
    async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
        format: AudioFormat,
        engine: EngineTier,
    ) -> Result<Vec<u8>, CapabilityError>;
}

/// Amazon Polly backed synthesizer
pub struct PollySynthesizer {
    client: PollyClient,
}

impl PollySynthesizer {
    pub fn new(client: PollyClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SpeechSynthesizer for PollySynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
        format: AudioFormat,
        engine: EngineTier,
    ) -> Result<Vec<u8>, CapabilityError> {
        let output_format = match format {
            AudioFormat::Mp3 => OutputFormat::Mp3,
        };
        let engine = match engine {
            EngineTier::Neural => Engine::Neural,
        };

        let result = self
            .client
            .synthesize_speech()
            .text(text)
            .voice_id(VoiceId::from(voice_id))
            .output_format(output_format)
            .engine(engine)
            .send()
            .await?;

        let audio = result
            .audio_stream
            .collect()
            .await
            .map_err(|e| CapabilityError(format!("Failed to read Polly audio stream: {}", e)))?
            .into_bytes();

        Ok(audio.to_vec())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechRequest {
    pub text: Option<String>,
    pub voice_id: Option<String>,
}

#[derive(Debug)]
pub struct SpeechParams {
    pub text: String,
    pub voice_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechResponse {
    pub audio_content: String,
    pub content_type: &'static str,
}

pub struct SynthesizeSpeech {
    synthesizer: Arc<dyn SpeechSynthesizer>,
}

impl SynthesizeSpeech {
    const FORMAT: AudioFormat = AudioFormat::Mp3;
    const ENGINE: EngineTier = EngineTier::Neural;

    pub fn new(synthesizer: Arc<dyn SpeechSynthesizer>) -> Self {
        Self { synthesizer }
    }
}

#[async_trait]
impl Action for SynthesizeSpeech {
    type Input = SpeechRequest;
    type Validated = SpeechParams;

    const NAME: &'static str = "SpeechSynthesis";
    const INVALID_INPUT: &'static str = TEXT_REQUIRED;
    const SUCCESS: StatusCode = StatusCode::OK;

    fn validate(&self, input: SpeechRequest) -> Result<SpeechParams, ActionError> {
        let text = match input.text {
            Some(text) if !text.is_empty() => text,
            _ => return Err(ActionError::Validation(TEXT_REQUIRED)),
        };
        let voice_id = input
            .voice_id
            .filter(|voice| !voice.is_empty())
            .unwrap_or_else(|| DEFAULT_VOICE_ID.to_string());

        Ok(SpeechParams { text, voice_id })
    }

    async fn execute(&self, params: SpeechParams) -> Result<Value, ActionError> {
        let audio = self
            .synthesizer
            .synthesize(&params.text, &params.voice_id, Self::FORMAT, Self::ENGINE)
            .await?;

        tracing::info!(
            "Synthesized {} bytes with voice {}",
            audio.len(),
            params.voice_id
        );

        let response = SpeechResponse {
            audio_content: general_purpose::STANDARD.encode(&audio),
            content_type: Self::FORMAT.content_type(),
        };
        Ok(serde_json::to_value(&response)?)
    }
}
