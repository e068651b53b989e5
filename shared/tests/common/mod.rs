#![allow(dead_code)]

use async_trait::async_trait;
use cloudkit_shared::sentiment::{SentimentAnalyzer, SentimentDetection, SentimentScores};
use cloudkit_shared::speech::{AudioFormat, EngineTier, SpeechSynthesizer};
use cloudkit_shared::users::{UserRecord, UserStore};
use cloudkit_shared::CapabilityError;
use lambda_http::{Body, Response};
use serde_json::Value;
use std::sync::Mutex;

/// Parse a response body as JSON
pub fn body_json(resp: &Response<Body>) -> Value {
    match resp.body() {
        Body::Text(text) => serde_json::from_str(text).expect("body is JSON"),
        other => panic!("expected a text body, got {:?}", other),
    }
}

/// Every response carries the same two headers
pub fn assert_standard_headers(resp: &Response<Body>) {
    assert_eq!(resp.headers()["Content-Type"], "application/json");
    assert_eq!(resp.headers()["Access-Control-Allow-Origin"], "*");
}

pub struct FakeAnalyzer {
    pub calls: Mutex<Vec<(String, String)>>,
    result: Result<SentimentDetection, String>,
}

impl FakeAnalyzer {
    pub fn returning(label: &str, scores: SentimentScores) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            result: Ok(SentimentDetection {
                label: label.to_string(),
                scores,
            }),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            result: Err(message.to_string()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl SentimentAnalyzer for FakeAnalyzer {
    async fn detect(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<SentimentDetection, CapabilityError> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), language_code.to_string()));
        self.result.clone().map_err(CapabilityError)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisCall {
    pub text: String,
    pub voice_id: String,
    pub format: AudioFormat,
    pub engine: EngineTier,
}

pub struct FakeSynthesizer {
    pub calls: Mutex<Vec<SynthesisCall>>,
    result: Result<Vec<u8>, String>,
}

impl FakeSynthesizer {
    pub fn returning(audio: Vec<u8>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            result: Ok(audio),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            result: Err(message.to_string()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl SpeechSynthesizer for FakeSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
        format: AudioFormat,
        engine: EngineTier,
    ) -> Result<Vec<u8>, CapabilityError> {
        self.calls.lock().unwrap().push(SynthesisCall {
            text: text.to_string(),
            voice_id: voice_id.to_string(),
            format,
            engine,
        });
        self.result.clone().map_err(CapabilityError)
    }
}

/// Records every insert attempt, failed or not
#[derive(Default)]
pub struct FakeStore {
    pub inserts: Mutex<Vec<UserRecord>>,
    pub fail_with: Option<String>,
}

impl FakeStore {
    pub fn failing(message: &str) -> Self {
        Self {
            inserts: Mutex::new(Vec::new()),
            fail_with: Some(message.to_string()),
        }
    }

    pub fn insert_count(&self) -> usize {
        self.inserts.lock().unwrap().len()
    }
}

#[async_trait]
impl UserStore for FakeStore {
    async fn insert(&self, record: &UserRecord) -> Result<(), CapabilityError> {
        self.inserts.lock().unwrap().push(record.clone());
        match &self.fail_with {
            Some(message) => Err(CapabilityError::new(message.clone())),
            None => Ok(()),
        }
    }
}
