use crate::error::{ActionError, CapabilityError};
use crate::handler::Action;
use crate::request::TEXT_REQUIRED;
use async_trait::async_trait;
use aws_sdk_comprehend::{types::LanguageCode, Client as ComprehendClient};
use lambda_http::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Language every request is analyzed in
pub const LANGUAGE_CODE: &str = "en";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentScores {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    pub mixed: f64,
}

/// What the engine reports for a piece of text
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentDetection {
    /// POSITIVE | NEGATIVE | NEUTRAL | MIXED, passed through as returned
    pub label: String,
    pub scores: SentimentScores,
}

#[async_trait]
pub trait SentimentAnalyzer: Send + Sync {
    async fn detect(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<SentimentDetection, CapabilityError>;
}

/// Amazon Comprehend backed analyzer
pub struct ComprehendAnalyzer {
    client: ComprehendClient,
}

impl ComprehendAnalyzer {
    pub fn new(client: ComprehendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SentimentAnalyzer for ComprehendAnalyzer {
    async fn detect(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<SentimentDetection, CapabilityError> {
        let output = self
            .client
            .detect_sentiment()
            .text(text)
            .language_code(LanguageCode::from(language_code))
            .send()
            .await?;

        let label = output
            .sentiment()
            .ok_or_else(|| CapabilityError::new("Comprehend response is missing Sentiment"))?
            .as_str()
            .to_string();

        let score = output
            .sentiment_score()
            .ok_or_else(|| CapabilityError::new("Comprehend response is missing SentimentScore"))?;

        let field = |name: &str, value: Option<f32>| {
            value.map(widen).ok_or_else(|| {
                CapabilityError(format!("Comprehend response is missing SentimentScore.{}", name))
            })
        };

        Ok(SentimentDetection {
            label,
            scores: SentimentScores {
                positive: field("Positive", score.positive())?,
                negative: field("Negative", score.negative())?,
                neutral: field("Neutral", score.neutral())?,
                mixed: field("Mixed", score.mixed())?,
            },
        })
    }
}

/// Widen an engine score to f64 keeping its printed value (0.9f32 -> 0.9, not 0.8999999761581421)
pub fn widen(score: f32) -> f64 {
    score
        .to_string()
        .parse()
        .unwrap_or_else(|_| f64::from(score))
}

#[derive(Debug, Deserialize)]
pub struct SentimentRequest {
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SentimentResponse {
    pub sentiment: String,
    pub scores: SentimentScores,
    pub text: String,
}

pub struct AnalyzeSentiment {
    analyzer: Arc<dyn SentimentAnalyzer>,
}

impl AnalyzeSentiment {
    pub fn new(analyzer: Arc<dyn SentimentAnalyzer>) -> Self {
        Self { analyzer }
    }
}

#[async_trait]
impl Action for AnalyzeSentiment {
    type Input = SentimentRequest;
    type Validated = String;

    const NAME: &'static str = "SentimentAnalysis";
    const INVALID_INPUT: &'static str = TEXT_REQUIRED;
    const SUCCESS: StatusCode = StatusCode::OK;

    fn validate(&self, input: SentimentRequest) -> Result<String, ActionError> {
        match input.text {
            Some(text) if !text.is_empty() => Ok(text),
            _ => Err(ActionError::Validation(TEXT_REQUIRED)),
        }
    }

    async fn execute(&self, text: String) -> Result<Value, ActionError> {
        let detection = self.analyzer.detect(&text, LANGUAGE_CODE).await?;

        let response = SentimentResponse {
            sentiment: detection.label,
            scores: detection.scores,
            text,
        };
        Ok(serde_json::to_value(&response)?)
    }
}
