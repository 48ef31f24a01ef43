//! HTTP client for the Anthropic messages API.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::OracleConfig;
use crate::error::{Error, Result};
use crate::types::{BingeLog, UrgeCheckIn, UserStats};

use super::{extract_json_array, PatternInsight, RiskPrediction};

/// Minimum logs before risk predictions are worth asking for.
const MIN_LOGS_FOR_PREDICTIONS: usize = 5;

/// Minimum logs before pattern insights are worth asking for.
const MIN_LOGS_FOR_INSIGHTS: usize = 3;

/// Most recent logs included in a prediction prompt.
const PREDICTION_LOG_SAMPLE: usize = 30;

/// Messages API request body
#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

/// Messages API response body (only the parts we read)
#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

/// Compact log summary included in prompts.
#[derive(Debug, Serialize)]
struct LogTime<'a> {
    day: &'a str,
    hour: u32,
}

/// HTTP client for the AI oracle
pub struct OracleClient {
    config: OracleConfig,
    http_client: reqwest::Client,
    api_key: String,
}

impl OracleClient {
    /// Create a new oracle client from configuration
    ///
    /// Returns an error if the configuration is invalid or missing required fields.
    pub fn new(config: OracleConfig) -> Result<Self> {
        config.validate()?;

        let api_key = config
            .resolved_api_key()
            .ok_or_else(|| Error::Config("oracle.api_key is required".to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "anthropic-version",
            HeaderValue::from_static("2023-06-01"),
        );

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
            api_key,
        })
    }

    /// One completion round-trip; returns the first text block.
    async fn complete(&self, system: &str, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/v1/messages",
            self.config.endpoint.trim_end_matches('/')
        );
        let request = MessagesRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            system,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .http_client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Oracle(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Oracle(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .map_err(|e| Error::Oracle(format!("failed to parse response: {}", e)))?;

        parsed
            .content
            .into_iter()
            .next()
            .map(|block| block.text)
            .ok_or_else(|| Error::Oracle("empty completion".to_string()))
    }

    // ============================================
    // Coaching
    // ============================================

    /// A short encouragement for someone mid-way through the urge timer.
    pub async fn coach_message(
        &self,
        stats: &UserStats,
        streak_days: u32,
        recent_triggers: &[String],
        seconds_remaining: u32,
    ) -> Result<String> {
        let system = "You are a compassionate, supportive coach helping someone resist a binge eating urge.\n\
            Keep responses SHORT (1-2 sentences max). Be warm but not preachy.\n\
            Focus on the present moment and their strength. Never shame or lecture.\n\
            Speak directly to them in second person.";

        let triggers_line = if recent_triggers.is_empty() {
            String::new()
        } else {
            format!("Recent triggers: {}\n", recent_triggers.join(", "))
        };
        let prompt = format!(
            "The user is {} seconds into their 90-second urge timer.\n\
             Their stats: {} urges resisted, {} days binge-free.\n\
             {}\n\
             Give them ONE short, encouraging message to help them through this moment.",
            seconds_remaining, stats.urges_surfed, streak_days, triggers_line
        );

        self.complete(system, &prompt).await
    }

    /// Infallible variant: failures are logged and swallowed.
    pub async fn coach_message_or_none(
        &self,
        stats: &UserStats,
        streak_days: u32,
        recent_triggers: &[String],
        seconds_remaining: u32,
    ) -> Option<String> {
        match self
            .coach_message(stats, streak_days, recent_triggers, seconds_remaining)
            .await
        {
            Ok(message) => Some(message),
            Err(e) => {
                warn!(error = %e, "coach message unavailable");
                None
            }
        }
    }

    // ============================================
    // Risk predictions
    // ============================================

    /// Ask the model for 1-2 high-risk day/time windows.
    ///
    /// Returns an empty list below the data minimum without calling out.
    pub async fn predict_risk_windows(&self, logs: &[BingeLog]) -> Result<Vec<RiskPrediction>> {
        if logs.len() < MIN_LOGS_FOR_PREDICTIONS {
            return Ok(Vec::new());
        }

        let system = "You analyze binge eating patterns to predict high-risk times.\n\
            Return ONLY valid JSON array. Be helpful, not scary.";

        let log_times: Vec<LogTime> = logs
            .iter()
            .take(PREDICTION_LOG_SAMPLE)
            .map(|log| LogTime {
                day: crate::types::day_name(chrono::Datelike::weekday(&log.timestamp)),
                hour: chrono::Timelike::hour(&log.timestamp),
            })
            .collect();

        let prompt = format!(
            "Based on these binge times, predict high-risk periods:\n\n\
             {}\n\n\
             Return JSON array of predictions (1-2 max):\n\
             [{{\"dayOfWeek\": \"Sunday\", \"timeOfDay\": \"evening\", \"riskLevel\": \"high|medium|low\", \"reason\": \"brief explanation\"}}]",
            serde_json::to_string(&log_times)?
        );

        let reply = self.complete(system, &prompt).await?;
        parse_json_reply(&reply)
    }

    /// Infallible variant: failures are logged and become an empty list.
    pub async fn predict_risk_windows_or_empty(&self, logs: &[BingeLog]) -> Vec<RiskPrediction> {
        match self.predict_risk_windows(logs).await {
            Ok(predictions) => predictions,
            Err(e) => {
                warn!(error = %e, "risk predictions unavailable");
                Vec::new()
            }
        }
    }

    // ============================================
    // Pattern insights
    // ============================================

    /// Ask the model for 2-3 narrative observations about recent patterns.
    pub async fn pattern_insights(
        &self,
        logs: &[BingeLog],
        check_ins: &[UrgeCheckIn],
        stats: &UserStats,
        streak_days: u32,
    ) -> Result<Vec<PatternInsight>> {
        if logs.len() < MIN_LOGS_FOR_INSIGHTS {
            return Ok(Vec::new());
        }

        let system = "You analyze binge eating patterns to provide helpful, non-judgmental insights.\n\
            Return ONLY valid JSON array, no other text. Focus on actionable patterns.\n\
            Be supportive, not alarming. Frame insights as helpful observations.";

        #[derive(Serialize)]
        struct LogSummary<'a> {
            day: &'a str,
            hour: u32,
            emotions: &'a [String],
            location: &'a str,
        }

        let log_summary: Vec<LogSummary> = logs
            .iter()
            .take(20)
            .map(|log| LogSummary {
                day: crate::types::day_name(chrono::Datelike::weekday(&log.timestamp)),
                hour: chrono::Timelike::hour(&log.timestamp),
                emotions: &log.emotions,
                location: &log.location,
            })
            .collect();

        let mut trigger_counts: crate::analytics::FreqTable<String> =
            crate::analytics::FreqTable::new();
        for check_in in check_ins {
            trigger_counts.extend(check_in.triggers.iter().cloned());
        }
        let counts: std::collections::BTreeMap<String, u32> = trigger_counts
            .ranked()
            .into_iter()
            .collect();

        let prompt = format!(
            "Analyze these binge eating patterns:\n\n\
             Recent logs: {}\n\
             Trigger frequency: {}\n\
             Stats: {} total binges, {} urges resisted, {} day streak\n\n\
             Find 2-3 meaningful patterns. Return JSON array:\n\
             [{{\"title\": \"short title\", \"description\": \"1-2 sentence insight\", \"type\": \"warning|positive|neutral\"}}]",
            serde_json::to_string(&log_summary)?,
            serde_json::to_string(&counts)?,
            stats.total_binges,
            stats.urges_surfed,
            streak_days
        );

        let reply = self.complete(system, &prompt).await?;
        parse_json_reply(&reply)
    }

    /// Infallible variant: failures are logged and become an empty list.
    pub async fn pattern_insights_or_empty(
        &self,
        logs: &[BingeLog],
        check_ins: &[UrgeCheckIn],
        stats: &UserStats,
        streak_days: u32,
    ) -> Vec<PatternInsight> {
        match self
            .pattern_insights(logs, check_ins, stats, streak_days)
            .await
        {
            Ok(insights) => insights,
            Err(e) => {
                warn!(error = %e, "pattern insights unavailable");
                Vec::new()
            }
        }
    }
}

/// Parse a JSON array out of a possibly prose-wrapped model reply.
fn parse_json_reply<T: serde::de::DeserializeOwned>(reply: &str) -> Result<Vec<T>> {
    let json = extract_json_array(reply)
        .ok_or_else(|| Error::Oracle("no JSON array in reply".to_string()))?;
    serde_json::from_str(json).map_err(|e| Error::Oracle(format!("malformed reply: {}", e)))
}
