//! External AI oracle (optional).
//!
//! Asks a hosted model for coaching messages, pattern insights, and
//! risk-window predictions. The oracle is strictly additive: every
//! caller has an infallible wrapper that degrades to `None`/empty on
//! failure, and no analytic result ever depends on it.

mod client;

pub use client::OracleClient;

use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::types::day_name;

/// Predicted risk level for a day/time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// One model-predicted risk window, consumed by the external
/// notification scheduler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskPrediction {
    /// Day name, e.g. "Sunday"
    pub day_of_week: String,
    /// "morning", "afternoon", or "evening"
    pub time_of_day: String,
    pub risk_level: RiskLevel,
    /// Brief model-supplied explanation
    pub reason: String,
}

/// A model-generated observation about the user's patterns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternInsight {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: InsightKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Warning,
    Positive,
    Neutral,
}

/// Whether `now` falls inside a predicted medium-or-high risk window.
///
/// Deterministic and local; predictions may be stale, so matching is by
/// name rather than timestamp. The coarse three-way split here is
/// intentional: predictions speak in "morning/afternoon/evening".
pub fn current_high_risk(
    predictions: &[RiskPrediction],
    now: DateTime<Utc>,
) -> Option<&RiskPrediction> {
    let current_day = day_name(now.weekday());
    let time_of_day = match now.hour() {
        h if h < 12 => "morning",
        h if h < 17 => "afternoon",
        _ => "evening",
    };

    predictions.iter().find(|p| {
        p.day_of_week.eq_ignore_ascii_case(current_day)
            && p.time_of_day.eq_ignore_ascii_case(time_of_day)
            && matches!(p.risk_level, RiskLevel::High | RiskLevel::Medium)
    })
}

/// Slice out the first JSON array in a model reply.
///
/// Models wrap JSON in prose despite instructions; take everything from
/// the first `[` to the last `]` and let the parser judge it.
pub(crate) fn extract_json_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::utc;

    fn prediction(day: &str, time: &str, level: RiskLevel) -> RiskPrediction {
        RiskPrediction {
            day_of_week: day.to_string(),
            time_of_day: time.to_string(),
            risk_level: level,
            reason: "test".to_string(),
        }
    }

    #[test]
    fn test_current_high_risk_matches_day_and_time() {
        let predictions = vec![
            prediction("Sunday", "evening", RiskLevel::High),
            prediction("Friday", "night", RiskLevel::High),
        ];

        // Sunday Aug 30 2026, 19:00 -> "evening"
        let hit = current_high_risk(&predictions, utc(2026, 8, 30, 19, 0));
        assert_eq!(hit.unwrap().day_of_week, "Sunday");

        // Sunday morning does not match
        assert!(current_high_risk(&predictions, utc(2026, 8, 30, 9, 0)).is_none());
        // Monday evening does not match
        assert!(current_high_risk(&predictions, utc(2026, 8, 31, 19, 0)).is_none());
    }

    #[test]
    fn test_current_high_risk_ignores_low_and_case() {
        let predictions = vec![
            prediction("sunday", "EVENING", RiskLevel::Medium),
            prediction("Monday", "morning", RiskLevel::Low),
        ];
        assert!(current_high_risk(&predictions, utc(2026, 8, 30, 19, 0)).is_some());
        assert!(current_high_risk(&predictions, utc(2026, 8, 31, 9, 0)).is_none());
    }

    #[test]
    fn test_time_of_day_split() {
        let predictions = vec![
            prediction("Thursday", "morning", RiskLevel::High),
            prediction("Thursday", "afternoon", RiskLevel::High),
            prediction("Thursday", "evening", RiskLevel::High),
        ];
        // Aug 27 2026 is a Thursday
        let at = |h| current_high_risk(&predictions, utc(2026, 8, 27, h, 0)).unwrap();
        assert_eq!(at(0).time_of_day, "morning");
        assert_eq!(at(11).time_of_day, "morning");
        assert_eq!(at(12).time_of_day, "afternoon");
        assert_eq!(at(16).time_of_day, "afternoon");
        assert_eq!(at(17).time_of_day, "evening");
        assert_eq!(at(23).time_of_day, "evening");
    }

    #[test]
    fn test_extract_json_array() {
        assert_eq!(
            extract_json_array("Here you go: [1, 2] done"),
            Some("[1, 2]")
        );
        assert_eq!(extract_json_array("[]"), Some("[]"));
        assert_eq!(extract_json_array("no json here"), None);
        assert_eq!(extract_json_array("] backwards ["), None);
    }

    #[test]
    fn test_risk_prediction_wire_shape() {
        let json = r#"{"dayOfWeek": "Sunday", "timeOfDay": "evening", "riskLevel": "high", "reason": "recurring pattern"}"#;
        let p: RiskPrediction = serde_json::from_str(json).unwrap();
        assert_eq!(p.day_of_week, "Sunday");
        assert_eq!(p.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_pattern_insight_wire_shape() {
        let json = r#"{"title": "Evening pattern", "description": "Most logs fall after 5pm.", "type": "neutral"}"#;
        let insight: PatternInsight = serde_json::from_str(json).unwrap();
        assert_eq!(insight.kind, InsightKind::Neutral);
    }
}
