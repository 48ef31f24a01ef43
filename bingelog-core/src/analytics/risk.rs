//! Predictive risk engine.
//!
//! Builds a day-of-week x time-window frequency table from recent binge
//! logs and answers point-in-time risk queries. Scores are frequency
//! shares used for ranking only, not probabilities. Queries resolve in
//! strict priority order and return at most one alert.

use chrono::{DateTime, Datelike, Duration, Timelike, Utc, Weekday};

use crate::analytics::freq::{percent_share, FreqTable};
use crate::types::{
    day_name, AlertKind, BingeLog, PredictiveAlert, TimeWindow, TIME_WINDOWS, WEEK_SUNDAY_FIRST,
};

/// Minimum occurrences in a bucket before it counts as a risk pattern.
const ALERT_THRESHOLD: u32 = 2;

/// Trailing lookback window for pattern analysis, in days.
const RECENT_DAYS: i64 = 30;

/// Fewer logs than this and alerts stay silent.
const MIN_LOGS_FOR_ALERTS: usize = 3;

/// A day/time bucket that has accumulated enough binges to flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskPattern {
    pub day: Weekday,
    pub window: TimeWindow,
    pub count: u32,
    /// Share of all recent logs landing in this bucket, rounded percent
    pub risk_score: u32,
}

/// Rank day/time buckets by binge frequency over the last 30 days.
///
/// Only buckets at or above the occurrence threshold are returned,
/// highest score first. Equal scores keep first-encounter order.
pub fn risk_patterns(logs: &[BingeLog], now: DateTime<Utc>) -> Vec<RiskPattern> {
    let cutoff = now - Duration::days(RECENT_DAYS);

    let mut buckets: FreqTable<(Weekday, TimeWindow)> = FreqTable::new();
    for log in logs.iter().filter(|log| log.timestamp >= cutoff) {
        buckets.add((
            log.timestamp.weekday(),
            TimeWindow::from_hour(log.timestamp.hour()),
        ));
    }

    let total = buckets.total().max(1);
    buckets
        .ranked()
        .into_iter()
        .filter(|(_, count)| *count >= ALERT_THRESHOLD)
        .map(|((day, window), count)| RiskPattern {
            day,
            window,
            count,
            risk_score: percent_share(count, total).unwrap_or(0),
        })
        .collect()
}

/// The single most relevant alert for this instant, if any.
///
/// Priority: the current bucket is high-risk (warning), then the next
/// time window later today (info), then any high-risk bucket tomorrow
/// (info). Silent until at least 3 logs exist.
pub fn predictive_alert(logs: &[BingeLog], now: DateTime<Utc>) -> Option<PredictiveAlert> {
    if logs.len() < MIN_LOGS_FOR_ALERTS {
        return None;
    }

    let current_day = now.weekday();
    let current_window = TimeWindow::from_hour(now.hour());
    let current_hour = now.hour();
    let patterns = risk_patterns(logs, now);

    if patterns
        .iter()
        .any(|p| p.day == current_day && p.window == current_window)
    {
        return Some(PredictiveAlert {
            kind: AlertKind::Warning,
            message: format!(
                "{} {}s have been challenging for you",
                day_name(current_day),
                current_window.lower_label()
            ),
            suggestion: Some("The urge timer is ready if you need it".to_string()),
        });
    }

    // A later window today that has historically been tough
    if let Some(next_window) = TIME_WINDOWS
        .iter()
        .copied()
        .find(|tw| tw.start_hour() > current_hour)
    {
        if patterns
            .iter()
            .any(|p| p.day == current_day && p.window == next_window)
        {
            return Some(PredictiveAlert {
                kind: AlertKind::Info,
                message: format!(
                    "{} {}s are usually tough",
                    day_name(current_day),
                    next_window.lower_label()
                ),
                suggestion: Some("Have your coping strategies ready".to_string()),
            });
        }
    }

    // Tomorrow's strongest bucket, if it has one
    let tomorrow = current_day.succ();
    if let Some(tough) = patterns.iter().find(|p| p.day == tomorrow) {
        return Some(PredictiveAlert {
            kind: AlertKind::Info,
            message: format!(
                "Tomorrow ({}) {}s can be challenging",
                day_name(tomorrow),
                tough.window.lower_label()
            ),
            suggestion: Some("Consider planning ahead".to_string()),
        });
    }

    None
}

/// Per-day aggregate of the risk table for the week-ahead view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyRiskSummary {
    /// Up to 2 days with the highest flagged-bucket totals
    pub high_risk_days: Vec<Weekday>,
    /// Up to 2 days with zero flagged buckets
    pub best_days: Vec<Weekday>,
}

/// Sum flagged buckets per weekday and pick the extremes.
pub fn weekly_risk_summary(logs: &[BingeLog], now: DateTime<Utc>) -> WeeklyRiskSummary {
    let patterns = risk_patterns(logs, now);

    let mut day_totals: Vec<(Weekday, u32)> = WEEK_SUNDAY_FIRST
        .iter()
        .map(|&day| {
            let total = patterns
                .iter()
                .filter(|p| p.day == day)
                .map(|p| p.count)
                .sum();
            (day, total)
        })
        .collect();
    // Stable sort keeps Sunday-first order among ties
    day_totals.sort_by(|a, b| b.1.cmp(&a.1));

    let high_risk_days = day_totals
        .iter()
        .filter(|(_, count)| *count >= ALERT_THRESHOLD)
        .take(2)
        .map(|(day, _)| *day)
        .collect();
    let best_days = day_totals
        .iter()
        .filter(|(_, count)| *count == 0)
        .take(2)
        .map(|(day, _)| *day)
        .collect();

    WeeklyRiskSummary {
        high_risk_days,
        best_days,
    }
}
