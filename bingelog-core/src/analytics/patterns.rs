//! Pattern analysis over filtered event data.
//!
//! A best-effort descriptive summarizer, not an inference engine: it pools
//! trigger tags across all three event kinds, buckets binge times, pairs
//! coping strategies with triggers, and degrades to `None`s and `false`
//! flags when there is not enough data. It never fails on empty input.
//!
//! Callers are expected to pass collections already filtered through the
//! history gate. Time-of-day and day-of-week bucketing is done in UTC;
//! callers that log local wall-clock events should store timestamps
//! accordingly.

use chrono::{Datelike, Timelike, Weekday};
use serde::Serialize;

use crate::analytics::freq::{percent_share, FreqTable};
use crate::catalog::MIN_DATA_FOR_PATTERNS;
use crate::types::{day_name, BingeLog, TimeWindow, UrgeCheckIn, UrgeEntry};

/// The trigger/strategy pair with the strongest co-occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategyPairing {
    /// Trigger tag, lowercased
    pub trigger: String,
    /// Strategy tag, lowercased
    pub strategy: String,
    /// How many surfed urges carried both
    pub count: u32,
}

/// Ranked behavioral patterns derived from the event log.
///
/// All tag outputs are lowercased for sentence composition. Fields are
/// `None`/empty when the underlying data is missing rather than erroring.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PatternSummary {
    /// Top 2 tags pooled from logs, check-ins, and urge reflections
    pub top_emotions: Vec<String>,
    /// Single most frequent pooled tag
    pub strongest_trigger: Option<String>,
    /// Its share of all pooled tag mentions, rounded percent
    pub trigger_strength: Option<u32>,
    /// Highest-count time-of-day bucket for binge logs
    pub top_time: Option<TimeWindow>,
    /// Highest-count weekday for binge logs
    pub top_day: Option<Weekday>,
    /// Most frequent non-empty binge location
    pub top_location: Option<String>,
    /// Top 2 coping strategies from surfed urges
    pub top_strategies: Vec<String>,
    /// Strongest trigger-strategy pairing (co-occurrence >= 2)
    pub best_pairing: Option<StrategyPairing>,
    /// Surfed share of all urge-timer sessions, rounded percent
    pub success_rate: Option<u32>,
    /// Templated next-step suggestion
    pub suggested_action: Option<String>,
    /// Enough pooled mentions or logs to trust the summary
    pub has_enough_data: bool,
    /// At least one surfed urge recorded a strategy
    pub has_strategy_data: bool,
}

impl PatternSummary {
    /// Display name for the top day, e.g. "Monday".
    pub fn top_day_name(&self) -> Option<&'static str> {
        self.top_day.map(day_name)
    }
}

/// Derive a [`PatternSummary`] from filtered event collections.
pub fn analyze(
    logs: &[BingeLog],
    check_ins: &[UrgeCheckIn],
    urges: &[UrgeEntry],
) -> PatternSummary {
    // Pool trigger tags across all three event kinds. Counting is
    // case-sensitive on the stored tags; outputs are lowercased.
    let mut emotions: FreqTable<String> = FreqTable::new();
    for log in logs {
        emotions.extend(log.emotions.iter().cloned());
    }
    for check_in in check_ins {
        emotions.extend(check_in.triggers.iter().cloned());
    }
    for urge in urges {
        if let Some(reflection) = urge.outcome.reflection() {
            emotions.extend(reflection.triggers.iter().cloned());
        }
    }

    let top_emotions: Vec<String> = emotions
        .top_n(2)
        .into_iter()
        .map(|(tag, _)| tag.to_lowercase())
        .collect();

    let strongest = emotions.top();
    let trigger_strength = strongest
        .as_ref()
        .and_then(|(_, count)| percent_share(*count, emotions.total()));
    let strongest_trigger = strongest.as_ref().map(|(tag, _)| tag.to_lowercase());

    // Time-of-day and day-of-week buckets, binge logs only.
    let mut times: FreqTable<TimeWindow> = FreqTable::new();
    let mut days: FreqTable<Weekday> = FreqTable::new();
    for log in logs {
        times.add(TimeWindow::from_hour(log.timestamp.hour()));
        days.add(log.timestamp.weekday());
    }
    let top_time = times.top().map(|(tw, _)| tw);
    let top_day = days.top().map(|(day, _)| day);

    let locations: FreqTable<String> = logs
        .iter()
        .filter(|log| !log.location.is_empty())
        .map(|log| log.location.clone())
        .collect();
    let top_location = locations.top().map(|(loc, _)| loc.to_lowercase());

    // Coping strategies from surfed urges only.
    let mut strategies: FreqTable<String> = FreqTable::new();
    let mut pairings: FreqTable<(String, String)> = FreqTable::new();
    for urge in urges {
        let Some(reflection) = urge.outcome.reflection() else {
            continue;
        };
        strategies.extend(reflection.strategies.iter().cloned());
        // Pairings need both sides present on the same entry
        for trigger in &reflection.triggers {
            for strategy in &reflection.strategies {
                pairings.add((trigger.clone(), strategy.clone()));
            }
        }
    }
    let top_strategies: Vec<String> = strategies
        .top_n(2)
        .into_iter()
        .map(|(s, _)| s.to_lowercase())
        .collect();

    // One-off co-occurrences are noise; require at least 2.
    let best_pairing = pairings
        .top()
        .filter(|(_, count)| *count >= 2)
        .map(|((trigger, strategy), count)| StrategyPairing {
            trigger: trigger.to_lowercase(),
            strategy: strategy.to_lowercase(),
            count,
        });

    let surfed_count = urges.iter().filter(|u| u.surfed()).count() as u32;
    let success_rate = percent_share(surfed_count, urges.len() as u32);

    let suggested_action = match (top_day, top_time) {
        (Some(day), Some(time)) => Some(format!(
            "Have a plan ready for {} {}s",
            day_name(day),
            time.lower_label()
        )),
        _ => match (&strongest_trigger, top_strategies.first()) {
            (Some(trigger), Some(strategy)) => {
                Some(format!("When feeling {}, try {}", trigger, strategy))
            }
            _ => None,
        },
    };

    let has_enough_data =
        emotions.total() as usize >= MIN_DATA_FOR_PATTERNS || logs.len() >= MIN_DATA_FOR_PATTERNS;
    let has_strategy_data = !strategies.is_empty();

    PatternSummary {
        top_emotions,
        strongest_trigger,
        trigger_strength,
        top_time,
        top_day,
        top_location,
        top_strategies,
        best_pairing,
        success_rate,
        suggested_action,
        has_enough_data,
        has_strategy_data,
    }
}
