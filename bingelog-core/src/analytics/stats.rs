//! Streak and aggregate stat derivation.
//!
//! The streak is never stored as truth: it is a pure function of
//! `(last_binge_date, longest_streak_stored, now)` and is recomputed on
//! every read. Callers pass state in and get results out; there is no
//! ambient context.

use chrono::{DateTime, Duration, Utc};

use crate::types::UserStats;

/// Streak values derived from stored stats at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedStats {
    /// Whole days since the most recent binge; 0 when none ever logged
    pub current_streak: u32,
    /// Max of the stored longest streak and the current one
    pub longest_streak: u32,
}

/// Whole days elapsed since the last binge.
///
/// A user who has never logged a binge reports 0, not "days since
/// install"; the streak counts recovery from a known event.
pub fn current_streak(last_binge_date: Option<DateTime<Utc>>, now: DateTime<Utc>) -> u32 {
    match last_binge_date {
        Some(last) => {
            let days = (now - last).num_days();
            days.max(0) as u32
        }
        None => 0,
    }
}

/// Derive streak values from stored stats. Idempotent for fixed inputs.
pub fn derive(stats: &UserStats, now: DateTime<Utc>) -> DerivedStats {
    let current = current_streak(stats.last_binge_date, now);
    DerivedStats {
        current_streak: current,
        longest_streak: stats.longest_streak.max(current),
    }
}

/// Granular "time since last binge" for display: "4h", "2d 5h", "12 days".
pub fn time_since_last_binge(
    last_binge_date: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Option<String> {
    let last = last_binge_date?;
    let diff = now.signed_duration_since(last);
    if diff < Duration::zero() {
        return Some("0h".to_string());
    }
    let days = diff.num_days();
    let hours = (diff - Duration::days(days)).num_hours();

    Some(if days == 0 {
        format!("{}h", hours)
    } else if days < 7 {
        format!("{}d {}h", days, hours)
    } else {
        format!("{} days", days)
    })
}
