//! Week-over-week trends and progress snapshots.
//!
//! Buckets are rolling 7-day windows anchored at the query instant, not
//! calendar weeks, so "this week" always means the trailing 7 days.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::analytics::stats;
use crate::types::{BingeLog, Timestamped, UrgeEntry, UserStats};

/// Days shown by the streak calendar.
const CALENDAR_DAYS: i64 = 14;

/// Default number of trailing weeks in a trend series.
pub const DEFAULT_TREND_WEEKS: u32 = 4;

/// One 7-day bucket of activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekPoint {
    /// 0 = the trailing 7 days, 1 = the week before, ...
    pub weeks_ago: u32,
    pub binges: u32,
    pub urges_surfed: u32,
}

/// Direction of change between the last two weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Improving,
    Worsening,
    Steady,
}

/// A trend series plus its headline direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyTrends {
    /// Oldest week first, trailing week last
    pub weeks: Vec<WeekPoint>,
    /// This week's binges vs last week's
    pub direction: TrendDirection,
}

/// Bucket logs and urges into trailing 7-day windows.
pub fn weekly_trends(
    logs: &[BingeLog],
    urges: &[UrgeEntry],
    weeks: u32,
    now: DateTime<Utc>,
) -> WeeklyTrends {
    let mut points = Vec::with_capacity(weeks as usize);
    for weeks_ago in (0..weeks).rev() {
        let end = now - Duration::weeks(weeks_ago as i64);
        let start = end - Duration::weeks(1);
        let in_week = |ts: DateTime<Utc>| ts >= start && ts < end;

        points.push(WeekPoint {
            weeks_ago,
            binges: logs.iter().filter(|l| in_week(l.timestamp())).count() as u32,
            urges_surfed: urges
                .iter()
                .filter(|u| u.surfed() && in_week(u.timestamp()))
                .count() as u32,
        });
    }

    let direction = match points.len() {
        0 | 1 => TrendDirection::Steady,
        n => {
            let this_week = points[n - 1].binges;
            let last_week = points[n - 2].binges;
            if this_week < last_week {
                TrendDirection::Improving
            } else if this_week > last_week {
                TrendDirection::Worsening
            } else {
                TrendDirection::Steady
            }
        }
    };

    WeeklyTrends {
        weeks: points,
        direction,
    }
}

/// One calendar day in the recent-history strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub binge_free: bool,
}

/// Binge-free flags for the last 14 days, oldest first (today last).
pub fn streak_calendar(logs: &[BingeLog], now: DateTime<Utc>) -> Vec<CalendarDay> {
    let today = now.date_naive();
    (0..CALENDAR_DAYS)
        .rev()
        .map(|days_ago| {
            let date = today - Duration::days(days_ago);
            let binge_free = !logs.iter().any(|l| l.timestamp.date_naive() == date);
            CalendarDay { date, binge_free }
        })
        .collect()
}

/// Headline records for the progress view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonalBests {
    pub longest_streak: u32,
    pub total_urges_surfed: u32,
    /// Most urges surfed in any trailing 7-day bucket of the last 12 weeks
    pub best_week_surfed: u32,
}

pub fn personal_bests(stats: &UserStats, urges: &[UrgeEntry], now: DateTime<Utc>) -> PersonalBests {
    let derived = stats::derive(stats, now);
    let trends = weekly_trends(&[], urges, 12, now);
    let best_week_surfed = trends
        .weeks
        .iter()
        .map(|w| w.urges_surfed)
        .max()
        .unwrap_or(0);

    PersonalBests {
        longest_streak: derived.longest_streak,
        total_urges_surfed: stats.urges_surfed,
        best_week_surfed,
    }
}
