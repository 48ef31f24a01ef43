//! Analytics over the persisted event log.
//!
//! All analyzers are pure functions of `(data, now)`: callers pass the
//! event collections (already run through the history gate where that
//! applies) and an explicit instant, and get values back. Nothing in
//! here reads the clock, touches the store, or caches between calls.
//!
//! | Module | Answers |
//! |--------|---------|
//! | [`stats`] | How long is the current/longest streak? |
//! | [`patterns`] | What triggers, times, and strategies recur? |
//! | [`risk`] | Is now (or soon) a historically risky moment? |
//! | [`trends`] | Is this week better than last week? |
//! | [`milestones`] | Which achievements were just crossed? |
//! | [`freq`] | Shared occurrence-counting primitive |

pub mod freq;
pub mod milestones;
pub mod patterns;
pub mod risk;
pub mod stats;
pub mod trends;

pub use freq::{percent_share, FreqTable};
pub use milestones::{celebration_message, MilestoneGrant};
pub use patterns::{PatternSummary, StrategyPairing};
pub use risk::{predictive_alert, risk_patterns, weekly_risk_summary, RiskPattern, WeeklyRiskSummary};
pub use stats::DerivedStats;
pub use trends::{
    personal_bests, streak_calendar, weekly_trends, CalendarDay, PersonalBests, TrendDirection,
    WeeklyTrends,
};
