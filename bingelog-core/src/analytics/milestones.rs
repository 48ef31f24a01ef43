//! Milestone evaluation.
//!
//! Mutation and evaluation are an explicit two-step protocol: callers
//! mutate the store, then run [`evaluate`] on the resulting snapshot and
//! [`apply`] the grant. Milestones are monotonic achievements: once an id
//! is in `milestones_achieved` it is never granted again, even if the
//! streak resets and regrows past the same threshold.

use chrono::{DateTime, Utc};

use crate::analytics::stats;
use crate::catalog::MILESTONES;
use crate::types::{AchievedMilestone, AppState, MilestoneKind};

/// Result of one evaluation pass.
#[derive(Debug, Clone, Default)]
pub struct MilestoneGrant {
    /// Milestones newly crossed in this pass, in catalog order
    pub granted: Vec<AchievedMilestone>,
}

impl MilestoneGrant {
    pub fn is_empty(&self) -> bool {
        self.granted.is_empty()
    }

    /// Ids of the newly granted milestones.
    pub fn ids(&self) -> Vec<&'static str> {
        self.granted.iter().map(|a| a.milestone.id).collect()
    }
}

/// Determine which catalog milestones have newly crossed their threshold.
///
/// Pure: reads the snapshot, grants nothing. Re-running on an unchanged
/// snapshot after [`apply`] yields an empty grant.
pub fn evaluate(state: &AppState, now: DateTime<Utc>) -> MilestoneGrant {
    let current_streak = stats::current_streak(state.stats.last_binge_date, now);

    let granted = MILESTONES
        .iter()
        .filter(|m| !state.stats.milestones_achieved.iter().any(|id| id == m.id))
        .filter(|m| match m.kind {
            MilestoneKind::Streak => current_streak >= m.threshold,
            MilestoneKind::UrgesSurfed => state.stats.urges_surfed >= m.threshold,
            MilestoneKind::Logs => state.logs.len() as u32 >= m.threshold,
        })
        .map(|m| AchievedMilestone {
            milestone: *m,
            achieved_at: now,
        })
        .collect();

    MilestoneGrant { granted }
}

/// Fold a grant back into the state: one atomic update, no duplicates.
pub fn apply(state: &mut AppState, grant: &MilestoneGrant) {
    for achieved in &grant.granted {
        let id = achieved.milestone.id;
        if !state.stats.milestones_achieved.iter().any(|m| m == id) {
            state.stats.milestones_achieved.push(id.to_string());
        }
    }
}

/// Short celebration line for round streak/urge counts, if any.
pub fn celebration_message(state: &AppState, now: DateTime<Utc>) -> Option<&'static str> {
    let streak = stats::current_streak(state.stats.last_binge_date, now);
    match streak {
        7 => return Some("One week strong!"),
        14 => return Some("Two weeks of progress!"),
        30 => return Some("One month milestone!"),
        60 => return Some("Two months of growth!"),
        90 => return Some("Three months - incredible!"),
        _ => {}
    }
    match state.stats.urges_surfed {
        10 => Some("10 urges surfed!"),
        25 => Some("25 urges conquered!"),
        50 => Some("50 urges surfed - amazing!"),
        _ => None,
    }
}
