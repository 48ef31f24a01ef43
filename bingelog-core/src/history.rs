//! History access gate.
//!
//! Non-entitled users see a trailing 30-day window of their own data;
//! entitlement lifts the cutoff entirely. The gate filters views only:
//! the store always keeps full history, so upgrading retroactively
//! reveals everything ever logged.

use chrono::{DateTime, Duration, Utc};

use crate::catalog::FREE_HISTORY_DAYS;
use crate::types::{AppState, Timestamped};

/// A point-in-time visibility filter over timestamped collections.
#[derive(Debug, Clone, Copy)]
pub struct HistoryGate {
    cutoff: Option<DateTime<Utc>>,
}

impl HistoryGate {
    /// Build a gate for one query instant. Entitled users get no cutoff.
    pub fn new(entitled: bool, now: DateTime<Utc>) -> Self {
        let cutoff = if entitled {
            None
        } else {
            Some(now - Duration::days(FREE_HISTORY_DAYS))
        };
        Self { cutoff }
    }

    /// Whether a single timestamp is visible through the gate.
    pub fn is_visible(&self, ts: DateTime<Utc>) -> bool {
        match self.cutoff {
            Some(cutoff) => ts >= cutoff,
            None => true,
        }
    }

    /// Visible entries, preserving input (newest-first) order.
    pub fn filter<'a, T: Timestamped>(&self, items: &'a [T]) -> Vec<&'a T> {
        items
            .iter()
            .filter(|item| self.is_visible(item.timestamp()))
            .collect()
    }

    /// Visible entries as an owned collection, for analyzers that take slices.
    pub fn filter_owned<T: Timestamped + Clone>(&self, items: &[T]) -> Vec<T> {
        items
            .iter()
            .filter(|item| self.is_visible(item.timestamp()))
            .cloned()
            .collect()
    }

    /// Hidden entries across all three event collections.
    ///
    /// Drives the "N older entries locked" teaser; always 0 when entitled.
    pub fn older_entries_count(&self, state: &AppState) -> usize {
        let hidden = |ts: DateTime<Utc>| !self.is_visible(ts);
        state
            .logs
            .iter()
            .filter(|l| hidden(l.timestamp()))
            .count()
            + state
                .urge_check_ins
                .iter()
                .filter(|c| hidden(c.timestamp()))
                .count()
            + state.urges.iter().filter(|u| hidden(u.timestamp())).count()
    }

    pub fn has_older_data(&self, state: &AppState) -> bool {
        self.older_entries_count(state) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{utc, BingeLog};

    fn log_at(ts: DateTime<Utc>) -> BingeLog {
        BingeLog {
            id: ts.timestamp_millis().to_string(),
            timestamp: ts,
            emotions: vec![],
            location: String::new(),
            note: None,
        }
    }

    #[test]
    fn test_free_gate_hides_old_entries() {
        let now = utc(2026, 8, 27, 12, 0);
        let logs = vec![
            log_at(utc(2026, 8, 26, 12, 0)),
            log_at(utc(2026, 8, 1, 12, 0)),
            log_at(utc(2026, 6, 1, 12, 0)),
        ];

        let gate = HistoryGate::new(false, now);
        let visible = gate.filter(&logs);
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].timestamp, utc(2026, 8, 26, 12, 0));
    }

    #[test]
    fn test_entitled_gate_is_identity() {
        let now = utc(2026, 8, 27, 12, 0);
        let logs = vec![
            log_at(utc(2026, 8, 26, 12, 0)),
            log_at(utc(2020, 1, 1, 12, 0)),
        ];

        let gate = HistoryGate::new(true, now);
        assert_eq!(gate.filter_owned(&logs), logs);
        assert!(gate.is_visible(utc(1990, 1, 1, 0, 0)));
    }

    #[test]
    fn test_boundary_is_inclusive_at_cutoff() {
        let now = utc(2026, 8, 31, 0, 0);
        let gate = HistoryGate::new(false, now);
        // Exactly 30 days old stays visible; a second older does not
        assert!(gate.is_visible(utc(2026, 8, 1, 0, 0)));
        assert!(!gate.is_visible(utc(2026, 7, 31, 23, 59)));
    }

    #[test]
    fn test_older_entries_count_spans_collections() {
        let now = utc(2026, 8, 27, 12, 0);
        let mut state = AppState::default();
        state.logs.push(log_at(utc(2026, 5, 1, 12, 0)));
        state.logs.push(log_at(utc(2026, 8, 26, 12, 0)));

        let gate = HistoryGate::new(false, now);
        assert_eq!(gate.older_entries_count(&state), 1);
        assert!(gate.has_older_data(&state));

        let entitled = HistoryGate::new(true, now);
        assert_eq!(entitled.older_entries_count(&state), 0);
        assert!(!entitled.has_older_data(&state));
    }
}
