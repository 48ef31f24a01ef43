//! Event store: the single mutation surface over [`AppState`].
//!
//! Every write goes through here so the bookkeeping stays consistent:
//! appends keep collections newest-first, aggregate counters update in
//! the same step, and each append re-evaluates milestones on the new
//! snapshot and returns the grant to the caller.
//!
//! Persistence is best-effort: a failed save is logged and the in-memory
//! state stays authoritative until the next successful save. Callers that
//! need to surface persistence failures use [`Store::save`] directly.

mod blob;

pub use blob::BlobStore;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::analytics::freq::FreqTable;
use crate::analytics::milestones::{self, MilestoneGrant};
use crate::analytics::stats;
use crate::error::Result;
use crate::types::{
    event_id, AppState, BingeLog, JourneyProgress, Subscription, SubscriptionSource,
    SubscriptionTier, UrgeCheckIn, UrgeEntry, UrgeIntensity, UrgeOutcome,
};

/// In-memory state plus optional blob persistence.
pub struct Store {
    state: AppState,
    blob: Option<BlobStore>,
}

impl Store {
    /// Open the store, loading any persisted state.
    ///
    /// An unreadable or corrupt blob falls back to defaults with a
    /// warning; the damaged file is only overwritten on the next save.
    pub fn open(blob: BlobStore) -> Self {
        let state = match blob.load() {
            Ok(state) => state,
            Err(e) => {
                warn!(error = %e, "could not load state blob, starting from defaults");
                AppState::default()
            }
        };
        Self {
            state,
            blob: Some(blob),
        }
    }

    /// A store with no persistence, for tests and ephemeral use.
    pub fn in_memory() -> Self {
        Self {
            state: AppState::default(),
            blob: None,
        }
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Persist the current state, propagating failures.
    pub fn save(&self) -> Result<()> {
        match &self.blob {
            Some(blob) => blob.save(&self.state),
            None => Ok(()),
        }
    }

    fn persist(&self) {
        if let Some(blob) = &self.blob {
            if let Err(e) = blob.save(&self.state) {
                warn!(error = %e, "failed to persist state, keeping in-memory copy");
            }
        }
    }

    // ============================================
    // Event appends
    // ============================================

    /// Record a binge episode.
    ///
    /// Folds the streak that just ended into `longest_streak` before
    /// resetting the streak basis, so the longest value never regresses.
    pub fn add_binge_log(
        &mut self,
        emotions: Vec<String>,
        location: String,
        note: Option<String>,
        now: DateTime<Utc>,
    ) -> MilestoneGrant {
        let ending_streak = stats::current_streak(self.state.stats.last_binge_date, now);

        let log = BingeLog {
            id: event_id(now),
            timestamp: now,
            emotions,
            location,
            note,
        };
        info!(id = %log.id, "recording binge log");
        self.state.logs.insert(0, log);

        let s = &mut self.state.stats;
        s.longest_streak = s.longest_streak.max(ending_streak);
        s.current_streak = 0;
        s.last_binge_date = Some(now);
        s.total_binges += 1;

        self.evaluate_and_persist(now)
    }

    /// Record a standalone urge check-in; also counts as today's check-in.
    pub fn add_urge_check_in(
        &mut self,
        intensity: UrgeIntensity,
        triggers: Vec<String>,
        note: Option<String>,
        now: DateTime<Utc>,
    ) {
        let check_in = UrgeCheckIn {
            id: event_id(now),
            timestamp: now,
            intensity,
            triggers,
            note,
        };
        self.state.urge_check_ins.insert(0, check_in);
        self.state.last_check_in = Some(now);
        self.persist();
    }

    /// Record an urge-timer outcome.
    pub fn add_urge_entry(
        &mut self,
        duration_secs: u32,
        outcome: UrgeOutcome,
        now: DateTime<Utc>,
    ) -> MilestoneGrant {
        let surfed = outcome.surfed();
        let entry = UrgeEntry {
            id: event_id(now),
            timestamp: now,
            duration_secs,
            outcome,
        };
        info!(id = %entry.id, surfed, "recording urge entry");
        self.state.urges.insert(0, entry);

        let s = &mut self.state.stats;
        if surfed {
            s.urges_surfed += 1;
        }
        s.total_urges += 1;

        self.evaluate_and_persist(now)
    }

    fn evaluate_and_persist(&mut self, now: DateTime<Utc>) -> MilestoneGrant {
        let grant = milestones::evaluate(&self.state, now);
        if !grant.is_empty() {
            info!(milestones = ?grant.ids(), "milestones achieved");
            milestones::apply(&mut self.state, &grant);
        }
        self.persist();
        grant
    }

    // ============================================
    // Check-ins and derived lookups
    // ============================================

    /// Whether a check-in already happened on `now`'s calendar day.
    pub fn has_checked_in_today(&self, now: DateTime<Utc>) -> bool {
        self.state
            .last_check_in
            .is_some_and(|last| last.date_naive() == now.date_naive())
    }

    /// Mark a check-in without recording an entry.
    pub fn touch_check_in(&mut self, now: DateTime<Utc>) {
        self.state.last_check_in = Some(now);
        self.persist();
    }

    /// Most frequent tag across binge-log emotions and check-in triggers.
    pub fn most_common_trigger(&self) -> Option<String> {
        let mut table: FreqTable<String> = FreqTable::new();
        for log in &self.state.logs {
            table.extend(log.emotions.iter().cloned());
        }
        for check_in in &self.state.urge_check_ins {
            table.extend(check_in.triggers.iter().cloned());
        }
        table.top().map(|(tag, _)| tag)
    }

    // ============================================
    // Preferences
    // ============================================

    pub fn set_onboarded(&mut self, value: bool) {
        self.state.is_onboarded = value;
        self.persist();
    }

    pub fn set_selected_emotions(&mut self, emotions: Vec<String>) {
        self.state.selected_emotions = emotions;
        self.persist();
    }

    pub fn set_selected_locations(&mut self, locations: Vec<String>) {
        self.state.selected_locations = locations;
        self.persist();
    }

    pub fn set_notifications_enabled(&mut self, enabled: bool) {
        self.state.notifications_enabled = enabled;
        self.persist();
    }

    // ============================================
    // Journeys
    // ============================================

    /// Start a journey; a second start of the same journey is a no-op.
    pub fn start_journey(&mut self, journey_id: &str, now: DateTime<Utc>) {
        if self.journey_progress(journey_id).is_some() {
            return;
        }
        self.state.journey_progress.push(JourneyProgress {
            journey_id: journey_id.to_string(),
            started_at: now,
            current_day: 1,
            completed_days: Vec::new(),
            completed: false,
        });
        self.persist();
    }

    /// Mark a journey day complete. Re-completing a day is a no-op;
    /// `current_day` only ever moves forward.
    pub fn complete_journey_day(&mut self, journey_id: &str, day: u32) {
        let Some(progress) = self
            .state
            .journey_progress
            .iter_mut()
            .find(|jp| jp.journey_id == journey_id)
        else {
            return;
        };
        if !progress.completed_days.contains(&day) {
            progress.completed_days.push(day);
        }
        progress.current_day = progress.current_day.max(day + 1);
        self.persist();
    }

    pub fn journey_progress(&self, journey_id: &str) -> Option<&JourneyProgress> {
        self.state
            .journey_progress
            .iter()
            .find(|jp| jp.journey_id == journey_id)
    }

    // ============================================
    // Subscription
    // ============================================

    /// Grant premium. Dev and promo grants are lifetime; store purchases
    /// carry a one-year expiry (renewal is the billing platform's job).
    pub fn upgrade_to_premium(&mut self, source: SubscriptionSource, now: DateTime<Utc>) {
        let expires_at = match source {
            SubscriptionSource::Dev | SubscriptionSource::Promo => None,
            SubscriptionSource::Apple | SubscriptionSource::Google => {
                Some(now + chrono::Duration::days(365))
            }
        };
        self.state.subscription = Subscription {
            tier: SubscriptionTier::Premium,
            expires_at,
            purchased_at: Some(now),
            source: Some(source),
        };
        info!(source = ?source, "upgraded to premium");
        self.persist();
    }

    pub fn is_premium(&self, now: DateTime<Utc>) -> bool {
        self.state.subscription.is_premium(now)
    }

    // ============================================
    // Data management
    // ============================================

    /// Wipe everything back to a fresh install.
    pub fn reset_all_data(&mut self) -> Result<()> {
        info!("resetting all data");
        self.state = AppState::default();
        if let Some(blob) = &self.blob {
            blob.clear()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{utc, UrgeReflection};
    use chrono::Duration;

    #[test]
    fn test_add_binge_log_updates_stats() {
        let mut store = Store::in_memory();
        let now = utc(2026, 8, 27, 21, 0);

        let grant = store.add_binge_log(vec!["Stressed".into()], "Home".into(), None, now);
        assert_eq!(grant.ids(), vec!["logs_1"]);

        let state = store.state();
        assert_eq!(state.logs.len(), 1);
        assert_eq!(state.stats.total_binges, 1);
        assert_eq!(state.stats.last_binge_date, Some(now));
        assert_eq!(state.stats.current_streak, 0);
    }

    #[test]
    fn test_appends_are_newest_first() {
        let mut store = Store::in_memory();
        let t1 = utc(2026, 8, 25, 12, 0);
        let t2 = utc(2026, 8, 26, 12, 0);
        store.add_binge_log(vec![], String::new(), None, t1);
        store.add_binge_log(vec![], String::new(), None, t2);

        assert_eq!(store.state().logs[0].timestamp, t2);
        assert_eq!(store.state().logs[1].timestamp, t1);
    }

    #[test]
    fn test_longest_streak_folds_before_reset() {
        let mut store = Store::in_memory();
        let first = utc(2026, 8, 1, 12, 0);
        store.add_binge_log(vec![], String::new(), None, first);

        // 10 binge-free days, then a relapse
        let relapse = first + Duration::days(10);
        store.add_binge_log(vec![], String::new(), None, relapse);

        assert_eq!(store.state().stats.longest_streak, 10);
        assert_eq!(store.state().stats.last_binge_date, Some(relapse));
        // A shorter following streak does not shrink the record
        let third = relapse + Duration::days(2);
        store.add_binge_log(vec![], String::new(), None, third);
        assert_eq!(store.state().stats.longest_streak, 10);
    }

    #[test]
    fn test_urge_entry_counters_and_milestone() {
        let mut store = Store::in_memory();
        let now = utc(2026, 8, 27, 20, 0);

        let grant = store.add_urge_entry(
            90,
            UrgeOutcome::Surfed(UrgeReflection::default()),
            now,
        );
        assert!(grant.ids().contains(&"urges_1"));
        assert_eq!(store.state().stats.urges_surfed, 1);
        assert_eq!(store.state().stats.total_urges, 1);

        let grant = store.add_urge_entry(30, UrgeOutcome::GaveIn, now + Duration::hours(1));
        assert!(grant.is_empty());
        assert_eq!(store.state().stats.urges_surfed, 1);
        assert_eq!(store.state().stats.total_urges, 2);
    }

    #[test]
    fn test_check_in_same_day_detection() {
        let mut store = Store::in_memory();
        let morning = utc(2026, 8, 27, 8, 0);
        assert!(!store.has_checked_in_today(morning));

        store.add_urge_check_in(UrgeIntensity::Mild, vec!["Bored".into()], None, morning);
        assert!(store.has_checked_in_today(utc(2026, 8, 27, 23, 0)));
        assert!(!store.has_checked_in_today(utc(2026, 8, 28, 1, 0)));
    }

    #[test]
    fn test_most_common_trigger_pools_sources() {
        let mut store = Store::in_memory();
        let now = utc(2026, 8, 27, 12, 0);
        store.add_binge_log(vec!["Stressed".into()], String::new(), None, now);
        store.add_urge_check_in(
            UrgeIntensity::Moderate,
            vec!["Stressed".into(), "Lonely".into()],
            None,
            now,
        );
        assert_eq!(store.most_common_trigger().as_deref(), Some("Stressed"));
    }

    #[test]
    fn test_journey_lifecycle() {
        let mut store = Store::in_memory();
        let now = utc(2026, 8, 27, 12, 0);

        store.start_journey("mindful-start", now);
        store.start_journey("mindful-start", now + Duration::days(1));
        assert_eq!(store.state().journey_progress.len(), 1);

        store.complete_journey_day("mindful-start", 1);
        store.complete_journey_day("mindful-start", 1);
        let progress = store.journey_progress("mindful-start").unwrap();
        assert_eq!(progress.completed_days, vec![1]);
        assert_eq!(progress.current_day, 2);

        // Completing an unknown journey is a no-op
        store.complete_journey_day("missing", 1);
    }

    #[test]
    fn test_premium_upgrade_sources() {
        let mut store = Store::in_memory();
        let now = utc(2026, 8, 27, 12, 0);

        store.upgrade_to_premium(SubscriptionSource::Dev, now);
        assert!(store.is_premium(now + Duration::days(10_000)));

        store.upgrade_to_premium(SubscriptionSource::Apple, now);
        assert!(store.is_premium(now + Duration::days(364)));
        assert!(!store.is_premium(now + Duration::days(366)));
    }

    #[test]
    fn test_open_with_corrupt_blob_starts_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = Store::open(BlobStore::new(&path));
        assert!(store.state().logs.is_empty());
        assert_eq!(store.state().stats.total_binges, 0);
    }

    #[test]
    fn test_reset_all_data() {
        let mut store = Store::in_memory();
        let now = utc(2026, 8, 27, 12, 0);
        store.add_binge_log(vec![], String::new(), None, now);
        store.set_onboarded(true);

        store.reset_all_data().unwrap();
        assert!(store.state().logs.is_empty());
        assert!(!store.state().is_onboarded);
        assert_eq!(store.state().stats, Default::default());
    }
}
