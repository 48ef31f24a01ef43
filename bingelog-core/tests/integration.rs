//! Integration tests for the store, persistence, and analytics pipeline
//!
//! These exercise full flows: append events through the store, persist to
//! a temp blob, reload, and derive analytics from the loaded state.

use bingelog_core::analytics::{self, patterns, risk, stats};
use bingelog_core::types::{
    utc, AlertKind, SubscriptionSource, TimeWindow, UrgeIntensity, UrgeOutcome, UrgeReflection,
};
use bingelog_core::{BlobStore, HistoryGate, Store};
use chrono::{Duration, Weekday};
use tempfile::TempDir;

fn surfed(triggers: &[&str], strategies: &[&str]) -> UrgeOutcome {
    UrgeOutcome::Surfed(UrgeReflection {
        intensity: Some(UrgeIntensity::Strong),
        triggers: triggers.iter().map(|s| s.to_string()).collect(),
        strategies: strategies.iter().map(|s| s.to_string()).collect(),
        note: None,
    })
}

// ============================================
// Persistence round-trips
// ============================================

#[test]
fn test_store_persists_and_reloads() {
    let dir = TempDir::new().unwrap();
    let blob_path = dir.path().join("state.json");
    let now = utc(2026, 8, 27, 20, 0);

    {
        let mut store = Store::open(BlobStore::new(&blob_path));
        store.add_binge_log(vec!["Stressed".into()], "Home".into(), None, now);
        store.add_urge_entry(90, surfed(&["Anxious"], &["Deep breathing"]), now);
        store.set_onboarded(true);
        store.save().unwrap();
    }

    let reloaded = Store::open(BlobStore::new(&blob_path));
    let state = reloaded.state();
    assert_eq!(state.logs.len(), 1);
    assert_eq!(state.urges.len(), 1);
    assert!(state.urges[0].surfed());
    assert_eq!(state.stats.total_binges, 1);
    assert_eq!(state.stats.urges_surfed, 1);
    assert!(state.is_onboarded);
    // Milestones granted before the save survive the reload
    assert!(state
        .stats
        .milestones_achieved
        .contains(&"logs_1".to_string()));
}

#[test]
fn test_reset_clears_blob_and_state() {
    let dir = TempDir::new().unwrap();
    let blob_path = dir.path().join("state.json");

    let mut store = Store::open(BlobStore::new(&blob_path));
    store.add_binge_log(vec![], String::new(), None, utc(2026, 8, 27, 12, 0));
    assert!(blob_path.exists());

    store.reset_all_data().unwrap();
    assert!(!blob_path.exists());
    assert!(store.state().logs.is_empty());

    // A fresh open after reset starts from defaults
    let fresh = Store::open(BlobStore::new(&blob_path));
    assert_eq!(fresh.state().stats.total_binges, 0);
}

// ============================================
// End-to-end analytic flows
// ============================================

#[test]
fn test_empty_state_yields_empty_analytics() {
    let store = Store::in_memory();
    let now = utc(2026, 8, 27, 12, 0);
    let state = store.state();

    let summary = patterns::analyze(&state.logs, &state.urge_check_ins, &state.urges);
    assert!(!summary.has_enough_data);
    assert!(summary.strongest_trigger.is_none());

    assert_eq!(stats::derive(&state.stats, now).current_streak, 0);
    assert!(risk::predictive_alert(&state.logs, now).is_none());
}

#[test]
fn test_monday_evening_pattern_end_to_end() {
    let mut store = Store::in_memory();
    // Mondays in August 2026: 3, 10, 17
    for day in [3, 10, 17] {
        store.add_binge_log(
            vec!["Stressed".into()],
            "Home".into(),
            None,
            utc(2026, 8, day, 18, 30),
        );
    }

    let state = store.state();
    let summary = patterns::analyze(&state.logs, &state.urge_check_ins, &state.urges);
    assert_eq!(summary.strongest_trigger.as_deref(), Some("stressed"));
    assert_eq!(summary.trigger_strength, Some(100));
    assert_eq!(summary.top_day, Some(Weekday::Mon));
    assert_eq!(summary.top_time, Some(TimeWindow::Evening));
    assert!(summary
        .suggested_action
        .as_deref()
        .unwrap()
        .contains("Monday evening"));
}

#[test]
fn test_strategy_pairing_end_to_end() {
    let mut store = Store::in_memory();
    let base = utc(2026, 8, 20, 20, 0);
    for i in 0..3 {
        store.add_urge_entry(
            90,
            surfed(&["Anxious"], &["Deep breathing"]),
            base + Duration::days(i),
        );
    }
    for i in 3..5 {
        store.add_urge_entry(45, UrgeOutcome::GaveIn, base + Duration::days(i));
    }

    let state = store.state();
    let summary = patterns::analyze(&state.logs, &state.urge_check_ins, &state.urges);
    let pairing = summary.best_pairing.unwrap();
    assert_eq!(pairing.trigger, "anxious");
    assert_eq!(pairing.strategy, "deep breathing");
    assert_eq!(pairing.count, 3);
    assert_eq!(summary.success_rate, Some(60));
}

#[test]
fn test_binge_append_resets_streak() {
    let mut store = Store::in_memory();
    let first = utc(2026, 8, 1, 12, 0);
    store.add_binge_log(vec![], String::new(), None, first);

    let now = first + Duration::days(5);
    assert_eq!(stats::derive(&store.state().stats, now).current_streak, 5);

    store.add_binge_log(vec![], String::new(), None, now);
    let s = &store.state().stats;
    assert_eq!(s.current_streak, 0);
    assert_eq!(s.last_binge_date, Some(now));
    assert_eq!(s.total_binges, 2);
    assert_eq!(stats::derive(s, now).current_streak, 0);
}

#[test]
fn test_streak_week_milestone_granted_once() {
    let mut store = Store::in_memory();
    let binge_at = utc(2026, 8, 10, 12, 0);
    store.add_binge_log(vec![], String::new(), None, binge_at);

    let week_later = binge_at + Duration::days(7);
    let grant = analytics::milestones::evaluate(store.state(), week_later);
    assert!(grant.ids().contains(&"streak_7"));

    // Applying and re-evaluating grants nothing further
    let mut state = store.state().clone();
    analytics::milestones::apply(&mut state, &grant);
    assert!(analytics::milestones::evaluate(&state, week_later).is_empty());
}

#[test]
fn test_sunday_evening_risk_warning() {
    let mut store = Store::in_memory();
    // Sundays in August 2026: 9, 16, 23
    for day in [9, 16, 23] {
        store.add_binge_log(vec![], String::new(), None, utc(2026, 8, day, 19, 0));
    }

    let now = utc(2026, 8, 30, 18, 30);
    let alert = risk::predictive_alert(&store.state().logs, now).unwrap();
    assert_eq!(alert.kind, AlertKind::Warning);
    assert!(alert.message.contains("Sunday"));
    assert!(alert.message.contains("evening"));
}

// ============================================
// History gating and entitlement
// ============================================

#[test]
fn test_history_gate_with_premium_upgrade() {
    let mut store = Store::in_memory();
    let now = utc(2026, 8, 27, 12, 0);
    store.add_binge_log(vec![], String::new(), None, now - Duration::days(60));
    store.add_binge_log(vec![], String::new(), None, now - Duration::days(5));
    store.add_urge_check_in(
        UrgeIntensity::Moderate,
        vec![],
        None,
        now - Duration::days(45),
    );

    let gate = HistoryGate::new(store.is_premium(now), now);
    assert_eq!(gate.filter(&store.state().logs).len(), 1);
    assert_eq!(gate.older_entries_count(store.state()), 2);

    store.upgrade_to_premium(SubscriptionSource::Promo, now);
    let gate = HistoryGate::new(store.is_premium(now), now);
    assert_eq!(gate.filter(&store.state().logs).len(), 2);
    assert!(!gate.has_older_data(store.state()));
}

// ============================================
// Blob compatibility
// ============================================

#[test]
fn test_loads_blob_written_by_earlier_version() {
    let dir = TempDir::new().unwrap();
    let blob_path = dir.path().join("state.json");

    // Epoch-millisecond timestamps, flat urge entries, missing newer fields
    let legacy = r#"{
        "logs": [
            {"id": "1755974700000", "timestamp": 1755974700000, "emotions": ["Stressed"], "location": "Home"}
        ],
        "urgeCheckIns": [],
        "urges": [
            {"id": "1755974800000", "timestamp": 1755974800000, "surfed": true, "duration": 90,
             "intensity": 4, "triggersPresent": ["Anxious"], "copingStrategies": ["Deep breathing"]}
        ],
        "stats": {"currentStreak": 0, "longestStreak": 4, "urgesSurfed": 1, "totalUrges": 1, "totalBinges": 1,
                  "lastBingeDate": 1755974700000, "milestonesAchieved": ["logs_1"]},
        "isOnboarded": true
    }"#;
    std::fs::write(&blob_path, legacy).unwrap();

    let store = Store::open(BlobStore::new(&blob_path));
    let state = store.state();
    assert_eq!(state.logs.len(), 1);
    assert!(state.urges[0].surfed());
    assert_eq!(
        state.urges[0].outcome.reflection().unwrap().strategies,
        vec!["Deep breathing"]
    );
    assert_eq!(state.stats.longest_streak, 4);
    assert!(state.stats.last_binge_date.is_some());
    // Fields the old version never wrote take their defaults
    assert!(!state.notifications_enabled);
    assert!(!state.subscription.is_premium(utc(2026, 8, 27, 12, 0)));
}
