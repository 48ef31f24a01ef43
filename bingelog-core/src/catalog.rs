//! Static catalogs: tag suggestions, milestone definitions, thresholds.

use crate::types::{Milestone, MilestoneKind};

/// Emotion tags offered at log time.
pub const EMOTIONS: &[&str] = &[
    "Stressed",
    "Anxious",
    "Lonely",
    "Bored",
    "Sad",
    "Angry",
    "Tired",
    "Overwhelmed",
    "Frustrated",
    "Empty",
    "Numb",
    "Restless",
];

/// Location tags offered at log time.
pub const LOCATIONS: &[&str] = &[
    "Home",
    "Work",
    "Car",
    "Restaurant",
    "Friend's place",
    "Parents' house",
    "Kitchen",
    "Bedroom",
    "Living room",
    "Outside",
];

/// Common triggers for urge check-ins (emotions plus situational).
pub const URGE_TRIGGERS: &[&str] = &[
    "Stressed",
    "Anxious",
    "Lonely",
    "Bored",
    "Sad",
    "Tired",
    "Hungry",
    "After a meal",
    "Late night",
    "Work pressure",
    "Social situation",
    "Saw triggering food",
];

/// Coping strategies that can help surf an urge.
pub const COPING_STRATEGIES: &[&str] = &[
    "Deep breathing",
    "Waited it out",
    "Distraction",
    "Went for a walk",
    "Called someone",
    "Drank water",
    "Journaled",
    "Meditation",
    "Physical activity",
    "Listened to music",
];

/// Length of the urge timer in seconds.
pub const URGE_TIMER_SECONDS: u32 = 90;

/// Minimum pooled tag mentions (or logs) before pattern insights show.
pub const MIN_DATA_FOR_PATTERNS: usize = 3;

/// Days of history visible without entitlement.
pub const FREE_HISTORY_DAYS: i64 = 30;

/// The fixed milestone catalog.
pub const MILESTONES: &[Milestone] = &[
    // Streak milestones
    Milestone { id: "streak_3", kind: MilestoneKind::Streak, threshold: 3, title: "First Steps", description: "3 days of awareness" },
    Milestone { id: "streak_7", kind: MilestoneKind::Streak, threshold: 7, title: "One Week", description: "A full week of mindfulness" },
    Milestone { id: "streak_14", kind: MilestoneKind::Streak, threshold: 14, title: "Two Weeks", description: "Building momentum" },
    Milestone { id: "streak_30", kind: MilestoneKind::Streak, threshold: 30, title: "One Month", description: "A month of growth" },
    Milestone { id: "streak_60", kind: MilestoneKind::Streak, threshold: 60, title: "Two Months", description: "Deepening awareness" },
    Milestone { id: "streak_90", kind: MilestoneKind::Streak, threshold: 90, title: "Three Months", description: "Remarkable progress" },
    Milestone { id: "streak_180", kind: MilestoneKind::Streak, threshold: 180, title: "Six Months", description: "Half a year of strength" },
    Milestone { id: "streak_365", kind: MilestoneKind::Streak, threshold: 365, title: "One Year", description: "An incredible journey" },
    // Urges surfed milestones
    Milestone { id: "urges_1", kind: MilestoneKind::UrgesSurfed, threshold: 1, title: "First Surf", description: "You rode your first urge wave" },
    Milestone { id: "urges_5", kind: MilestoneKind::UrgesSurfed, threshold: 5, title: "Wave Rider", description: "5 urges surfed successfully" },
    Milestone { id: "urges_10", kind: MilestoneKind::UrgesSurfed, threshold: 10, title: "Steady Sailor", description: "10 urges surfed" },
    Milestone { id: "urges_25", kind: MilestoneKind::UrgesSurfed, threshold: 25, title: "Ocean Master", description: "25 urges overcome" },
    Milestone { id: "urges_50", kind: MilestoneKind::UrgesSurfed, threshold: 50, title: "Surf Champion", description: "50 urges surfed" },
    // Logging milestones
    Milestone { id: "logs_1", kind: MilestoneKind::Logs, threshold: 1, title: "First Log", description: "Started your journey" },
    Milestone { id: "logs_7", kind: MilestoneKind::Logs, threshold: 7, title: "Week of Logs", description: "7 entries recorded" },
    Milestone { id: "logs_30", kind: MilestoneKind::Logs, threshold: 30, title: "Dedicated Logger", description: "30 entries recorded" },
];

/// Look up a catalog milestone by id.
pub fn milestone_by_id(id: &str) -> Option<&'static Milestone> {
    MILESTONES.iter().find(|m| m.id == id)
}

/// Emotion tags pre-selected for a fresh install.
pub fn default_selected_emotions() -> Vec<String> {
    EMOTIONS.iter().take(6).map(|s| s.to_string()).collect()
}

/// Location tags pre-selected for a fresh install.
pub fn default_selected_locations() -> Vec<String> {
    LOCATIONS.iter().take(5).map(|s| s.to_string()).collect()
}
