// Metric stores and progress arithmetic

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProgressError {
    #[error("progress target is zero")]
    ZeroTarget,
}

/// Daily time-tracking totals, in hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeManagement {
    pub focus_time: f64,
    pub break_time: f64,
    pub productive_hours: f64,
    pub distraction_time: f64,
}

/// A tracked skill with a weekly practice target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub hours_this_week: f64,
    pub target: f64,
}

impl Skill {
    /// Bar width for this skill: hours against the weekly target.
    /// May exceed 100 when the target is beaten.
    pub fn percent(&self) -> f64 {
        percent_of_target(self.hours_this_week, self.target)
    }
}

/// A habit with a current streak and a streak goal, in days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub name: String,
    pub streak: u32,
    pub target: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppCategory {
    Productive,
    Social,
    Entertainment,
}

impl AppCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Productive => "productive",
            Self::Social => "social",
            Self::Entertainment => "entertainment",
        }
    }
}

/// Per-app screen time for today.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppUsage {
    pub name: String,
    pub hours: f64,
    pub category: AppCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigitalWellbeing {
    /// Total screen time today, in hours.
    pub screen_time: f64,
    pub app_usage: Vec<AppUsage>,
}

/// One row of the 4-week progress table: percentage completion per week
/// for a single tracked area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyProgress {
    pub area: String,
    pub weeks: [f64; 4],
}

impl WeeklyProgress {
    fn new(area: &str, weeks: [f64; 4]) -> Self {
        Self {
            area: area.to_string(),
            weeks,
        }
    }
}

/// Everything the dashboard displays. Built once at startup and never
/// mutated; views only read from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsStore {
    pub time_management: TimeManagement,
    pub skills: Vec<Skill>,
    pub habits: Vec<Habit>,
    pub digital_wellbeing: DigitalWellbeing,
    pub progress_over_time: Vec<WeeklyProgress>,
}

impl MetricsStore {
    /// The fixed sample dataset. The original tracker zeroed the
    /// time-management fields and hard-coded the displayed text instead;
    /// here the store carries the displayed values so the views can
    /// compute from state.
    pub fn sample() -> Self {
        Self {
            time_management: TimeManagement {
                focus_time: 4.2,
                break_time: 1.8,
                productive_hours: 28.0,
                distraction_time: 0.5,
            },
            skills: vec![
                Skill {
                    name: "Programming".to_string(),
                    level: 3,
                    hours_this_week: 12.0,
                    target: 20.0,
                },
                Skill {
                    name: "Design".to_string(),
                    level: 2,
                    hours_this_week: 8.0,
                    target: 15.0,
                },
                Skill {
                    name: "Writing".to_string(),
                    level: 4,
                    hours_this_week: 6.0,
                    target: 10.0,
                },
            ],
            habits: vec![
                Habit {
                    name: "Exercise".to_string(),
                    streak: 5,
                    target: 30,
                },
                Habit {
                    name: "Reading".to_string(),
                    streak: 12,
                    target: 30,
                },
                Habit {
                    name: "Meditation".to_string(),
                    streak: 3,
                    target: 21,
                },
            ],
            digital_wellbeing: DigitalWellbeing {
                screen_time: 6.5,
                app_usage: vec![
                    AppUsage {
                        name: "Work Apps".to_string(),
                        hours: 3.2,
                        category: AppCategory::Productive,
                    },
                    AppUsage {
                        name: "Social Media".to_string(),
                        hours: 1.8,
                        category: AppCategory::Social,
                    },
                    AppUsage {
                        name: "Entertainment".to_string(),
                        hours: 1.5,
                        category: AppCategory::Entertainment,
                    },
                ],
            },
            progress_over_time: vec![
                WeeklyProgress::new("Time Mgmt", [20.0, 40.0, 60.0, 80.0]),
                WeeklyProgress::new("Study Habits", [15.0, 35.0, 55.0, 75.0]),
                WeeklyProgress::new("Skills", [10.0, 20.0, 40.0, 60.0]),
                WeeklyProgress::new("Networking", [5.0, 15.0, 25.0, 35.0]),
                WeeklyProgress::new("Self-Care", [30.0, 50.0, 70.0, 90.0]),
                WeeklyProgress::new("AI Tools", [10.0, 25.0, 45.0, 65.0]),
            ],
        }
    }

    /// Total skill practice hours this week across all skills.
    pub fn skill_hours_this_week(&self) -> f64 {
        self.skills.iter().map(|s| s.hours_this_week).sum()
    }

    /// Sum of all weekly skill targets.
    pub fn skill_target_total(&self) -> f64 {
        self.skills.iter().map(|s| s.target).sum()
    }

    /// Longest current habit streak, if any habits are tracked.
    pub fn best_habit_streak(&self) -> Option<&Habit> {
        self.habits.iter().max_by_key(|h| h.streak)
    }
}

/// A placeholder link to an external data provider. Nothing in the
/// application ever connects one; `connected` stays false for the
/// process lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Integration {
    pub key: String,
    pub source: String,
    pub connected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrationsStore {
    pub integrations: Vec<Integration>,
}

impl IntegrationsStore {
    pub fn sample() -> Self {
        let entry = |key: &str, source: &str| Integration {
            key: key.to_string(),
            source: source.to_string(),
            connected: false,
        };

        Self {
            integrations: vec![
                entry("calendar", "Google Calendar"),
                entry("digital_wellbeing", "Screen Time"),
                entry("fitness", "Health App"),
                entry("time_tracking", "RescueTime"),
            ],
        }
    }
}

/// Both stores together, as serialized by `lifedash export`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub metrics: MetricsStore,
    pub integrations: IntegrationsStore,
}

impl DashboardSnapshot {
    pub fn sample() -> Self {
        Self {
            metrics: MetricsStore::sample(),
            integrations: IntegrationsStore::sample(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Percentage of `current` against `target`, unclamped.
///
/// A non-positive target yields 0: a target of zero means nothing was
/// asked for, so there is no progress to report. Use
/// [`try_percent_of_target`] to surface that case as an error instead.
pub fn percent_of_target(current: f64, target: f64) -> f64 {
    if target <= 0.0 {
        0.0
    } else {
        current / target * 100.0
    }
}

/// Fallible variant of [`percent_of_target`] for callers that want to
/// treat a zero target as a reportable condition.
pub fn try_percent_of_target(current: f64, target: f64) -> Result<f64, ProgressError> {
    if target <= 0.0 {
        Err(ProgressError::ZeroTarget)
    } else {
        Ok(current / target * 100.0)
    }
}

/// Clamp a raw percentage into the [0, 100] range a gauge can draw.
pub fn display_percent(percent: f64) -> u16 {
    percent.clamp(0.0, 100.0).round() as u16
}

/// Format an hour count the way the dashboard shows it ("4.2h", "28h").
pub fn format_hours(hours: f64) -> String {
    if (hours - hours.round()).abs() < f64::EPSILON {
        format!("{}h", hours as i64)
    } else {
        format!("{:.1}h", hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_skills_percentages() {
        let store = MetricsStore::sample();
        let percents: Vec<f64> = store.skills.iter().map(|s| s.percent()).collect();

        assert_eq!(store.skills.len(), 3);
        assert!((percents[0] - 60.0).abs() < 1e-9); // programming 12/20
        assert!((percents[1] - 53.333333333333336).abs() < 1e-9); // design 8/15
        assert!((percents[2] - 60.0).abs() < 1e-9); // writing 6/10
    }

    #[test]
    fn test_progress_table_shape() {
        let store = MetricsStore::sample();
        assert_eq!(store.progress_over_time.len(), 6);

        let self_care = store
            .progress_over_time
            .iter()
            .find(|row| row.area == "Self-Care")
            .expect("Self-Care row present");
        assert_eq!(self_care.weeks, [30.0, 50.0, 70.0, 90.0]);

        // Sample data is strictly increasing week over week
        for row in &store.progress_over_time {
            for pair in row.weeks.windows(2) {
                assert!(pair[0] < pair[1], "area {} not increasing", row.area);
            }
        }
    }

    #[test]
    fn test_progress_table_order_is_insertion_order() {
        let store = MetricsStore::sample();
        let areas: Vec<&str> = store
            .progress_over_time
            .iter()
            .map(|r| r.area.as_str())
            .collect();
        assert_eq!(
            areas,
            [
                "Time Mgmt",
                "Study Habits",
                "Skills",
                "Networking",
                "Self-Care",
                "AI Tools"
            ]
        );
    }

    #[test]
    fn test_integrations_all_disconnected() {
        let store = IntegrationsStore::sample();
        assert_eq!(store.integrations.len(), 4);
        assert!(store.integrations.iter().all(|i| !i.connected));
    }

    #[test]
    fn test_percent_of_target() {
        assert_eq!(percent_of_target(12.0, 20.0), 60.0);
        assert_eq!(percent_of_target(0.0, 20.0), 0.0);
        // Unclamped: beating the target goes past 100
        assert_eq!(percent_of_target(30.0, 20.0), 150.0);
        // Zero-target policy: no target, no progress
        assert_eq!(percent_of_target(5.0, 0.0), 0.0);
    }

    #[test]
    fn test_try_percent_of_target_zero_target() {
        assert_eq!(
            try_percent_of_target(5.0, 0.0),
            Err(ProgressError::ZeroTarget)
        );
        assert_eq!(try_percent_of_target(12.0, 20.0), Ok(60.0));
    }

    #[test]
    fn test_display_percent_clamps() {
        assert_eq!(display_percent(-10.0), 0);
        assert_eq!(display_percent(53.33), 53);
        assert_eq!(display_percent(150.0), 100);
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(4.2), "4.2h");
        assert_eq!(format_hours(28.0), "28h");
        assert_eq!(format_hours(0.5), "0.5h");
    }

    #[test]
    fn test_store_roundtrip() {
        let store = MetricsStore::sample();
        let json = serde_json::to_string(&store).unwrap();
        let back: MetricsStore = serde_json::from_str(&json).unwrap();
        assert_eq!(back, store);
    }

    #[test]
    fn test_weekly_aggregates() {
        let store = MetricsStore::sample();
        assert_eq!(store.skill_hours_this_week(), 26.0);
        assert_eq!(store.skill_target_total(), 45.0);
        assert_eq!(store.best_habit_streak().unwrap().name, "Reading");
    }
}
