// Display constants - single source of truth for labels and text panels

use ratatui::style::Color;

// Week series labels and colors, matching the original chart legend
pub const WEEK_LABELS: &[&str] = &["Week 1", "Week 2", "Week 3", "Week 4"];

pub const WEEK_COLORS: &[Color] = &[
    Color::Green,   // Week 1
    Color::Blue,    // Week 2
    Color::Yellow,  // Week 3
    Color::Red,     // Week 4
];

// Key insights shown under the overview chart
pub const KEY_INSIGHTS: &[&str] = &[
    "Self-Care shows the strongest improvement trajectory (30% -> 90%)",
    "Time Management demonstrates consistent weekly growth",
    "Networking needs more attention - slowest growth rate",
    "AI Tools adoption accelerating in recent weeks",
];

// Growth insight rows for the analytics tab: area, note, growth over 4 weeks
pub const GROWTH_INSIGHTS: &[(&str, &str, &str)] = &[
    ("Self-Care", "Highest improvement rate", "+200%"),
    ("Time Management", "Consistent growth", "+300%"),
    ("Networking", "Needs attention", "+600%"),
];

// Recommendation cards for the analytics tab
pub const RECOMMENDATIONS: &[(&str, &str)] = &[
    (
        "Maintain Momentum",
        "Self-care and time management are performing excellently. Continue current strategies.",
    ),
    (
        "Boost Networking",
        "Consider scheduling regular networking sessions or joining professional groups.",
    ),
    (
        "AI Tools Integration",
        "Good acceleration in AI tools usage. Explore advanced features for better productivity.",
    ),
];

// Weekly trends panel values
pub const AVERAGE_PROGRESS_PER_WEEK: &str = "+15% per week";
pub const BEST_PERFORMING_AREA: &str = "Self-Care";
pub const FOCUS_AREA: &str = "Networking";

// Habit consistency shown on the overview gauges
pub const HABIT_CONSISTENCY_PERCENT: u16 = 85;

// Calendar connect rows on the time management tab
pub const CALENDAR_PROVIDERS: &[(&str, &str)] = &[
    ("Google Calendar", "Sync meetings and scheduled focus blocks"),
    ("Outlook Calendar", "Alternative calendar sync"),
];

// Screen-time connect panels on the digital wellbeing tab
pub const SCREEN_TIME_PROVIDERS: &[(&str, &str)] = &[
    (
        "iOS Screen Time",
        "Connect with iOS Screen Time to automatically track app usage and screen time.",
    ),
    (
        "Android Digital Wellbeing",
        "Sync with Android Digital Wellbeing for comprehensive usage analytics.",
    ),
];
