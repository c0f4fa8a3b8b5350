use super::enums::DayMode;

/// Task list for a school day ending at 3:00 PM
const TASKS_SHORT_DAY: &[&str] = &[
    "Power Workout (3:30 PM)",
    "Deep Coding Session (4:30 PM)",
    "Review Japanese (Night)",
    "Esports Scrims (9:00 PM)",
];

/// Task list for a school day ending at 5:30 PM
const TASKS_LONG_DAY: &[&str] = &[
    "Recharge & Snack (5:30 PM)",
    "Quick Study / Review (6:30 PM)",
    "Light Stretch (7:30 PM)",
    "Esports Scrims (9:00 PM)",
];

/// Task list for holidays and home days
const TASKS_HOLIDAY: &[&str] = &[
    "Heavy Workout (8:00 AM)",
    "Deep Coding (10:00 AM - 12:00 PM)",
    "Japanese Writing (12:00 PM)",
    "Afternoon Gaming (2:00 PM)",
    "Farm Help / Review (4:00 PM)",
    "Esports Scrims (8:30 PM)",
];

/// Get the ordered task labels for a mode. Pure and total; catalogs are
/// static and never edited at runtime.
pub fn tasks_for(mode: DayMode) -> &'static [&'static str] {
    match mode {
        DayMode::Short => TASKS_SHORT_DAY,
        DayMode::Long => TASKS_LONG_DAY,
        DayMode::Holiday => TASKS_HOLIDAY,
    }
}
