/// A day mode selects which ordered task list is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayMode {
    Short,
    Long,
    Holiday,
}

impl DayMode {
    /// Get the display name for this mode (also the persisted form)
    pub fn name(&self) -> &'static str {
        match self {
            DayMode::Short => "Short",
            DayMode::Long => "Long",
            DayMode::Holiday => "Holiday",
        }
    }

    /// Parse a mode from its persisted name. Total: unknown names fall
    /// back to Holiday, matching the default branch of mode selection.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Short" => DayMode::Short,
            "Long" => DayMode::Long,
            _ => DayMode::Holiday,
        }
    }

    /// Status line shown when this mode becomes active
    pub fn status_line(&self) -> &'static str {
        match self {
            DayMode::Short => "Mode: Home by 3:00 PM",
            DayMode::Long => "Mode: Home by 5:30 PM",
            DayMode::Holiday => "Mode: Holiday / Home",
        }
    }

    /// Get all modes as a list (selector order)
    pub fn all() -> &'static [DayMode] {
        &[DayMode::Short, DayMode::Long, DayMode::Holiday]
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    ModeSelector,
}

/// Lifecycle of the single-shot countdown timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStatus {
    Idle,
    Running,
    Fired,
}
