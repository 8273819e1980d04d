//! Application-level configuration constants.

// Persistence
pub const STORAGE_KEY: &str = "countdownTimer";

// Countdown behavior
pub const TICK_INTERVAL_MS: u32 = 1_000;
pub const SECONDS_PER_MINUTE: u32 = 60;

// Expiration toast
pub const NOTIFICATION_DURATION_MS: u32 = 5_000;
pub const EXPIRATION_MESSAGE: &str = "TIME IS UP!";
pub const EXPIRATION_ICON: &str = "⏰";

// Soft caps rendered as input min/max attributes; not enforced on edits
pub const MINUTES_DISPLAY_MAX: u32 = 99;
pub const SECONDS_DISPLAY_MAX: u32 = 59;

// UI labels
pub const TITLE: &str = "Countdown Timer";
pub const MINUTES_CAPTION: &str = "Minutes";
pub const SECONDS_CAPTION: &str = "Seconds";

#[cfg(debug_assertions)]
pub const LOG_LEVEL: log::Level = log::Level::Debug;
#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: log::Level = log::Level::Info;

// Control labels
pub const START_LABEL: &str = "Start";
pub const PAUSE_LABEL: &str = "Pause";
pub const RESUME_LABEL: &str = "Resume";
pub const RESET_LABEL: &str = "Reset";
