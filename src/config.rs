//! Application-level configuration constants.

// Default values for the category sliders
pub const DEFAULT_LIVE_SHOTS: usize = 0;
pub const DEFAULT_BLANK_SHOTS: usize = 0;

// UI labels
pub const APP_TITLE: &str = "Buckshot Roulette Shot Tracker";
pub const LIVE_CARD_TITLE: &str = "Live Rounds";
pub const BLANK_CARD_TITLE: &str = "Blank Rounds";
