// Experience curve: xp_required(level) = ceil(XP_BASE * XP_GROWTH^(level - 1))
pub const XP_BASE: f64 = 125.0;
pub const XP_GROWTH: f64 = 1.5;

// Upgrade cost curves: ceil(base * growth^level)
pub const PRACTICE_BASE_COST: f64 = 10.0;
pub const PRACTICE_COST_GROWTH: f64 = 1.35;
pub const AUTO_BASE_COST: f64 = 50.0;
pub const AUTO_COST_GROWTH: f64 = 1.60;
pub const MULTIPLIER_BASE_COST: f64 = 500.0;
pub const MULTIPLIER_COST_GROWTH: f64 = 3.00;

// Global multiplier = MULTIPLIER_GROWTH^multiplier_level
pub const MULTIPLIER_GROWTH: f64 = 1.5;

// Fixed upgrade effects
pub const PRACTICE_CLICK_BONUS: u64 = 1;
pub const AUTO_SECOND_BONUS: u64 = 2;

// Starting rates
pub const STARTING_POWER_PER_CLICK: u64 = 1;
pub const STARTING_POWER_PER_SECOND: u64 = 0;

// Currency granted per correct keystroke (not multiplied)
pub const KEYSTROKE_REWARD: u64 = 1;

// Timing
pub const IDLE_TICK_MS: u64 = 1000;
pub const FRAME_INTERVAL_MS: u64 = 16; // ~60 FPS

// Presentation
pub const ACTIVITY_LOG_CAPACITY: usize = 8;

// Persistence
pub const DATA_DIR_NAME: &str = ".typing-clicker";
pub const SAVE_FILE_NAME: &str = "save.json";
pub const LOG_FILE_NAME: &str = "clicker.log";
pub const LOG_FILTER_ENV: &str = "TYPING_CLICKER_LOG";
