//! Progression model: experience thresholds, multipliers, power and costs.
//!
//! Everything here is a pure function of its arguments. Thresholds and costs
//! round up so they are never undercharged; power rounds down so fractional
//! power never shows. Float-to-integer casts saturate, so very large levels
//! clamp to `u64::MAX` instead of wrapping.

use super::constants::*;

/// The three purchasable upgrade tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpgradeSlot {
    /// Typing practice: raises power per click.
    Practice,
    /// Auto typing: raises power per second.
    Auto,
    /// CPU: raises the global multiplier.
    Multiplier,
}

impl UpgradeSlot {
    pub fn all() -> [UpgradeSlot; 3] {
        [
            UpgradeSlot::Practice,
            UpgradeSlot::Auto,
            UpgradeSlot::Multiplier,
        ]
    }

    /// Maps a panel index (0, 1, 2) to its slot.
    pub fn from_index(index: usize) -> Option<UpgradeSlot> {
        Self::all().get(index).copied()
    }

    pub fn index(self) -> usize {
        match self {
            UpgradeSlot::Practice => 0,
            UpgradeSlot::Auto => 1,
            UpgradeSlot::Multiplier => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            UpgradeSlot::Practice => "Typing Skill",
            UpgradeSlot::Auto => "Auto Typing",
            UpgradeSlot::Multiplier => "CPU",
        }
    }
}

/// Current purchase price of each upgrade slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpgradeCosts {
    pub practice: u64,
    pub auto: u64,
    pub multiplier: u64,
}

impl UpgradeCosts {
    pub fn for_slot(&self, slot: UpgradeSlot) -> u64 {
        match slot {
            UpgradeSlot::Practice => self.practice,
            UpgradeSlot::Auto => self.auto,
            UpgradeSlot::Multiplier => self.multiplier,
        }
    }

    pub fn as_tuple(&self) -> (u64, u64, u64) {
        (self.practice, self.auto, self.multiplier)
    }
}

/// Cumulative XP at which `level` is reached.
///
/// The threshold for leaving the current level is `xp_required(level + 1)`.
pub fn xp_required(level: u32) -> u64 {
    let exponent = f64::from(level.saturating_sub(1));
    (XP_BASE * XP_GROWTH.powf(exponent)).ceil() as u64
}

/// Global multiplier applied to both power rates.
pub fn current_multiplier(multiplier_level: u32) -> f64 {
    MULTIPLIER_GROWTH.powf(f64::from(multiplier_level))
}

pub fn current_power_per_click(base: u64, multiplier: f64) -> u64 {
    (base as f64 * multiplier).floor() as u64
}

pub fn current_power_per_second(base: u64, multiplier: f64) -> u64 {
    (base as f64 * multiplier).floor() as u64
}

fn upgrade_cost(base_cost: f64, growth: f64, level: u32) -> u64 {
    (base_cost * growth.powf(f64::from(level))).ceil() as u64
}

/// Prices of the next purchase on each track.
pub fn calc_costs(practice_level: u32, auto_level: u32, multiplier_level: u32) -> UpgradeCosts {
    UpgradeCosts {
        practice: upgrade_cost(PRACTICE_BASE_COST, PRACTICE_COST_GROWTH, practice_level),
        auto: upgrade_cost(AUTO_BASE_COST, AUTO_COST_GROWTH, auto_level),
        multiplier: upgrade_cost(MULTIPLIER_BASE_COST, MULTIPLIER_COST_GROWTH, multiplier_level),
    }
}

/// Cumulative XP at which the current level began.
pub fn xp_for_current_level(level: u32) -> u64 {
    if level > 1 {
        xp_required(level)
    } else {
        0
    }
}

/// Progress through the current level, clamped to `[0.0, 1.0]`.
pub fn xp_progress_ratio(current_xp: u64, level: u32, next_level_xp: u64) -> f64 {
    let level_start_xp = xp_for_current_level(level);
    let span = next_level_xp.saturating_sub(level_start_xp).max(1);
    let gained = current_xp as f64 - level_start_xp as f64;
    (gained / span as f64).clamp(0.0, 1.0)
}
