use super::constants::{STARTING_POWER_PER_CLICK, STARTING_POWER_PER_SECOND};
use serde_json::{Map, Value};

/// Flat key-value record persisted between sessions.
pub type Snapshot = Map<String, Value>;

const CURRENCY_KEY: &str = "currency";
// Older save files named the currency after the practice language
const CURRENCY_ALIASES: [&str; 2] = ["typing_power", "english_power"];

/// The player's economy: currency, upgrade tiers and experience.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub currency: u64,
    pub power_per_click_base: u64,
    pub power_per_second_base: u64,
    pub practice_level: u32,
    pub auto_level: u32,
    pub multiplier_level: u32,
    pub level: u32,
    /// Running total; compared against absolute thresholds, never reset.
    pub xp: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            currency: 0,
            power_per_click_base: STARTING_POWER_PER_CLICK,
            power_per_second_base: STARTING_POWER_PER_SECOND,
            practice_level: 0,
            auto_level: 0,
            multiplier_level: 0,
            level: 1,
            xp: 0,
        }
    }

    /// Exports every tracked field.
    pub fn to_snapshot(&self) -> Snapshot {
        let mut snapshot = Snapshot::new();
        snapshot.insert(CURRENCY_KEY.into(), self.currency.into());
        snapshot.insert("power_per_click_base".into(), self.power_per_click_base.into());
        snapshot.insert("power_per_second_base".into(), self.power_per_second_base.into());
        snapshot.insert("practice_level".into(), self.practice_level.into());
        snapshot.insert("auto_level".into(), self.auto_level.into());
        snapshot.insert("multiplier_level".into(), self.multiplier_level.into());
        snapshot.insert("level".into(), self.level.into());
        snapshot.insert("xp".into(), self.xp.into());
        snapshot
    }

    /// Overwrites each field that the snapshot carries in usable form.
    ///
    /// Missing or malformed entries keep the current value, so a partial or
    /// damaged record never fails. Returns how many fields were taken.
    pub fn apply_snapshot(&mut self, snapshot: &Snapshot) -> usize {
        let mut applied = 0;

        let currency = std::iter::once(CURRENCY_KEY)
            .chain(CURRENCY_ALIASES)
            .find_map(|key| snapshot.get(key));
        applied += restore(&mut self.currency, currency.and_then(coerce_u64));

        applied += restore(
            &mut self.power_per_click_base,
            read_u64(snapshot, "power_per_click_base"),
        );
        applied += restore(
            &mut self.power_per_second_base,
            read_u64(snapshot, "power_per_second_base"),
        );
        applied += restore(&mut self.practice_level, read_u32(snapshot, "practice_level"));
        applied += restore(&mut self.auto_level, read_u32(snapshot, "auto_level"));
        applied += restore(
            &mut self.multiplier_level,
            read_u32(snapshot, "multiplier_level"),
        );
        applied += restore(
            &mut self.level,
            read_u32(snapshot, "level").filter(|&level| level >= 1),
        );
        applied += restore(&mut self.xp, read_u64(snapshot, "xp"));

        applied
    }
}

fn restore<T>(field: &mut T, value: Option<T>) -> usize {
    match value {
        Some(v) => {
            *field = v;
            1
        }
        None => 0,
    }
}

fn read_u64(snapshot: &Snapshot, key: &str) -> Option<u64> {
    snapshot.get(key).and_then(coerce_u64)
}

fn read_u32(snapshot: &Snapshot, key: &str) -> Option<u32> {
    read_u64(snapshot, key).and_then(|v| u32::try_from(v).ok())
}

/// Accepts integers, non-negative finite floats (truncated) and numeric strings.
fn coerce_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0 && *f < u64::MAX as f64)
                .map(|f| f.trunc() as u64)
        }),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
}
