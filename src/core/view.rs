//! Read-only per-frame view of the session for the presentation layer.

use super::controller::SessionController;
use super::progression::{xp_progress_ratio, UpgradeSlot};

/// What one upgrade track currently provides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlotEffect {
    PerClick(u64),
    PerSecond(u64),
    Multiplier(f64),
}

impl SlotEffect {
    pub fn label(&self) -> String {
        match self {
            SlotEffect::PerClick(power) => format!("+ {} Per Click", format_thousands(*power)),
            SlotEffect::PerSecond(power) => format!("+ {} Per Second", format_thousands(*power)),
            SlotEffect::Multiplier(mult) => format!("× {:.2} All", mult),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlotView {
    pub slot: UpgradeSlot,
    pub level: u32,
    pub cost: u64,
    pub effect: SlotEffect,
    pub affordable: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionView {
    pub currency: u64,
    pub level: u32,
    pub xp: u64,
    pub next_level_xp: u64,
    /// Progress through the current level, 0.0 to 1.0.
    pub progress: f64,
    pub slots: [SlotView; 3],
    pub target_text: String,
    pub translation_text: String,
    pub cursor: usize,
    pub typed: String,
    pub remaining: String,
}

impl SessionView {
    pub fn capture(controller: &SessionController) -> Self {
        let state = controller.state();
        let costs = controller.costs();
        let next_level_xp = controller.next_level_xp();
        let typing = controller.typing();

        let slot_view = |slot: UpgradeSlot| {
            let (level, effect) = match slot {
                UpgradeSlot::Practice => (
                    state.practice_level,
                    SlotEffect::PerClick(controller.power_per_click()),
                ),
                UpgradeSlot::Auto => (
                    state.auto_level,
                    SlotEffect::PerSecond(controller.power_per_second()),
                ),
                UpgradeSlot::Multiplier => (
                    state.multiplier_level,
                    SlotEffect::Multiplier(controller.multiplier()),
                ),
            };
            let cost = costs.for_slot(slot);
            SlotView {
                slot,
                level,
                cost,
                effect,
                affordable: state.currency >= cost,
            }
        };

        Self {
            currency: state.currency,
            level: state.level,
            xp: state.xp,
            next_level_xp,
            progress: xp_progress_ratio(state.xp, state.level, next_level_xp),
            slots: UpgradeSlot::all().map(slot_view),
            target_text: typing.target_text().to_string(),
            translation_text: typing.translation_text().to_string(),
            cursor: typing.cursor(),
            typed: typing.typed(),
            remaining: typing.remaining(),
        }
    }
}

/// Formats with comma thousands separators: 1234567 -> "1,234,567".
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::game_state::GameState;
    use crate::typing::{Sentence, SentenceCorpus};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn controller(state: GameState) -> SessionController {
        let corpus = SentenceCorpus::new(vec![Sentence::new(3, "go now", "今行く")]).unwrap();
        SessionController::new(state, corpus, &mut ChaCha8Rng::seed_from_u64(0))
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_effect_labels() {
        assert_eq!(SlotEffect::PerClick(1_500).label(), "+ 1,500 Per Click");
        assert_eq!(SlotEffect::PerSecond(0).label(), "+ 0 Per Second");
        assert_eq!(SlotEffect::Multiplier(2.25).label(), "× 2.25 All");
    }

    #[test]
    fn test_view_of_fresh_session() {
        let view = controller(GameState::new()).view();

        assert_eq!(view.currency, 0);
        assert_eq!(view.level, 1);
        assert_eq!(view.next_level_xp, 188);
        assert_eq!(view.progress, 0.0);
        assert_eq!(view.target_text, "go now");
        assert_eq!(view.translation_text, "今行く");
        assert_eq!(view.cursor, 0);

        assert_eq!(view.slots[0].cost, 10);
        assert_eq!(view.slots[0].effect, SlotEffect::PerClick(1));
        assert_eq!(view.slots[1].cost, 50);
        assert_eq!(view.slots[1].effect, SlotEffect::PerSecond(0));
        assert_eq!(view.slots[2].cost, 500);
        assert_eq!(view.slots[2].effect, SlotEffect::Multiplier(1.0));
        assert!(view.slots.iter().all(|slot| !slot.affordable));
    }

    #[test]
    fn test_view_tracks_affordability_and_progress() {
        let mut state = GameState::new();
        state.currency = 60;
        state.level = 2;
        state.xp = 235;
        state.multiplier_level = 1;
        state.power_per_second_base = 2;
        let view = controller(state).view();

        assert!(view.slots[0].affordable);
        assert!(view.slots[1].affordable);
        assert!(!view.slots[2].affordable);
        assert_eq!(view.slots[1].effect, SlotEffect::PerSecond(3));
        assert_eq!(view.slots[2].level, 1);
        assert!((view.progress - 0.5).abs() < 1e-9);
    }
}
