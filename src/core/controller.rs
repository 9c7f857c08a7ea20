//! The session controller: applies player input and elapsed time to the
//! economy and keeps the active practice sentence.
//!
//! Every operation returns the [`SessionEvent`]s it produced so the
//! presentation layer can react without diffing state. An operation that
//! changed nothing returns an empty list.

use super::constants::{AUTO_SECOND_BONUS, IDLE_TICK_MS, KEYSTROKE_REWARD, PRACTICE_CLICK_BONUS};
use super::game_state::GameState;
use super::progression::{
    calc_costs, current_multiplier, current_power_per_click, current_power_per_second,
    xp_required, UpgradeCosts, UpgradeSlot,
};
use super::view::SessionView;
use crate::typing::{SentenceCorpus, TypingSession};
use rand::Rng;
use tracing::{debug, info};

/// Where a currency gain came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GainSource {
    Click,
    Keystroke,
    Idle,
}

/// Something that happened while handling an input or a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    PowerGained { source: GainSource, amount: u64 },
    LeveledUp { from: u32, to: u32 },
    SentenceCompleted { sentence_id: Option<u32> },
    UpgradePurchased {
        slot: UpgradeSlot,
        cost: u64,
        new_level: u32,
    },
}

/// Logical input reported by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    PressButton,
    Type(char),
    /// Upgrade panel index: 0 practice, 1 auto, 2 multiplier.
    Purchase(usize),
    Quit,
}

pub struct SessionController {
    state: GameState,
    typing: TypingSession,
    corpus: SentenceCorpus,
    idle_ms: u64,
}

impl SessionController {
    /// Takes ownership of the state and deals the first sentence.
    pub fn new(state: GameState, corpus: SentenceCorpus, rng: &mut impl Rng) -> Self {
        let mut controller = Self {
            state,
            typing: TypingSession::default(),
            corpus,
            idle_ms: 0,
        };
        controller.next_sentence(rng);
        controller
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Hands the state back, e.g. for saving at shutdown.
    pub fn into_state(self) -> GameState {
        self.state
    }

    pub fn typing(&self) -> &TypingSession {
        &self.typing
    }

    /// Milliseconds accumulated toward the next idle tick.
    pub fn idle_remainder_ms(&self) -> u64 {
        self.idle_ms
    }

    pub fn multiplier(&self) -> f64 {
        current_multiplier(self.state.multiplier_level)
    }

    pub fn power_per_click(&self) -> u64 {
        current_power_per_click(self.state.power_per_click_base, self.multiplier())
    }

    pub fn power_per_second(&self) -> u64 {
        current_power_per_second(self.state.power_per_second_base, self.multiplier())
    }

    pub fn costs(&self) -> UpgradeCosts {
        calc_costs(
            self.state.practice_level,
            self.state.auto_level,
            self.state.multiplier_level,
        )
    }

    /// Cumulative XP needed to leave the current level.
    pub fn next_level_xp(&self) -> u64 {
        xp_required(self.state.level.saturating_add(1))
    }

    pub fn view(&self) -> SessionView {
        SessionView::capture(self)
    }

    /// Dispatches one logical input. `Quit` is handled by the frame loop.
    pub fn apply(&mut self, input: GameInput, rng: &mut impl Rng) -> Vec<SessionEvent> {
        match input {
            GameInput::PressButton => self.press_button(),
            GameInput::Type(ch) => self.type_char(ch, rng),
            GameInput::Purchase(index) => self.purchase_index(index),
            GameInput::Quit => Vec::new(),
        }
    }

    /// Feeds elapsed wall-clock time into the idle accumulator.
    ///
    /// Each whole second drained applies one tick at the power per second
    /// current at that tick. The sub-second remainder carries over.
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        self.idle_ms = self.idle_ms.saturating_add(elapsed_ms);

        while self.idle_ms >= IDLE_TICK_MS {
            self.idle_ms -= IDLE_TICK_MS;
            let gain = self.power_per_second();
            if gain > 0 {
                self.grant_power(GainSource::Idle, gain, &mut events);
            }
        }

        events
    }

    /// The primary "click" action.
    pub fn press_button(&mut self) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        let gain = self.power_per_click();
        self.grant_power(GainSource::Click, gain, &mut events);
        events
    }

    /// Checks a keystroke against the active sentence.
    ///
    /// A correct character earns a fixed reward; finishing the sentence
    /// immediately deals a new one. Wrong characters do nothing.
    pub fn type_char(&mut self, ch: char, rng: &mut impl Rng) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        if !self.typing.check_input(ch) {
            return events;
        }

        self.grant_power(GainSource::Keystroke, KEYSTROKE_REWARD, &mut events);

        if self.typing.is_complete() {
            events.push(SessionEvent::SentenceCompleted {
                sentence_id: self.typing.sentence_id(),
            });
            self.next_sentence(rng);
        }

        events
    }

    /// Buys one level of an upgrade. Insufficient funds is a silent no-op,
    /// and so is a tier whose level or base is already at its maximum.
    pub fn purchase(&mut self, slot: UpgradeSlot) -> Vec<SessionEvent> {
        let cost = self.costs().for_slot(slot);
        if self.state.currency < cost {
            debug!(?slot, cost, currency = self.state.currency, "purchase declined");
            return Vec::new();
        }

        let Some((upgraded, new_level)) = self.grow_tier(slot) else {
            debug!(?slot, "purchase declined, tier is maxed");
            return Vec::new();
        };

        self.state = upgraded;
        self.state.currency -= cost;

        info!(?slot, cost, new_level, "upgrade purchased");
        vec![SessionEvent::UpgradePurchased {
            slot,
            cost,
            new_level,
        }]
    }

    /// Purchase by panel index; indices outside the three slots are ignored.
    pub fn purchase_index(&mut self, index: usize) -> Vec<SessionEvent> {
        match UpgradeSlot::from_index(index) {
            Some(slot) => self.purchase(slot),
            None => Vec::new(),
        }
    }

    /// The state after one more level of `slot`, with its new level, or
    /// `None` if the level or base would overflow.
    fn grow_tier(&self, slot: UpgradeSlot) -> Option<(GameState, u32)> {
        let mut next = self.state.clone();
        let new_level = match slot {
            UpgradeSlot::Practice => {
                next.practice_level = next.practice_level.checked_add(1)?;
                next.power_per_click_base =
                    next.power_per_click_base.checked_add(PRACTICE_CLICK_BONUS)?;
                next.practice_level
            }
            UpgradeSlot::Auto => {
                next.auto_level = next.auto_level.checked_add(1)?;
                next.power_per_second_base =
                    next.power_per_second_base.checked_add(AUTO_SECOND_BONUS)?;
                next.auto_level
            }
            UpgradeSlot::Multiplier => {
                next.multiplier_level = next.multiplier_level.checked_add(1)?;
                next.multiplier_level
            }
        };
        Some((next, new_level))
    }

    /// Adds currency and mirrors it 1:1 into XP, then settles level-ups.
    ///
    /// All gains pass through here; decoupling XP from currency only needs
    /// this function to change.
    fn grant_power(&mut self, source: GainSource, amount: u64, events: &mut Vec<SessionEvent>) {
        if amount == 0 {
            return;
        }

        self.state.currency = self.state.currency.saturating_add(amount);
        self.state.xp = self.state.xp.saturating_add(amount);
        events.push(SessionEvent::PowerGained { source, amount });

        self.resolve_level_ups(events);
    }

    fn resolve_level_ups(&mut self, events: &mut Vec<SessionEvent>) {
        let from = self.state.level;

        loop {
            let threshold = self.next_level_xp();
            // A saturated threshold is unreachable by construction
            if threshold == u64::MAX || self.state.xp < threshold {
                break;
            }
            self.state.level += 1;
        }

        if self.state.level > from {
            info!(from, to = self.state.level, xp = self.state.xp, "level up");
            events.push(SessionEvent::LeveledUp {
                from,
                to: self.state.level,
            });
        }
    }

    fn next_sentence(&mut self, rng: &mut impl Rng) {
        let sentence = self.corpus.choose(rng);
        self.typing.set_sentence(&sentence.text, &sentence.translation);
        self.typing.set_sentence_id(sentence.id);
    }
}
