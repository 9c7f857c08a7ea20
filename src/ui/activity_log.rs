use crate::core::constants::ACTIVITY_LOG_CAPACITY;
use crate::core::controller::SessionEvent;
use crate::core::view::format_thousands;
use std::collections::VecDeque;

/// Recent noteworthy events, newest first.
///
/// Power gains happen every click and every second, so they are left out.
#[derive(Debug, Default)]
pub struct ActivityLog {
    entries: VecDeque<String>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, events: &[SessionEvent]) {
        for event in events {
            if let Some(line) = describe(event) {
                self.entries.push_front(line);
                self.entries.truncate(ACTIVITY_LOG_CAPACITY);
            }
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn describe(event: &SessionEvent) -> Option<String> {
    match event {
        SessionEvent::PowerGained { .. } => None,
        SessionEvent::LeveledUp { to, .. } => Some(format!("Level up! Now Lv {}", to)),
        SessionEvent::SentenceCompleted { .. } => Some("Sentence complete!".to_string()),
        SessionEvent::UpgradePurchased {
            slot,
            cost,
            new_level,
        } => Some(format!(
            "{} -> Level {} ({} power)",
            slot.name(),
            new_level,
            format_thousands(*cost)
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::controller::GainSource;
    use crate::core::progression::UpgradeSlot;

    #[test]
    fn test_power_gains_are_not_logged() {
        let mut log = ActivityLog::new();
        log.record(&[SessionEvent::PowerGained {
            source: GainSource::Idle,
            amount: 5,
        }]);
        assert!(log.is_empty());
    }

    #[test]
    fn test_newest_entry_first() {
        let mut log = ActivityLog::new();
        log.record(&[
            SessionEvent::LeveledUp { from: 1, to: 2 },
            SessionEvent::UpgradePurchased {
                slot: UpgradeSlot::Multiplier,
                cost: 1_500,
                new_level: 2,
            },
        ]);

        let entries: Vec<&str> = log.entries().collect();
        assert_eq!(entries, vec!["CPU -> Level 2 (1,500 power)", "Level up! Now Lv 2"]);
    }

    #[test]
    fn test_log_is_capped() {
        let mut log = ActivityLog::new();
        for to in 2..40 {
            log.record(&[SessionEvent::LeveledUp { from: to - 1, to }]);
        }
        assert_eq!(log.len(), ACTIVITY_LOG_CAPACITY);
        assert_eq!(log.entries().next(), Some("Level up! Now Lv 39"));
    }
}
