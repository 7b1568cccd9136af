use crate::ticketing::model::Event;
use rand::seq::IndexedRandom;
use tracing::debug;

pub struct NightPicker;

impl NightPicker {
    /// Uniform random pick. `None` on an empty list, in which case the
    /// suggestion flow must not open.
    pub fn pick(candidates: &[Event]) -> Option<&Event> {
        candidates.choose(&mut rand::rng())
    }
}

/// One open "Find My Night" suggestion. Stateless re-picks: retrying may well
/// land on the same event again, matching the original behavior.
#[derive(Debug)]
pub struct Suggestion {
    current: Event,
}

impl Suggestion {
    pub fn open(candidates: &[Event]) -> Option<Self> {
        let current = NightPicker::pick(candidates)?.clone();

        debug!("Suggesting '{}'", current.name);

        Some(Self { current })
    }

    pub fn current(&self) -> &Event {
        &self.current
    }

    /// Keeps the affordance open with a fresh pick. An empty candidate list
    /// leaves the current suggestion in place.
    pub fn retry(&mut self, candidates: &[Event]) {
        if let Some(next) = NightPicker::pick(candidates) {
            self.current = next.clone();
        }
    }

    /// Accepting hands the picked event to the caller for its details view.
    pub fn accept(self) -> Event {
        self.current
    }

    /// "Maybe later": discards the suggestion, no transition.
    pub fn dismiss(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn event(id: &str) -> Event {
        Event::new(
            id.to_string(),
            format!("Event {}", id),
            "Music".to_string(),
            Some("Jazz".to_string()),
            NaiveDate::from_ymd_opt(2025, 6, 15)
                .unwrap()
                .and_hms_opt(20, 0, 0),
            Some("The Spot".to_string()),
            None,
            "1 Main St, Boise, ID".to_string(),
        )
    }

    #[test_log::test]
    fn picking_from_an_empty_list_should_return_none() {
        assert!(NightPicker::pick(&[]).is_none());
        assert!(Suggestion::open(&[]).is_none());
    }

    #[test_log::test]
    fn picking_from_a_singleton_should_return_that_event() {
        let events = vec![event("only")];

        assert_eq!(NightPicker::pick(&events).unwrap().id, "only");
    }

    #[test_log::test]
    fn every_pick_should_come_from_the_candidates() {
        let events = vec![event("a"), event("b"), event("c")];

        for _ in 0..50 {
            let picked = NightPicker::pick(&events).unwrap();

            assert!(events.iter().any(|e| e.id == picked.id));
        }
    }

    #[test_log::test]
    fn accepting_should_hand_back_the_current_pick() {
        let events = vec![event("only")];
        let suggestion = Suggestion::open(&events).unwrap();

        assert_eq!(suggestion.accept().id, "only");
    }

    #[test_log::test]
    fn retry_on_an_empty_list_should_keep_the_current_pick() {
        let events = vec![event("only")];
        let mut suggestion = Suggestion::open(&events).unwrap();

        suggestion.retry(&[]);

        assert_eq!(suggestion.current().id, "only");
    }
}
