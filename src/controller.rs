//! Swipe session controller
//!
//! Owns the whole session (deck, gesture, card load state, pending settle
//! decisions) and is driven by [`SwipeEvent`]s drained from the UI's event
//! queue once per frame. Time is always passed in, never read here.

use crate::constants::SETTLE_DELAY;
use crate::deck::{Advance, Deck};
use crate::gesture::{GestureEnd, GestureTracker};
use crate::settle::SettleQueue;
use crate::source::{draw_deck, RandomSource};
use crate::types::{CardLoad, CatImage, DecisionToken, Direction};
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipeEvent {
    PointerDown(f32),
    PointerMove(f32),
    PointerUp(f32),
    /// Button or keyboard decision, applied immediately
    Decide(Direction),
    /// The image for the card identified by the token is on screen
    CardLoaded(DecisionToken),
    /// "Try Again" from the summary screen
    Restart,
}

pub struct SwipeController {
    deck: Deck,
    gesture: GestureTracker,
    card_load: CardLoad,
    settle: SettleQueue,
    source: Box<dyn RandomSource>,
    base_url: String,
}

impl SwipeController {
    /// A controller with no deck yet; call [`SwipeController::deal`] to start.
    pub fn new(base_url: impl Into<String>, source: Box<dyn RandomSource>) -> Self {
        Self {
            deck: Deck::default(),
            gesture: GestureTracker::default(),
            card_load: CardLoad::Loading,
            settle: SettleQueue::default(),
            source,
            base_url: base_url.into(),
        }
    }

    /// Draw a fresh deck from the random source and start over
    pub fn deal(&mut self) {
        let cards = draw_deck(&self.base_url, self.source.as_mut());
        self.deal_cards(cards);
    }

    /// Start over with the given cards
    pub fn deal_cards(&mut self, cards: Vec<CatImage>) {
        self.settle.clear();
        self.gesture.reset();
        self.card_load = CardLoad::Loading;
        self.deck.initialize(cards);
    }

    pub fn dispatch(&mut self, event: SwipeEvent, now: Instant) {
        match event {
            SwipeEvent::PointerDown(x) if self.accepts_input() => self.gesture.start(x),
            SwipeEvent::PointerMove(x) if self.accepts_input() => self.gesture.drag_to(x),
            SwipeEvent::PointerUp(x) if self.accepts_input() => {
                if let GestureEnd::Swipe(direction) = self.gesture.end(x) {
                    debug!(%direction, "Swipe classified, settling");
                    self.settle
                        .schedule(direction, self.deck.token(), now, SETTLE_DELAY);
                }
            }
            SwipeEvent::Decide(direction) if self.accepts_input() => self.record_decision(direction),
            SwipeEvent::CardLoaded(token) => {
                if token == self.deck.token() && !self.deck.is_finished() {
                    self.card_load = CardLoad::Loaded;
                } else {
                    debug!(?token, "Load signal for a card no longer on screen");
                }
            }
            SwipeEvent::Restart if self.deck.is_finished() => self.deal(),
            other => debug!(?other, "Event ignored in current state"),
        }
    }

    /// Fire settle decisions that are due. Decisions made for another card
    /// or an earlier session are dropped.
    pub fn tick(&mut self, now: Instant) {
        for pending in self.settle.drain_due(now) {
            if pending.token == self.deck.token() && !self.deck.is_finished() {
                self.record_decision(pending.direction);
            } else {
                debug!(
                    direction = %pending.direction,
                    token = ?pending.token,
                    "Dropping stale settle decision"
                );
            }
        }
    }

    fn record_decision(&mut self, direction: Direction) {
        match self.deck.record_decision(direction) {
            Some(Advance::Next(_)) => {
                self.gesture.reset();
                self.card_load = CardLoad::Loading;
            }
            Some(Advance::Finished) => self.gesture.reset(),
            None => {}
        }
    }

    fn accepts_input(&self) -> bool {
        !self.deck.is_loading() && !self.deck.is_finished()
    }

    /// How long until the UI should wake up for the next settle decision
    pub fn next_wake(&self, now: Instant) -> Option<Duration> {
        self.settle.next_due_in(now)
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn gesture(&self) -> &GestureTracker {
        &self.gesture
    }

    pub fn card_load(&self) -> CardLoad {
        self.card_load
    }

    #[cfg(test)]
    pub fn pending_decisions(&self) -> usize {
        self.settle.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SeededSource;

    const LATER: Duration = Duration::from_millis(250);

    fn controller_with(names: &[&str]) -> SwipeController {
        let mut c = SwipeController::new("http://cats", Box::new(SeededSource::new(3, 0)));
        c.deal_cards(names.iter().map(|n| CatImage::new(*n)).collect());
        c
    }

    fn drag(c: &mut SwipeController, from: f32, to: f32, now: Instant) {
        c.dispatch(SwipeEvent::PointerDown(from), now);
        c.dispatch(SwipeEvent::PointerMove(to), now);
        c.dispatch(SwipeEvent::PointerUp(to), now);
    }

    fn liked(c: &SwipeController) -> Vec<&str> {
        c.deck().liked().iter().map(|i| i.url()).collect()
    }

    #[test]
    fn right_drag_likes_after_settle() {
        let t0 = Instant::now();
        let mut c = controller_with(&["a", "b", "c"]);
        drag(&mut c, 100.0, 250.0, t0);

        assert_eq!(c.gesture().offset(), 500.0);
        assert_eq!(c.gesture().drag_origin(), None);
        c.tick(t0 + Duration::from_millis(100));
        assert_eq!(c.deck().position(), 0);

        c.tick(t0 + LATER);
        assert_eq!(liked(&c), vec!["a"]);
        assert_eq!(c.deck().position(), 1);
        assert_eq!(c.gesture().offset(), 0.0);
        assert!(!c.gesture().animate());
    }

    #[test]
    fn short_drag_snaps_back_without_decision() {
        let t0 = Instant::now();
        let mut c = controller_with(&["a", "b", "c"]);
        drag(&mut c, 300.0, 250.0, t0);
        c.tick(t0 + LATER);

        assert_eq!(c.gesture().offset(), 0.0);
        assert_eq!(c.deck().position(), 0);
        assert_eq!(c.pending_decisions(), 0);
        assert!(c.deck().liked().is_empty());
    }

    #[test]
    fn three_likes_finish_the_deck() {
        let t0 = Instant::now();
        let mut c = controller_with(&["a", "b", "c"]);
        for i in 0..3 {
            let now = t0 + LATER * (i * 2);
            drag(&mut c, 0.0, 200.0, now);
            c.tick(now + LATER);
        }
        assert!(c.deck().is_finished());
        assert_eq!(liked(&c), vec!["a", "b", "c"]);
        assert_eq!(c.deck().liked().len(), c.deck().len());
    }

    #[test]
    fn restart_after_finish_deals_a_new_deck() {
        let t0 = Instant::now();
        let mut c = controller_with(&["a"]);
        c.dispatch(SwipeEvent::Decide(Direction::Right), t0);
        assert!(c.deck().is_finished());
        let generation = c.deck().generation();

        c.dispatch(SwipeEvent::Restart, t0);
        assert!(!c.deck().is_finished());
        assert_eq!(c.deck().position(), 0);
        assert!(c.deck().liked().is_empty());
        assert!(crate::constants::DECK_SIZE.contains(&c.deck().len()));
        assert_eq!(c.deck().generation(), generation + 1);
        assert_eq!(c.card_load(), CardLoad::Loading);
    }

    #[test]
    fn restart_is_ignored_mid_deck() {
        let mut c = controller_with(&["a", "b"]);
        let generation = c.deck().generation();
        c.dispatch(SwipeEvent::Restart, Instant::now());
        assert_eq!(c.deck().generation(), generation);
        assert_eq!(c.deck().len(), 2);
    }

    #[test]
    fn button_matches_swipe_outcome() {
        let t0 = Instant::now();
        let mut swiped = controller_with(&["a", "b", "c"]);
        let mut pressed = controller_with(&["a", "b", "c"]);

        drag(&mut swiped, 0.0, -300.0, t0);
        swiped.tick(t0 + LATER);
        drag(&mut swiped, 0.0, 300.0, t0 + LATER);
        swiped.tick(t0 + LATER * 2);

        pressed.dispatch(SwipeEvent::Decide(Direction::Left), t0);
        pressed.dispatch(SwipeEvent::Decide(Direction::Right), t0);

        assert_eq!(swiped.deck().position(), pressed.deck().position());
        assert_eq!(liked(&swiped), liked(&pressed));
        assert_eq!(pressed.gesture().offset(), 0.0);
    }

    #[test]
    fn button_clears_an_active_drag() {
        let t0 = Instant::now();
        let mut c = controller_with(&["a", "b"]);
        c.dispatch(SwipeEvent::PointerDown(10.0), t0);
        c.dispatch(SwipeEvent::PointerMove(60.0), t0);
        c.dispatch(SwipeEvent::Decide(Direction::Left), t0);
        assert_eq!(c.gesture().drag_origin(), None);
        assert_eq!(c.deck().position(), 1);
    }

    #[test]
    fn card_load_follows_current_card_only() {
        let t0 = Instant::now();
        let mut c = controller_with(&["a", "b", "c"]);
        let first = c.deck().token();
        assert_eq!(c.card_load(), CardLoad::Loading);

        c.dispatch(SwipeEvent::CardLoaded(first), t0);
        assert_eq!(c.card_load(), CardLoad::Loaded);

        c.dispatch(SwipeEvent::Decide(Direction::Left), t0);
        assert_eq!(c.card_load(), CardLoad::Loading);

        // a late signal for the previous card changes nothing
        c.dispatch(SwipeEvent::CardLoaded(first), t0);
        assert_eq!(c.card_load(), CardLoad::Loading);

        c.dispatch(SwipeEvent::CardLoaded(c.deck().token()), t0);
        assert_eq!(c.card_load(), CardLoad::Loaded);
    }

    #[test]
    fn double_swipe_during_settle_advances_once() {
        let t0 = Instant::now();
        let mut c = controller_with(&["a", "b", "c"]);
        drag(&mut c, 0.0, 200.0, t0);
        drag(&mut c, 0.0, 200.0, t0 + Duration::from_millis(50));
        assert_eq!(c.pending_decisions(), 2);

        c.tick(t0 + Duration::from_secs(1));
        assert_eq!(c.deck().position(), 1);
        assert_eq!(liked(&c), vec!["a"]);
    }

    #[test]
    fn button_during_settle_drops_the_pending_swipe() {
        let t0 = Instant::now();
        let mut c = controller_with(&["a", "b", "c"]);
        drag(&mut c, 0.0, 200.0, t0);
        c.dispatch(SwipeEvent::Decide(Direction::Left), t0 + Duration::from_millis(10));
        c.tick(t0 + LATER);
        assert_eq!(c.deck().position(), 1);
        assert!(c.deck().liked().is_empty());
    }

    #[test]
    fn gesture_can_start_during_settle() {
        let t0 = Instant::now();
        let mut c = controller_with(&["a", "b", "c"]);
        drag(&mut c, 0.0, 200.0, t0);
        c.dispatch(SwipeEvent::PointerDown(40.0), t0 + Duration::from_millis(20));
        assert!(c.gesture().is_dragging());

        c.tick(t0 + LATER);
        assert_eq!(c.deck().position(), 1);
        assert_eq!(c.gesture().drag_origin(), None);
    }

    #[test]
    fn input_is_ignored_before_deal_and_after_finish() {
        let t0 = Instant::now();
        let mut c = SwipeController::new("http://cats", Box::new(SeededSource::new(1, 0)));
        assert!(c.deck().is_loading());
        drag(&mut c, 0.0, 300.0, t0);
        c.dispatch(SwipeEvent::Decide(Direction::Right), t0);
        assert_eq!(c.pending_decisions(), 0);
        assert_eq!(c.deck().position(), 0);

        let mut c = controller_with(&["a"]);
        c.dispatch(SwipeEvent::Decide(Direction::Left), t0);
        c.dispatch(SwipeEvent::PointerDown(0.0), t0);
        assert!(!c.gesture().is_dragging());
        c.dispatch(SwipeEvent::Decide(Direction::Right), t0);
        assert!(c.deck().liked().is_empty());
    }

    #[test]
    fn invariants_hold_over_mixed_session() {
        let t0 = Instant::now();
        let mut c = controller_with(&["a", "b", "c", "d"]);
        let steps: [(f32, f32); 6] = [
            (0.0, 150.0),
            (0.0, 100.0),
            (0.0, -101.0),
            (50.0, 20.0),
            (0.0, 400.0),
            (0.0, -400.0),
        ];
        for (i, (from, to)) in steps.into_iter().enumerate() {
            let now = t0 + LATER * (i as u32 * 2);
            drag(&mut c, from, to, now);
            c.tick(now + LATER);

            let deck = c.deck();
            assert_eq!(deck.is_finished(), deck.position() == deck.len());
            assert!(deck.liked().len() <= deck.position());
        }
        assert!(c.deck().is_finished());
        assert_eq!(liked(&c), vec!["a", "c"]);
    }

    #[test]
    fn deal_draws_urls_from_base() {
        let mut c = SwipeController::new("https://cataas.com/cat", Box::new(SeededSource::new(9, 1234)));
        c.deal();
        let first = c.deck().current().map(|i| i.url().to_string());
        assert_eq!(first.as_deref(), Some("https://cataas.com/cat?timestamp=1234-0"));
    }
}
