//! Deck manager: the cats of one session, the current position and the liked list

use crate::types::{CatImage, DecisionToken, Direction};
use tracing::{debug, info, warn};

/// Result of recording one decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved on to the card at this position
    Next(usize),
    /// That was the last card
    Finished,
}

#[derive(Debug, Default)]
pub struct Deck {
    cards: Vec<CatImage>,
    position: usize,
    liked: Vec<CatImage>,
    generation: u64,
}

impl Deck {
    /// Start a new session with `cards`. Bumps the generation so stale
    /// deferred effects from a previous session can be recognised.
    pub fn initialize(&mut self, cards: Vec<CatImage>) {
        self.generation += 1;
        self.cards = cards;
        self.position = 0;
        self.liked.clear();
        info!(
            generation = self.generation,
            count = self.cards.len(),
            "Deck initialized"
        );
    }

    /// Apply a like/reject to the current card and move on.
    ///
    /// Returns `None` without touching anything when there is no current
    /// card (not initialized yet, or already finished).
    pub fn record_decision(&mut self, direction: Direction) -> Option<Advance> {
        let Some(card) = self.cards.get(self.position) else {
            warn!(
                %direction,
                position = self.position,
                "Decision with no current card, ignoring"
            );
            return None;
        };

        if direction.is_like() {
            self.liked.push(card.clone());
        }
        self.position += 1;
        debug!(%direction, position = self.position, liked = self.liked.len(), "Decision recorded");

        if self.position == self.cards.len() {
            info!(
                total = self.cards.len(),
                liked = self.liked.len(),
                "Deck finished"
            );
            Some(Advance::Finished)
        } else {
            Some(Advance::Next(self.position))
        }
    }

    pub fn is_loading(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        !self.cards.is_empty() && self.position == self.cards.len()
    }

    pub fn current(&self) -> Option<&CatImage> {
        self.cards.get(self.position)
    }

    pub fn liked(&self) -> &[CatImage] {
        &self.liked
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Token for the card currently on screen
    pub fn token(&self) -> DecisionToken {
        DecisionToken {
            generation: self.generation,
            position: self.position,
        }
    }
}
