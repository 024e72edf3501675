use std::time::Duration;

use tracing::{
    debug,
    info,
    warn,
};

use super::{
    Card,
    Direction,
    SessionPhase,
    SwipeError,
};
use crate::settings::SwipeSettings;

/// Number of cards rendered from the cursor onwards: the top card plus one behind it.
pub const VISIBLE_CARDS: usize = 2;

/// A batch fetch the caller must run, tagged with the generation it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: u64,
    pub count: usize,
}

/// Deferred switch to the summary, fired once the last card has left the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleSettle {
    pub generation: u64,
    pub delay: Duration,
}

/// Deck position, liked cards and view phase for one pass through a batch.
///
/// Asynchronous work is never started from here. Operations that need it hand
/// back a [`FetchRequest`] or [`ScheduleSettle`], and completions come back in
/// through [`Session::batch_loaded`] and [`Session::settle_elapsed`] carrying the
/// generation they were issued for. Anything from an older generation is dropped.
#[derive(Debug)]
pub struct Session {
    generation: u64,
    phase: SessionPhase,
    deck: Vec<Card>,
    cursor: usize,
    liked: Vec<Card>,
    settle_pending: bool,
    batch_size: usize,
    settle_delay: Duration,
}

impl Session {
    pub fn new(batch_size: usize, settle_delay: Duration) -> Self {
        Self {
            generation: 0,
            phase: SessionPhase::Loading,
            deck: Vec::new(),
            cursor: 0,
            liked: Vec::new(),
            settle_pending: false,
            batch_size: batch_size.max(1),
            settle_delay,
        }
    }

    pub fn from_settings(settings: &SwipeSettings) -> Self {
        Self::new(settings.batch_size, settings.settle_delay())
    }

    /// Discards the current pass and asks for a fresh batch.
    pub fn start(&mut self) -> FetchRequest {
        self.generation += 1;
        self.phase = SessionPhase::Loading;
        self.deck.clear();
        self.liked.clear();
        self.cursor = 0;
        self.settle_pending = false;

        info!(generation = self.generation, count = self.batch_size, "Requesting batch");

        FetchRequest { generation: self.generation, count: self.batch_size }
    }

    pub fn restart(&mut self) -> FetchRequest {
        info!(
            generation = self.generation,
            phase = self.phase.name(),
            liked = self.liked.len(),
            "Restarting session"
        );
        self.start()
    }

    /// Applies the outcome of a fetch. Returns false when the result was stale.
    pub fn batch_loaded(
        &mut self,
        generation: u64,
        result: Result<Vec<Card>, SwipeError>,
    ) -> bool {
        if generation != self.generation || self.phase != SessionPhase::Loading {
            debug!(
                generation,
                current = self.generation,
                phase = self.phase.name(),
                "Dropping stale batch"
            );
            return false;
        }

        match result {
            Ok(cards) => {
                info!(generation, cards = cards.len(), "Batch loaded");
                self.deck = cards;
                self.cursor = 0;
                self.liked.clear();
                self.settle_pending = false;
                self.phase = if self.deck.is_empty() {
                    SessionPhase::Summary
                } else {
                    SessionPhase::Browsing
                };
            }
            Err(e) => {
                warn!(generation, error = %e, "Batch fetch failed");
                self.phase = SessionPhase::Failed { message: e.to_string() };
            }
        }

        true
    }

    /// Records a decision on the top card.
    ///
    /// Late or duplicate decisions are no-ops. Deciding on the last card does not
    /// move the cursor; it returns the settle timer the caller has to run before
    /// the summary is shown.
    pub fn decide(&mut self, direction: Direction) -> Option<ScheduleSettle> {
        if self.phase != SessionPhase::Browsing
            || self.settle_pending
            || self.cursor >= self.deck.len()
        {
            debug!(
                cursor = self.cursor,
                len = self.deck.len(),
                phase = self.phase.name(),
                "Ignoring decision"
            );
            return None;
        }

        let card = &self.deck[self.cursor];
        debug!(card = %card.id, direction = direction.label(), "Decided");

        if direction.is_like() {
            self.liked.push(card.clone());
        }

        if self.cursor + 1 == self.deck.len() {
            self.settle_pending = true;
            Some(ScheduleSettle { generation: self.generation, delay: self.settle_delay })
        } else {
            self.cursor += 1;
            None
        }
    }

    /// Completes the deferred switch to the summary. Returns false when stale.
    pub fn settle_elapsed(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.settle_pending {
            debug!(generation, current = self.generation, "Dropping stale settle timer");
            return false;
        }

        self.settle_pending = false;
        self.cursor = self.deck.len();
        self.phase = SessionPhase::Summary;
        info!(
            generation,
            liked = self.liked.len(),
            total = self.deck.len(),
            "Session complete"
        );
        true
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn liked(&self) -> &[Card] {
        &self.liked
    }

    pub fn total(&self) -> usize {
        self.deck.len()
    }

    pub fn is_settling(&self) -> bool {
        self.settle_pending
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.deck.get(self.cursor)
    }

    /// Cards to render, topmost first.
    pub fn visible_cards(&self) -> &[Card] {
        let start = self.cursor.min(self.deck.len());
        let end = (self.cursor + VISIBLE_CARDS).min(self.deck.len());
        &self.deck[start..end]
    }

    /// One-based position of the top card and the deck length, for "3 / 10".
    pub fn position(&self) -> (usize, usize) {
        let total = self.deck.len();
        ((self.cursor + 1).min(total), total)
    }
}
