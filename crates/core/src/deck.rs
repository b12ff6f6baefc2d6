use crate::{Card, Rank, ScriptedSource, ShuffleSource, Suit};
use std::fmt;
use thiserror::Error;
use tracing::trace;

pub const DECK_SIZE: usize = 52;
const ROW_WIDTH: usize = 13;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DeckError {
    #[error("deck is empty")]
    Empty,
}

/// A full 52-card deck dealt from a cursor. Dealing never removes a card,
/// so the deck always holds exactly one card of each rank and suit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
    top: usize,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    pub fn new() -> Self {
        Self {
            cards: canonical_order(),
            top: 0,
        }
    }

    /// Restores suit-major, rank-minor order and rewinds the cursor.
    pub fn reset(&mut self) {
        self.cards = canonical_order();
        self.top = 0;
    }

    /// Swaps every position with an index drawn from the whole deck.
    ///
    /// This is not an unbiased Fisher-Yates pass: the swap target ranges over
    /// `0..52` rather than `i..52`, so some orderings are more likely than
    /// others. Win rates depend on this, keep it as is.
    pub fn shuffle<S: ShuffleSource + ?Sized>(&mut self, source: &mut S) {
        for i in 0..DECK_SIZE {
            let j = source.next_index(DECK_SIZE);
            self.cards.swap(i, j);
        }
        self.top = 0;
        trace!(first = %self.cards[0], "deck shuffled");
    }

    pub fn deal(&mut self) -> Result<Card, DeckError> {
        let card = *self.cards.get(self.top).ok_or(DeckError::Empty)?;
        self.top += 1;
        Ok(card)
    }

    pub fn is_empty(&self) -> bool {
        self.top == DECK_SIZE
    }

    pub fn remaining(&self) -> usize {
        DECK_SIZE - self.top
    }

    pub fn dealt(&self) -> usize {
        self.top
    }

    pub fn cards(&self) -> &[Card; DECK_SIZE] {
        &self.cards
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cards.chunks(ROW_WIDTH).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            for (idx, card) in row.iter().enumerate() {
                if idx > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{card}")?;
            }
        }
        Ok(())
    }
}

fn canonical_order() -> [Card; DECK_SIZE] {
    std::array::from_fn(|idx| {
        Card::new(Rank::ALL[idx % Rank::ALL.len()], Suit::ALL[idx / Rank::ALL.len()])
    })
}

/// Builds the script that makes [`Deck::shuffle`] turn `from` into `to`.
///
/// Returns `None` when `to` is not a rearrangement of `from`.
pub fn arrangement_script(from: &[Card], to: &[Card]) -> Option<ScriptedSource> {
    if from.len() != to.len() {
        return None;
    }
    let mut current = from.to_vec();
    let mut indices = Vec::with_capacity(to.len());
    for (i, wanted) in to.iter().enumerate() {
        let offset = current[i..].iter().position(|card| card == wanted)?;
        current.swap(i, i + offset);
        indices.push(i + offset);
    }
    Some(ScriptedSource::new(indices))
}
