use crate::{is_fibonacci, Card, Deck, Event, EventBus, DECK_SIZE};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    Win,
    Loss,
    /// The deck had nothing (or not enough) left to deal a full round.
    Aborted,
}

/// A pile that closed on a Fibonacci sum.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PileClosed {
    pub card: Card,
    pub pile_sum: u32,
    /// One-based position of the pile within the round.
    pub pile: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundReport {
    pub outcome: RoundOutcome,
    pub total_piles: u32,
    pub piles: Vec<PileClosed>,
    /// Values of the cards still sitting on the unfinished pile.
    pub open_pile: Vec<u8>,
    /// Sum of the unfinished pile, zero on a win.
    pub leftover: u32,
    pub dealt: usize,
}

impl RoundReport {
    pub fn is_win(&self) -> bool {
        self.outcome == RoundOutcome::Win
    }
}

#[derive(Debug, Default)]
struct RoundState {
    pile_sum: u32,
    total_piles: u32,
    open_pile: Vec<u8>,
    piles: Vec<PileClosed>,
    dealt: usize,
}

impl RoundState {
    fn place(&mut self, card: Card) -> Option<PileClosed> {
        self.dealt += 1;
        self.pile_sum += u32::from(card.value());
        if !is_fibonacci(self.pile_sum) {
            self.open_pile.push(card.value());
            return None;
        }
        self.total_piles += 1;
        let closed = PileClosed {
            card,
            pile_sum: self.pile_sum,
            pile: self.total_piles,
        };
        self.piles.push(closed);
        self.pile_sum = 0;
        self.open_pile.clear();
        Some(closed)
    }

    fn into_report(self, outcome: RoundOutcome) -> RoundReport {
        RoundReport {
            outcome,
            total_piles: self.total_piles,
            piles: self.piles,
            open_pile: self.open_pile,
            leftover: self.pile_sum,
            dealt: self.dealt,
        }
    }
}

/// Deals one full pass of the deck onto Fibonacci piles.
///
/// The round is won when the 52nd card closes the last pile. A deck that
/// cannot supply 52 cards aborts the round instead of failing.
pub fn play_round(deck: &mut Deck, events: &mut EventBus) -> RoundReport {
    let mut round = RoundState::default();
    if deck.is_empty() {
        warn!("round not started: deck is empty");
        events.push(Event::RoundAborted {
            dealt: 0,
            total_piles: 0,
        });
        return round.into_report(RoundOutcome::Aborted);
    }

    for _ in 0..DECK_SIZE {
        let card = match deck.deal() {
            Ok(card) => card,
            Err(err) => {
                warn!(%err, dealt = round.dealt, "round aborted mid-deal");
                events.push(Event::RoundAborted {
                    dealt: round.dealt,
                    total_piles: round.total_piles,
                });
                return round.into_report(RoundOutcome::Aborted);
            }
        };
        match round.place(card) {
            Some(closed) => {
                debug!(card = %closed.card, sum = closed.pile_sum, pile = closed.pile, "pile closed");
                events.push(Event::PileClosed {
                    card: closed.card,
                    pile_sum: closed.pile_sum,
                    pile: closed.pile,
                });
            }
            None => events.push(Event::CardDealt {
                card,
                pile_sum: round.pile_sum,
            }),
        }
    }

    let outcome = if round.pile_sum != 0 {
        RoundOutcome::Loss
    } else {
        RoundOutcome::Win
    };
    debug!(?outcome, piles = round.total_piles, leftover = round.pile_sum, "round finished");
    events.push(Event::RoundFinished {
        outcome,
        total_piles: round.total_piles,
        leftover: round.pile_sum,
    });
    round.into_report(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{arrangement_script, Rank, Suit};

    fn deck_starting_with(prefix: &[Card]) -> Deck {
        let canonical = Deck::new();
        let mut target: Vec<Card> = prefix.to_vec();
        target.extend(
            canonical
                .cards()
                .iter()
                .filter(|card| !prefix.contains(card))
                .copied(),
        );
        let mut script = arrangement_script(canonical.cards(), &target).expect("script");
        let mut deck = Deck::new();
        deck.shuffle(&mut script);
        deck
    }

    #[test]
    fn each_fibonacci_sum_closes_a_pile() {
        // A, A, 3, 5: every card lands on an empty pile and closes it.
        let prefix = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::Three, Suit::Spades),
            Card::new(Rank::Five, Suit::Spades),
        ];
        let mut deck = deck_starting_with(&prefix);
        let mut events = EventBus::default();
        let report = play_round(&mut deck, &mut events);
        let sums: Vec<u32> = report.piles.iter().take(4).map(|p| p.pile_sum).collect();
        assert_eq!(sums, vec![1, 1, 3, 5]);
        assert_eq!(report.piles[3].card, prefix[3]);
        assert_eq!(report.piles[3].pile, 4);
    }

    #[test]
    fn open_pile_tracks_values_until_close() {
        // 4 -> 4, 9 -> 13 closes; 6 -> 6, 7 -> 13 closes; 10 -> 10, 10 -> 20, A -> 21 closes.
        let prefix = [
            Card::new(Rank::Four, Suit::Spades),
            Card::new(Rank::Nine, Suit::Spades),
            Card::new(Rank::Six, Suit::Hearts),
            Card::new(Rank::Seven, Suit::Hearts),
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::Queen, Suit::Hearts),
            Card::new(Rank::Ace, Suit::Clubs),
        ];
        let mut deck = deck_starting_with(&prefix);
        let mut events = EventBus::default();
        let report = play_round(&mut deck, &mut events);
        let sums: Vec<u32> = report.piles.iter().take(3).map(|p| p.pile_sum).collect();
        assert_eq!(sums, vec![13, 13, 21]);
        let first: Vec<Event> = events.drain().take(2).collect();
        assert_eq!(
            first[0],
            Event::CardDealt {
                card: prefix[0],
                pile_sum: 4
            }
        );
        assert_eq!(
            first[1],
            Event::PileClosed {
                card: prefix[1],
                pile_sum: 13,
                pile: 1
            }
        );
    }

    #[test]
    fn empty_deck_aborts_without_dealing() {
        let mut deck = Deck::new();
        while deck.deal().is_ok() {}
        let mut events = EventBus::default();
        let report = play_round(&mut deck, &mut events);
        assert_eq!(report.outcome, RoundOutcome::Aborted);
        assert_eq!(report.dealt, 0);
        assert_eq!(report.total_piles, 0);
        assert_eq!(
            events.drain().collect::<Vec<_>>(),
            vec![Event::RoundAborted {
                dealt: 0,
                total_piles: 0
            }]
        );
    }

    #[test]
    fn partially_dealt_deck_aborts_mid_round() {
        let mut deck = Deck::new();
        for _ in 0..50 {
            deck.deal().expect("deal");
        }
        let mut events = EventBus::default();
        let report = play_round(&mut deck, &mut events);
        assert_eq!(report.outcome, RoundOutcome::Aborted);
        assert_eq!(report.dealt, 2);
        assert!(deck.is_empty());
    }

    #[test]
    fn second_round_on_same_deck_is_aborted() {
        let mut deck = Deck::new();
        let mut events = EventBus::default();
        let first = play_round(&mut deck, &mut events);
        assert_ne!(first.outcome, RoundOutcome::Aborted);
        let second = play_round(&mut deck, &mut events);
        assert_eq!(second.outcome, RoundOutcome::Aborted);
    }
}
