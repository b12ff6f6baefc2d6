use crate::{play_round, Deck, EventBus, RoundOutcome, RoundReport, ShuffleSource};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("session cancelled after {games_played} games without a win")]
    Cancelled { games_played: u32 },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionReport {
    /// Rounds attempted, the winning one included.
    pub games_played: u32,
    pub winning_round: RoundReport,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionLimits {
    pub max_games: Option<u32>,
}

impl SessionLimits {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_max_games(max_games: u32) -> Self {
        Self {
            max_games: Some(max_games),
        }
    }

    pub fn should_stop(&self, games_played: u32) -> bool {
        matches!(self.max_games, Some(max) if games_played >= max)
    }
}

/// Resets, shuffles and plays until a round is won.
pub fn play_until_win<S: ShuffleSource + ?Sized>(deck: &mut Deck, source: &mut S) -> SessionReport {
    let mut games_played = 0u32;
    loop {
        let round = fresh_round(deck, source);
        games_played += 1;
        if round.is_win() {
            return finish(games_played, round);
        }
    }
}

/// Like [`play_until_win`], but asks `should_stop` before every round.
///
/// `should_stop` receives the number of rounds played so far and is never
/// consulted while a round is in progress.
pub fn play_until_win_with<S, F>(
    deck: &mut Deck,
    source: &mut S,
    mut should_stop: F,
) -> Result<SessionReport, SessionError>
where
    S: ShuffleSource + ?Sized,
    F: FnMut(u32) -> bool,
{
    let mut games_played = 0u32;
    loop {
        if should_stop(games_played) {
            warn!(games_played, "session cancelled");
            return Err(SessionError::Cancelled { games_played });
        }
        let round = fresh_round(deck, source);
        games_played += 1;
        if round.is_win() {
            return Ok(finish(games_played, round));
        }
    }
}

pub fn play_until_win_within<S: ShuffleSource + ?Sized>(
    deck: &mut Deck,
    source: &mut S,
    limits: SessionLimits,
) -> Result<SessionReport, SessionError> {
    play_until_win_with(deck, source, |games_played| limits.should_stop(games_played))
}

fn fresh_round<S: ShuffleSource + ?Sized>(deck: &mut Deck, source: &mut S) -> RoundReport {
    deck.reset();
    deck.shuffle(source);
    play_round(deck, &mut EventBus::default())
}

fn finish(games_played: u32, winning_round: RoundReport) -> SessionReport {
    info!(
        games_played,
        piles = winning_round.total_piles,
        "session won"
    );
    SessionReport {
        games_played,
        winning_round,
    }
}

/// Win/loss counts over independently shuffled rounds.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct RoundTally {
    pub rounds: u32,
    pub wins: u32,
    pub losses: u32,
    pub aborted: u32,
    pub total_piles: u64,
}

impl RoundTally {
    pub fn record(&mut self, report: &RoundReport) {
        self.rounds += 1;
        self.total_piles += u64::from(report.total_piles);
        match report.outcome {
            RoundOutcome::Win => self.wins += 1,
            RoundOutcome::Loss => self.losses += 1,
            RoundOutcome::Aborted => self.aborted += 1,
        }
    }

    pub fn win_rate(&self) -> f64 {
        if self.rounds == 0 {
            return 0.0;
        }
        f64::from(self.wins) / f64::from(self.rounds)
    }

    pub fn mean_piles(&self) -> f64 {
        if self.rounds == 0 {
            return 0.0;
        }
        self.total_piles as f64 / f64::from(self.rounds)
    }
}

pub fn tally_rounds<S: ShuffleSource + ?Sized>(
    deck: &mut Deck,
    source: &mut S,
    rounds: u32,
) -> RoundTally {
    let mut tally = RoundTally::default();
    for _ in 0..rounds {
        tally.record(&fresh_round(deck, source));
    }
    info!(
        rounds = tally.rounds,
        wins = tally.wins,
        win_rate = tally.win_rate(),
        "tally finished"
    );
    tally
}
