use crate::config::CliConfig;
use fibsol_core::{
    play_round, play_until_win_within, tally_rounds, Deck, Event, EventBus, RngState,
    RoundReport, RoundTally, SessionError, SessionLimits, SessionReport,
};

/// One deck and its random source, shared by every command of a launch.
#[derive(Debug)]
pub struct Table {
    pub deck: Deck,
    rng: RngState,
    limits: SessionLimits,
}

impl Table {
    pub fn new(config: &CliConfig) -> Self {
        Self {
            deck: Deck::new(),
            rng: RngState::from_seed(config.seed),
            limits: config.limits,
        }
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn new_deck(&mut self) {
        self.deck.reset();
    }

    pub fn shuffle(&mut self) {
        self.deck.shuffle(&mut self.rng);
    }

    pub fn play(&mut self) -> (RoundReport, Vec<Event>) {
        let mut events = EventBus::default();
        let report = play_round(&mut self.deck, &mut events);
        let events = events.drain().collect();
        (report, events)
    }

    pub fn win(&mut self) -> Result<SessionReport, SessionError> {
        play_until_win_within(&mut self.deck, &mut self.rng, self.limits)
    }

    pub fn tally(&mut self, rounds: u32) -> RoundTally {
        tally_rounds(&mut self.deck, &mut self.rng, rounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fibsol_core::RoundOutcome;

    fn table(seed: u64) -> Table {
        Table::new(&CliConfig::resolve(Some(seed), Some(10_000), false))
    }

    #[test]
    fn fresh_table_plays_canonical_round() {
        let mut table = table(1);
        let (report, events) = table.play();
        assert_eq!(report.outcome, RoundOutcome::Loss);
        assert_eq!(events.len(), 53);
        assert!(table.deck.is_empty());
    }

    #[test]
    fn new_deck_allows_another_round() {
        let mut table = table(1);
        table.play();
        table.new_deck();
        let (report, _) = table.play();
        assert_ne!(report.outcome, RoundOutcome::Aborted);
    }

    #[test]
    fn win_respects_configured_limit() {
        let mut table = Table::new(&CliConfig::resolve(Some(3), Some(0), false));
        assert_eq!(
            table.win(),
            Err(SessionError::Cancelled { games_played: 0 })
        );
    }

    #[test]
    fn seed_is_kept() {
        assert_eq!(table(77).seed(), 77);
    }
}
