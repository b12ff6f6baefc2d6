use crate::{Card, RoundOutcome};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Event {
    CardDealt { card: Card, pile_sum: u32 },
    PileClosed { card: Card, pile_sum: u32, pile: u32 },
    RoundFinished {
        outcome: RoundOutcome,
        total_piles: u32,
        leftover: u32,
    },
    RoundAborted { dealt: usize, total_piles: u32 },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
