use rand::{rngs::StdRng, Rng, SeedableRng};

/// Supplies the swap targets used by [`crate::Deck::shuffle`].
pub trait ShuffleSource {
    /// Returns an index in `0..bound`.
    fn next_index(&mut self, bound: usize) -> usize;
}

#[derive(Debug, Clone)]
pub struct RngState {
    seed: u64,
    rng: StdRng,
}

impl RngState {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl ShuffleSource for RngState {
    fn next_index(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}

/// Replays a fixed list of indices, cycling when it runs out.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    indices: Vec<usize>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices, cursor: 0 }
    }

    /// The identity script: every position swaps with itself.
    pub fn identity(len: usize) -> Self {
        Self::new((0..len).collect())
    }
}

impl ShuffleSource for ScriptedSource {
    fn next_index(&mut self, bound: usize) -> usize {
        if self.indices.is_empty() || bound == 0 {
            return 0;
        }
        let index = self.indices[self.cursor % self.indices.len()];
        self.cursor += 1;
        index % bound
    }
}
