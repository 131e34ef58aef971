//! RNG module - seedable piece-kind generation
//!
//! Two randomizers are available:
//! - **Uniform**: every draw is an independent, uniform pick of one of the seven
//!   kinds. Droughts of a kind are possible.
//! - **SevenBag**: one of each kind per shuffled bag, refilled when empty.
//!
//! Both are driven by a small LCG so a seed fully determines the sequence.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (((self.next_u32() >> 16) as u64 * max as u64) >> 16) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Current internal state (usable as a seed to continue the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Which piece randomizer a game uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Randomizer {
    #[default]
    Uniform,
    SevenBag,
}

impl Randomizer {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "uniform" | "random" => Some(Randomizer::Uniform),
            "bag" | "7bag" | "seven_bag" => Some(Randomizer::SevenBag),
            _ => None,
        }
    }
}

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct PieceQueue {
    bag: [PieceKind; 7],
    bag_index: usize,
}

impl PieceQueue {
    /// Create an exhausted bag; the first draw shuffles a fresh one.
    pub fn new() -> Self {
        Self {
            bag: PieceKind::ALL,
            bag_index: PieceKind::ALL.len(),
        }
    }

    fn refill_bag(&mut self, rng: &mut SimpleRng) {
        self.bag = PieceKind::ALL;
        rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }

    /// Draw the next piece, refilling the bag from `rng` when empty
    pub fn draw(&mut self, rng: &mut SimpleRng) -> PieceKind {
        if self.bag_index >= self.bag.len() {
            self.refill_bag(rng);
        }
        let piece = self.bag[self.bag_index];
        self.bag_index += 1;
        piece
    }

    /// Pieces left in the current bag
    pub fn remaining(&self) -> &[PieceKind] {
        &self.bag[self.bag_index..]
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Seeded source of piece kinds for one game
#[derive(Debug, Clone)]
pub struct PieceSource {
    rng: SimpleRng,
    randomizer: Randomizer,
    bag: PieceQueue,
}

impl PieceSource {
    pub fn new(seed: u32, randomizer: Randomizer) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            randomizer,
            bag: PieceQueue::new(),
        }
    }

    /// Draw the next kind
    pub fn next_kind(&mut self) -> PieceKind {
        match self.randomizer {
            Randomizer::Uniform => PieceKind::ALL[self.rng.next_range(7) as usize],
            Randomizer::SevenBag => self.bag.draw(&mut self.rng),
        }
    }

    pub fn randomizer(&self) -> Randomizer {
        self.randomizer
    }

    /// RNG state, used to seed the next episode after a reset
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}
