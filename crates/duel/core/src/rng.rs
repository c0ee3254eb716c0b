//! Deterministic chance rolls.
//!
//! Every roll is a pure function of the match seed, a monotonic roll counter,
//! the rolling side and the roll kind, so two engines fed the same inputs draw
//! the same values in the same order.

use crate::config::RollMode;
use crate::state::Side;

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Uniform value in `[0, 1)`.
    fn unit(&self, seed: u64) -> f64 {
        f64::from(self.next_u32(seed)) / (f64::from(u32::MAX) + 1.0)
    }
}

/// PCG-XSH-RR: 64-bit LCG state permuted into a 32-bit output.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// `state' = (state * multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// Xorshift the high bits down, then rotate by the top five bits.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }
}

/// Independent roll kinds. The discriminant feeds the seed mix so a crit and a
/// double-damage roll at the same counter never share a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum RollContext {
    Crit = 0,
    DoubleDamage = 1,
    Block = 2,
}

/// Mixes the match seed with the roll coordinates.
///
/// * `match_seed` - seed fixed at engine construction
/// * `roll_index` - monotonic count of rolls made so far in the match
/// * `side` - combatant making the roll
/// * `context` - roll kind, for multiple rolls in the same event
pub fn compute_seed(match_seed: u64, roll_index: u64, side: u32, context: u32) -> u64 {
    let mut hash = match_seed;
    hash ^= roll_index.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= u64::from(side).wrapping_mul(0x517cc1b727220a95);
    hash ^= u64::from(context).wrapping_mul(0x85ebca6b);

    // avalanche
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

/// Stateful roll source owned by the engine.
#[derive(Clone, Debug)]
pub struct Roller<R: RngOracle = PcgRng> {
    mode: RollMode,
    rng: R,
    rolls: u64,
}

impl Roller<PcgRng> {
    pub fn new(mode: RollMode) -> Self {
        Self::with_oracle(mode, PcgRng)
    }
}

impl<R: RngOracle> Roller<R> {
    pub fn with_oracle(mode: RollMode, rng: R) -> Self {
        Self {
            mode,
            rng,
            rolls: 0,
        }
    }

    pub fn mode(&self) -> RollMode {
        self.mode
    }

    /// True when rolls are replaced by their expected contribution.
    pub fn is_expected_value(&self) -> bool {
        matches!(self.mode, RollMode::ExpectedValue)
    }

    /// Number of Bernoulli rolls consumed so far.
    pub fn rolls(&self) -> u64 {
        self.rolls
    }

    /// Bernoulli trial with success probability `min(probability, 1)`.
    ///
    /// Always consumes one counter value in seeded mode, so the stream position
    /// depends only on how many rolls were requested. In expected-value mode
    /// only certain outcomes (`p >= 1`) succeed.
    pub fn roll(&mut self, side: Side, context: RollContext, probability: f64) -> bool {
        let p = probability.clamp(0.0, 1.0);
        match self.mode {
            RollMode::ExpectedValue => p >= 1.0,
            RollMode::Seeded { seed } => {
                let index = self.rolls;
                self.rolls += 1;
                if p <= 0.0 {
                    return false;
                }
                if p >= 1.0 {
                    return true;
                }
                let roll_seed = compute_seed(seed, index, side.index() as u32, context as u32);
                self.rng.unit(roll_seed) < p
            }
        }
    }
}
