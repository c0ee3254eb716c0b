//! Incoming damage mitigation.

use crate::config::BlockPolicy;
use crate::rng::{RollContext, Roller};
use crate::state::Side;

/// Result of the defender's block check.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BlockOutcome {
    /// No block; full damage goes through.
    Clean(f64),
    /// Blocked under a reducing policy; the remainder goes through.
    Reduced(f64),
    /// Blocked completely.
    Negated,
}

impl BlockOutcome {
    /// Damage that reaches the defender.
    pub fn damage(&self) -> f64 {
        match *self {
            Self::Clean(amount) | Self::Reduced(amount) => amount,
            Self::Negated => 0.0,
        }
    }

    pub fn was_blocked(&self) -> bool {
        !matches!(self, Self::Clean(_))
    }
}

/// Rolls the defender's block against an incoming hit.
///
/// In expected-value mode the hit is scaled by
/// `1 - min(block_chance, 1) * policy.reduction()` and never reported as blocked.
pub fn resolve_block(
    amount: f64,
    block_chance: f64,
    policy: BlockPolicy,
    roller: &mut Roller,
    defender: Side,
) -> BlockOutcome {
    let p = block_chance.clamp(0.0, 1.0);

    if roller.is_expected_value() {
        return BlockOutcome::Clean(amount * (1.0 - p * policy.reduction()));
    }

    if !roller.roll(defender, RollContext::Block, p) {
        return BlockOutcome::Clean(amount);
    }

    match policy {
        BlockPolicy::Negate => BlockOutcome::Negated,
        BlockPolicy::Reduce { fraction } => BlockOutcome::Reduced(amount * (1.0 - fraction)),
    }
}
