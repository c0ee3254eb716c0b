//! Combat math: strike rolls, block mitigation and lifesteal.
//!
//! Everything here is a pure function of its inputs plus the roller, so the
//! engine resolvers stay free of formulas.

mod block;
mod strike;

pub use block::{BlockOutcome, resolve_block};
pub use strike::{Strike, roll_strike};

/// Healing returned to the attacker for `dealt` weapon damage.
pub fn lifesteal_heal(dealt: f64, life_steal: f64) -> f64 {
    (dealt * life_steal).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifesteal_is_proportional() {
        assert_eq!(lifesteal_heal(40.0, 0.25), 10.0);
        assert_eq!(lifesteal_heal(40.0, 0.0), 0.0);
    }
}
