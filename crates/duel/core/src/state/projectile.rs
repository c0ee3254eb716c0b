use crate::config::BattleConfig;

use super::Side;

/// A ranged weapon hit in flight.
///
/// The target point is fixed at spawn; the payload already includes the
/// crit and double-damage rolls made when the attack resolved.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Projectile {
    pub id: u64,
    pub source: Side,
    pub origin_x: f64,
    pub target_x: f64,
    pub current_x: f64,
    pub speed: f64,
    pub payload: f64,
    pub crit: bool,
}

impl Projectile {
    pub fn remaining_distance(&self) -> f64 {
        (self.target_x - self.current_x).abs()
    }

    /// Moves toward the target by `speed * dt`. Returns true on arrival,
    /// which snaps the projectile onto the target point.
    pub fn advance(&mut self, dt: f64) -> bool {
        let remaining = self.remaining_distance();
        let travel = self.speed * dt;
        if travel + BattleConfig::TIME_EPSILON >= remaining {
            self.current_x = self.target_x;
            return true;
        }
        let direction = (self.target_x - self.current_x).signum();
        self.current_x += direction * travel;
        false
    }
}
