//! Degree wrapping for shortest-arc angle springs.

use crate::float::Float;

/// Degrees in a full turn.
pub const DEGREES_PER_TURN: f32 = 360.0;

/// Wrap an angle in degrees into `(-180, 180]`.
///
/// Applied to a difference of two angles this yields the signed shortest
/// arc between them.
pub fn angle_mod_deg<F: Float>(degrees: F) -> F {
    let turn = F::from_f32(DEGREES_PER_TURN);
    let half_turn = F::from_f32(DEGREES_PER_TURN * 0.5);
    degrees - turn * ((degrees - half_turn) / turn).ceil()
}
