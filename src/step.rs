//! Closed-form critically damped spring step.
//!
//! A critically damped spring with stiffness factor `k` obeys
//! `x'' + 2k·x' + k²·x = 0`, where `x` is the displacement from the target.
//! Its exact solution over an interval `dt`, starting from `(x0, v0)`, is
//!
//! ```text
//! B     = v0 + k·x0
//! x(dt) = (x0 + B·dt)·e^(-k·dt)
//! v(dt) = B·e^(-k·dt) - k·x(dt)
//!       = (v0 - k·B·dt)·e^(-k·dt)
//! ```
//!
//! so a step costs one exponential and a handful of multiply-adds, with no
//! integration error regardless of `dt`. The exponential depends only on
//! `k·dt`, so when many springs share a factor and timestep it can be
//! computed once into a [`Premult`] and reused.

use crate::angle::angle_mod_deg;
use crate::float::Float;
use crate::vec::Vec;

/// Tolerance used by [`verify_premult`].
pub const PREMULT_EPSILON: f32 = 1e-5;

/// Fraction of displacement left after `factor_dt` under pure exponential
/// decay: `e^(-factor_dt)`.
///
/// In `(0, 1]` for `factor_dt >= 0` (exactly 1 at zero); may underflow to 0
/// for very large inputs, which means "fully converged".
pub fn decay<F: Float>(factor_dt: F) -> F {
    (-factor_dt).exp()
}

/// Check that a caller-supplied decay matches `e^(-factor_dt)`.
///
/// Only active in debug builds. A failure is a programming error on the
/// caller's side (a decay precomputed from a different factor or timestep).
#[inline]
pub fn verify_premult<F: Float>(factor_dt: F, supplied: F) {
    debug_assert!(
        decay(factor_dt).approx_eq(supplied, F::from_f32(PREMULT_EPSILON)),
        "precomputed decay {:?} does not match exp(-{:?})",
        supplied,
        factor_dt,
    );
}

/// Step parameters with the exponential already evaluated.
///
/// Build one per (factor, timestep) pair and share it across every spring
/// stepped with that pair.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Premult<F: Float> {
    factor: F,
    dt: F,
    factor_dt: F,
    decay: F,
}

impl<F: Float> Premult<F> {
    /// Precompute for a stiffness factor and timestep.
    pub fn new(factor: F, dt: F) -> Self {
        let factor_dt = factor * dt;
        Premult { factor, dt, factor_dt, decay: decay(factor_dt) }
    }

    /// Use a decay computed elsewhere (e.g. a table). Verified in debug builds.
    pub fn from_parts(factor: F, dt: F, decay: F) -> Self {
        let factor_dt = factor * dt;
        verify_premult(factor_dt, decay);
        Premult { factor, dt, factor_dt, decay }
    }

    /// Fixed-timestep form: the factor is already multiplied by the timestep
    /// and time is measured in steps, so velocities are per step.
    pub fn per_step(factor_dt: F) -> Self {
        Premult { factor: factor_dt, dt: F::one(), factor_dt, decay: decay(factor_dt) }
    }

    /// [`Premult::per_step`] with a caller-supplied decay. Verified in debug builds.
    pub fn per_step_with_decay(factor_dt: F, decay: F) -> Self {
        verify_premult(factor_dt, decay);
        Premult { factor: factor_dt, dt: F::one(), factor_dt, decay }
    }

    pub fn factor(&self) -> F { self.factor }
    pub fn dt(&self) -> F { self.dt }
    pub fn factor_dt(&self) -> F { self.factor_dt }
    pub fn decay(&self) -> F { self.decay }
}

// --------------------------------------------------------------------------
// Scalar
// --------------------------------------------------------------------------

/// Advance a displacement already expressed relative to the target.
///
/// Returns `(displacement, velocity)` after the step.
pub fn update<F: Float>(diff: F, vel: F, factor: F, dt: F) -> (F, F) {
    update_premult(diff, vel, &Premult::new(factor, dt))
}

/// [`update`] with a precomputed decay.
pub fn update_premult<F: Float>(diff: F, vel: F, p: &Premult<F>) -> (F, F) {
    // Fully converged; skips B·dt overflowing into inf·0.
    if p.decay == F::zero() {
        return (F::zero(), F::zero());
    }
    let b = vel + p.factor * diff;
    let next = (diff + b * p.dt) * p.decay;
    // Equal to b·decay - factor·next, but exact when dt or factor is zero.
    let next_vel = (vel - b * p.factor_dt) * p.decay;
    (next, next_vel)
}

/// Move `pos` toward `target` for `dt`. Returns `(position, velocity)`.
pub fn step<F: Float>(pos: F, vel: F, target: F, factor: F, dt: F) -> (F, F) {
    step_premult(pos, vel, target, &Premult::new(factor, dt))
}

/// [`step`] with a precomputed decay.
pub fn step_premult<F: Float>(pos: F, vel: F, target: F, p: &Premult<F>) -> (F, F) {
    let (next, next_vel) = update_premult(pos - target, vel, p);
    (target + next, next_vel)
}

// --------------------------------------------------------------------------
// Angle (degrees)
// --------------------------------------------------------------------------

/// [`step`] for angles in degrees, taking the shortest arc to the target.
///
/// The returned position is wrapped into `(-180, 180]`.
pub fn step_angle_deg<F: Float>(pos: F, vel: F, target: F, factor: F, dt: F) -> (F, F) {
    step_angle_deg_premult(pos, vel, target, &Premult::new(factor, dt))
}

/// [`step_angle_deg`] with a precomputed decay.
pub fn step_angle_deg_premult<F: Float>(pos: F, vel: F, target: F, p: &Premult<F>) -> (F, F) {
    let (next, next_vel) = update_premult(angle_mod_deg(pos - target), vel, p);
    (angle_mod_deg(target + next), next_vel)
}

// --------------------------------------------------------------------------
// Vector
// --------------------------------------------------------------------------

/// Vector form of [`update`]. One factor applies to every component.
pub fn vec_update<V: Vec>(diff: V, vel: V, factor: V::Scalar, dt: V::Scalar) -> (V, V) {
    vec_update_premult(diff, vel, &Premult::new(factor, dt))
}

/// [`vec_update`] with a precomputed decay.
pub fn vec_update_premult<V: Vec>(diff: V, vel: V, p: &Premult<V::Scalar>) -> (V, V) {
    if p.decay == V::Scalar::zero() {
        return (V::zero(), V::zero());
    }
    let b = vel + diff.scale(p.factor);
    let next = (diff + b.scale(p.dt)).scale(p.decay);
    let next_vel = (vel - b.scale(p.factor_dt)).scale(p.decay);
    (next, next_vel)
}

/// Vector form of [`step`].
pub fn vec_step<V: Vec>(pos: V, vel: V, target: V, factor: V::Scalar, dt: V::Scalar) -> (V, V) {
    vec_step_premult(pos, vel, target, &Premult::new(factor, dt))
}

/// [`vec_step`] with a precomputed decay.
pub fn vec_step_premult<V: Vec>(pos: V, vel: V, target: V, p: &Premult<V::Scalar>) -> (V, V) {
    let (next, next_vel) = vec_update_premult(pos - target, vel, p);
    (target + next, next_vel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::{Scalar, Vec2};

    #[test]
    fn decay_bounds() {
        assert_eq!(decay(0.0f32), 1.0);
        let d = decay(0.5f32);
        assert!(d > 0.0 && d < 1.0);
        assert_eq!(decay(1.0e4f64), 0.0);
    }

    #[test]
    fn premult_new_matches_exp() {
        let p = Premult::new(4.0f64, 0.25);
        assert_eq!(p.factor_dt(), 1.0);
        assert_eq!(p.decay(), libm::exp(-1.0));
    }

    #[test]
    fn per_step_uses_unit_dt() {
        let p = Premult::per_step(0.5f32);
        assert_eq!(p.factor(), 0.5);
        assert_eq!(p.dt(), 1.0);
        assert_eq!(p.decay(), decay(0.5f32));
    }

    #[test]
    fn per_step_matches_velocity_scaled_direct_step() {
        // Measuring velocity per step instead of per second is the same motion.
        let (factor, dt) = (6.0f64, 1.0 / 30.0);
        let (pos, vel) = update(2.0, 3.0, factor, dt);
        let (pos_s, vel_s) = update_premult(2.0, 3.0 * dt, &Premult::per_step(factor * dt));
        assert!((pos - pos_s).abs() < 1e-12);
        assert!((vel * dt - vel_s).abs() < 1e-12);
    }

    #[test]
    fn from_parts_accepts_matching_decay() {
        let p = Premult::from_parts(10.0f32, 0.1, libm::expf(-1.0));
        assert_eq!(p.factor_dt(), 1.0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "precomputed decay")]
    fn from_parts_rejects_mismatched_decay_in_debug() {
        let _ = Premult::from_parts(10.0f32, 0.1, 0.5);
    }

    #[test]
    fn update_large_factor_dt_converges() {
        let (x, v) = update(100.0f64, -50.0, 1.0e3, 10.0);
        assert_eq!(x, 0.0);
        assert_eq!(v, 0.0);
    }

    #[test]
    fn vec_update_matches_scalar_per_component() {
        let (x, v) = update(3.0f32, -1.0, 8.0, 1.0 / 60.0);
        let (vx, vv) = vec_update(Vec2::new(3.0f32, 3.0), Vec2::new(-1.0, -1.0), 8.0, 1.0 / 60.0);
        assert_eq!(vx, Vec2::new(x, x));
        assert_eq!(vv, Vec2::new(v, v));

        let (sx, sv) = vec_update(Scalar(3.0f32), Scalar(-1.0), 8.0, 1.0 / 60.0);
        assert_eq!((sx.0, sv.0), (x, v));
    }

    #[test]
    fn angle_step_wraps_result() {
        let (pos, _) = step_angle_deg(179.0f32, 0.0, -179.0, 10.0, 0.05);
        assert!(pos > 179.0 || pos < -179.0, "pos = {}", pos);
    }
}
