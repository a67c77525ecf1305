//! Stateful springs built on the closed-form step.
//!
//! Each holder stores `position`, `velocity` and `target`, and `update`
//! advances position and velocity toward the target without touching it.

use crate::angle::angle_mod_deg;
use crate::float::Float;
use crate::step::{self, Premult};
use crate::vec::Vec;
use crate::vec::{Scalar, Vec2, Vec3};

// --------------------------------------------------------------------------
// Spring<F> — scalar
// --------------------------------------------------------------------------

/// Scalar critically damped spring.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Spring<F: Float> {
    position: F,
    velocity: F,
    target: F,
}

impl<F: Float> Spring<F> {
    /// A spring at rest at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// A spring at rest at `position`.
    pub fn at(position: F) -> Self {
        Spring { position, velocity: F::zero(), target: position }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn set_target(&mut self, target: F) {
        self.target = target;
    }

    /// Advance by `dt` seconds with stiffness `factor`.
    pub fn update(&mut self, factor: F, dt: F) {
        let (pos, vel) = step::step(self.position, self.velocity, self.target, factor, dt);
        self.position = pos;
        self.velocity = vel;
    }

    /// Advance with a decay shared across springs.
    pub fn update_premult(&mut self, premult: &Premult<F>) {
        let (pos, vel) = step::step_premult(self.position, self.velocity, self.target, premult);
        self.position = pos;
        self.velocity = vel;
    }

    /// Teleport: position and target become `position`, velocity is cleared.
    pub fn force_position(&mut self, position: F) {
        *self = Self::at(position);
    }

    pub fn position(&self) -> F { self.position }
    pub fn velocity(&self) -> F { self.velocity }
    pub fn target(&self) -> F { self.target }

    /// Displacement from the target.
    pub fn offset(&self) -> F {
        self.position - self.target
    }

    pub fn is_settled(&self, eps_pos: F, eps_vel: F) -> bool {
        self.offset().is_near_zero(eps_pos) && self.velocity.is_near_zero(eps_vel)
    }
}

// --------------------------------------------------------------------------
// AngleSpring<F> — degrees
// --------------------------------------------------------------------------

/// Scalar spring for angles in **degrees**.
///
/// Always turns through the shorter arc toward the target, and keeps its
/// position wrapped into `(-180, 180]` after each update. Velocity is in
/// degrees per second.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AngleSpring<F: Float> {
    position: F,
    velocity: F,
    target: F,
}

impl<F: Float> AngleSpring<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A spring at rest at `position`, wrapped into `(-180, 180]`.
    pub fn at(position: F) -> Self {
        let position = angle_mod_deg(position);
        AngleSpring { position, velocity: F::zero(), target: position }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn set_target(&mut self, target: F) {
        self.target = target;
    }

    pub fn update(&mut self, factor: F, dt: F) {
        let (pos, vel) =
            step::step_angle_deg(self.position, self.velocity, self.target, factor, dt);
        self.position = pos;
        self.velocity = vel;
    }

    pub fn update_premult(&mut self, premult: &Premult<F>) {
        let (pos, vel) =
            step::step_angle_deg_premult(self.position, self.velocity, self.target, premult);
        self.position = pos;
        self.velocity = vel;
    }

    pub fn force_position(&mut self, position: F) {
        *self = Self::at(position);
    }

    pub fn position(&self) -> F { self.position }
    pub fn velocity(&self) -> F { self.velocity }
    pub fn target(&self) -> F { self.target }

    /// Signed shortest arc from the target, in `(-180, 180]`.
    pub fn offset(&self) -> F {
        angle_mod_deg(self.position - self.target)
    }

    pub fn is_settled(&self, eps_pos: F, eps_vel: F) -> bool {
        self.offset().is_near_zero(eps_pos) && self.velocity.is_near_zero(eps_vel)
    }
}

// --------------------------------------------------------------------------
// VecSpring<V> — any vector type
// --------------------------------------------------------------------------

/// Vector spring. A single scalar factor drives every component.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct VecSpring<V: Vec> {
    position: V,
    velocity: V,
    target: V,
}

impl<V: Vec> VecSpring<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(position: V) -> Self {
        VecSpring { position, velocity: V::zero(), target: position }
    }

    /// Start at `position` heading for `target`, at rest.
    pub fn toward(position: V, target: V) -> Self {
        VecSpring { position, velocity: V::zero(), target }
    }

    /// Set every field to zero.
    pub fn reset(&mut self) {
        self.position = V::zero();
        self.velocity = V::zero();
        self.target = V::zero();
    }

    pub fn set_target(&mut self, target: V) {
        self.target = target;
    }

    pub fn update(&mut self, factor: V::Scalar, dt: V::Scalar) {
        let (pos, vel) = step::vec_step(self.position, self.velocity, self.target, factor, dt);
        self.position = pos;
        self.velocity = vel;
    }

    pub fn update_premult(&mut self, premult: &Premult<V::Scalar>) {
        let (pos, vel) =
            step::vec_step_premult(self.position, self.velocity, self.target, premult);
        self.position = pos;
        self.velocity = vel;
    }

    pub fn force_position(&mut self, position: V) {
        *self = Self::at(position);
    }

    pub fn position(&self) -> V { self.position }
    pub fn velocity(&self) -> V { self.velocity }
    pub fn target(&self) -> V { self.target }

    pub fn offset(&self) -> V {
        self.position - self.target
    }

    pub fn is_settled(&self, eps_pos: V::Scalar, eps_vel: V::Scalar) -> bool {
        self.offset().length_sq() < eps_pos * eps_pos
            && self.velocity.length_sq() < eps_vel * eps_vel
    }
}

pub type Spring1D<F> = VecSpring<Scalar<F>>;
pub type Spring2D<F> = VecSpring<Vec2<F>>;
pub type Spring3D<F> = VecSpring<Vec3<F>>;

// --------------------------------------------------------------------------
// PremultSpring<F> — fixed timestep
// --------------------------------------------------------------------------

/// Scalar spring for fixed-timestep loops.
///
/// `update` takes a [`Premult`] built once per (factor, timestep) so the
/// exponential is never evaluated per spring. Plain scalar semantics, no
/// angle wrapping; use [`AngleSpring::update_premult`] for angles.
///
/// ```
/// use spring_lerp::{PremultSpring, Premult};
///
/// let premult = Premult::new(10.0f32, 1.0 / 60.0);
/// let mut spring = PremultSpring::new();
/// spring.set_target(1.0);
/// for _ in 0..600 {
///     spring.update(&premult);
/// }
/// assert!((spring.position() - 1.0).abs() < 1e-4);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PremultSpring<F: Float> {
    position: F,
    velocity: F,
    target: F,
}

impl<F: Float> PremultSpring<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn set_target(&mut self, target: F) {
        self.target = target;
    }

    pub fn update(&mut self, premult: &Premult<F>) {
        let (pos, vel) = step::step_premult(self.position, self.velocity, self.target, premult);
        self.position = pos;
        self.velocity = vel;
    }

    pub fn force_position(&mut self, position: F) {
        self.position = position;
        self.velocity = F::zero();
        self.target = position;
    }

    pub fn position(&self) -> F { self.position }
    pub fn velocity(&self) -> F { self.velocity }
    pub fn target(&self) -> F { self.target }
}
