//! Closed-form critically damped springs for games and UI.
//!
//! `spring_lerp` smooths a value toward a moving target with an exact
//! solution of the critically damped spring, so any timestep gives the same
//! curve with no integration drift. Typical uses: camera follow, UI element
//! positions, turret or character facing angles.
//!
//! # Features
//!
//! - **Closed-form step**: `step`, `vec_step`, `step_angle_deg` (pure functions)
//! - **Pre-multiplied step**: compute `e^(-factor·dt)` once via [`Premult`] and
//!   reuse it across every spring sharing the timestep
//! - **State holders**: [`Spring`], [`AngleSpring`] (degrees), [`VecSpring`],
//!   [`PremultSpring`]
//! - **Batches**: [`SpringGroup`] with an observable step via [`StepObserver`]
//! - **Tuning**: [`SpringConfig::from_settle_time`] picks a factor from a
//!   desired convergence time
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! ```
//! use spring_lerp::{Spring2D, Vec2, VecSpring};
//!
//! let mut camera: Spring2D<f32> = VecSpring::at(Vec2::new(0.0, 0.0));
//! camera.set_target(Vec2::new(100.0, 50.0));
//! for _ in 0..120 {
//!     camera.update(8.0, 1.0 / 60.0);
//! }
//! assert!((camera.position().x - 100.0).abs() < 0.5);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod angle;
pub mod step;
pub mod spring;
pub mod group;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec, Scalar, Vec2, Vec3};
pub use angle::angle_mod_deg;
pub use step::{
    decay, verify_premult, Premult, step, step_premult, step_angle_deg, step_angle_deg_premult,
    vec_step, vec_step_premult,
};
pub use spring::{Spring, AngleSpring, VecSpring, PremultSpring, Spring1D, Spring2D, Spring3D};
pub use group::SpringGroup;
pub use config::SpringConfig;
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::SpringError;
